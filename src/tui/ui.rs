//! Stateless UI rendering for Assembly: Endgame.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::games::endgame::{
    GameView, KeyCap, KeyState, LanguageChip, Letter, Rgb, StatusBanner, TITLE, WordSlot,
};

use super::confetti::Confetti;
use super::input::KEYS_PER_ROW;

const MAX_WIDTH: u16 = 64;

const LIGHT: Color = Color::Rgb(0xF9, 0xF4, 0xDA);
const DARK: Color = Color::Rgb(0x1E, 0x1E, 0x1E);
const SLOT: Color = Color::Rgb(0x32, 0x32, 0x32);
const KEY: Color = Color::Rgb(0xFC, 0xBA, 0x29);
const CORRECT: Color = Color::Rgb(0x10, 0xA9, 0x5B);
const WRONG: Color = Color::Rgb(0xEC, 0x5D, 0x49);
const FAREWELL: Color = Color::Rgb(0x7A, 0x5E, 0xA7);
const NEW_GAME: Color = Color::Rgb(0x11, 0xB5, 0xE5);

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, view: &GameView, cursor: Letter, confetti: Option<&Confetti>) {
    let area = center_horizontally(frame.area(), MAX_WIDTH);
    let chips = chip_lines(&view.chips, area.width);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                 // Header
            Constraint::Length(4),                 // Status banner
            Constraint::Length(chips.len() as u16), // Language chips
            Constraint::Length(1),
            Constraint::Length(1),                 // Word
            Constraint::Length(1),
            Constraint::Length(3),                 // Keyboard
            Constraint::Length(3),                 // New game
            Constraint::Length(1),                 // Help
            Constraint::Min(0),
        ])
        .split(area);

    draw_header(frame, chunks[0], &view.tagline);
    draw_banner(frame, chunks[1], &view.banner);
    frame.render_widget(Paragraph::new(chips).alignment(Alignment::Center), chunks[2]);
    draw_word(frame, chunks[4], &view.word);
    draw_keyboard(frame, chunks[6], &view.keyboard, cursor);
    if view.show_reset {
        draw_new_game(frame, chunks[7]);
    }
    draw_help(frame, chunks[8], view.show_reset);

    if let Some(confetti) = confetti {
        confetti.render(frame.area(), frame.buffer_mut());
    }
}

fn draw_header(frame: &mut Frame, area: Rect, tagline: &str) {
    let text = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(LIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(tagline, Style::default().fg(Color::Gray))),
    ];
    let header = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}

fn draw_banner(frame: &mut Frame, area: Rect, banner: &StatusBanner) {
    let style = match banner {
        StatusBanner::Blank => Style::default(),
        StatusBanner::Farewell(_) => Style::default()
            .bg(FAREWELL)
            .fg(LIGHT)
            .add_modifier(Modifier::ITALIC),
        StatusBanner::Won => Style::default().bg(CORRECT).fg(LIGHT),
        StatusBanner::Lost => Style::default().bg(WRONG).fg(LIGHT),
    };

    let mut lines = Vec::new();
    if let Some(heading) = banner.heading() {
        lines.push(Line::from(Span::styled(
            heading,
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(banner.body()));

    let block = if matches!(banner, StatusBanner::Blank) {
        Block::default()
    } else {
        Block::default().borders(Borders::ALL).border_style(style)
    };

    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn chip_style(chip: &LanguageChip) -> Style {
    if chip.lost {
        Style::default()
            .bg(Color::DarkGray)
            .fg(Color::Gray)
            .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
    } else {
        Style::default().bg(rgb(chip.background)).fg(rgb(chip.color))
    }
}

/// Lays chips out left to right, wrapping before a chip that would not fit.
fn chip_lines(chips: &[LanguageChip], width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for chip in chips {
        let label = format!(" {} ", chip.name);
        let label_width = label.width();
        let needed = if current.is_empty() { label_width } else { label_width + 1 };

        if !current.is_empty() && used + needed > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if !current.is_empty() {
            current.push(Span::raw(" "));
            used += 1;
        }
        used += label_width;
        current.push(Span::styled(label, chip_style(chip)));
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

fn draw_word(frame: &mut Frame, area: Rect, word: &[WordSlot]) {
    let mut spans = Vec::with_capacity(word.len() * 2);
    for (i, slot) in word.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let base = Style::default()
            .bg(SLOT)
            .add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        let span = match slot {
            WordSlot::Hidden => Span::styled("   ", base),
            WordSlot::Revealed(c) => Span::styled(format!(" {} ", c), base.fg(LIGHT)),
            WordSlot::Missed(c) => Span::styled(format!(" {} ", c), base.fg(WRONG)),
        };
        spans.push(span);
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn key_style(key: &KeyCap, cursor: Letter) -> Style {
    let bg = match key.state {
        KeyState::Unused => KEY,
        KeyState::Correct => CORRECT,
        KeyState::Wrong => WRONG,
    };
    let mut style = Style::default().bg(bg).fg(DARK).add_modifier(Modifier::BOLD);
    if key.disabled {
        style = style.add_modifier(Modifier::DIM);
    } else if key.letter == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn draw_keyboard(frame: &mut Frame, area: Rect, keys: &[KeyCap], cursor: Letter) {
    let mut lines = Vec::new();
    for (row, chunk) in keys.chunks(KEYS_PER_ROW).enumerate() {
        if row > 0 {
            lines.push(Line::default());
        }
        let mut spans = Vec::with_capacity(chunk.len() * 2);
        for (i, key) in chunk.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {} ", key.letter.to_upper()),
                key_style(key, cursor),
            ));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_new_game(frame: &mut Frame, area: Rect) {
    let button_area = center_horizontally(area, 16);
    let button = Paragraph::new("New Game")
        .style(Style::default().bg(NEW_GAME).fg(DARK).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, button_area);
}

fn draw_help(frame: &mut Frame, area: Rect, game_over: bool) {
    let text = if game_over {
        "Enter: New game | Esc: Quit"
    } else {
        "a-z: Guess | Arrows + Enter: Pick key | Esc: Quit"
    };
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chip(name: &str) -> LanguageChip {
        let color = Rgb { r: 0, g: 0, b: 0 };
        LanguageChip {
            name: name.to_string(),
            background: color,
            color,
            lost: false,
        }
    }

    #[test]
    fn test_chips_wrap_at_width() {
        let chips = vec![chip("HTML"), chip("CSS"), chip("JavaScript")];
        // " HTML " + " " + " CSS " = 12, " JavaScript " does not fit in 20.
        let lines = chip_lines(&chips, 20);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].width(), 12);
    }

    #[test]
    fn test_single_wide_chip_gets_own_line() {
        let lines = chip_lines(&[chip("JavaScript")], 4);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_center_horizontally_clamps() {
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(center_horizontally(area, 64), area);
        assert_eq!(center_horizontally(area, 4), Rect::new(3, 0, 4, 5));
    }
}
