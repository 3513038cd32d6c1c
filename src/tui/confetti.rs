//! Falling confetti played when a round is won.

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use tracing::{debug, instrument};

const GLYPHS: [char; 6] = ['*', '+', '•', '▪', '◆', '~'];

const COLORS: [Color; 7] = [
    Color::Rgb(0xE2, 0x68, 0x0F),
    Color::Rgb(0x32, 0x8A, 0xF1),
    Color::Rgb(0xF4, 0xEB, 0x13),
    Color::Rgb(0x2E, 0xD3, 0xE9),
    Color::Rgb(0x59, 0x91, 0x37),
    Color::Rgb(0xFF, 0xD7, 0x42),
    Color::Rgb(0xD0, 0x2B, 0x2B),
];

/// Terminal cells per confetti piece at full density.
const CELLS_PER_PIECE: usize = 4;

/// How the effect behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfettiOptions {
    /// Respawn pieces at the top once they fall off the screen.
    pub recycle: bool,
    /// Pieces in the burst.
    pub number_of_pieces: usize,
}

impl Default for ConfettiOptions {
    fn default() -> Self {
        Self {
            recycle: false,
            number_of_pieces: 1000,
        }
    }
}

/// A single piece, in normalized screen coordinates (0.0-1.0).
#[derive(Debug, Clone, Copy)]
struct Piece {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    glyph: char,
    color: Color,
}

impl Piece {
    fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.random_range(0.0..1.0),
            // Start above the screen so the burst trickles in.
            y: rng.random_range(-1.0..0.0),
            dx: rng.random_range(-0.004..0.004),
            dy: rng.random_range(0.01..0.03),
            glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
            color: COLORS[rng.random_range(0..COLORS.len())],
        }
    }
}

/// Falling confetti overlay.
#[derive(Debug, Clone)]
pub struct Confetti {
    options: ConfettiOptions,
    pieces: Vec<Piece>,
}

impl Confetti {
    /// Starts a burst using the thread-local RNG.
    #[instrument]
    pub fn new(options: ConfettiOptions) -> Self {
        Self::with_rng(options, &mut rand::rng())
    }

    /// Starts a burst using `rng`.
    pub fn with_rng(options: ConfettiOptions, rng: &mut impl Rng) -> Self {
        let pieces = (0..options.number_of_pieces)
            .map(|_| Piece::spawn(rng))
            .collect();
        debug!(pieces = options.number_of_pieces, recycle = options.recycle, "Confetti started");
        Self { options, pieces }
    }

    /// Options the effect was started with.
    pub fn options(&self) -> ConfettiOptions {
        self.options
    }

    /// Pieces still on their way down.
    pub fn remaining(&self) -> usize {
        self.pieces.len()
    }

    /// All pieces have fallen and the effect is over.
    pub fn is_finished(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Advances the animation by one frame.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        for piece in &mut self.pieces {
            piece.x = (piece.x + piece.dx).rem_euclid(1.0);
            piece.y += piece.dy;
        }

        if self.options.recycle {
            for piece in &mut self.pieces {
                if piece.y > 1.0 {
                    *piece = Piece::spawn(rng);
                    piece.y = 0.0;
                }
            }
        } else {
            self.pieces.retain(|p| p.y <= 1.0);
        }
    }

    /// Draws the visible pieces over `area`.
    ///
    /// Only a share of the pieces proportional to the area is drawn, so a
    /// small terminal is not flooded.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let cells = area.width as usize * area.height as usize;
        let budget = (cells / CELLS_PER_PIECE).max(1);
        let stride = self.options.number_of_pieces.div_ceil(budget).max(1);

        for piece in self.pieces.iter().step_by(stride) {
            if !(0.0..1.0).contains(&piece.y) {
                continue;
            }
            let x = area.x + ((piece.x * area.width as f32) as u16).min(area.width - 1);
            let y = area.y + ((piece.y * area.height as f32) as u16).min(area.height - 1);
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(piece.glyph).set_fg(piece.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_default_options_do_not_loop() {
        let options = ConfettiOptions::default();
        assert!(!options.recycle);
        assert_eq!(options.number_of_pieces, 1000);
    }

    #[test]
    fn test_burst_finishes_without_recycle() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut confetti = Confetti::with_rng(ConfettiOptions::default(), &mut rng);
        assert_eq!(confetti.remaining(), 1000);

        // Slowest piece starts at -1.0 and falls 0.01 per tick.
        for _ in 0..250 {
            confetti.tick(&mut rng);
        }
        assert!(confetti.is_finished());
    }

    #[test]
    fn test_recycled_burst_never_finishes() {
        let mut rng = StdRng::seed_from_u64(2);
        let options = ConfettiOptions {
            recycle: true,
            number_of_pieces: 50,
        };
        let mut confetti = Confetti::with_rng(options, &mut rng);
        for _ in 0..500 {
            confetti.tick(&mut rng);
        }
        assert_eq!(confetti.remaining(), 50);
    }

    #[test]
    fn test_render_stays_inside_area() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut confetti = Confetti::with_rng(ConfettiOptions::default(), &mut rng);
        for _ in 0..60 {
            confetti.tick(&mut rng);
        }
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 15));
        confetti.render(area, &mut buf);

        for y in 0..15u16 {
            for x in 0..30u16 {
                if x >= 20 || y >= 10 {
                    assert_eq!(buf[(x, y)].symbol(), " ");
                }
            }
        }
    }
}
