//! Tests for the game state machine.

use assembly_endgame::{Game, GameStatus, GuessOutcome, Letter, ScriptedWords, SecretWord};

fn letter(c: char) -> Letter {
    Letter::new(c).expect("Valid letter")
}

fn game(word: &str, catalog_length: usize) -> Game {
    Game::new(SecretWord::new(word).expect("Valid word"), catalog_length - 1)
}

#[test]
fn test_guess_twice_same_as_once() {
    for &l in Letter::ALPHABET.iter() {
        let mut once = game("react", 8);
        once.guess(l);

        let mut twice = game("react", 8);
        twice.guess(l);
        twice.guess(l);

        assert_eq!(once.guessed(), twice.guessed());
        assert_eq!(once.wrong_guess_count(), twice.wrong_guess_count());
    }
}

#[test]
fn test_won_in_any_order() {
    let orders = [
        ['r', 'e', 'a', 'c', 't'],
        ['t', 'c', 'a', 'e', 'r'],
        ['a', 'r', 't', 'e', 'c'],
    ];
    for order in orders {
        let mut game = game("react", 8);
        for (i, c) in order.iter().enumerate() {
            assert!(!game.is_won(), "won too early after {} guesses", i);
            assert_eq!(game.guess(letter(*c)), GuessOutcome::Correct);
        }
        assert!(game.is_won());
        assert!(!game.is_lost());
        assert_eq!(game.status(), GameStatus::Won);
    }
}

#[test]
fn test_lost_after_seven_wrong_guesses() {
    let mut game = game("react", 8);
    let wrong = ['q', 'x', 'z', 'j', 'v', 'b', 'y'];
    for (i, c) in wrong.iter().enumerate() {
        assert!(!game.is_lost(), "lost too early after {} guesses", i);
        assert_eq!(game.guess(letter(*c)), GuessOutcome::Wrong);
    }
    assert!(game.is_lost());
    assert!(game.is_over());
    assert_eq!(game.wrong_guess_count(), 7);
    assert_eq!(game.attempts_left(), 0);
}

#[test]
fn test_lost_is_terminal() {
    let mut game = game("react", 8);
    for c in ['q', 'x', 'z', 'j', 'v', 'b', 'y'] {
        game.guess(letter(c));
    }

    for c in ['r', 'e', 'a', 'c', 't', 'k'] {
        assert_eq!(game.guess(letter(c)), GuessOutcome::Ignored);
    }
    assert_eq!(game.wrong_guess_count(), 7);
    assert!(!game.is_won());
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn test_won_is_terminal() {
    let mut game = game("go", 8);
    game.guess(letter('g'));
    game.guess(letter('o'));
    assert_eq!(game.guess(letter('x')), GuessOutcome::Ignored);
    assert_eq!(game.wrong_guess_count(), 0);
    assert!(!game.last_guess_is_wrong());
}

#[test]
fn test_won_iff_all_letters_guessed() {
    let mut game = game("rust", 8);
    for c in ['r', 'u', 's'] {
        game.guess(letter(c));
        assert!(!game.is_won());
    }
    game.guess(letter('t'));
    assert!(game.is_won());
}

#[test]
fn test_reset_clears_state() {
    let mut words = ScriptedWords::from_strs(&["react", "python"]).expect("Valid words");
    let mut game = Game::new(SecretWord::new("react").unwrap(), 7);
    game.guess(letter('q'));
    game.guess(letter('x'));
    assert_eq!(game.wrong_guess_count(), 2);

    // First scripted word is "react", then "python".
    game.reset(&mut words);
    assert_eq!(game.word().to_string(), "react");
    game.reset(&mut words);
    assert_eq!(game.word().to_string(), "python");

    assert!(game.guessed().is_empty());
    assert_eq!(game.wrong_guess_count(), 0);
    assert!(!game.is_over());
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn test_reset_after_loss_plays_again() {
    let mut words = ScriptedWords::from_strs(&["go"]).unwrap();
    let mut game = game("go", 3);
    game.guess(letter('x'));
    game.guess(letter('y'));
    assert!(game.is_lost());

    game.reset(&mut words);
    assert!(!game.is_over());
    assert_eq!(game.guess(letter('g')), GuessOutcome::Correct);
}

#[test]
fn test_guessed_letters_keep_order() {
    let mut game = game("react", 8);
    for c in ['t', 'q', 'r', 't', 'a'] {
        game.guess(letter(c));
    }
    let order: String = game.guessed().as_slice().iter().map(|l| l.as_char()).collect();
    assert_eq!(order, "tqra");
}
