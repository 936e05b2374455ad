//! Tests for the interactive flow: banner, menus, and a full game.

use std::io::Cursor;
use strictly_mastermind::{Code, GameConfig, Outcome, SecretGenerator};
use strictly_mastermind_cli::{
    CODEMAKER_NOTICE, LineChoices, PlayOptions, Role, SharedWriter, WELCOME, play,
};

fn input(text: &str) -> Cursor<Vec<u8>> {
    Cursor::new(text.as_bytes().to_vec())
}

struct Played {
    outcome: Option<Outcome>,
    output: String,
    menu: String,
}

fn run(config: GameConfig, options: PlayOptions, answers: &str, guesses: &str, seed: u64) -> Played {
    let mut choices = LineChoices::new(input(answers), Vec::new());
    let writer = SharedWriter::new(Vec::new());
    let mut generator = SecretGenerator::seeded(seed);

    let outcome = play(
        config,
        options,
        &mut choices,
        input(guesses),
        writer.clone(),
        &mut generator,
    )
    .expect("Game runs to completion");

    Played {
        outcome,
        output: writer.with_inner(|bytes| String::from_utf8(bytes.clone()).expect("UTF-8 output")),
        menu: String::from_utf8(choices.into_writer()).expect("UTF-8 prompts"),
    }
}

#[test]
fn test_codemaker_exits_without_a_game() {
    let played = run(GameConfig::default(), PlayOptions::default(), "n\nm\n", "", 1);

    assert_eq!(played.outcome, None);
    assert!(played.output.starts_with(WELCOME));
    assert!(played.output.contains(CODEMAKER_NOTICE));
    assert!(!played.output.contains("Enter your guess"));
    assert!(played.menu.contains("(m/b)? "));
}

#[test]
fn test_codemaker_flag_skips_role_menu() {
    let options = PlayOptions {
        skip_instructions: true,
        role: Some(Role::Codemaker),
    };
    let played = run(GameConfig::default(), options, "", "", 1);

    assert_eq!(played.outcome, None);
    assert!(played.menu.is_empty());
}

#[test]
fn test_instructions_shown_on_yes() {
    let config = GameConfig::default().with_colors(1);
    let played = run(config, PlayOptions::default(), "y\nb\n", "1111\n", 1);

    assert!(played.output.contains("For example, if the secret is (3, 4, 5, 5)"));
    assert!(played.menu.contains("Would you like instructions (y/n)? "));
}

#[test]
fn test_instructions_skipped_on_no() {
    let config = GameConfig::default().with_colors(1);
    let played = run(config, PlayOptions::default(), "n\nb\n", "1111\n", 1);

    assert!(!played.output.contains("For example"));
    assert!(played.menu.contains("Would you like instructions (y/n)? "));
}

#[test]
fn test_skip_instructions_never_asks() {
    let config = GameConfig::default().with_colors(1);
    let options = PlayOptions {
        skip_instructions: true,
        role: None,
    };
    let played = run(config, options, "b\n", "1111\n", 1);

    assert!(!played.menu.contains("instructions"));
    assert!(!played.output.contains("For example"));
    assert_eq!(played.outcome, Some(Outcome::Won { tries: 1 }));
}

#[test]
fn test_full_game_after_menus() {
    // A one-color palette always draws (1, 1, 1, 1)
    let config = GameConfig::default().with_colors(1).with_max_tries(3);
    let played = run(config, PlayOptions::default(), "n\nb\n", "12\n1111\n", 9);

    assert_eq!(played.outcome, Some(Outcome::Won { tries: 1 }));
    let welcome = played.output.find(WELCOME).expect("Welcome printed");
    let started = played.output.find("You have 3 tries").expect("Game start printed");
    assert!(welcome < started);
    assert!(played.output.contains("Please enter 4 digits, each from 1 to 1."));
    assert!(played.output.contains("You guessed the code, (1, 1, 1, 1), in 1 try!"));
}

#[test]
fn test_seeded_game_reveals_seeded_secret() {
    let config = GameConfig::default().with_max_tries(1);
    let secret = SecretGenerator::seeded(42)
        .make_code(config.pins(), config.colors())
        .expect("Valid code");
    let options = PlayOptions {
        skip_instructions: true,
        role: Some(Role::Codebreaker),
    };

    let played = run(config, options, "", "1111\n", 42);

    let expected = if secret == Code::from_values([1, 1, 1, 1]) {
        Outcome::Won { tries: 1 }
    } else {
        Outcome::Lost
    };
    assert_eq!(played.outcome, Some(expected));
    assert!(played.output.contains(&secret.to_string()));
}
