//! Tests for the game session state machine.

use strictly_mastermind::{
    Code, Feedback, GameConfig, GameSession, MastermindError, Outcome, SecretGenerator,
    SessionState,
};

fn classic(max_tries: u32, secret: [u8; 4]) -> GameSession {
    let config = GameConfig::default().with_max_tries(max_tries);
    GameSession::new(config, Code::from_values(secret)).expect("Valid session")
}

#[test]
fn test_single_try_win() {
    let mut session = classic(1, [2, 4, 6, 1]);
    let turn = session.submit_guess(&Code::from_values([2, 4, 6, 1])).unwrap();

    assert_eq!(*turn.feedback(), Feedback::new(4, 0));
    assert_eq!(session.state(), SessionState::Won { tries: 1 });
    assert_eq!(session.outcome(), Some(Outcome::Won { tries: 1 }));
}

#[test]
fn test_single_try_loss() {
    let mut session = classic(1, [2, 4, 6, 1]);
    session.submit_guess(&Code::from_values([1, 2, 4, 6])).unwrap();

    assert_eq!(session.state(), SessionState::Lost);
    assert_eq!(session.revealed_secret(), Some(&Code::from_values([2, 4, 6, 1])));
}

#[test]
fn test_loss_after_exactly_max_tries() {
    let mut session = classic(3, [1, 1, 1, 1]);
    for expected_try in 1..=3 {
        assert_eq!(session.try_number(), Some(expected_try));
        let turn = session.submit_guess(&Code::from_values([2, 2, 2, 2])).unwrap();
        assert_eq!(*turn.try_number(), expected_try);
    }
    assert_eq!(session.outcome(), Some(Outcome::Lost));
}

#[test]
fn test_guess_after_game_over_is_rejected() {
    let mut session = classic(1, [1, 2, 3, 4]);
    session.submit_guess(&Code::from_values([1, 2, 3, 4])).unwrap();

    let err = session.submit_guess(&Code::from_values([1, 2, 3, 4])).unwrap_err();
    assert_eq!(err, MastermindError::GameOver);
    assert!(!err.is_recoverable());
}

#[test]
fn test_rejected_guesses_do_not_consume_tries() {
    let mut session = classic(2, [1, 2, 3, 4]);
    assert!(session.submit_guess(&Code::from_values([1, 2])).is_err());
    assert!(session.submit_guess(&Code::from_values([0, 2, 3, 4])).is_err());
    assert_eq!(session.try_number(), Some(1));

    session.submit_guess(&Code::from_values([4, 3, 2, 1])).unwrap();
    assert_eq!(session.try_number(), Some(2));
}

#[test]
fn test_invalid_configuration_is_fatal() {
    let mut generator = SecretGenerator::seeded(9);
    let err = GameSession::start(GameConfig::default().with_pins(0), &mut generator).unwrap_err();
    assert!(matches!(err, MastermindError::InvalidConfiguration(_)));
}

#[test]
fn test_seeded_sessions_share_a_secret() {
    let config = GameConfig::default().with_max_tries(1);
    let mut a = GameSession::start(config, &mut SecretGenerator::seeded(2024)).unwrap();
    let mut b = GameSession::start(config, &mut SecretGenerator::seeded(2024)).unwrap();

    let guess = Code::from_values([1, 2, 3, 4]);
    a.submit_guess(&guess).unwrap();
    b.submit_guess(&guess).unwrap();
    assert_eq!(a.revealed_secret(), b.revealed_secret());
}
