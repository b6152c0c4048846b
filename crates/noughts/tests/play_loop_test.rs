//! Tests for the interactive play loop.

use noughts::{PlayLoop, Settings};
use noughts_engine::{FirstMoverPolicy, PlayerId, RoundStatus, Session};

fn play(settings: Settings, input: &str) -> (String, Session) {
    let mut output = Vec::new();
    let mut game = PlayLoop::new(settings.session(), input.as_bytes(), &mut output);
    game.run().expect("Loop runs");
    let session = game.into_session();
    (String::from_utf8(output).expect("UTF-8 output"), session)
}

#[test]
fn test_opening_screen() {
    let (text, session) = play(Settings::new(), "quit\n");

    assert!(text.starts_with("TIC TAC TOE\n"));
    assert!(text.contains("  0 1 2 x\n0| | | |\n1| | | |\n2| | | |\ny\n"));
    assert!(text.contains("Player 1 to move (x)"));
    assert!(text.contains("(play) "));
    assert!(text.trim_end().ends_with("Player 1: 0 wins   |   Player 2: 0 wins   |   Ties: 0"));
    assert!(session.is_quit());
}

#[test]
fn test_win_starts_next_round() {
    let (text, session) = play(
        Settings::new(),
        "move 0 0\n1 1\n0 1\n1 0\n0 2\nquit\n",
    );

    assert!(text.contains("0|x|x|x|\n1|o|o| |\n"));
    assert!(text.contains("Player 1 wins!"));
    assert!(text.contains("Player 1: 1 wins   |   Player 2: 0 wins   |   Ties: 0"));
    assert_eq!(*session.player(PlayerId::First).wins(), 1);
    assert_eq!(session.rounds_completed(), 1);

    let round = session.round().expect("Fresh round");
    assert_eq!(*round.status(), RoundStatus::Active);
    assert!(session.board().open_cells().len() == 9);
}

#[test]
fn test_last_move_echoed() {
    let (text, _) = play(Settings::new(), "1 1\nquit\n");

    assert!(text.contains("Player 1 took (1, 1)"));
    let echo = text.find("Player 1 took (1, 1)").expect("Echo present");
    let next = text.find("Player 2 to move (o)").expect("Turn prompt present");
    assert!(echo < next);
}

#[test]
fn test_winning_move_echoed_before_announcement() {
    let (text, _) = play(Settings::new(), "0 0\n1 1\n0 1\n1 0\n0 2\nquit\n");

    let echo = text.find("Player 1 took (0, 2)").expect("Winning move echoed");
    let banner = text.find("Player 1 wins!").expect("Winner announced");
    assert!(echo < banner);
    assert!(text.contains("Player 2 took (1, 0)"));
}

#[test]
fn test_tie_announced() {
    let (text, session) = play(
        Settings::new(),
        "0 0\n0 1\n0 2\n1 1\n1 0\n2 0\n2 1\n1 2\n2 2\n",
    );

    assert!(text.contains("Cat's game!"));
    assert!(text.contains("Ties: 1"));
    for id in PlayerId::ALL {
        assert_eq!(*session.player(id).ties(), 1);
    }
}

#[test]
fn test_occupied_square_keeps_turn() {
    let (text, session) = play(Settings::new(), "0 0\n0 0\nquit\n");

    assert!(text.contains("Square is not open"));
    let round = session.round().expect("Round in progress");
    assert_eq!(*round.turn(), 1);
    assert_eq!(round.acting_player(), PlayerId::Second);
}

#[test]
fn test_bad_input_messages() {
    let (text, session) = play(Settings::new(), "move 5 5\ndance\nmove 1\n\nquit\n");

    assert!(text.contains("Cell (5, 5) is off the board"));
    assert!(text.contains("I'm sorry I'm a bit confused. Maybe ask for 'help'?"));
    assert!(text.contains("Usage: move <row> <col>"));
    assert_eq!(*session.round().expect("Round in progress").turn(), 0);
}

#[test]
fn test_help_and_score_commands() {
    let (text, _) = play(Settings::new(), "help\nscore\nboard\nexit\n");

    assert!(text.contains("Commands:"));
    assert!(text.contains("move <row> <col>"));
    assert_eq!(text.matches("Ties: 0").count(), 3);
}

#[test]
fn test_end_of_input_quits() {
    let (text, session) = play(Settings::new(), "1 1\n");

    assert!(text.contains("Thanks for playing!"));
    assert!(session.is_quit());
}

#[test]
fn test_alternating_opener_with_names() {
    let settings = Settings::new()
        .with_first_mover(Some(FirstMoverPolicy::Alternate))
        .with_player_one(Some("Ada".to_string()))
        .with_player_two(Some("Grace".to_string()));

    let (text, session) = play(settings, "0 0\n1 1\n0 1\n1 0\n0 2\n2 2\nquit\n");

    assert!(text.contains("Ada wins!"));
    assert!(text.contains("Grace to move (x)"));
    // Grace opened the second round, so her mark is drawn as x.
    assert!(text.contains("2| | |x|"));
    assert_eq!(
        session.round().map(|r| *r.first_mover()),
        Some(PlayerId::Second)
    );
}
