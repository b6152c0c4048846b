//! Tests for the round state machine.

use noughts_engine::{
    BOARD_SIZE, Cell, Mark, MoveError, MoveOutcome, PlayerId, Roster, Round, RoundStatus,
};

fn cell(row: usize, col: usize) -> Cell {
    Cell::new(row, col).expect("Cell on board")
}

fn play_all(round: &mut Round, roster: &mut Roster, moves: &[(usize, usize)]) -> Vec<MoveOutcome> {
    moves
        .iter()
        .map(|&(row, col)| {
            round
                .submit_move(roster, cell(row, col))
                .expect("Legal move")
        })
        .collect()
}

/// Every complete line, for checking wins independently of the ledger.
fn lines() -> Vec<Vec<Cell>> {
    let mut lines = Vec::new();
    for i in 0..BOARD_SIZE {
        lines.push((0..BOARD_SIZE).map(|j| cell(i, j)).collect());
        lines.push((0..BOARD_SIZE).map(|j| cell(j, i)).collect());
    }
    lines.push((0..BOARD_SIZE).map(|i| cell(i, i)).collect());
    lines.push((0..BOARD_SIZE).map(|i| cell(i, BOARD_SIZE - 1 - i)).collect());
    lines
}

fn has_line(roster: &Roster, player: PlayerId) -> bool {
    lines()
        .iter()
        .any(|line| line.iter().all(|c| roster[player].ledger().contains(*c)))
}

#[test]
fn test_top_row_win() {
    let mut roster = Roster::new();
    let mut round = Round::new(PlayerId::First);

    let outcomes = play_all(
        &mut round,
        &mut roster,
        &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)],
    );

    assert_eq!(
        outcomes,
        vec![
            MoveOutcome::Accepted,
            MoveOutcome::Accepted,
            MoveOutcome::Accepted,
            MoveOutcome::Accepted,
            MoveOutcome::Won(PlayerId::First),
        ]
    );
    assert_eq!(*round.status(), RoundStatus::Won(PlayerId::First));
    assert_eq!(*roster[PlayerId::First].wins(), 1);
    assert_eq!(*roster[PlayerId::First].ties(), 0);
}

#[test]
fn test_full_board_tie() {
    let mut roster = Roster::new();
    let mut round = Round::new(PlayerId::First);

    // x o x / x o o / o x x
    let outcomes = play_all(
        &mut round,
        &mut roster,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (1, 2),
            (2, 2),
        ],
    );

    assert_eq!(outcomes.last(), Some(&MoveOutcome::Tied));
    assert_eq!(*round.status(), RoundStatus::Tied);
    assert!(roster.board().is_full());
    for id in PlayerId::ALL {
        assert_eq!(*roster[id].ties(), 1);
        assert_eq!(*roster[id].wins(), 0);
    }
}

#[test]
fn test_last_square_win_reports_won() {
    let mut roster = Roster::new();
    let mut round = Round::new(PlayerId::First);

    // x o x / o o x / o x ?  First fills (2, 2), completing column 2.
    let outcomes = play_all(
        &mut round,
        &mut roster,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (1, 1),
            (2, 1),
            (2, 0),
        ],
    );
    assert!(outcomes.iter().all(|o| *o == MoveOutcome::Accepted));
    let outcome = round.submit_move(&mut roster, cell(2, 2)).expect("Legal move");

    assert_eq!(outcome, MoveOutcome::Won(PlayerId::First));
    assert!(roster.board().is_full());
    assert_eq!(*roster[PlayerId::First].ties(), 0);
    assert_eq!(*roster[PlayerId::Second].ties(), 0);
}

#[test]
fn test_double_claim_rejected_for_either_player() {
    let mut roster = Roster::new();
    let mut round = Round::new(PlayerId::First);
    round.submit_move(&mut roster, cell(0, 0)).expect("Legal move");
    let board_before = roster.board();

    // Second seat tries the same square.
    let result = round.submit_move(&mut roster, cell(0, 0));
    assert_eq!(result, Err(MoveError::SquareOccupied(cell(0, 0))));
    assert_eq!(roster.board(), board_before);
    assert_eq!(*round.turn(), 1);
    assert_eq!(round.acting_player(), PlayerId::Second);

    // First seat may not reclaim it on its own next turn either.
    round.submit_move(&mut roster, cell(2, 2)).expect("Legal move");
    let result = round.submit_move(&mut roster, cell(0, 0));
    assert_eq!(result, Err(MoveError::SquareOccupied(cell(0, 0))));
    assert_eq!(roster.board().cell_at(cell(0, 0)), Mark::First);
}

#[test]
fn test_anti_diagonal_completed_in_center() {
    let mut roster = Roster::new();
    let mut round = Round::new(PlayerId::First);

    let outcomes = play_all(
        &mut round,
        &mut roster,
        &[(0, 2), (0, 0), (2, 0), (0, 1), (1, 1)],
    );
    assert_eq!(outcomes.last(), Some(&MoveOutcome::Won(PlayerId::First)));
}

#[test]
fn test_tie_after_tie_is_terminal() {
    let mut roster = Roster::new();
    let mut round = Round::new(PlayerId::Second);
    play_all(
        &mut round,
        &mut roster,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (1, 2),
            (2, 2),
        ],
    );
    assert!(round.is_terminal());
    assert_eq!(
        round.submit_move(&mut roster, cell(1, 1)),
        Err(MoveError::MoveAfterTerminal)
    );
}

/// Walks every reachable game and checks the round's invariants at each step.
#[test]
fn test_exhaustive_invariants() {
    fn walk(round: &Round, roster: &Roster, games: &mut usize) {
        for target in Cell::all() {
            let mut next_round = round.clone();
            let mut next_roster = roster.clone();
            let mover = round.acting_player();
            let turn = *round.turn();

            // Acting player depends only on first mover and turn.
            assert_eq!(
                mover,
                PlayerId::from_index(round.first_mover().index() + turn)
            );

            match next_round.submit_move(&mut next_roster, target) {
                Err(MoveError::SquareOccupied(c)) => {
                    assert_eq!(c, target);
                    assert!(roster.is_claimed(target));
                    assert_eq!(next_round, *round);
                    assert_eq!(next_roster, *roster);
                }
                Err(other) => panic!("Unexpected rejection: {other}"),
                Ok(outcome) => {
                    // No cell is ever held by both players.
                    assert!(Cell::all().all(|c| {
                        !(next_roster[PlayerId::First].ledger().contains(c)
                            && next_roster[PlayerId::Second].ledger().contains(c))
                    }));

                    let line = has_line(&next_roster, mover);
                    let full = next_roster.board().is_full();
                    match outcome {
                        MoveOutcome::Won(p) => {
                            assert_eq!(p, mover);
                            assert!(line);
                            *games += 1;
                        }
                        MoveOutcome::Tied => {
                            assert!(full && !line);
                            *games += 1;
                        }
                        MoveOutcome::Accepted => {
                            assert!(!line && !full);
                            assert_eq!(*next_round.turn(), turn + 1);
                            walk(&next_round, &next_roster, games);
                        }
                    }
                }
            }
        }
    }

    let mut games = 0;
    walk(&Round::new(PlayerId::First), &Roster::new(), &mut games);
    assert_eq!(games, 255_168);
}
