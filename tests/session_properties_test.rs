//! Property tests for the rules engine.

use proptest::prelude::*;
use tictactoe_rules::{
    Board, GameSession, GameStatus, Mark, RecordingFrontend, Square, check_winner, is_full,
};

fn play(moves: &[usize]) -> GameSession<RecordingFrontend> {
    let mut game = GameSession::start(RecordingFrontend::new(), "Ann", "Bo");
    for &index in moves {
        game.play_round(index);
    }
    game
}

fn permutation() -> impl Strategy<Value = Vec<usize>> {
    Just((0..9).collect::<Vec<usize>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn occupied_squares_never_change(moves in prop::collection::vec(0usize..12, 0..40)) {
        let mut game = GameSession::start(RecordingFrontend::new(), "Ann", "Bo");
        for index in moves {
            let before = game.board().clone();
            let events_before = game.frontend().events().len();
            let outcome = game.play_round(index);

            for pos in 0..9 {
                if let Some(Square::Occupied(mark)) = before.get(pos) {
                    prop_assert_eq!(game.board().get(pos), Some(Square::Occupied(mark)));
                }
            }
            if !outcome.is_accepted() {
                prop_assert_eq!(game.board(), &before);
                prop_assert_eq!(game.frontend().events().len(), events_before);
            } else {
                prop_assert_eq!(game.board().occupied(), before.occupied() + 1);
            }
        }
    }

    #[test]
    fn start_game_always_resets(moves in prop::collection::vec(0usize..9, 0..20)) {
        let mut game = play(&moves);
        game.start_game("Cy", "Di");
        prop_assert_eq!(game.board(), &Board::new());
        prop_assert_eq!(game.status(), GameStatus::InProgress);
        prop_assert_eq!(*game.current_player().mark(), Mark::X);
        prop_assert_eq!(game.current_player().name(), "Cy");
        prop_assert!(game.history().is_empty());
    }

    #[test]
    fn tie_only_on_full_board_without_line(order in permutation()) {
        let game = play(&order);
        match game.status() {
            GameStatus::Tie => {
                prop_assert!(is_full(game.board()));
                prop_assert_eq!(check_winner(game.board()), None);
            }
            GameStatus::Won(mark) => {
                prop_assert_eq!(check_winner(game.board()), Some(mark));
                prop_assert_eq!(game.frontend().highlights().len(), 1);
            }
            GameStatus::InProgress => prop_assert!(false, "nine distinct moves must end the game"),
        }
    }

    #[test]
    fn reordered_history_gives_same_winner(order in permutation(), shift in 0usize..5) {
        let game = play(&order);
        let history = game.history();

        let moves_by = |mark: Mark| -> Vec<usize> {
            history.iter().filter(|m| m.mark == mark).map(|m| m.index).collect()
        };
        let mut xs = moves_by(Mark::X);
        let mut os = moves_by(Mark::O);
        xs.reverse();
        if !os.is_empty() {
            let k = shift % os.len();
            os.rotate_left(k);
        }

        let mut reordered = Vec::with_capacity(xs.len() + os.len());
        for i in 0..xs.len() {
            reordered.push(xs[i]);
            if let Some(&o) = os.get(i) {
                reordered.push(o);
            }
        }

        let replayed = play(&reordered);
        if replayed.board() == game.board() {
            prop_assert_eq!(replayed.status(), game.status());
        }
    }
}
