//! A single game of tic-tac-toe between two named players.

use crate::action::{Move, Rejection, RoundOutcome};
use crate::frontend::{Cue, Frontend};
use crate::rules::{check_winner, is_full, winning_lines};
use crate::types::{Board, GameStatus, Mark, Player};
use tracing::{debug, info, instrument};

/// Name used for player 1 when the caller has none.
pub const DEFAULT_PLAYER1: &str = "Player 1";

/// Name used for player 2 when the caller has none.
pub const DEFAULT_PLAYER2: &str = "Player 2";

/// Status text for a finished game without a winner.
pub const TIE_MESSAGE: &str = "It's a tie!";

/// Game engine: board, players, turn and outcome, plus the frontend it
/// reports to.
///
/// Invalid moves are ignored without notifying the frontend. Once the
/// game is won or tied, only [`GameSession::start_game`] (or
/// [`GameSession::reset`]) makes it playable again.
#[derive(Debug)]
pub struct GameSession<F: Frontend> {
    board: Board,
    players: [Player; 2],
    to_move: Mark,
    status: GameStatus,
    history: Vec<Move>,
    frontend: F,
}

impl<F: Frontend> GameSession<F> {
    /// Creates a session and starts the first game.
    #[instrument(skip(frontend, name1, name2))]
    pub fn start(frontend: F, name1: impl Into<String>, name2: impl Into<String>) -> Self {
        let mut session = Self {
            board: Board::new(),
            players: [
                Player::new(DEFAULT_PLAYER1, Mark::X),
                Player::new(DEFAULT_PLAYER2, Mark::O),
            ],
            to_move: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            frontend,
        };
        session.start_game(name1, name2);
        session
    }

    /// Starts a fresh game with new players, whatever state the previous
    /// game was in.
    ///
    /// Names are used as given; blank names are not replaced here.
    #[instrument(skip(self, name1, name2))]
    pub fn start_game(&mut self, name1: impl Into<String>, name2: impl Into<String>) {
        self.players = [Player::new(name1, Mark::X), Player::new(name2, Mark::O)];
        self.to_move = Mark::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
        self.board.reset();
        info!(
            player1 = %self.players[0].name(),
            player2 = %self.players[1].name(),
            "Game started"
        );

        self.frontend.render(&self.board);
        let message = self.status_message();
        self.frontend.announce(&message);
    }

    /// Starts a fresh game with the default player names.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.start_game(DEFAULT_PLAYER1, DEFAULT_PLAYER2);
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Ignored when the game is over, the index is out of range or the
    /// square is taken. Otherwise the frontend hears, in order: the move
    /// cue, a render, the new status, and on a win the highlight of every
    /// completed line followed by the victory cue.
    #[instrument(skip(self), fields(player = %self.current_player().name()))]
    pub fn play_round(&mut self, index: usize) -> RoundOutcome {
        if self.status.is_terminal() {
            debug!(index, "Move ignored: game is over");
            return RoundOutcome::Ignored(Rejection::GameOver);
        }

        let mark = *self.current_player().mark();
        if let Err(rejection) = self.board.place(index, mark) {
            debug!(index, %rejection, "Move ignored");
            return RoundOutcome::Ignored(rejection);
        }
        self.history.push(Move::new(mark, index));
        debug!(index, %mark, "Move accepted");

        self.frontend.play_cue(Cue::Move);
        self.frontend.render(&self.board);

        let outcome = if check_winner(&self.board).is_some() {
            // Only the mover can have completed a line.
            self.status = GameStatus::Won(mark);
            let lines = winning_lines(&self.board);
            info!(winner = %self.current_player().name(), ?lines, "Game won");
            RoundOutcome::Won { mark, lines }
        } else if is_full(&self.board) {
            self.status = GameStatus::Tie;
            info!("Game tied");
            RoundOutcome::Tie
        } else {
            self.to_move = mark.opponent();
            RoundOutcome::Continued(self.to_move)
        };

        let message = self.status_message();
        self.frontend.announce(&message);

        if let RoundOutcome::Won { lines, .. } = &outcome {
            let mut cells: Vec<usize> = Vec::with_capacity(lines.len() * 3);
            for &cell in lines.iter().flatten() {
                if !cells.contains(&cell) {
                    cells.push(cell);
                }
            }
            self.frontend.highlight(&cells);
            self.frontend.play_cue(Cue::Victory);
        }

        outcome
    }

    /// Status line for the current state.
    #[instrument(skip(self))]
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}'s turn", self.current_player().name()),
            GameStatus::Won(_) => format!("{} wins!", self.current_player().name()),
            GameStatus::Tie => TIE_MESSAGE.to_string(),
        }
    }

    /// The board.
    #[instrument(skip(self))]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, player 1 first.
    #[instrument(skip(self))]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player to move, or the player who made the last move once the game
    /// is over.
    #[instrument(skip(self))]
    pub fn current_player(&self) -> &Player {
        match self.to_move {
            Mark::X => &self.players[0],
            Mark::O => &self.players[1],
        }
    }

    /// Current status.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or tied.
    #[instrument(skip(self))]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The winning player, if any.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(mark) => self.players.iter().find(|p| *p.mark() == mark),
            _ => None,
        }
    }

    /// Completed lines on the board; empty unless the game was won.
    #[instrument(skip(self))]
    pub fn winning_lines(&self) -> Vec<[usize; 3]> {
        winning_lines(&self.board)
    }

    /// Accepted moves of the current game, oldest first.
    #[instrument(skip(self))]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The frontend.
    #[instrument(skip(self))]
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Mutable access to the frontend.
    #[instrument(skip(self))]
    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    /// Consumes the session, returning its frontend.
    #[instrument(skip(self))]
    pub fn into_frontend(self) -> F {
        self.frontend
    }
}
