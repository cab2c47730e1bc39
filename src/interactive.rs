//! Line-based input loop for a terminal game.

use crate::config::resolve_name;
use crate::console::ConsoleFrontend;
use std::io::{BufRead, Write};
use tictactoe_rules::{DEFAULT_PLAYER1, DEFAULT_PLAYER2, GameSession, Position};
use tracing::{debug, info, instrument};

const HELP: &str = "Commands:
  0-8 or a cell name (e.g. center, top-left)  place your mark
  reset                                       restart with default names
  new <name1> <name2>                         restart with new players
  help                                        show this help
  quit                                        leave the game";

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Place the current player's mark.
    Place(Position),
    /// Restart with the default names.
    Reset,
    /// Restart with the given names.
    New(Option<String>, Option<String>),
    /// Print the command summary.
    Help,
    /// Stop reading input.
    Quit,
    /// Blank line.
    Nothing,
    /// Anything else; carries the offending text.
    Unknown(String),
}

impl InputCommand {
    /// Parses a line of input.
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return InputCommand::Nothing;
        };

        match first.to_lowercase().as_str() {
            "reset" => InputCommand::Reset,
            "new" => InputCommand::New(
                words.next().map(str::to_string),
                words.next().map(str::to_string),
            ),
            "help" | "?" => InputCommand::Help,
            "quit" | "exit" | "q" => InputCommand::Quit,
            _ => match Position::from_label_or_number(line) {
                Some(pos) => InputCommand::Place(pos),
                None => InputCommand::Unknown(line.to_string()),
            },
        }
    }
}

/// Reads commands from `input` and drives `session` until `quit` or end
/// of input.
///
/// Moves on occupied squares or after the game ended are handed to the
/// engine, which ignores them; only unparseable lines get a hint.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    input: R,
    session: &mut GameSession<ConsoleFrontend<W>>,
) -> std::io::Result<()> {
    session.frontend_mut().line("Type `help` for commands.");

    for line in input.lines() {
        let line = line?;
        let command = InputCommand::parse(&line);
        debug!(?command, "Parsed input");

        match command {
            InputCommand::Place(pos) => {
                let outcome = session.play_round(pos.to_index());
                debug!(?outcome, "Round played");
            }
            InputCommand::Reset => session.reset(),
            InputCommand::New(name1, name2) => {
                let name1 = resolve_name(name1.as_deref(), DEFAULT_PLAYER1);
                let name2 = resolve_name(name2.as_deref(), DEFAULT_PLAYER2);
                session.start_game(name1, name2);
            }
            InputCommand::Help => session.frontend_mut().line(HELP),
            InputCommand::Quit => {
                info!("Player quit");
                break;
            }
            InputCommand::Nothing => {}
            InputCommand::Unknown(text) => {
                session
                    .frontend_mut()
                    .line(&format!("Unrecognized input: {:?} (type `help`)", text));
            }
        }
    }

    Ok(())
}
