//! Plain-text terminal frontend.

use std::io::Write;
use tictactoe_rules::{Board, Cue, CuePlayer, Mark, Renderer, Square, StatusDisplay};
use tracing::{instrument, trace, warn};

const BLUE: &str = "\x1b[1;34m";
const RED: &str = "\x1b[1;31m";
const GRAY: &str = "\x1b[90m";
const MAGENTA_BG: &str = "\x1b[45m";
const RESET: &str = "\x1b[0m";
const BELL: &str = "\x07";

/// Frontend writing the board, status lines and bell cues to a writer.
///
/// Write failures are logged and dropped: the engine has no way to act
/// on them.
#[derive(Debug)]
pub struct ConsoleFrontend<W: Write> {
    out: W,
    color: bool,
    sound: bool,
    last_board: Board,
}

impl<W: Write> ConsoleFrontend<W> {
    /// Creates a frontend writing to `out`.
    #[instrument(skip(out))]
    pub fn new(out: W, color: bool, sound: bool) -> Self {
        Self {
            out,
            color,
            sound,
            last_board: Board::new(),
        }
    }

    /// Consumes the frontend, returning the writer.
    #[instrument(skip(self))]
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Writes a free-form line (prompts, help text).
    #[instrument(skip(self))]
    pub fn line(&mut self, text: &str) {
        self.emit(&format!("{}\n", text));
    }

    fn emit(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, "Failed to write to terminal");
        }
    }

    fn cell(&self, pos: usize, square: Square, highlighted: bool) -> String {
        if !self.color {
            let text = match square {
                Square::Empty => pos.to_string(),
                Square::Occupied(mark) => mark.to_string(),
            };
            return if highlighted {
                format!("[{}]", text)
            } else {
                format!(" {} ", text)
            };
        }

        let style = match square {
            Square::Empty => GRAY,
            Square::Occupied(Mark::X) => BLUE,
            Square::Occupied(Mark::O) => RED,
        };
        let text = match square {
            Square::Empty => pos.to_string(),
            Square::Occupied(mark) => mark.to_string(),
        };
        let background = if highlighted { MAGENTA_BG } else { "" };
        format!("{}{} {} {}", background, style, text, RESET)
    }

    fn draw(&self, board: &Board, highlighted: &[usize]) -> String {
        let mut result = String::new();
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let pos = row * 3 + col;
                    let square = board.get(pos).unwrap_or_default();
                    self.cell(pos, square, highlighted.contains(&pos))
                })
                .collect();
            result.push_str(&cells.join("|"));
            result.push('\n');
            if row < 2 {
                result.push_str("---+---+---\n");
            }
        }
        result
    }
}

impl<W: Write> Renderer for ConsoleFrontend<W> {
    fn render(&mut self, board: &Board) {
        trace!(board = %board, "Rendering board");
        self.last_board = board.clone();
        let text = self.draw(board, &[]);
        self.emit(&text);
    }

    fn highlight(&mut self, cells: &[usize]) {
        trace!(?cells, "Highlighting cells");
        let text = self.draw(&self.last_board, cells);
        self.emit(&text);
    }
}

impl<W: Write> StatusDisplay for ConsoleFrontend<W> {
    fn announce(&mut self, message: &str) {
        self.emit(&format!("{}\n", message));
    }
}

impl<W: Write> CuePlayer for ConsoleFrontend<W> {
    fn play_cue(&mut self, cue: Cue) {
        if !self.sound {
            return;
        }
        trace!(%cue, "Playing cue");
        match cue {
            Cue::Move => self.emit(BELL),
            Cue::Victory => self.emit(&BELL.repeat(3)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(frontend: ConsoleFrontend<Vec<u8>>) -> String {
        String::from_utf8(frontend.into_writer()).unwrap()
    }

    #[test]
    fn test_plain_render() {
        let mut frontend = ConsoleFrontend::new(Vec::new(), false, false);
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();
        frontend.render(&board);
        assert_eq!(
            output(frontend),
            " X | 1 | 2 \n---+---+---\n 3 | O | 5 \n---+---+---\n 6 | 7 | 8 \n"
        );
    }

    #[test]
    fn test_plain_highlight_brackets_cells() {
        let mut frontend = ConsoleFrontend::new(Vec::new(), false, false);
        let mut board = Board::new();
        for pos in [0, 1, 2] {
            board.place(pos, Mark::X).unwrap();
        }
        frontend.render(&board);
        frontend.highlight(&[0, 1, 2]);
        let text = output(frontend);
        assert!(text.ends_with(
            "[X]|[X]|[X]\n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 \n"
        ));
    }

    #[test]
    fn test_color_highlight_uses_background() {
        let mut frontend = ConsoleFrontend::new(Vec::new(), true, false);
        frontend.highlight(&[4]);
        assert!(output(frontend).contains(MAGENTA_BG));
    }

    #[test]
    fn test_cues_respect_sound_flag() {
        let mut muted = ConsoleFrontend::new(Vec::new(), false, false);
        muted.play_cue(Cue::Victory);
        assert!(output(muted).is_empty());

        let mut loud = ConsoleFrontend::new(Vec::new(), false, true);
        loud.play_cue(Cue::Move);
        loud.play_cue(Cue::Victory);
        assert_eq!(output(loud), "\x07\x07\x07\x07");
    }

    #[test]
    fn test_announce_writes_line() {
        let mut frontend = ConsoleFrontend::new(Vec::new(), false, false);
        frontend.announce("It's a tie!");
        assert_eq!(output(frontend), "It's a tie!\n");
    }
}
