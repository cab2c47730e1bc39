//! Presentation collaborators driven by the engine.
//!
//! The engine owns every decision; collaborators only display what they
//! are handed. None of the calls can fail from the engine's point of view.

use crate::types::Board;
use serde::{Deserialize, Serialize};

/// Audio cue kinds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    /// A mark was placed.
    Move,
    /// A move won the game.
    Victory,
}

/// Draws the board.
pub trait Renderer {
    /// Redraw from a full board snapshot.
    fn render(&mut self, board: &Board);

    /// Emphasize the given cells. Called after a win with every cell of
    /// every completed line.
    fn highlight(&mut self, cells: &[usize]);
}

/// Shows the one-line game status.
pub trait StatusDisplay {
    /// Replace the status text.
    fn announce(&mut self, message: &str);
}

/// Plays sound effects. Fire-and-forget.
pub trait CuePlayer {
    /// Play a cue.
    fn play_cue(&mut self, cue: Cue);
}

/// Everything the engine talks to.
pub trait Frontend: Renderer + StatusDisplay + CuePlayer {}

impl<T: Renderer + StatusDisplay + CuePlayer> Frontend for T {}

/// A single notification received by a [`RecordingFrontend`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FrontendEvent {
    /// `render` with the board at that moment.
    Render {
        /// Snapshot handed to the renderer.
        board: Board,
    },
    /// `highlight` with the given cells.
    Highlight {
        /// Highlighted indices.
        cells: Vec<usize>,
    },
    /// `announce` with the given text.
    Status {
        /// Status text.
        message: String,
    },
    /// `play_cue` with the given cue.
    Cue {
        /// Cue kind.
        cue: Cue,
    },
}

/// Frontend that records every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingFrontend {
    events: Vec<FrontendEvent>,
}

impl RecordingFrontend {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events received so far.
    pub fn events(&self) -> &[FrontendEvent] {
        &self.events
    }

    /// Drops recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Status messages in the order they were announced.
    pub fn statuses(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                FrontendEvent::Status { message } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Most recent status message.
    pub fn last_status(&self) -> Option<&str> {
        self.statuses().last().copied()
    }

    /// Cues in the order they were played.
    pub fn cues(&self) -> Vec<Cue> {
        self.events
            .iter()
            .filter_map(|e| match e {
                FrontendEvent::Cue { cue } => Some(*cue),
                _ => None,
            })
            .collect()
    }

    /// Most recently rendered board.
    pub fn last_render(&self) -> Option<&Board> {
        self.events.iter().rev().find_map(|e| match e {
            FrontendEvent::Render { board } => Some(board),
            _ => None,
        })
    }

    /// Every highlight call's cells.
    pub fn highlights(&self) -> Vec<&[usize]> {
        self.events
            .iter()
            .filter_map(|e| match e {
                FrontendEvent::Highlight { cells } => Some(cells.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingFrontend {
    fn render(&mut self, board: &Board) {
        self.events.push(FrontendEvent::Render {
            board: board.clone(),
        });
    }

    fn highlight(&mut self, cells: &[usize]) {
        self.events.push(FrontendEvent::Highlight {
            cells: cells.to_vec(),
        });
    }
}

impl StatusDisplay for RecordingFrontend {
    fn announce(&mut self, message: &str) {
        self.events.push(FrontendEvent::Status {
            message: message.to_string(),
        });
    }
}

impl CuePlayer for RecordingFrontend {
    fn play_cue(&mut self, cue: Cue) {
        self.events.push(FrontendEvent::Cue { cue });
    }
}

impl<F: Renderer + ?Sized> Renderer for &mut F {
    fn render(&mut self, board: &Board) {
        (**self).render(board);
    }

    fn highlight(&mut self, cells: &[usize]) {
        (**self).highlight(cells);
    }
}

impl<F: StatusDisplay + ?Sized> StatusDisplay for &mut F {
    fn announce(&mut self, message: &str) {
        (**self).announce(message);
    }
}

impl<F: CuePlayer + ?Sized> CuePlayer for &mut F {
    fn play_cue(&mut self, cue: Cue) {
        (**self).play_cue(cue);
    }
}
