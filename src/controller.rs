// Two-click move input: the first press picks a source, the second submits a move.

use shakmaty::{Piece, Square};

use crate::engine::{MoveError, Rules};
use crate::geometry::{Geometry, Region};

// ────────────────────────────────────────────────────────────────────────────────
// Pointer events
// ────────────────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// The part of a host pointer-press event the controller looks at.
pub trait PointerEvent {
    fn position(&self) -> (f32, f32);
    fn is_primary(&self) -> bool;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Press {
    pub x: f32,
    pub y: f32,
    pub button: Button,
}

impl Press {
    pub fn new(x: f32, y: f32, button: Button) -> Self {
        Self { x, y, button }
    }
}

impl PointerEvent for Press {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn is_primary(&self) -> bool {
        self.button == Button::Primary
    }
}

// ────────────────────────────────────────────────────────────────────────────────
// Controller
// ────────────────────────────────────────────────────────────────────────────────

/// A chosen source square and whatever stood on it when it was clicked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub piece: Option<Piece>,
    pub square: Square,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// Not on the board; left to the host.
    PassThrough,
    /// On the board, but not with the primary button.
    Ignored,
    /// A coordinate label was clicked.
    LabelMargin,
    Selected(Selection),
    /// The selection was cleared whatever the result.
    Attempted {
        uci: String,
        result: Result<(), MoveError>,
    },
}

impl PressOutcome {
    pub fn needs_repaint(&self) -> bool {
        matches!(
            self,
            PressOutcome::LabelMargin | PressOutcome::Selected(_) | PressOutcome::Attempted { .. }
        )
    }
}

#[derive(Debug)]
pub struct InputController {
    geometry: Geometry,
    pending: Option<Selection>,
}

impl InputController {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            pending: None,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn pending(&self) -> Option<Selection> {
        self.pending
    }

    pub fn handle_press<R: Rules, E: PointerEvent>(
        &mut self,
        rules: &mut R,
        event: &E,
    ) -> PressOutcome {
        let (x, y) = event.position();
        let region = self.geometry.region(x, y);
        if region == Region::Outside {
            return PressOutcome::PassThrough;
        }
        if !event.is_primary() {
            return PressOutcome::Ignored;
        }

        let square = match region {
            Region::Square(square) => square,
            _ => {
                log::debug!("label margin clicked at ({x}, {y})");
                return PressOutcome::LabelMargin;
            }
        };

        match self.pending.take() {
            None => {
                let selection = Selection {
                    piece: rules.piece_at(square),
                    square,
                };
                log::debug!("selected {square} ({:?})", selection.piece);
                self.pending = Some(selection);
                PressOutcome::Selected(selection)
            }
            Some(source) => {
                let uci = format!("{}{}", source.square, square);
                let result = rules.play_uci(&uci);
                if let Err(err) = &result {
                    log::warn!("{err}");
                }
                PressOutcome::Attempted { uci, result }
            }
        }
    }
}
