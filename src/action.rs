//! Arc-standard actions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An action in an arc-standard transition-based parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the front of the queue onto the stack.
    Shift,
    /// Attach the second stack word to the top stack word.
    LeftArc,
    /// Attach the top stack word to the second stack word.
    RightArc,
}

impl Action {
    /// All actions, in tie-breaking order.
    pub const ALL: [Action; 3] = [Action::Shift, Action::LeftArc, Action::RightArc];

    /// Dense index of this action, matching [`Action::ALL`].
    pub fn index(self) -> usize {
        match self {
            Action::Shift => 0,
            Action::LeftArc => 1,
            Action::RightArc => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether this action creates a head-dependent arc.
    pub fn is_arc(self) -> bool {
        match self {
            Action::Shift => false,
            Action::LeftArc | Action::RightArc => true,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Shift => write!(f, "SHIFT"),
            Action::LeftArc => write!(f, "LEFT_ARC"),
            Action::RightArc => write!(f, "RIGHT_ARC"),
        }
    }
}
