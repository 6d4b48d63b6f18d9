use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("unsupported layout size {0} (expected one of 1, 2, 4, 6, 9)")]
    Unsupported(usize),
}

/// Number of simultaneous panes in the player grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum Layout {
    Single,
    Double,
    #[default]
    Quad,
    Six,
    Nine,
}

impl Layout {
    pub const ALL: [Layout; 5] = [
        Layout::Single,
        Layout::Double,
        Layout::Quad,
        Layout::Six,
        Layout::Nine,
    ];

    pub fn size(self) -> usize {
        match self {
            Layout::Single => 1,
            Layout::Double => 2,
            Layout::Quad => 4,
            Layout::Six => 6,
            Layout::Nine => 9,
        }
    }

    /// (rows, columns) of the pane grid
    pub fn grid(self) -> (usize, usize) {
        match self {
            Layout::Single => (1, 1),
            Layout::Double => (1, 2),
            Layout::Quad => (2, 2),
            Layout::Six => (2, 3),
            Layout::Nine => (3, 3),
        }
    }

    /// Column count of the live card grid on the home view
    pub fn card_columns(self) -> usize {
        self.size().min(4)
    }

    pub fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|d| Self::try_from(d as usize).ok())
    }
}

impl TryFrom<usize> for Layout {
    type Error = LayoutError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Layout::Single),
            2 => Ok(Layout::Double),
            4 => Ok(Layout::Quad),
            6 => Ok(Layout::Six),
            9 => Ok(Layout::Nine),
            n => Err(LayoutError::Unsupported(n)),
        }
    }
}

impl From<Layout> for usize {
    fn from(value: Layout) -> Self {
        value.size()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.grid();
        write!(f, "{} ({rows}x{cols})", self.size())
    }
}
