//! Cell colours and the RGB palette shown by the host.

use serde::{Deserialize, Serialize};

/// State of a single cell.
///
/// The discriminants are the host's state ids, so `Colour as u8` is what
/// gets written to and read from the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Colour {
    /// Dead cell (drawn white).
    #[default]
    Empty = 0,
    /// Live red cell.
    Red = 1,
    /// Live blue cell.
    Blue = 2,
}

impl Colour {
    /// All colours in state-id order.
    pub const ALL: [Colour; 3] = [Colour::Empty, Colour::Red, Colour::Blue];

    /// Whether the cell is alive (red or blue).
    #[inline]
    pub fn is_live(self) -> bool {
        self != Colour::Empty
    }

    /// Single-character rendering used by the CLI.
    pub fn glyph(self) -> char {
        match self {
            Colour::Empty => '.',
            Colour::Red => 'r',
            Colour::Blue => 'b',
        }
    }
}

impl From<Colour> for u8 {
    fn from(colour: Colour) -> Self {
        colour as u8
    }
}

impl TryFrom<u8> for Colour {
    type Error = ColourError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Colour::Empty),
            1 => Ok(Colour::Red),
            2 => Ok(Colour::Blue),
            other => Err(ColourError(other)),
        }
    }
}

/// A state id outside {0, 1, 2}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid colour id {0}: expected 0 (empty), 1 (red) or 2 (blue)")]
pub struct ColourError(pub u8);

/// RGB values for each colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub empty: [u8; 3],
    pub red: [u8; 3],
    pub blue: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: [255, 255, 255],
            red: [255, 0, 0],
            blue: [0, 0, 255],
        }
    }
}

impl Palette {
    /// RGB for a colour.
    pub fn rgb(&self, colour: Colour) -> [u8; 3] {
        match colour {
            Colour::Empty => self.empty,
            Colour::Red => self.red,
            Colour::Blue => self.blue,
        }
    }

    /// Flat `[id, r, g, b, id, r, g, b, ...]` list in the host's format.
    pub fn to_flat(&self) -> Vec<u8> {
        Colour::ALL
            .iter()
            .flat_map(|&c| {
                let [r, g, b] = self.rgb(c);
                [c as u8, r, g, b]
            })
            .collect()
    }
}
