//! Target patterns that grown seeds are scored against.
//!
//! Every target is a 60x60 grid with no empty cells, so a perfect match
//! scores exactly 3600.

use serde::{Deserialize, Serialize};

use super::{Colour, GROWN_SIZE, Grid};

const HALF: usize = GROWN_SIZE / 2;

/// Named target pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Four 30x30 boxes: red, blue / blue, red.
    QuadrantBlock,
    /// Two vertical stripes: red, blue.
    #[default]
    Stripes2,
    /// Three vertical stripes: red, blue, red.
    Stripes3,
    /// Four vertical stripes: red, blue, red, blue.
    Stripes4,
    /// Four triangles per half, a red/blue pinwheel.
    Pinwheel,
}

impl Target {
    /// All targets in numbered order (1-5).
    pub const ALL: [Target; 5] = [
        Target::QuadrantBlock,
        Target::Stripes2,
        Target::Stripes3,
        Target::Stripes4,
        Target::Pinwheel,
    ];

    /// Look up a target by its number (1-5).
    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Build the target grid.
    pub fn grid(self) -> Grid {
        match self {
            Target::QuadrantBlock => target_1(),
            Target::Stripes2 => target_2(),
            Target::Stripes3 => target_3(),
            Target::Stripes4 => target_4(),
            Target::Pinwheel => target_5(),
        }
    }
}

/// Quadrant block: top-left and bottom-right red, the other two blue.
pub fn target_1() -> Grid {
    Grid::from_fn(GROWN_SIZE, GROWN_SIZE, |i, j| {
        if (i < HALF) == (j < HALF) {
            Colour::Red
        } else {
            Colour::Blue
        }
    })
}

/// Vertical stripes: columns [0, 30) red, [30, 60) blue.
pub fn target_2() -> Grid {
    stripes(2)
}

/// Vertical stripes cut at columns 20 and 40: red, blue, red.
pub fn target_3() -> Grid {
    stripes(3)
}

/// Vertical stripes cut at columns 15, 30 and 45: red, blue, red, blue.
pub fn target_4() -> Grid {
    stripes(4)
}

/// `bands` equal-width vertical stripes alternating red/blue from the left.
fn stripes(bands: usize) -> Grid {
    let width = GROWN_SIZE / bands;
    Grid::from_fn(GROWN_SIZE, GROWN_SIZE, |_, j| {
        if (j / width) % 2 == 0 {
            Colour::Red
        } else {
            Colour::Blue
        }
    })
}

/// Pinwheel of triangles.
///
/// ```text
/// ##########
/// # r /\ r #
/// #  /  \  #
/// # / b  \ #
/// #/      \#
/// #   /\   #
/// #  /  \  #
/// # / r  \ #
/// #/      \#
/// ##########
/// ```
///
/// Within each quadrant, `i` counts rows away from the top of that half and
/// `j` counts columns away from the vertical centre line. The top half is
/// blue on or below the diagonal (`i >= j`); the bottom half is red strictly
/// below it (`i > j`), so the diagonal itself is blue in both halves.
pub fn target_5() -> Grid {
    let mut grid = Grid::empty(GROWN_SIZE, GROWN_SIZE);
    for i in 0..HALF {
        for j in 0..HALF {
            let top = if i >= j { Colour::Blue } else { Colour::Red };
            grid.set(i, HALF - 1 - j, top);
            grid.set(i, HALF + j, top);

            let bottom = if i > j { Colour::Red } else { Colour::Blue };
            grid.set(HALF + i, HALF - 1 - j, bottom);
            grid.set(HALF + i, HALF + j, bottom);
        }
    }
    grid
}
