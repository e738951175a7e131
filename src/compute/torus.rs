//! In-process host running the Immigration rule on a torus.
//!
//! Immigration is Conway's Life (B3/S23) with two live colours: survivors
//! keep their colour and a newborn cell takes the majority colour of its
//! three live neighbours.

use crate::schema::{Colour, Palette};

use super::{Host, HostError};

/// Rule name accepted by [`TorusHost`].
pub const IMMIGRATION: &str = "Immigration";

/// Torus state container.
///
/// Cells are stored row-major as `[row * width + col]`, where column 0 is
/// canvas `x = -width / 2` and row 0 is canvas `y = -height / 2`.
#[derive(Debug, Clone)]
pub struct Universe {
    width: usize,
    height: usize,
    cells: Vec<Colour>,
    generation: u64,
    scratch: Vec<Colour>,
}

impl Universe {
    /// Create an all-empty torus.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Colour::Empty; width * height],
            generation: 0,
            scratch: vec![Colour::Empty; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Colour] {
        &self.cells
    }

    /// Generation count.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Map canvas coordinates to a flat index, wrapping around the torus.
    #[inline]
    pub fn idx(&self, x: i64, y: i64) -> usize {
        let col = (x + (self.width / 2) as i64).rem_euclid(self.width as i64) as usize;
        let row = (y + (self.height / 2) as i64).rem_euclid(self.height as i64) as usize;
        row * self.width + col
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_live()).count()
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for row in 0..h {
            let up = (row + h - 1) % h;
            let down = (row + 1) % h;
            for col in 0..w {
                let left = (col + w - 1) % w;
                let right = (col + 1) % w;

                let mut live = 0u8;
                let mut red = 0u8;
                for r in [up, row, down] {
                    for c in [left, col, right] {
                        if r == row && c == col {
                            continue;
                        }
                        match self.cells[r * w + c] {
                            Colour::Red => {
                                live += 1;
                                red += 1;
                            }
                            Colour::Blue => live += 1,
                            Colour::Empty => {}
                        }
                    }
                }

                let current = self.cells[row * w + col];
                self.scratch[row * w + col] = match (current, live) {
                    (Colour::Empty, 3) => {
                        if red >= 2 {
                            Colour::Red
                        } else {
                            Colour::Blue
                        }
                    }
                    (Colour::Empty, _) => Colour::Empty,
                    (alive, 2) | (alive, 3) => alive,
                    _ => Colour::Empty,
                };
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
    }
}

/// Host backed by an in-memory [`Universe`].
#[derive(Debug, Default)]
pub struct TorusHost {
    universe: Option<Universe>,
    palette: Palette,
    messages: Vec<String>,
}

impl TorusHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current universe, if one has been created.
    pub fn universe(&self) -> Option<&Universe> {
        self.universe.as_ref()
    }

    /// Palette last set by the caller.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Messages passed to [`Host::show`], oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    fn universe_mut(&mut self) -> Result<&mut Universe, HostError> {
        self.universe.as_mut().ok_or(HostError::NoUniverse)
    }
}

impl Host for TorusHost {
    fn new_universe(&mut self, rule: &str, width: usize, height: usize) -> Result<(), HostError> {
        if !rule.eq_ignore_ascii_case(IMMIGRATION) {
            return Err(HostError::UnsupportedRule(rule.to_string()));
        }
        if width == 0 || height == 0 {
            return Err(HostError::InvalidSize { width, height });
        }
        log::debug!("New {} universe {}x{}", rule, width, height);
        self.universe = Some(Universe::new(width, height));
        Ok(())
    }

    fn set_palette(&mut self, palette: &Palette) -> Result<(), HostError> {
        self.palette = palette.clone();
        Ok(())
    }

    fn write_cell(&mut self, x: i64, y: i64, colour: Colour) -> Result<(), HostError> {
        let universe = self.universe_mut()?;
        let idx = universe.idx(x, y);
        universe.cells[idx] = colour;
        Ok(())
    }

    fn advance(&mut self, steps: u64) -> Result<(), HostError> {
        let universe = self.universe_mut()?;
        for _ in 0..steps {
            universe.step();
        }
        log::debug!(
            "Advanced {} steps to generation {} ({} live)",
            steps,
            universe.generation,
            universe.population()
        );
        Ok(())
    }

    fn read_cell(&self, x: i64, y: i64) -> Result<Colour, HostError> {
        let universe = self.universe.as_ref().ok_or(HostError::NoUniverse)?;
        Ok(universe.cells[universe.idx(x, y)])
    }

    fn show(&mut self, message: &str) -> Result<(), HostError> {
        log::info!("{}", message);
        self.messages.push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn immigration(width: usize, height: usize) -> TorusHost {
        let mut host = TorusHost::new();
        host.new_universe(IMMIGRATION, width, height).unwrap();
        host
    }

    #[test]
    fn test_requires_universe() {
        let mut host = TorusHost::new();
        assert!(matches!(
            host.write_cell(0, 0, Colour::Red),
            Err(HostError::NoUniverse)
        ));
        assert!(matches!(host.read_cell(0, 0), Err(HostError::NoUniverse)));
        assert!(matches!(host.advance(1), Err(HostError::NoUniverse)));
    }

    #[test]
    fn test_unsupported_rule() {
        let mut host = TorusHost::new();
        assert!(matches!(
            host.new_universe("Life", 10, 10),
            Err(HostError::UnsupportedRule(_))
        ));
    }

    #[test]
    fn test_coordinates_wrap() {
        let mut host = immigration(60, 60);
        host.write_cell(-30, -30, Colour::Blue).unwrap();
        assert_eq!(host.read_cell(30, 30).unwrap(), Colour::Blue);
        assert_eq!(host.read_cell(-30, -30).unwrap(), Colour::Blue);
        let u = host.universe().unwrap();
        assert_eq!(u.cells()[0], Colour::Blue);
    }

    #[test]
    fn test_blinker_oscillates_and_keeps_colour() {
        let mut host = immigration(10, 10);
        for x in -1..=1 {
            host.write_cell(x, 0, Colour::Red).unwrap();
        }
        host.advance(1).unwrap();
        for y in -1..=1 {
            assert_eq!(host.read_cell(0, y).unwrap(), Colour::Red);
        }
        assert_eq!(host.read_cell(-1, 0).unwrap(), Colour::Empty);
        host.advance(1).unwrap();
        for x in -1..=1 {
            assert_eq!(host.read_cell(x, 0).unwrap(), Colour::Red);
        }
        assert_eq!(host.universe().unwrap().generation(), 2);
    }

    #[test]
    fn test_birth_takes_majority_colour() {
        let mut host = immigration(10, 10);
        // Vertical line: red, blue, red. The two side cells are born.
        host.write_cell(0, -1, Colour::Red).unwrap();
        host.write_cell(0, 0, Colour::Blue).unwrap();
        host.write_cell(0, 1, Colour::Red).unwrap();
        host.advance(1).unwrap();
        assert_eq!(host.read_cell(-1, 0).unwrap(), Colour::Red);
        assert_eq!(host.read_cell(1, 0).unwrap(), Colour::Red);
        assert_eq!(host.read_cell(0, 0).unwrap(), Colour::Blue);

        let mut host = immigration(10, 10);
        host.write_cell(0, -1, Colour::Blue).unwrap();
        host.write_cell(0, 0, Colour::Red).unwrap();
        host.write_cell(0, 1, Colour::Blue).unwrap();
        host.advance(1).unwrap();
        assert_eq!(host.read_cell(-1, 0).unwrap(), Colour::Blue);
    }

    #[test]
    fn test_block_across_seam_is_still_life() {
        let mut host = immigration(8, 8);
        // Straddles the wrap at x = 3 / -4.
        for (x, y) in [(3, 0), (-4, 0), (3, 1), (-4, 1)] {
            host.write_cell(x, y, Colour::Blue).unwrap();
        }
        host.advance(5).unwrap();
        assert_eq!(host.universe().unwrap().population(), 4);
        assert_eq!(host.read_cell(-4, 1).unwrap(), Colour::Blue);
    }

    #[test]
    fn test_universe_keeps_its_dimensions() {
        let mut host = immigration(12, 7);
        host.write_cell(0, 0, Colour::Red).unwrap();
        host.advance(3).unwrap();
        let u = host.universe().unwrap();
        assert_eq!((u.width(), u.height()), (12, 7));
        assert_eq!(u.cells().len(), 12 * 7);
        assert_eq!(u.generation(), 3);
        // A lone cell dies on the first step.
        assert_eq!(u.population(), 0);
    }

    #[test]
    fn test_show_records_messages() {
        let mut host = TorusHost::new();
        host.show("score = 1").unwrap();
        assert_eq!(host.messages(), ["score = 1".to_string()]);
    }
}
