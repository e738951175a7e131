//! Moving grids onto and off the host canvas.
//!
//! Grid cell (row `i`, col `j`) of an `R` x `C` grid maps to canvas
//! `(x, y) = (j - C/2, i - R/2)`: columns run along `x`, rows along `y`,
//! and the grid is centred on the origin. Writes and reads use the same
//! mapping, so a write followed by a read of the same window returns the
//! written grid.

use crate::schema::{Colour, GROWN_SIZE, Grid, Palette};

use super::{Host, HostError};

/// Canvas coordinate of grid cell (row, col) for an `rows` x `cols` window.
#[inline]
pub fn canvas_coord(row: usize, col: usize, rows: usize, cols: usize) -> (i64, i64) {
    let x = col as i64 - (cols / 2) as i64;
    let y = row as i64 - (rows / 2) as i64;
    (x, y)
}

/// Write a grid centred on the canvas origin.
pub fn write_grid<H: Host + ?Sized>(host: &mut H, grid: &Grid) -> Result<(), HostError> {
    let (rows, cols) = grid.shape();
    for (i, j, colour) in grid.iter() {
        let (x, y) = canvas_coord(i, j, rows, cols);
        host.write_cell(x, y, colour)?;
    }
    Ok(())
}

/// Read a `rows` x `cols` window centred on the canvas origin.
pub fn read_window<H: Host + ?Sized>(
    host: &H,
    rows: usize,
    cols: usize,
) -> Result<Grid, HostError> {
    let mut grid = Grid::empty(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            let (x, y) = canvas_coord(i, j, rows, cols);
            grid.set(i, j, host.read_cell(x, y)?);
        }
    }
    Ok(grid)
}

/// Where and how to grow a seed.
#[derive(Debug, Clone)]
pub struct GrowSettings {
    /// Host rule name.
    pub rule: String,
    /// Torus size (width, height).
    pub torus: (usize, usize),
    /// Steps to advance after writing the seed.
    pub steps: u64,
    /// Side of the square read-back window.
    pub window: usize,
}

impl Default for GrowSettings {
    fn default() -> Self {
        Self {
            rule: super::IMMIGRATION.to_string(),
            torus: (GROWN_SIZE, GROWN_SIZE),
            steps: 80,
            window: GROWN_SIZE,
        }
    }
}

impl From<&crate::schema::ExperimentConfig> for GrowSettings {
    fn from(config: &crate::schema::ExperimentConfig) -> Self {
        Self {
            rule: config.rule.clone(),
            torus: config.torus,
            steps: config.steps,
            window: GROWN_SIZE,
        }
    }
}

/// Red and blue cell counts before and after growing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowthStats {
    pub seed_red: usize,
    pub seed_blue: usize,
    pub grown_red: usize,
    pub grown_blue: usize,
}

impl GrowthStats {
    pub fn measure(seed: &Grid, grown: &Grid) -> Self {
        Self {
            seed_red: seed.count(Colour::Red),
            seed_blue: seed.count(Colour::Blue),
            grown_red: grown.count(Colour::Red),
            grown_blue: grown.count(Colour::Blue),
        }
    }

    /// Net change in red cells.
    pub fn red_growth(&self) -> i64 {
        self.grown_red as i64 - self.seed_red as i64
    }

    /// Net change in blue cells.
    pub fn blue_growth(&self) -> i64 {
        self.grown_blue as i64 - self.seed_blue as i64
    }
}

/// Caller-owned running totals of growth across many grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowthTally {
    pub grows: usize,
    pub red_growth: i64,
    pub blue_growth: i64,
}

impl GrowthTally {
    pub fn record(&mut self, stats: &GrowthStats) {
        self.grows += 1;
        self.red_growth += stats.red_growth();
        self.blue_growth += stats.blue_growth();
    }
}

/// A grown pattern and the growth it took to get there.
#[derive(Debug, Clone)]
pub struct Growth {
    pub grown: Grid,
    pub stats: GrowthStats,
}

/// Write `seed` into a fresh universe, advance, and read the window back.
pub fn grow<H: Host + ?Sized>(
    host: &mut H,
    seed: &Grid,
    settings: &GrowSettings,
) -> Result<Growth, HostError> {
    let (width, height) = settings.torus;
    host.new_universe(&settings.rule, width, height)?;
    host.set_palette(&Palette::default())?;
    write_grid(host, seed)?;
    host.advance(settings.steps)?;
    let grown = read_window(host, settings.window, settings.window)?;
    let stats = GrowthStats::measure(seed, &grown);
    log::debug!(
        "Grew seed for {} steps: red {} -> {}, blue {} -> {}",
        settings.steps,
        stats.seed_red,
        stats.grown_red,
        stats.seed_blue,
        stats.grown_blue
    );
    Ok(Growth { grown, stats })
}

/// Clear the host and draw a grid (a target or a seed) for viewing.
pub fn show_grid<H: Host + ?Sized>(
    host: &mut H,
    grid: &Grid,
    settings: &GrowSettings,
) -> Result<(), HostError> {
    let (width, height) = settings.torus;
    host.new_universe(&settings.rule, width, height)?;
    host.set_palette(&Palette::default())?;
    write_grid(host, grid)
}

/// Display a score in the host's status line.
pub fn show_score<H: Host + ?Sized>(host: &mut H, score: f64) -> Result<(), HostError> {
    host.show(&format!("score = {}", score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{SeedRng, TorusHost};
    use crate::schema::{SEED_SIZE, Target};

    #[test]
    fn test_seed_offsets() {
        assert_eq!(canvas_coord(0, 0, SEED_SIZE, SEED_SIZE), (-10, -10));
        assert_eq!(canvas_coord(19, 19, SEED_SIZE, SEED_SIZE), (9, 9));
        assert_eq!(canvas_coord(0, 59, GROWN_SIZE, GROWN_SIZE), (29, -30));
    }

    #[test]
    fn test_columns_map_to_x() {
        let mut host = TorusHost::new();
        let settings = GrowSettings::default();
        let mut seed = Grid::empty(SEED_SIZE, SEED_SIZE);
        seed.set(0, 19, Colour::Red);
        show_grid(&mut host, &seed, &settings).unwrap();
        assert_eq!(host.read_cell(9, -10).unwrap(), Colour::Red);
        assert_eq!(host.read_cell(-10, 9).unwrap(), Colour::Empty);
    }

    #[test]
    fn test_round_trip_with_zero_steps() {
        let mut host = TorusHost::new();
        let settings = GrowSettings {
            steps: 0,
            window: SEED_SIZE,
            ..Default::default()
        };
        let seed = SeedRng::new(5).generate_seed(0.3, 0.3);
        let growth = grow(&mut host, &seed, &settings).unwrap();
        assert_eq!(growth.grown, seed);
        assert_eq!(growth.stats.red_growth(), 0);
        assert_eq!(growth.stats.blue_growth(), 0);
    }

    #[test]
    fn test_target_round_trip() {
        let mut host = TorusHost::new();
        let target = Target::Pinwheel.grid();
        show_grid(&mut host, &target, &GrowSettings::default()).unwrap();
        assert_eq!(read_window(&host, GROWN_SIZE, GROWN_SIZE).unwrap(), target);
    }

    #[test]
    fn test_seed_sits_in_middle_of_window() {
        let mut host = TorusHost::new();
        let settings = GrowSettings {
            steps: 0,
            ..Default::default()
        };
        let seed = Grid::filled(SEED_SIZE, SEED_SIZE, Colour::Blue);
        let growth = grow(&mut host, &seed, &settings).unwrap();
        assert_eq!(growth.grown.shape(), (GROWN_SIZE, GROWN_SIZE));
        assert_eq!(growth.grown.count(Colour::Blue), SEED_SIZE * SEED_SIZE);
        assert_eq!(growth.grown.get(20, 20), Colour::Blue);
        assert_eq!(growth.grown.get(39, 39), Colour::Blue);
        assert_eq!(growth.grown.get(19, 20), Colour::Empty);
        assert_eq!(growth.grown.get(40, 39), Colour::Empty);
    }

    #[test]
    fn test_tally_accumulates() {
        let mut tally = GrowthTally::default();
        let stats = GrowthStats {
            seed_red: 10,
            seed_blue: 10,
            grown_red: 40,
            grown_blue: 5,
        };
        tally.record(&stats);
        tally.record(&stats);
        assert_eq!(
            tally,
            GrowthTally {
                grows: 2,
                red_growth: 60,
                blue_growth: -10,
            }
        );
    }

    #[test]
    fn test_show_score() {
        let mut host = TorusHost::new();
        show_score(&mut host, 12.5).unwrap();
        assert_eq!(host.messages(), ["score = 12.5".to_string()]);
    }

    /// Host whose status line is unavailable.
    struct Headless;

    impl Host for Headless {
        fn new_universe(&mut self, _: &str, _: usize, _: usize) -> Result<(), HostError> {
            Ok(())
        }
        fn set_palette(&mut self, _: &Palette) -> Result<(), HostError> {
            Ok(())
        }
        fn write_cell(&mut self, _: i64, _: i64, _: Colour) -> Result<(), HostError> {
            Ok(())
        }
        fn advance(&mut self, _: u64) -> Result<(), HostError> {
            Ok(())
        }
        fn read_cell(&self, _: i64, _: i64) -> Result<Colour, HostError> {
            Ok(Colour::Empty)
        }
        fn show(&mut self, _: &str) -> Result<(), HostError> {
            Err(HostError::Backend("no status line".to_string()))
        }
    }

    #[test]
    fn test_show_score_reports_host_failure() {
        assert!(matches!(
            show_score(&mut Headless, 1.0),
            Err(HostError::Backend(_))
        ));
    }
}
