//! One end-to-end run: source, grid, search.

use gridpath_core::{Grid, Point};
use gridpath_gen::{AsciiSource, GridSource, ImageSource, NoiseSource};
use gridpath_search::{AstarEngine, SearchOutcome};
use log::info;

use crate::config::{Config, Mode};
use crate::error::AppError;
use crate::render::{render_map, summary};

/// The grid that was searched and what the search found.
#[derive(Clone, Debug)]
pub struct Report {
    pub grid: Grid,
    pub start: Point,
    pub end: Point,
    pub outcome: SearchOutcome,
}

impl Report {
    /// The map with the route drawn on it, followed by the summary line.
    pub fn render(&self) -> String {
        format!(
            "{}\n{}",
            render_map(&self.grid, self.outcome.path()),
            summary(&self.outcome)
        )
    }
}

/// Build the grid source the configuration selects.
pub fn source_for(config: &Config) -> Result<Box<dyn GridSource>, AppError> {
    let source: Box<dyn GridSource> = match &config.mode {
        Mode::Noise => Box::new(
            NoiseSource::new(config.dimension, config.start, config.end)
                .with_threshold(config.threshold)
                .with_scale(config.scale)
                .with_seed(config.seed),
        ),
        Mode::Image { path } => Box::new(ImageSource::open(path)?),
        Mode::Ascii { path } => Box::new(AsciiSource::open(path)?),
    };
    Ok(source)
}

/// Build the configured grid and search it.
pub fn run(config: &Config) -> Result<Report, AppError> {
    config.validate()?;
    let source = source_for(config)?;
    let grid = source.build()?;
    let (start, end) = (source.start_coordinate(), source.end_coordinate());
    info!(
        "searching {}x{} grid from {start} to {end}",
        grid.width(),
        grid.height()
    );

    let outcome = AstarEngine::new(&grid)
        .with_tie_break(config.tie_break)
        .search(start, end)?;
    Ok(Report {
        grid,
        start,
        end,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::CellKind;
    use gridpath_search::{ConfigError, Endpoint};
    use image::{Rgb, RgbImage};
    use std::fs;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gridpath-run-{}-{name}", std::process::id()))
    }

    #[test]
    fn open_noise_grid_finds_diagonal() {
        let config = Config {
            dimension: 8,
            end: Point::new(7, 7),
            threshold: 0.0,
            ..Config::default()
        };
        let report = run(&config).unwrap();
        let path = report.outcome.path().unwrap();
        assert_eq!(path.len(), 8);
        assert!((path.cost() - 7.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
        assert_eq!(report.render().lines().count(), 9);
    }

    #[test]
    fn walled_endpoint_is_search_error() {
        let config = Config {
            dimension: 4,
            end: Point::new(3, 3),
            threshold: 2.0,
            ..Config::default()
        };
        let err = run(&config).unwrap_err();
        assert!(matches!(
            err,
            AppError::Search(ConfigError::Blocked {
                which: Endpoint::Start,
                ..
            })
        ));
    }

    #[test]
    fn out_of_grid_endpoint_is_search_error() {
        let config = Config {
            dimension: 4,
            threshold: 0.0,
            ..Config::default()
        };
        // The default end (31, 31) lies outside a 4x4 grid.
        let err = run(&config).unwrap_err();
        assert!(matches!(err, AppError::Search(ConfigError::OutOfBounds { .. })));
    }

    #[test]
    fn invalid_config_is_rejected_before_building() {
        let config = Config {
            dimension: 0,
            ..Config::default()
        };
        assert!(matches!(run(&config), Err(AppError::Invalid(_))));
    }

    #[test]
    fn ascii_mode() {
        let path = scratch("map.txt");
        fs::write(&path, "S.#.\n.##.\n...E\n").unwrap();
        let config = Config {
            mode: Mode::Ascii { path: path.clone() },
            ..Config::default()
        };
        let report = run(&config);
        fs::remove_file(&path).unwrap();
        let report = report.unwrap();
        assert_eq!(report.start, Point::new(0, 0));
        assert_eq!(report.end, Point::new(3, 2));
        assert!(report.outcome.is_found());
    }

    #[test]
    fn image_mode() {
        let path = scratch("map.png");
        let mut img = RgbImage::from_pixel(5, 5, Rgb([255, 255, 255]));
        img.put_pixel(0, 4, Rgb([0, 255, 0]));
        img.put_pixel(4, 0, Rgb([255, 0, 0]));
        for y in 0..4 {
            img.put_pixel(2, y, Rgb([0, 0, 0]));
        }
        img.save(&path).unwrap();
        let config = Config {
            mode: Mode::Image { path: path.clone() },
            ..Config::default()
        };
        let report = run(&config);
        fs::remove_file(&path).unwrap();
        let report = report.unwrap();
        assert_eq!(report.grid.count(CellKind::Closed), 4);
        let route = report.outcome.path().unwrap();
        assert!(route.cells().contains(&Point::new(2, 4)));
    }

    #[test]
    fn missing_image_is_ingestion_error() {
        let config = Config {
            mode: Mode::Image {
                path: PathBuf::from("/nonexistent/gridpath.png"),
            },
            ..Config::default()
        };
        assert!(matches!(run(&config), Err(AppError::Ingestion(_))));
    }
}
