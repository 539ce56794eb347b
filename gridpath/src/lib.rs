//! gridpath: build a grid from a configured source, search it with A*, and
//! draw the result.

pub mod config;
pub mod error;
pub mod render;
pub mod run;

pub use config::{Config, Mode};
pub use error::AppError;
pub use run::{Report, run};
