pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use crate::config::{cli::ConsoleSink, CliConfig};

pub use crate::core::demo::DemoEngine;
pub use crate::domain::model::LevelPair;
pub use crate::domain::ports::{ConfigProvider, ReportSink};
pub use crate::utils::error::{LevelsError, Result};
