pub mod demo;

pub use crate::domain::model::LevelPair;
pub use crate::domain::ports::{ConfigProvider, ReportSink};
pub use crate::utils::error::Result;
