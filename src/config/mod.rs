pub mod cli;

use crate::domain::ports::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-levels")]
#[command(about = "A small demo of a two-level record with controlled mutation")]
pub struct CliConfig {
    #[arg(long, default_value = "2")]
    pub initial_a: i32,

    #[arg(long, default_value = "3")]
    pub initial_b: i32,

    #[arg(long, default_value = "1")]
    pub revised_a: i32,

    #[arg(long, default_value = "1")]
    pub revised_b: i32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn initial_levels(&self) -> (i32, i32) {
        (self.initial_a, self.initial_b)
    }

    fn revised_levels(&self) -> (i32, i32) {
        (self.revised_a, self.revised_b)
    }
}
