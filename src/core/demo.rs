use crate::core::{ConfigProvider, LevelPair, ReportSink, Result};

pub struct DemoEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> DemoEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Runs the fixed walkthrough: construct the pair, report both levels,
    /// revise both levels, report both again.
    pub fn run<S: ReportSink>(&self, sink: &mut S) -> Result<()> {
        let (a, b) = self.config.initial_levels();
        tracing::debug!("Constructing level pair with ({}, {})", a, b);
        let mut pair = LevelPair::new(a, b);

        sink.report(pair.level_a())?;
        sink.report(pair.level_b())?;

        let (a, b) = self.config.revised_levels();
        tracing::debug!("Revising levels to ({}, {})", a, b);
        pair.set_level_a(a);
        pair.set_level_b(b);

        sink.report(pair.level_a())?;
        sink.report(pair.level_b())?;

        Ok(())
    }
}
