use crate::utils::error::Result;

pub trait ConfigProvider {
    fn initial_levels(&self) -> (i32, i32);
    fn revised_levels(&self) -> (i32, i32);
}

pub trait ReportSink {
    fn report(&mut self, value: i32) -> Result<()>;
}
