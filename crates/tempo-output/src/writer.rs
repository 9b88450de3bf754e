//! The `LayoutWriter` trait implemented by all backend writers.

use log::info;
use tempo_layout::{Layout, ScheduleLayoutExt};
use tempo_schedule::Schedule;

use crate::OutputResult;

/// Trait implemented by the TikZ and CSV writers.
pub trait LayoutWriter {
    /// Write one page of primitives.
    fn write_layout(&mut self, layout: &Layout) -> OutputResult<()>;

    /// Flush and close the underlying sink.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Lay out `schedule` once and write it through `writer`, then finish.
pub fn render<W: LayoutWriter>(schedule: &Schedule, writer: &mut W) -> OutputResult<()> {
    let layout = schedule.layout();
    writer.write_layout(&layout)?;
    writer.finish()?;
    info!("rendered {} events as {} primitives", schedule.len(), layout.len());
    Ok(())
}
