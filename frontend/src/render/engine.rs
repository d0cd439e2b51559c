use crate::charts::spec::{ChartData, ChartSpec};

/// How a redraw animates. `Active` replays the hover/update animation;
/// `Instant` repaints without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Active,
    Instant,
}

/// A live chart instance. Dropping a handle does not destroy the underlying
/// chart; callers go through `destroy` so teardown is explicit.
pub trait ChartHandle {
    /// Swaps in new labels and per-dataset values without touching options,
    /// colors or axes.
    fn replace_data(&mut self, data: &ChartData);

    fn redraw(&mut self, transition: Transition);

    fn destroy(&mut self);
}

/// Abstraction over the charting backend. The production engine drives
/// Chart.js through the JS boundary; tests substitute a recording fake.
pub trait ChartEngine {
    /// Instantiates a chart on the element with id `mount_id`. Returns
    /// `None` when the mount point does not exist in the document.
    fn create(&self, mount_id: &str, spec: &ChartSpec) -> Option<Box<dyn ChartHandle>>;
}
