use crate::charts::spec::{ChartData, ChartSpec};
use crate::render::engine::{ChartEngine, ChartHandle, Transition};
use log::{debug, warn};

/// Owns at most one live chart for one mount point. Create silently skips
/// when there is nothing to draw or nowhere to draw it; refresh and destroy
/// are no-ops without a live instance. To change anything other than data,
/// destroy and create again.
#[derive(Default)]
pub struct RenderSession {
    handle: Option<Box<dyn ChartHandle>>,
}

impl RenderSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    pub fn create(&mut self, engine: &dyn ChartEngine, mount_id: &str, spec: &ChartSpec) {
        if self.handle.is_some() {
            warn!(
                "Chart already live on '{}'; destroy it before creating another",
                mount_id
            );
            return;
        }
        if spec.is_empty() {
            debug!("No data for '{}', skipping chart creation", mount_id);
            return;
        }
        match engine.create(mount_id, spec) {
            Some(handle) => self.handle = Some(handle),
            None => debug!("Mount point '{}' not found, skipping chart", mount_id),
        }
    }

    /// Full data replacement followed by an animated repaint.
    pub fn refresh(&mut self, data: &ChartData) {
        match self.handle.as_mut() {
            Some(handle) => {
                handle.replace_data(data);
                handle.redraw(Transition::Active);
            }
            None => debug!("Refresh with no live chart, ignoring"),
        }
    }

    pub fn destroy(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.destroy();
        }
    }
}
