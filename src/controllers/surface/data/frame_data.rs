use std::sync::Arc;
use std::time::Duration;
use crate::core::data::raster::Raster;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone)]
pub struct FrameData {
    pub generation: u64,
    pub raster: Arc<Raster>,
    pub viewport: Viewport,
    pub render_duration: Duration,
}
