use crate::controllers::surface::data::frame_data::FrameData;
use crate::controllers::surface::errors::render_error::RenderError;

#[derive(Debug, Clone)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderError),
}

impl RenderEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Frame(frame) => frame.generation,
            Self::Error(err) => err.generation,
        }
    }
}
