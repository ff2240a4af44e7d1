use crate::controllers::surface::events::render_event::RenderEvent;

pub trait SurfacePresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
