use std::num::NonZeroU32;

/// Number of hardware threads available to the render pool.
#[must_use]
pub fn calculate_render_workers() -> NonZeroU32 {
    std::thread::available_parallelism()
        .ok()
        .and_then(|n| u32::try_from(n.get()).ok())
        .and_then(NonZeroU32::new)
        .unwrap_or(NonZeroU32::MIN)
}
