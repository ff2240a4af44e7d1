use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Idle,
    Rendering,
}

impl RenderState {
    const fn as_u8(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Rendering => 1,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Idle,
            _ => Self::Rendering,
        }
    }
}

/// Idle/Rendering flag with an atomic Idle -> Rendering transition, so two
/// callers can never both start a render on the same surface.
#[derive(Debug)]
pub struct AtomicRenderState(AtomicU8);

impl Default for AtomicRenderState {
    fn default() -> Self {
        Self(AtomicU8::new(RenderState::Idle.as_u8()))
    }
}

impl AtomicRenderState {
    #[must_use]
    pub fn current(&self) -> RenderState {
        RenderState::from_u8(self.0.load(Ordering::Acquire))
    }

    /// Returns `true` if this call moved the state from Idle to Rendering.
    pub fn try_begin(&self) -> bool {
        self.0
            .compare_exchange(
                RenderState::Idle.as_u8(),
                RenderState::Rendering.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    pub fn finish(&self) {
        self.0.store(RenderState::Idle.as_u8(), Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::thread;

    #[test]
    fn starts_idle() {
        assert_eq!(AtomicRenderState::default().current(), RenderState::Idle);
    }

    #[test]
    fn second_begin_is_refused_until_finish() {
        let state = AtomicRenderState::default();

        assert!(state.try_begin());
        assert_eq!(state.current(), RenderState::Rendering);
        assert!(!state.try_begin());

        state.finish();
        assert_eq!(state.current(), RenderState::Idle);
        assert!(state.try_begin());
    }

    #[test]
    fn only_one_concurrent_begin_wins() {
        let state = Arc::new(AtomicRenderState::default());
        let winners = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let state = Arc::clone(&state);
                let winners = Arc::clone(&winners);
                thread::spawn(move || {
                    if state.try_begin() {
                        winners.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(winners.load(Ordering::SeqCst), 1);
    }
}
