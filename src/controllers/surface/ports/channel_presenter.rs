use log::debug;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, PoisonError};

use crate::controllers::surface::events::render_event::RenderEvent;
use crate::controllers::surface::ports::presenter_port::SurfacePresenterPort;

/// Forwards completion events to whoever holds the receiving end.
#[derive(Debug)]
pub struct ChannelPresenter {
    sender: Mutex<Sender<RenderEvent>>,
}

impl ChannelPresenter {
    #[must_use]
    pub fn new() -> (Self, Receiver<RenderEvent>) {
        let (sender, receiver) = mpsc::channel();

        (
            Self {
                sender: Mutex::new(sender),
            },
            receiver,
        )
    }
}

impl SurfacePresenterPort for ChannelPresenter {
    fn present(&self, event: RenderEvent) {
        let generation = event.generation();
        let sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner);

        if sender.send(event).is_err() {
            debug!("render event {} discarded, receiver gone", generation);
        }
    }
}
