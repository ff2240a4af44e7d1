//! Ports through which a surface hands completed renders back to its
//! collaborator.

pub mod channel_presenter;
pub mod presenter_port;
