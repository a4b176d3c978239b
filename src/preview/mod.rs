//! Preview controller and display contract
//!
//! The boundary to the host editor: events come in through the controller,
//! frames and status text go out through the display surface.

pub mod controller;
pub mod display;

pub use controller::{HostEvent, PreviewController, StatusReport};
pub use display::{preview_transform, DisplaySurface, PreviewFrame};
