//! Lambda handler and the detection pipeline it drives

pub mod detect;
pub mod event;
pub mod handler;
pub mod reply;

pub use detect::{Detector, SUCCESS};
pub use handler::{build_detector, handler};
