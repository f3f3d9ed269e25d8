//! Fetch pipeline: decoding, state, and the cycle controller

mod controller;
mod decode;
mod state;

pub use controller::*;
pub use decode::*;
pub use state::*;
