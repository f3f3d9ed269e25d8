//! Table derivation and display-state rendering

mod table;
mod view;

pub use table::*;
pub use view::*;
