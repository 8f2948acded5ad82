mod core;
mod ui;

pub use core::*;
pub use ui::*;
