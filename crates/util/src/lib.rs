//! Color naming and terminal display helpers shared by the Huebox surfaces.

pub mod display;
pub mod naming;

pub use display::{color_block, entry_line, info_lines};
pub use naming::color_name;
