pub mod display;
pub mod snapshot;

pub use display::{format_display, render_screen};
pub use snapshot::DisplaySnapshot;
