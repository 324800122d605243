//! Cell-level rendering: the framebuffer and the border painter.
//!
//! Nothing here knows about terminals. The framebuffer records which cells
//! changed; turning those into escape sequences is the terminal writer's job.

mod border;
mod buffer;

pub use border::{border_inset, draw_border};
pub use buffer::{CellUpdate, FrameBuffer};
