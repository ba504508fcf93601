pub mod animation_frame;
pub mod use_scroll_progress;
pub mod use_in_view;

pub use animation_frame::FrameLoop;
pub use use_scroll_progress::*;
pub use use_in_view::*;
