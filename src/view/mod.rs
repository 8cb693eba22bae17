/// 名片视图模块
pub mod theme;
pub mod tree;

pub use theme::{Rgb, Theme, COLOR_ACCENT, COLOR_PRIMARY, COLOR_SURFACE};
pub use tree::{build_profile_view, log_lines, HAlign, ViewNode};
