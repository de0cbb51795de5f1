//! 界面层：文本渲染 + 终端事件循环

pub mod render;
pub mod terminal;

pub use render::render_page;
pub use terminal::run_session;
