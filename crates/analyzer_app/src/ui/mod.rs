mod render;
mod terminal;

pub use render::render;
pub use terminal::Terminal;
