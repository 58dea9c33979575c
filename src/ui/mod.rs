//! Front ends: a line-based console driver with plain-text rendering, and a
//! ratatui terminal UI.

mod app;
pub mod console;
mod game_view;
pub mod render;

pub use app::App;
pub use console::Console;
pub use render::{render_board, RenderStyle};
