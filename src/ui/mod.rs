pub mod renderer;
pub mod tui;
