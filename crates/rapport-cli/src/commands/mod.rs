//! Command implementations.

mod demo;
mod score;
mod screen;

pub use demo::execute_demo;
pub use score::execute_score;
pub use screen::execute_screen;
