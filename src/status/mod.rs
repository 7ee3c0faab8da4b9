pub mod board;
pub mod renderer;
