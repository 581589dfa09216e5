pub mod game;
pub mod runtime;
