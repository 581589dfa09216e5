pub mod game;
pub mod leaderboard;
pub mod navigator;
pub mod session;
pub mod store;
