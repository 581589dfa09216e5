pub mod hole;
pub mod index;
pub mod leaderboard;
