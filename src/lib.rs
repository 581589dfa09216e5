pub mod args;
pub mod controller;
pub mod error;
pub mod model;
pub mod mvu;
pub mod view;

pub const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";

pub use controller::leaderboard::{Leaderboard, build_leaderboard};
pub use controller::navigator::{HoleNavigator, Navigation};
pub use controller::session::{HolePublisher, SessionClient, SyncAdapter, SyncOutcome};
pub use controller::store::ScoringStore;
pub use error::AppError;
