pub mod client;
pub mod sync;

pub use client::*;
pub use sync::*;
