pub mod course;
pub mod hole;
pub mod round;
pub mod score;
pub mod session;
pub mod shot;
pub mod stroke;
pub mod utils;

pub use course::*;
pub use hole::*;
pub use round::*;
pub use score::*;
pub use session::*;
pub use shot::*;
pub use stroke::*;
pub use utils::*;
