mod abst;
mod error;
mod misc;
mod types;

pub use abst::*;
pub use error::*;
pub use misc::*;
pub use types::*;

pub mod util;
