mod base;
mod error;
mod dense;

pub use base::*;
pub use error::*;
pub use dense::*;
