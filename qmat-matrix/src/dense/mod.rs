mod mat;
mod det;
mod solve;

pub use mat::*;
