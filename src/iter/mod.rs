mod mut_iter;
mod owned_iter;
mod ref_iter;

pub use mut_iter::*;
pub use owned_iter::*;
pub use ref_iter::*;
