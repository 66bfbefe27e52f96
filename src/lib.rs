pub mod dataset;
pub mod error;
pub mod eval;

pub use error::{CifarError, Result};
