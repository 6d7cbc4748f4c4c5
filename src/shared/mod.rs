pub mod error;
pub mod markup;
mod result;

pub use result::Result;
