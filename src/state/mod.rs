//! Form state module

mod draft;
mod session;

pub use draft::*;
pub use session::*;
