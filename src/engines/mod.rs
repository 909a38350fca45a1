//! Search engine module
//!
//! Defines the Engine trait and the search backends implementing it.

mod traits;

pub mod bing;

pub use bing::Bing;
pub use traits::*;
