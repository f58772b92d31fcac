pub mod engine;
pub mod field;
pub mod pattern;
pub mod round;
pub mod table;

pub use crate::engine::*;
pub use crate::field::*;
pub use crate::pattern::*;
pub use crate::round::*;
pub use crate::table::*;
