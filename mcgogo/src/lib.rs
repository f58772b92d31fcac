pub mod engine;
pub mod expander;
pub mod hints;
pub mod options;
pub mod rules;
pub mod scenario;
pub mod session;

pub use crate::engine::*;
pub use expander::*;
pub use hints::*;
pub use options::*;
pub use rules::*;
pub use scenario::*;
pub use session::*;
