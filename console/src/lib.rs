mod access;
mod input_parser;
mod options;
mod output;
mod render;
mod run_console;
mod session_manager;

pub use access::*;
pub use input_parser::*;
pub use options::*;
pub use output::*;
pub use render::*;
pub use run_console::*;
pub use session_manager::*;
