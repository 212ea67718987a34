pub mod loader;
pub mod table;

pub use loader::*;
pub use table::*;
