pub mod constants;
pub mod curves;
pub mod driver;
pub mod motion;
pub mod pacing;
pub mod params;
pub mod state;
pub mod trace;
pub static TRACE_WGSL: &str = include_str!("../shaders/trace.wgsl");

pub use constants::*;
pub use curves::*;
pub use driver::*;
pub use motion::*;
pub use pacing::*;
pub use params::*;
pub use state::*;
pub use trace::*;
