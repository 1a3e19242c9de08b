//! Types shared by the seeker crates.
//!
//! - [`Point`] and [`Range`]: integer grid geometry used as the value type of
//!   grid searches and to bound them.
//! - [`Context`]: a cooperative cancellation token handed to long-running
//!   searches.

pub mod context;
pub mod geom;

pub use context::Context;
pub use geom::{Point, Range};
