//! Drivers
//!
//! Everything outside the pure core: the owning [`program::Program`] that
//! holds the current state, a line-oriented [`console::Console`] on top, and
//! [`launch::launch`] which picks a demo and runs it on a console.

pub mod console;
pub mod launch;
pub mod program;

pub use console::Console;
pub use launch::{launch, Session};
pub use program::{Program, ProgramStats};
