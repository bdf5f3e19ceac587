//! External process execution
//!
//! Setup steps never spawn processes directly. They go through
//! [`CommandRunner`] so tests can substitute a recording fake.

pub mod process;

pub use process::{CommandRunner, SystemRunner};
