//! # toy-robot
//!
//! A toy robot simulator. A robot is placed on a bounded table and driven by
//! textual commands (`PLACE X,Y,F`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`).
//!
//! [`RobotInterpreter`] owns the robot state and executes one command line at a
//! time. [`Session`] feeds it lines from an interactive reader or a command file
//! and writes the resulting reports and diagnostics.

pub mod error;
pub mod interpreter;
pub mod robot;
pub mod session;
pub mod table;

pub use error::*;
pub use interpreter::*;
pub use robot::*;
pub use session::*;
pub use table::*;
