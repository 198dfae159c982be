//! # toy-robot
//!
//! A command-driven simulator of a single robot on a bounded grid table.
//!
//! [`Table`] interprets text commands (`PLACE X,Y,F`, `MOVE`, `LEFT`, `RIGHT`,
//! `REPORT`) and owns at most one [`Robot`], which moves on integer `glam`
//! coordinates and never leaves the table. I/O is left to the caller: feed lines
//! to [`Table::process_command`] directly, or use [`console::run`] to drive a
//! table from any reader and writer.

pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod robot;
pub mod table;

pub use command::*;
pub use config::*;
pub use error::*;
pub use robot::*;
pub use table::*;
