//! Command implementations behind the `grasple` binary.

pub mod commands;
