//! IRC protocol layer: connection management, wire-format command building,
//! inbound tokenizing, and the outbound line queue.

pub mod commands;
pub mod connection;
pub mod parser;
pub mod queue;
