//! Command implementations for the `adjg` binary.

pub mod commands;
