//! Adapter implementations of the registration ports.

pub mod memory;
