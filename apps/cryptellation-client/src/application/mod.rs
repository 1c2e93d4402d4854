//! Application Layer
//!
//! Orchestration that is independent of how the engine is reached:
//!
//! - **Ports**: Interfaces for interacting with the workflow engine
//! - **Services**: Info fan-out and price subscription routing

pub mod ports;
pub mod services;

pub use ports::*;
