//! Application Layer (Use Cases)
//!
//! Coordinates the decoding port, the engine and the persistence port.

mod refine_service;

pub use refine_service::RefineService;
