//! Ports (Interfaces)
//!
//! Abstract interfaces for the collaborators the engine does not own:
//! per-format decoding (OCR, PDF and Word text extraction) and persistence.
//!
//! Implementations of these traits live outside the engine.

mod decoder;
mod repository;

// Re-exports
pub use decoder::*;
pub use repository::*;
