//! Prompt Refinement Engine
//!
//! Deterministic, pattern- and dictionary-driven extraction. Data flows one
//! way: decoded fragments -> combined text -> relevance gate -> extractors
//! (independent) -> scoring -> RefinedPrompt.
//!
//! - `combiner`: merges decoded inputs into one text blob
//! - `gate`: rejects too-short or placeholder input
//! - `intent`, `functional`, `technical`, `deliverables`, `visual`: extractors
//! - `scoring`: confidence/completeness scores and missing information
//! - `refiner`: the orchestrator tying it together

pub mod combiner;
pub mod config;
pub mod deliverables;
pub mod functional;
pub mod gate;
pub mod intent;
pub mod patterns;
pub mod refiner;
pub mod scoring;
pub mod technical;
pub mod text;
pub mod visual;

pub use config::RefinerConfig;
pub use refiner::Refiner;
pub use scoring::Scores;
