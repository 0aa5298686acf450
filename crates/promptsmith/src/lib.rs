//! promptsmith
//!
//! Turns free-form, multi-source requirement text (typed text, image OCR,
//! PDF or Word text) into one structured requirements document with
//! confidence and completeness scores.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): pure types
//!   - `entities/`: RefinedPrompt and its parts, decoded inputs
//!   - `value_objects/`: closed vocabularies (Platform, OutputType, ...)
//!   - `errors/`: RefineError
//!
//! - **Engine** (`engine/`): the deterministic refinement pipeline,
//!   configured by `RefinerConfig`
//!
//! - **Ports** (`ports/`): interfaces to decoding and persistence
//!
//! - **Application** (`application/`): the refine use case over the ports
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptsmith::{Refiner, RefinerConfig};
//!
//! let refiner = Refiner::new(RefinerConfig::default())?;
//! let prompt = refiner.refine_text("I want to build a recipe sharing site.")?;
//! println!("{}", prompt.core_intent.purpose);
//! ```

pub mod application;
pub mod domain;
pub mod engine;
pub mod ports;

// Re-export commonly used types
pub use application::RefineService;
pub use domain::{
    ChannelMean, CombinedInput, Complexity, CoreIntent, DecodedInput, Deliverables, DesignStyle,
    DocumentData, Feature, FunctionalRequirements, ImageData, Layout, Metadata, Milestone, Output,
    OutputType, Platform, Priority, RawInput, RefineError, RefinedPrompt, SourceInputs,
    SourceType, StoredPrompt, TechnicalConstraints, VisualElements,
};
pub use engine::{Refiner, RefinerConfig, Scores};
pub use ports::{InputDecoder, RefinedPromptRepository};
