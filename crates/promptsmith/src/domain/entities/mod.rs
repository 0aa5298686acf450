//! Domain Entities
//!
//! - Input: decoded fragments handed to the engine (text, image OCR, documents)
//! - RefinedPrompt: the structured requirements document the engine produces
//! - StoredPrompt: a RefinedPrompt after the persistence collaborator accepted it

mod input;
mod refined_prompt;
mod stored;

pub use input::*;
pub use refined_prompt::*;
pub use stored::*;
