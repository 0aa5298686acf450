//! Value Objects
//!
//! Closed vocabularies used by the refined document.

mod design;
mod output_type;
mod platform;
mod priority;
mod source_type;

pub use design::*;
pub use output_type::*;
pub use platform::*;
pub use priority::*;
pub use source_type::*;
