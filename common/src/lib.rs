//! Tax-code rule documents: the jurisdiction catalog, the form-to-rule builder,
//! document assembly and the preview/CSV views shared by the backend.

pub mod assembler;
pub mod builder;
pub mod catalog;
pub mod error;
pub mod inputs;
pub mod model;
pub mod projector;
pub mod requests;

pub use assembler::{build_document, create_export, Export, TopLevelInputs};
pub use error::ExportError;
pub use inputs::{FormInputs, RuleField, RuleInputs};
pub use projector::{project, Projection, ViewMode};
