//! Domain models with validation at construction
//!
//! Request payloads deserialize into permissive `Option` fields and are
//! validated into typed values before any storage call.

pub mod name;
pub mod palette;
pub mod project;
pub mod validation;

pub use name::{Name, RenameRequest};
pub use palette::{CreatePaletteRequest, NewPalette, Palette, PALETTE_FIELDS};
pub use project::{CreateProjectRequest, Project, ProjectFilter, PROJECT_QUERY_PARAMS};
pub use validation::ValidationError;
