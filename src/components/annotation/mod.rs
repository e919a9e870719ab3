mod component;
mod state;
mod types;

pub use component::AnnotationCanvas;
pub use state::AnnotationState;
pub use types::{AnnotationConfig, Entity, EntityKind, Relationship};
