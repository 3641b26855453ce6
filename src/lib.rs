//! # openmeta-projection: Typed Metadata to Property Maps
//!
//! Turns strongly typed open metadata beans (classifications, elements and
//! relationships) into the flat, typed property maps a metadata store
//! persists.
//!
//! ## Design Principles
//!
//! 1. **Beans are data**: `ClassificationProperties`, `ElementProperties` and
//!    `RelationshipProperties` are closed enums matched exhaustively
//! 2. **Cumulative descent**: an element's map holds the fields of every
//!    type in its lineage, from Referenceable down to its concrete type
//! 3. **Threaded maps**: encoders take an optional map and return one, so a
//!    bean with no fields set never allocates
//! 4. **Extended properties last**: free-form fields merge on top of typed ones
//!
//! ## Quick Start
//!
//! ```rust
//! use openmeta_projection::{
//!     ElementBean, ReferenceableProperties, ReferenceableKind,
//!     ActorProfileProperties, ActorProfileKind, PersonProperties,
//!     TypedValue, project_element,
//! };
//!
//! let person = ReferenceableProperties::new("emp:42")
//!     .with_display_name("Ada")
//!     .with_kind(ReferenceableKind::ActorProfile(ActorProfileProperties {
//!         kind: ActorProfileKind::Person(PersonProperties {
//!             courtesy_title: Some("Dr".into()),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     }));
//!
//! let result = project_element(Some(&ElementBean::new(person.into()))).unwrap();
//! assert_eq!(result.get("courtesyTitle"), Some(&TypedValue::from("Dr")));
//! assert_eq!(result.properties.len(), 3);
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod beans;
pub mod projection;
pub mod request;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    TypedValue, PropertyMap, FromTypedValue, OpenMetadataEnum, ElementStatus,
};

// ============================================================================
// Re-exports: Beans
// ============================================================================

pub use beans::*;

// ============================================================================
// Re-exports: Projection
// ============================================================================

pub use projection::{
    Projector, ProjectionConfig, ExtendedPropertyPolicy, ProjectionResult,
    with_effectivity,
    classification_properties, project_classification, project_classifications,
    element_properties, project_element,
    relationship_properties, project_relationship,
};

// ============================================================================
// Re-exports: Requests
// ============================================================================

pub use request::{NewElementRequest, NewRelationshipRequest, NewClassificationRequest};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Type error: expected {expected}, got {got}")]
    TypeError { expected: String, got: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
