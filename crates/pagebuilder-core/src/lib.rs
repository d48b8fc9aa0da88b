pub mod block_id;
pub mod document;
pub mod mutate;
pub mod observability;
pub mod schema;
pub mod validate;

// Minimal user-facing API: registry, serializer, document capability, validator, mutator.
pub use document::{
    BlockInstance, ContentChangeDetector, DocumentError, DocumentHandle, InMemoryDocument,
    PageDocument, RootData,
};
pub use mutate::{PopulateReport, Reservation, apply_generated, reserve};
pub use schema::{
    BlockTypeDefinition, ChoiceKind, Field, FieldOption, FieldSpec, Fields, PrimitiveKind,
    SchemaError, SchemaRegistry, describe,
};
pub use validate::{BlockValidator, FilterOutcome, ValidationMode};
