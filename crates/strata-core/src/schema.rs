//! Model metadata: tag parsing, per-type descriptors and relation linking.

mod builder;
pub use builder::Builder;

mod field;
pub use field::Field;

mod install;
pub use install::{descriptor_for, install, installed};

mod link;
use link::{link, LinkOptions};

mod model;
pub use model::ModelInfo;

mod name;
pub use name::camel_case_to_underscore;
use name::key_field_candidates;

mod relation;
pub use relation::{Relation, RelationKind};

mod tag;
pub use tag::{parse_field_tag, FieldTag, KeyPair, RelationHint};

mod verify;

use crate::reflect::Record;

use indexmap::IndexMap;

/// A linked, immutable set of model descriptors keyed by collection name.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    models: IndexMap<String, ModelInfo>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// The descriptor registered under `collection`.
    pub fn model(&self, collection: &str) -> Option<&ModelInfo> {
        self.models.get(collection)
    }

    /// The descriptor for record type `T`.
    pub fn model_of<T: Record>(&self) -> Option<&ModelInfo> {
        let type_id = T::record_shape().type_id();
        self.models()
            .find(|model| model.record_type().type_id() == type_id)
    }

    /// Descriptors in registration order.
    pub fn models(&self) -> impl Iterator<Item = &ModelInfo> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
