use super::{link, model::sample_record_type, LinkOptions, ModelInfo, Schema};
use crate::reflect::{Model, Value};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Collects model metadata and links it into a [`Schema`].
///
/// Models are built as they are registered; relations are resolved once,
/// over the complete set, by [`Builder::build`].
#[derive(Debug)]
pub struct Builder {
    models: IndexMap<String, ModelInfo>,

    /// Reject ambiguous inferred belongs-to relations
    strict_relations: bool,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            models: IndexMap::new(),
            strict_relations: true,
        }
    }

    /// When set (the default), a model with two or more un-tagged
    /// sequence fields of the same related model fails to build instead of
    /// inferring the same foreign key for both.
    pub fn strict_relations(&mut self, strict: bool) -> &mut Self {
        self.strict_relations = strict;
        self
    }

    /// Registers `T` under its declared collection name.
    pub fn register<T: Model>(&mut self) -> Result<&mut Self> {
        self.insert(ModelInfo::of::<T>()?)?;
        Ok(self)
    }

    /// Registers the record type of `sample` under `collection`.
    ///
    /// The type must be a model; samples of a plain `#[derive(Record)]`
    /// type fail with `elements_not_model`.
    pub fn register_model(&mut self, collection: &str, sample: &Value) -> Result<&ModelInfo> {
        let record = sample_record_type(sample)?;
        if !record.shape().is_model() {
            return Err(Error::elements_not_model(record.name()));
        }

        let info = ModelInfo::from_shape(record.shape())?.with_collection(collection);
        self.insert(info)
    }

    /// Links every registered model and returns the finished schema.
    ///
    /// Nothing is published on failure; the builder keeps its models and
    /// may be corrected and built again.
    pub fn build(&self) -> Result<Schema> {
        let models = link(
            self.models.clone(),
            LinkOptions {
                strict: self.strict_relations,
            },
        )?;

        let schema = Schema { models };
        schema.verify()?;

        log::debug!(
            "schema finalized; models={:?}",
            schema.models.keys().collect::<Vec<_>>()
        );

        Ok(schema)
    }

    fn insert(&mut self, info: ModelInfo) -> Result<&ModelInfo> {
        let type_id = info.record_type().type_id();
        if let Some(existing) = self
            .models
            .values()
            .find(|model| model.collection == info.collection || model.record_type().type_id() == type_id)
        {
            return Err(Error::duplicate_collection(&existing.collection));
        }

        let collection = info.collection.clone();
        Ok(self.models.entry(collection).or_insert(info))
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
