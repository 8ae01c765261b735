use super::{camel_case_to_underscore, parse_field_tag, Field, FieldTag, Relation};
use crate::reflect::{Record, RecordType, Shape, Type, Value};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Metadata describing how a record type maps to a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    /// Type name
    pub name: &'static str,

    /// Logical collection (table) name
    pub collection: String,

    /// Name of the primary key field
    pub pk_field: String,

    /// Fields by name, in declaration order with embedded records flattened
    pub fields: IndexMap<String, Field>,

    record_type: RecordType,

    /// backend name -> field name
    backend_names: IndexMap<String, String>,
}

impl ModelInfo {
    /// Builds the metadata for the record type of `sample`.
    ///
    /// `sample` must be a record or a reference to one; anything else fails
    /// with `struct_expected`. Only the type of `sample` is used, never its
    /// field values.
    pub fn build(sample: &Value) -> Result<ModelInfo> {
        ModelInfo::from_shape(sample_record_type(sample)?.shape())
    }

    /// Builds the metadata for `T`.
    pub fn of<T: Record>() -> Result<ModelInfo> {
        ModelInfo::from_shape(T::record_shape())
    }

    /// Builds the metadata for a shape. The collection defaults to the one
    /// declared on the type, or the snake_case type name.
    pub fn from_shape(shape: &'static Shape) -> Result<ModelInfo> {
        let mut fields = IndexMap::new();

        for field in shape.flattened_fields()? {
            let tag = match field.tag {
                Some(raw) => parse_field_tag(raw)
                    .map_err(|err| err.context(Error::build_field_info(shape.name, field.name)))?,
                None => FieldTag::default(),
            };
            fields.insert(
                field.name.to_string(),
                Field::new(field.name, field.ty.clone(), tag),
            );
        }

        let pk_field = shape.primary_key()?.to_string();
        if let Some(pk) = fields.get_mut(&pk_field) {
            pk.primary_key = true;
        }

        let backend_names = index_backend_names(shape.name, &fields)?;

        let collection = shape
            .collection
            .map(str::to_string)
            .unwrap_or_else(|| camel_case_to_underscore(shape.name));

        log::debug!(
            "built model info; model={} collection={} pk={} fields={}",
            shape.name,
            collection,
            pk_field,
            fields.len()
        );

        Ok(ModelInfo {
            name: shape.name,
            collection,
            pk_field,
            fields,
            record_type: shape.record_type(),
            backend_names,
        })
    }

    /// Registers the model under a different collection name.
    pub fn with_collection(mut self, collection: impl Into<String>) -> ModelInfo {
        self.collection = collection.into();
        self
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Maps a backend name back to the field it belongs to.
    pub fn map_backend_name(&self, backend_name: &str) -> Option<&str> {
        self.backend_names.get(backend_name).map(String::as_str)
    }

    /// Fields carrying a resolved relation.
    pub fn relations(&self) -> impl Iterator<Item = (&Field, &Relation)> {
        self.fields
            .values()
            .filter_map(|field| Some((field, field.relation.as_ref()?)))
    }

    /// Reads the persisted fields of `record` as `(backend_name, value)`
    /// pairs in field order.
    ///
    /// Ignored fields, relation fields, and `ignore-zero` fields holding
    /// their zero value are left out.
    pub fn write_values(&self, record: &dyn Record) -> Result<Vec<(String, Value)>> {
        self.check_type(record)?;

        let mut values = vec![];
        for field in self.fields.values() {
            let value = record
                .field(&field.name)
                .ok_or_else(|| Error::field_not_found(&field.name))?;
            if !field.skip_on_write(&value) {
                values.push((field.backend_name.clone(), value));
            }
        }

        Ok(values)
    }

    /// Assigns backend-named values into `record`.
    ///
    /// Names that do not map to a persisted field fail with
    /// `unknown_field`.
    pub fn hydrate<I, S>(&self, record: &mut dyn Record, row: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, Value)>,
        S: AsRef<str>,
    {
        self.check_type(record)?;

        for (backend_name, value) in row {
            let backend_name = backend_name.as_ref();
            let Some(field) = self.map_backend_name(backend_name) else {
                return Err(Error::unknown_field(backend_name));
            };
            record.set_field(field, value)?;
        }

        Ok(())
    }

    fn check_type(&self, record: &dyn Record) -> Result<()> {
        if record.shape().type_id() == self.record_type.type_id() {
            Ok(())
        } else {
            Err(Error::type_mismatch(self.name, record.shape().name))
        }
    }
}

/// The record type of a record sample or a reference to one.
pub(crate) fn sample_record_type(sample: &Value) -> Result<RecordType> {
    match sample.ty() {
        Some(Type::Record(record)) => Ok(record),
        Some(Type::Ref(inner)) => match *inner {
            Type::Record(record) => Ok(record),
            _ => Err(Error::struct_expected(sample.kind())),
        },
        _ => Err(Error::struct_expected(sample.kind())),
    }
}

fn index_backend_names(
    model: &str,
    fields: &IndexMap<String, Field>,
) -> Result<IndexMap<String, String>> {
    let mut index = IndexMap::new();

    for field in fields.values().filter(|field| field.is_persisted()) {
        if let Some(existing) = index.insert(field.backend_name.clone(), field.name.clone()) {
            return Err(Error::duplicate_backend_name(
                model,
                &field.backend_name,
                [&existing, &field.name],
            ));
        }
    }

    Ok(index)
}
