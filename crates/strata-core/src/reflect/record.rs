use super::{Model, RecordType, Type, Value};
use crate::schema::{parse_field_tag, FieldTag};
use crate::{Error, Result};

use std::any::{Any, TypeId};
use std::collections::HashSet;

/// A named-field structural record.
///
/// Implemented by `#[derive(Record)]` and `#[derive(Model)]`. Field access
/// is by declared name and sees through `#[embed]`ded records: the outer
/// record's own fields shadow embedded ones, and earlier embedded records
/// shadow later ones.
pub trait Record: Any + core::fmt::Debug + Send + Sync {
    /// The shape of the implementing type, built once.
    fn record_shape() -> &'static Shape
    where
        Self: Sized;

    fn shape(&self) -> &'static Shape;

    /// Reads a field by name. Returns `None` if the record has no such
    /// field.
    fn field(&self, name: &str) -> Option<Value>;

    /// Assigns a field by name, converting the value to the field's type.
    fn set_field(&mut self, name: &str, value: Value) -> Result<()>;

    fn clone_record(&self) -> Box<dyn Record>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// The record viewed as a model, when its type implements `Model`.
    fn as_model(&self) -> Option<&dyn Model>;

    fn as_model_mut(&mut self) -> Option<&mut dyn Model>;

    /// Converts the record into a boxed model, handing it back unchanged
    /// when its type does not implement `Model`.
    fn into_model(self: Box<Self>) -> core::result::Result<Box<dyn Model>, Box<dyn Record>>;
}

/// Static description of a record type.
#[derive(Debug)]
pub struct Shape {
    /// Type name
    pub name: &'static str,

    /// Collection name, set for models only
    pub collection: Option<&'static str>,

    /// Fields in declaration order, embedded records not flattened
    pub fields: Vec<FieldShape>,

    type_id: TypeId,
    this: fn() -> &'static Shape,
    new: fn() -> Box<dyn Record>,
}

/// One declared field of a record type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    pub name: &'static str,

    /// Raw `#[db("...")]` annotation
    pub tag: Option<&'static str>,

    pub ty: Type,

    /// Set for `#[embed]` fields, whose own fields are flattened into the
    /// parent
    pub embedded: bool,
}

impl Shape {
    pub fn new<T: Record + Default>(
        name: &'static str,
        collection: Option<&'static str>,
        fields: Vec<FieldShape>,
    ) -> Shape {
        Shape {
            name,
            collection,
            fields,
            type_id: TypeId::of::<T>(),
            this: T::record_shape,
            new: || Box::new(T::default()),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn record_type(&self) -> RecordType {
        RecordType::new(self.this)
    }

    /// A zero-valued instance of the type.
    pub fn new_record(&self) -> Box<dyn Record> {
        (self.new)()
    }

    pub fn is_model(&self) -> bool {
        self.collection.is_some()
    }

    /// Looks a field up by name, applying the embedded shadowing rules.
    pub fn find_field(&self, name: &str) -> Option<&FieldShape> {
        if let Some(field) = self.fields.iter().find(|field| field.name == name) {
            return Some(field);
        }

        self.fields
            .iter()
            .filter(|field| field.embedded)
            .filter_map(|field| field.ty.record_type())
            .find_map(|embedded| embedded.shape().find_field(name))
    }

    /// All visible fields with embedded records flattened depth-first, in
    /// declaration order. Shadowed fields are left out.
    pub fn flattened_fields(&self) -> Result<Vec<&FieldShape>> {
        let mut claimed = HashSet::new();
        let mut out = vec![];
        self.flatten_into(&mut claimed, &mut out)?;
        Ok(out)
    }

    fn flatten_into<'a>(
        &'a self,
        claimed: &mut HashSet<&'static str>,
        out: &mut Vec<&'a FieldShape>,
    ) -> Result<()> {
        // Fields declared at this level win over anything embedded below.
        let own: HashSet<&'static str> = self
            .fields
            .iter()
            .map(|field| field.name)
            .filter(|name| !claimed.contains(name))
            .collect();
        claimed.extend(own.iter().copied());

        for field in &self.fields {
            if field.embedded {
                let Some(embedded) = field.ty.record_type() else {
                    return Err(Error::struct_expected(&field.ty));
                };
                embedded.shape().flatten_into(claimed, out)?;
            } else if own.contains(field.name) {
                out.push(field);
            }
        }

        Ok(())
    }

    /// Name of the primary key field.
    ///
    /// The field tagged `primary-key` wins; without one, the one visible
    /// field named `id` (any case) that is not ignored. Fails with
    /// `primary_key_not_found` or `multiple_primary_keys`, and with the
    /// parse error of any malformed tag.
    pub fn primary_key(&self) -> Result<&'static str> {
        let mut tagged = vec![];
        let mut named_id = vec![];

        for field in self.flattened_fields()? {
            let tag = match field.tag {
                Some(raw) => parse_field_tag(raw)?,
                None => FieldTag::default(),
            };

            if tag.primary_key {
                tagged.push(field.name);
            } else if !tag.ignore && field.name.eq_ignore_ascii_case("id") {
                named_id.push(field.name);
            }
        }

        let candidates = if tagged.is_empty() { named_id } else { tagged };
        match candidates[..] {
            [pk] => Ok(pk),
            [] => Err(Error::primary_key_not_found(self.name)),
            _ => Err(Error::multiple_primary_keys(self.name, &candidates)),
        }
    }
}

impl PartialEq for dyn Record {
    fn eq(&self, other: &dyn Record) -> bool {
        let shape = self.shape();
        shape.type_id() == other.shape().type_id()
            && shape
                .fields
                .iter()
                .all(|field| self.field(field.name) == other.field(field.name))
    }
}

impl Clone for Box<dyn Record> {
    fn clone(&self) -> Self {
        self.clone_record()
    }
}

/// Recovers a concrete record from a value, looking through references.
///
/// Used by generated `Reflect::from_value` implementations.
pub fn record_from_value<T: Record>(value: Value) -> Result<T> {
    match value {
        Value::Record(record) => {
            let found = record.shape().name;
            record
                .into_any()
                .downcast::<T>()
                .map(|record| *record)
                .map_err(|_| Error::type_mismatch(T::record_shape().name, found))
        }
        Value::Ref(inner) => record_from_value(*inner),
        other => Err(Error::type_mismatch(T::record_shape().name, other.kind())),
    }
}
