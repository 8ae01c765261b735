use super::{convert_string_to_type, Record, Type, Value};
use crate::{Error, Result};

/// A record stored in a named collection.
///
/// `#[derive(Model)]` implements this. The identity accessors default to
/// the primary key field as resolved by `Shape::primary_key`, the same
/// rule the model builder applies.
pub trait Model: Record {
    /// The logical collection (table) name.
    fn collection(&self) -> &'static str;

    /// The primary key value, or `Null` when the model has no primary key.
    fn id(&self) -> Value {
        self.shape()
            .primary_key()
            .ok()
            .and_then(|pk| self.field(pk))
            .unwrap_or_default()
    }

    fn set_id(&mut self, id: Value) -> Result<()> {
        let pk = self.shape().primary_key()?;
        self.set_field(pk, id)
    }

    /// The primary key rendered as a string. Zero and null keys render as
    /// the empty string.
    fn str_id(&self) -> String {
        match self.id() {
            Value::String(id) => id,
            id if id.is_zero() => String::new(),
            id => match id.to_i128() {
                Some(id) => id.to_string(),
                None => String::new(),
            },
        }
    }

    /// Parses `raw` into the primary key's type and assigns it.
    fn set_str_id(&mut self, raw: &str) -> Result<()> {
        let shape = self.shape();
        let Some(pk) = shape.find_field(shape.primary_key()?) else {
            return Err(Error::primary_key_not_found(shape.name));
        };

        let kind = match &pk.ty {
            Type::Ref(inner) => inner.kind(),
            ty => ty.kind(),
        };
        let id = convert_string_to_type(raw, kind)?;
        self.set_field(pk.name, id)
    }
}
