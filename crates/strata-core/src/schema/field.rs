use super::{FieldTag, Relation, RelationHint, RelationKind};
use crate::reflect::{Type, Value};

/// Metadata for one (flattened) field of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Declared field name
    pub name: String,

    /// Storage-facing name
    pub backend_name: String,

    pub ty: Type,

    pub primary_key: bool,
    pub ignore: bool,
    pub ignore_if_zero: bool,
    pub not_null: bool,
    pub unique: bool,
    pub index: bool,

    /// Relation as declared by the tag, before resolution
    pub declared_relation: Option<RelationHint>,

    /// Relation as resolved against the schema
    pub relation: Option<Relation>,
}

impl Field {
    pub(crate) fn new(name: &str, ty: Type, tag: FieldTag) -> Field {
        let backend_name = tag
            .backend_name
            .unwrap_or_else(|| super::camel_case_to_underscore(name));

        Field {
            name: name.to_string(),
            backend_name,
            ty,
            primary_key: tag.primary_key,
            ignore: tag.ignore,
            ignore_if_zero: tag.ignore_if_zero,
            not_null: tag.not_null,
            unique: tag.unique,
            index: tag.index,
            declared_relation: tag.relation,
            relation: None,
        }
    }

    pub fn relation_kind(&self) -> Option<RelationKind> {
        self.relation.as_ref().map(|relation| relation.kind)
    }

    pub fn relation_is_many(&self) -> bool {
        self.relation.as_ref().is_some_and(|relation| relation.is_many)
    }

    pub fn local_key_field(&self) -> Option<&str> {
        self.relation.as_ref()?.local_key.as_deref()
    }

    pub fn foreign_key_field(&self) -> Option<&str> {
        self.relation.as_ref()?.foreign_key.as_deref()
    }

    /// True when the field's type is a model, a reference to one, or a
    /// sequence of either. Such fields carry relations, not columns.
    pub fn targets_model(&self) -> bool {
        let elem = self.ty.elem().unwrap_or(&self.ty);
        elem.record_type()
            .is_some_and(|record| record.shape().is_model())
    }

    /// True when the field maps to a backend column.
    pub fn is_persisted(&self) -> bool {
        !self.ignore && !self.targets_model()
    }

    /// True when `value` must be left out of a write.
    pub fn skip_on_write(&self, value: &Value) -> bool {
        !self.is_persisted() || (self.ignore_if_zero && value.is_zero())
    }
}
