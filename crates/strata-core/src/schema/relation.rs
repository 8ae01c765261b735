/// Classification of a relation between two models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// The owning model holds a key pointing at the related model.
    HasOne,

    /// The related model holds a key pointing back at the owning model.
    BelongsTo,

    /// Linked through an association layer; no key on either side.
    ManyToMany,
}

/// A resolved relation, stored on the field that declares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub kind: RelationKind,

    /// Collection of the related model
    pub target: String,

    /// Set when the field holds a sequence of related records
    pub is_many: bool,

    /// Key field on the owning model. `None` for many-to-many.
    pub local_key: Option<String>,

    /// Key field on the related model. `None` for many-to-many.
    pub foreign_key: Option<String>,

    /// Keys were given by the tag rather than inferred
    pub explicit: bool,
}

impl RelationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::HasOne => "has-one",
            RelationKind::BelongsTo => "belongs-to",
            RelationKind::ManyToMany => "m2m",
        }
    }
}

impl core::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
