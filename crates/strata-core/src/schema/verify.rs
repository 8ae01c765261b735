use super::{ModelInfo, RelationKind, Schema};
use crate::{Error, Result};

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        for model in self.schema.models() {
            self.verify_relation_keys_are_persisted(model)?;
        }

        Ok(())
    }

    /// Relation keys must be plain columns: not ignored, and not relations
    /// themselves.
    fn verify_relation_keys_are_persisted(&self, model: &ModelInfo) -> Result<()> {
        for (field, relation) in model.relations() {
            let Some(target) = self.schema.model(&relation.target) else {
                return Err(Error::unknown_collection(
                    model.name,
                    &field.name,
                    &relation.target,
                ));
            };

            let keys = [
                (model, relation.local_key.as_deref()),
                (target, relation.foreign_key.as_deref()),
            ];

            for (owner, key) in keys {
                let Some(key) = key else { continue };

                if owner.field(key).is_some_and(|key| key.is_persisted()) {
                    continue;
                }

                let message = format!(
                    "`{}::{}` uses `{}::{key}` as a key, but it is not a persisted field",
                    model.name, field.name, owner.name
                );
                return Err(match relation.kind {
                    RelationKind::BelongsTo => Error::invalid_belongs_to(message),
                    _ => Error::invalid_has_one(message),
                });
            }
        }

        Ok(())
    }
}
