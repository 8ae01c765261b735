use super::{key_field_candidates, Field, KeyPair, ModelInfo, Relation, RelationKind};
use crate::reflect::Type;
use crate::{Error, Result};

use indexmap::IndexMap;

/// Options controlling relation resolution.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LinkOptions {
    /// Reject models with more than one inferred belongs-to relation to the
    /// same target.
    pub(crate) strict: bool,
}

struct Linker<'a> {
    models: &'a IndexMap<String, ModelInfo>,
    options: LinkOptions,
}

/// Resolves every relation-bearing field of `models` and returns the
/// linked set.
///
/// All relations are resolved against the unlinked input before any of
/// them is applied, so a failure leaves nothing half-linked.
pub(crate) fn link(
    models: IndexMap<String, ModelInfo>,
    options: LinkOptions,
) -> Result<IndexMap<String, ModelInfo>> {
    let linker = Linker {
        models: &models,
        options,
    };

    let resolved = models
        .values()
        .map(|model| linker.resolve_model(model))
        .collect::<Result<Vec<_>>>()?;

    Ok(models
        .into_iter()
        .zip(resolved)
        .map(|((collection, mut model), relations)| {
            for (name, relation) in relations {
                if let Some(field) = model.fields.get_mut(&name) {
                    field.relation = Some(relation);
                }
            }
            (collection, model)
        })
        .collect())
}

impl Linker<'_> {
    fn resolve_model(&self, model: &ModelInfo) -> Result<Vec<(String, Relation)>> {
        let mut relations = vec![];

        for field in model.fields.values() {
            if let Some(relation) = self.resolve_field(model, field)? {
                log::trace!(
                    "resolved relation; field={}::{} kind={} target={} local={:?} foreign={:?}",
                    model.name,
                    field.name,
                    relation.kind,
                    relation.target,
                    relation.local_key,
                    relation.foreign_key
                );
                relations.push((field.name.clone(), relation));
            }
        }

        if self.options.strict {
            check_ambiguous(model, &relations)?;
        }

        Ok(relations)
    }

    fn resolve_field(&self, model: &ModelInfo, field: &Field) -> Result<Option<Relation>> {
        if field.ignore {
            return Ok(None);
        }

        let (elem, is_many) = match &field.ty {
            Type::List(elem) => (&**elem, true),
            ty => (ty, false),
        };

        let target_shape = match elem.record_type() {
            Some(record) if record.shape().is_model() => record.shape(),
            _ => {
                return match &field.declared_relation {
                    Some(hint) => Err(not_a_relation(model, field, hint.kind)),
                    None => Ok(None),
                }
            }
        };

        let Some(target) = self
            .models
            .values()
            .find(|candidate| candidate.record_type().type_id() == target_shape.type_id())
        else {
            return Err(Error::unknown_collection(
                model.name,
                &field.name,
                target_shape.name,
            ));
        };

        let kind = match &field.declared_relation {
            Some(hint) => hint.kind,
            None if is_many => RelationKind::BelongsTo,
            None => RelationKind::HasOne,
        };

        let mut relation = Relation {
            kind,
            target: target.collection.clone(),
            is_many,
            local_key: None,
            foreign_key: None,
            explicit: false,
        };

        if kind == RelationKind::ManyToMany {
            return Ok(Some(relation));
        }

        let keys = field
            .declared_relation
            .as_ref()
            .and_then(|hint| hint.keys.as_ref());

        let (local, foreign) = match keys {
            Some(keys) => {
                relation.explicit = true;
                explicit_keys(model, field, target, kind, keys)?
            }
            None => match kind {
                RelationKind::HasOne => infer_has_one(model, field, target)?,
                _ => infer_belongs_to(model, field, target)?,
            },
        };

        relation.local_key = Some(local);
        relation.foreign_key = Some(foreign);
        Ok(Some(relation))
    }
}

/// Uses the tag's pairing verbatim once both names are known to exist.
fn explicit_keys(
    model: &ModelInfo,
    field: &Field,
    target: &ModelInfo,
    kind: RelationKind,
    keys: &KeyPair,
) -> Result<(String, String)> {
    let missing = if model.field(&keys.local).is_none() {
        Some((model.name, &keys.local))
    } else if target.field(&keys.foreign).is_none() {
        Some((target.name, &keys.foreign))
    } else {
        None
    };

    match missing {
        Some((owner, name)) => Err(relation_error(
            kind,
            format!(
                "`{}::{}` pairs with `{owner}::{name}`, which does not exist",
                model.name, field.name
            ),
        )),
        None => Ok((keys.local.clone(), keys.foreign.clone())),
    }
}

/// The owning model holds `<field>_id` (or `<field>ID`) pointing at the
/// related model's primary key.
fn infer_has_one(model: &ModelInfo, field: &Field, target: &ModelInfo) -> Result<(String, String)> {
    let candidates = key_field_candidates(&field.name);

    match candidates.iter().find(|name| model.field(name).is_some()) {
        Some(local) => Ok((local.clone(), target.pk_field.clone())),
        None => Err(Error::invalid_has_one(format!(
            "cannot infer the key of `{}::{}`: expected a field named `{}` on `{}`",
            model.name, field.name, candidates[0], model.name
        ))),
    }
}

/// The related model holds `<owner>_id` (or `<Owner>ID`) pointing at the
/// owning model's primary key.
fn infer_belongs_to(
    model: &ModelInfo,
    field: &Field,
    target: &ModelInfo,
) -> Result<(String, String)> {
    let candidates = key_field_candidates(model.name);

    match candidates.iter().find(|name| target.field(name).is_some()) {
        Some(foreign) => Ok((model.pk_field.clone(), foreign.clone())),
        None => Err(Error::invalid_belongs_to(format!(
            "cannot infer the key of `{}::{}`: expected a field named `{}` on `{}`",
            model.name, field.name, candidates[0], target.name
        ))),
    }
}

/// Two inferred belongs-to relations to one target would share a foreign
/// key, so at most one may be left to inference.
fn check_ambiguous(model: &ModelInfo, relations: &[(String, Relation)]) -> Result<()> {
    let mut by_target: IndexMap<&str, Vec<&str>> = IndexMap::new();

    for (name, relation) in relations {
        if relation.kind == RelationKind::BelongsTo && !relation.explicit {
            by_target
                .entry(relation.target.as_str())
                .or_default()
                .push(name.as_str());
        }
    }

    match by_target.iter().find(|(_, fields)| fields.len() > 1) {
        Some((target, fields)) => Err(Error::ambiguous_relation(model.name, target, fields)),
        None => Ok(()),
    }
}

fn not_a_relation(model: &ModelInfo, field: &Field, kind: RelationKind) -> Error {
    match kind {
        RelationKind::ManyToMany => {
            Error::unsupported_field_type(&format!("{}::{}", model.name, field.name), &field.ty)
        }
        kind => relation_error(
            kind,
            format!(
                "`{}::{}` is tagged `{kind}` but its type `{}` is not a model",
                model.name, field.name, field.ty
            ),
        ),
    }
}

fn relation_error(kind: RelationKind, message: String) -> Error {
    match kind {
        RelationKind::BelongsTo => Error::invalid_belongs_to(message),
        _ => Error::invalid_has_one(message),
    }
}
