use super::RelationKind;
use crate::{Error, Result};

/// A parsed `#[db("...")]` annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTag {
    pub primary_key: bool,

    /// `-` or `ignore`: never persisted
    pub ignore: bool,

    /// `ignore-zero`: skipped on write while holding its zero value
    pub ignore_if_zero: bool,

    pub not_null: bool,
    pub unique: bool,
    pub index: bool,

    /// `name:<backend_name>`
    pub backend_name: Option<String>,

    /// `has-one`, `belongs-to` or `m2m`, with optional explicit keys
    pub relation: Option<RelationHint>,
}

/// A relation declared by a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationHint {
    pub kind: RelationKind,
    pub keys: Option<KeyPair>,
}

/// Explicit `<local>:<foreign>` key pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub local: String,
    pub foreign: String,
}

/// Parses a `;`-separated field annotation.
///
/// Clauses are bare keywords (`primary-key`, `-`, `ignore`, `ignore-zero`,
/// `not-null`, `unique`, `index`, `m2m`, `has-one`, `belongs-to`) or keyed
/// (`name:<backend>`, `has-one:<local>:<foreign>`,
/// `belongs-to:<local>:<foreign>`). Whitespace around clauses is ignored.
pub fn parse_field_tag(raw: &str) -> Result<FieldTag> {
    let mut tag = FieldTag::default();
    let mut primary_key = None;
    let mut ignore = None;
    let mut relation = None;

    for clause in raw.split(';').map(str::trim).filter(|c| !c.is_empty()) {
        let (key, value) = match clause.split_once(':') {
            Some((key, value)) => (key.trim(), Some(value)),
            None => (clause, None),
        };

        match (key, value) {
            ("name", value) => {
                let name = value
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| Error::invalid_name(clause))?;
                tag.backend_name = Some(name.to_string());
            }
            ("has-one", value) => {
                let keys = value
                    .map(|pair| parse_key_pair(pair).ok_or_else(|| malformed_has_one(clause)))
                    .transpose()?;
                set_relation(&mut tag, &mut relation, clause, RelationKind::HasOne, keys)?;
            }
            ("belongs-to", value) => {
                let keys = value
                    .map(|pair| parse_key_pair(pair).ok_or_else(|| malformed_belongs_to(clause)))
                    .transpose()?;
                set_relation(&mut tag, &mut relation, clause, RelationKind::BelongsTo, keys)?;
            }
            ("m2m", None) => {
                set_relation(&mut tag, &mut relation, clause, RelationKind::ManyToMany, None)?
            }
            ("primary-key", None) => {
                tag.primary_key = true;
                primary_key = Some(clause);
            }
            ("-" | "ignore", None) => {
                tag.ignore = true;
                ignore = Some(clause);
            }
            ("ignore-zero", None) => tag.ignore_if_zero = true,
            ("not-null", None) => tag.not_null = true,
            ("unique", None) => tag.unique = true,
            ("index", None) => tag.index = true,
            _ => return Err(Error::unknown_tag_option(clause)),
        }
    }

    match (ignore, primary_key, relation) {
        (Some(ignore), Some(other), _) | (Some(ignore), _, Some(other)) => {
            Err(Error::conflicting_tag_options(ignore, other))
        }
        (None, Some(primary_key), Some(relation)) => {
            Err(Error::conflicting_tag_options(primary_key, relation))
        }
        _ => Ok(tag),
    }
}

fn set_relation<'a>(
    tag: &mut FieldTag,
    seen: &mut Option<&'a str>,
    clause: &'a str,
    kind: RelationKind,
    keys: Option<KeyPair>,
) -> Result<()> {
    if let Some(previous) = *seen {
        return Err(Error::conflicting_tag_options(previous, clause));
    }

    *seen = Some(clause);
    tag.relation = Some(RelationHint { kind, keys });
    Ok(())
}

/// Exactly two non-empty `:`-separated names.
fn parse_key_pair(src: &str) -> Option<KeyPair> {
    let mut parts = src.split(':').map(str::trim);

    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(foreign), None) if !local.is_empty() && !foreign.is_empty() => {
            Some(KeyPair {
                local: local.to_string(),
                foreign: foreign.to_string(),
            })
        }
        _ => None,
    }
}

fn malformed_has_one(clause: &str) -> Error {
    Error::invalid_has_one(format!(
        "`{clause}` must have the form `has-one:<local_field>:<foreign_field>`"
    ))
}

fn malformed_belongs_to(clause: &str) -> Error {
    Error::invalid_belongs_to(format!(
        "`{clause}` must have the form `belongs-to:<local_field>:<foreign_field>`"
    ))
}
