use std_util::str;

/// Transliterates a `CamelCase` identifier into `snake_case`.
///
/// Each capital that starts a new word is lowercased and, except at the
/// start, prefixed with `_`: `AaBbCc` becomes `aa_bb_cc`. A run of capitals
/// forms one word, so `AA` becomes `aa` and `ChildID` becomes `child_id`.
pub fn camel_case_to_underscore(src: &str) -> String {
    str::snake_case(src)
}

/// Names a key field for `base` may have, most preferred first: the
/// snake_case `<base>_id`, then `<base>ID` as written.
pub(crate) fn key_field_candidates(base: &str) -> [String; 2] {
    [
        format!("{}_id", camel_case_to_underscore(base)),
        format!("{base}ID"),
    ]
}
