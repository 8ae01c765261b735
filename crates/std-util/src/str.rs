use heck::ToSnakeCase;

/// Converts `CamelCase` (or any mixed-case identifier) to `snake_case`.
///
/// A run of capitals is one word unless followed by a lowercase letter, so
/// `ChildID` becomes `child_id` and `HTTPServer` becomes `http_server`.
pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

/// Plural form of the last word of `src`: `test_model` becomes
/// `test_models`.
pub fn pluralize(src: &str) -> String {
    pluralizer::pluralize(src, 2, false)
}
