use crate::reflect::Kind;

/// Stable, machine-readable identifier of a failure.
///
/// The `Display` form is the snake_case code string, e.g. `struct_expected`
/// or `cannot_convert_to_ref`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Shape
    StructExpected,
    PointerExpected,
    PointerOrStructExpected,
    PointerToStructExpected,
    SliceExpected,
    ElementsNotModel,

    // Tag
    InvalidName,
    InvalidHasOne,
    InvalidBelongsTo,
    UnknownTagOption,
    ConflictingTagOptions,

    // Build
    BuildFieldInfoError,
    PrimaryKeyNotFound,
    MultiplePrimaryKeys,
    DuplicateBackendName,
    DuplicateCollection,
    UnknownCollection,
    AmbiguousRelation,
    SchemaAlreadyInstalled,

    // Field
    FieldNotFound,
    UnknownField,
    UnsupportedFieldType,
    TypeMismatch,

    // Conversion
    CannotConvertTo(Kind),
    ParseNumber,
    ValueOutOfRange,
    IncomparableValues,

    // Filter
    UnknownFilter,
}

/// Coarse grouping of [`ErrorCode`]s.
///
/// None of the classes are transient. Shape, tag and build errors are
/// programmer or schema mistakes; field, conversion and filter errors are
/// local to a single operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    Shape,
    Tag,
    Build,
    Field,
    Conversion,
    Filter,
}

impl ErrorCode {
    pub fn class(self) -> ErrorClass {
        use ErrorCode::*;

        match self {
            StructExpected
            | PointerExpected
            | PointerOrStructExpected
            | PointerToStructExpected
            | SliceExpected
            | ElementsNotModel => ErrorClass::Shape,
            InvalidName | InvalidHasOne | InvalidBelongsTo | UnknownTagOption
            | ConflictingTagOptions => ErrorClass::Tag,
            BuildFieldInfoError
            | PrimaryKeyNotFound
            | MultiplePrimaryKeys
            | DuplicateBackendName
            | DuplicateCollection
            | UnknownCollection
            | AmbiguousRelation
            | SchemaAlreadyInstalled => ErrorClass::Build,
            FieldNotFound | UnknownField | UnsupportedFieldType | TypeMismatch => {
                ErrorClass::Field
            }
            CannotConvertTo(_) | ParseNumber | ValueOutOfRange | IncomparableValues => {
                ErrorClass::Conversion
            }
            UnknownFilter => ErrorClass::Filter,
        }
    }

    /// The code string without any payload.
    pub fn as_str(self) -> &'static str {
        use ErrorCode::*;

        match self {
            StructExpected => "struct_expected",
            PointerExpected => "pointer_expected",
            PointerOrStructExpected => "pointer_or_struct_expected",
            PointerToStructExpected => "pointer_to_struct_expected",
            SliceExpected => "slice_expected",
            ElementsNotModel => "elements_not_model",
            InvalidName => "invalid_name",
            InvalidHasOne => "invalid_has_one",
            InvalidBelongsTo => "invalid_belongs_to",
            UnknownTagOption => "unknown_tag_option",
            ConflictingTagOptions => "conflicting_tag_options",
            BuildFieldInfoError => "build_field_info_error",
            PrimaryKeyNotFound => "primary_key_not_found",
            MultiplePrimaryKeys => "multiple_primary_keys",
            DuplicateBackendName => "duplicate_backend_name",
            DuplicateCollection => "duplicate_collection",
            UnknownCollection => "unknown_collection",
            AmbiguousRelation => "ambiguous_relation",
            SchemaAlreadyInstalled => "schema_already_installed",
            FieldNotFound => "field_not_found",
            UnknownField => "unknown_field",
            UnsupportedFieldType => "unsupported_field_type",
            TypeMismatch => "type_mismatch",
            CannotConvertTo(_) => "cannot_convert_to",
            ParseNumber => "parse_number",
            ValueOutOfRange => "value_out_of_range",
            IncomparableValues => "incomparable_values",
            UnknownFilter => "unknown_filter",
        }
    }
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            ErrorCode::CannotConvertTo(kind) => write!(f, "cannot_convert_to_{kind}"),
            code => f.write_str(code.as_str()),
        }
    }
}
