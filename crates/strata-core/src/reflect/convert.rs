use super::{Kind, Value};
use crate::{Error, Result};

/// Converts `raw` into a value of the given kind.
///
/// Signed and unsigned integers of every width and strings are supported.
/// Any other kind fails with `cannot_convert_to_<kind>`; malformed or
/// out-of-range numeric text fails with `parse_number`.
pub fn convert_string_to_type(raw: &str, kind: Kind) -> Result<Value> {
    macro_rules! parse {
        ($variant:ident) => {
            raw.parse()
                .map(Value::$variant)
                .map_err(|err| Error::parse_number(raw, kind, err))
        };
    }

    match kind {
        Kind::I8 => parse!(I8),
        Kind::I16 => parse!(I16),
        Kind::I32 => parse!(I32),
        Kind::I64 => parse!(I64),
        Kind::Isize => parse!(Isize),
        Kind::U8 => parse!(U8),
        Kind::U16 => parse!(U16),
        Kind::U32 => parse!(U32),
        Kind::U64 => parse!(U64),
        Kind::Usize => parse!(Usize),
        Kind::String => Ok(Value::String(raw.to_string())),
        kind => Err(Error::cannot_convert_to(kind)),
    }
}
