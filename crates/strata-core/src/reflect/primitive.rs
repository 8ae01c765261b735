use super::{Kind, List, Type, Value};
use crate::{Error, Result};

/// Conversion between a Rust type and the dynamic [`Value`] model.
///
/// Every type that can appear as a record field implements this: scalars,
/// `String`, `Option<T>`, `Box<T>`, `Vec<T>` and derived records.
pub trait Reflect: Sized {
    /// The static type of the field.
    fn ty() -> Type;

    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> Result<Self>;
}

macro_rules! impl_int {
    ( $( $variant:ident($ty:ty) ),* $(,)? ) => {
        $(
            impl Reflect for $ty {
                fn ty() -> Type {
                    Type::$variant
                }

                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }

                fn from_value(value: Value) -> Result<Self> {
                    let Some(int) = value.to_i128() else {
                        return Err(Error::type_mismatch(Kind::$variant, value.kind()));
                    };
                    <$ty>::try_from(int).map_err(|_| Error::value_out_of_range(int, Kind::$variant))
                }
            }
        )*
    };
}

impl_int! {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
}

impl Reflect for f32 {
    fn ty() -> Type {
        Type::F32
    }

    fn to_value(&self) -> Value {
        Value::F32(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::F32(v) => Ok(v),
            other => Err(Error::type_mismatch(Kind::F32, other.kind())),
        }
    }
}

impl Reflect for f64 {
    fn ty() -> Type {
        Type::F64
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::F32(v) => Ok(v.into()),
            other => Err(Error::type_mismatch(Kind::F64, other.kind())),
        }
    }
}

impl Reflect for bool {
    fn ty() -> Type {
        Type::Bool
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            other => Err(Error::type_mismatch(Kind::Bool, other.kind())),
        }
    }
}

impl Reflect for String {
    fn ty() -> Type {
        Type::String
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            other => Err(Error::type_mismatch(Kind::String, other.kind())),
        }
    }
}

/// `None` is stored as `Value::Null`. The field type is that of `T`, so an
/// `Option<Box<T>>` field is a nullable reference.
impl<T: Reflect> Reflect for Option<T> {
    fn ty() -> Type {
        T::ty()
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn ty() -> Type {
        Type::reference(T::ty())
    }

    fn to_value(&self) -> Value {
        Value::reference((**self).to_value())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Ref(inner) => T::from_value(*inner).map(Box::new),
            Value::Null => Err(Error::type_mismatch(Self::ty(), Kind::Null)),
            value => T::from_value(value).map(Box::new),
        }
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn ty() -> Type {
        Type::list(T::ty())
    }

    fn to_value(&self) -> Value {
        Value::List(List {
            ty: T::ty(),
            items: self.iter().map(Reflect::to_value).collect(),
        })
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::List(list) => list.items.into_iter().map(T::from_value).collect(),
            Value::Ref(inner) => Self::from_value(*inner),
            other => Err(Error::type_mismatch(Self::ty(), other.kind())),
        }
    }
}

impl Value {
    /// The value as an integer, if it is one. Wide enough for every integer
    /// variant.
    pub fn to_i128(&self) -> Option<i128> {
        Some(match *self {
            Value::I8(v) => v.into(),
            Value::I16(v) => v.into(),
            Value::I32(v) => v.into(),
            Value::I64(v) => v.into(),
            Value::Isize(v) => v as i128,
            Value::U8(v) => v.into(),
            Value::U16(v) => v.into(),
            Value::U32(v) => v.into(),
            Value::U64(v) => v.into(),
            Value::Usize(v) => v as i128,
            _ => return None,
        })
    }
}
