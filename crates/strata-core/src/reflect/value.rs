use super::{Kind, Record, Type};

/// A dynamically typed value read from or written to a record field.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Absent value: a `None` reference or option
    #[default]
    Null,

    Bool(bool),
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
    F32(f32),
    F64(f64),
    String(String),

    /// A record held by value
    Record(Box<dyn Record>),

    /// A reference to another value
    Ref(Box<Value>),

    /// A homogeneous sequence
    List(List),
}

/// A sequence of values sharing one element type.
///
/// The element type is carried explicitly so that empty lists still know
/// what they hold.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub ty: Type,
    pub items: Vec<Value>,
}

impl Value {
    pub fn record(record: impl Record) -> Value {
        Value::Record(Box::new(record))
    }

    pub fn reference(value: Value) -> Value {
        Value::Ref(Box::new(value))
    }

    pub fn list(ty: Type, items: Vec<Value>) -> Value {
        Value::List(List { ty, items })
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::I8(_) => Kind::I8,
            Value::I16(_) => Kind::I16,
            Value::I32(_) => Kind::I32,
            Value::I64(_) => Kind::I64,
            Value::Isize(_) => Kind::Isize,
            Value::U8(_) => Kind::U8,
            Value::U16(_) => Kind::U16,
            Value::U32(_) => Kind::U32,
            Value::U64(_) => Kind::U64,
            Value::Usize(_) => Kind::Usize,
            Value::F32(_) => Kind::F32,
            Value::F64(_) => Kind::F64,
            Value::String(_) => Kind::String,
            Value::Record(_) => Kind::Record,
            Value::Ref(_) => Kind::Ref,
            Value::List(_) => Kind::List,
        }
    }

    /// The runtime type of this value. `Null` has none.
    pub fn ty(&self) -> Option<Type> {
        Some(match self {
            Value::Null => return None,
            Value::Bool(_) => Type::Bool,
            Value::I8(_) => Type::I8,
            Value::I16(_) => Type::I16,
            Value::I32(_) => Type::I32,
            Value::I64(_) => Type::I64,
            Value::Isize(_) => Type::Isize,
            Value::U8(_) => Type::U8,
            Value::U16(_) => Type::U16,
            Value::U32(_) => Type::U32,
            Value::U64(_) => Type::U64,
            Value::Usize(_) => Type::Usize,
            Value::F32(_) => Type::F32,
            Value::F64(_) => Type::F64,
            Value::String(_) => Type::String,
            Value::Record(record) => Type::Record(record.shape().record_type()),
            Value::Ref(inner) => Type::reference(inner.ty()?),
            Value::List(list) => Type::list(list.ty.clone()),
        })
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub const fn is_ref(&self) -> bool {
        matches!(self, Value::Ref(_))
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Strips one level of reference.
    pub fn strip_ref(&self) -> &Value {
        match self {
            Value::Ref(inner) => inner,
            value => value,
        }
    }

    /// The record held directly or behind one reference.
    pub fn as_record(&self) -> Option<&dyn Record> {
        match self.strip_ref() {
            Value::Record(record) => Some(&**record),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        match self {
            Value::Record(record) => Some(&mut **record),
            Value::Ref(inner) => match &mut **inner {
                Value::Record(record) => Some(&mut **record),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn into_record(self) -> Option<Box<dyn Record>> {
        match self {
            Value::Record(record) => Some(record),
            Value::Ref(inner) => match *inner {
                Value::Record(record) => Some(record),
                _ => None,
            },
            _ => None,
        }
    }

    /// Borrows the concrete record type, looking through one reference.
    pub fn downcast_ref<T: Record>(&self) -> Option<&T> {
        self.as_record()?.as_any().downcast_ref::<T>()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self.strip_ref() {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Returns `true` when the value equals the zero value of its type.
    ///
    /// `Null` is zero; a non-null reference is not, whatever it points at.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(v) => !v,
            Value::I8(v) => *v == 0,
            Value::I16(v) => *v == 0,
            Value::I32(v) => *v == 0,
            Value::I64(v) => *v == 0,
            Value::Isize(v) => *v == 0,
            Value::U8(v) => *v == 0,
            Value::U16(v) => *v == 0,
            Value::U32(v) => *v == 0,
            Value::U64(v) => *v == 0,
            Value::Usize(v) => *v == 0,
            Value::F32(v) => *v == 0.0,
            Value::F64(v) => *v == 0.0,
            Value::String(v) => v.is_empty(),
            Value::Record(record) => **record == *record.shape().new_record(),
            Value::Ref(_) => false,
            Value::List(list) => list.items.is_empty(),
        }
    }
}

impl List {
    /// An empty list of `ty` elements.
    pub fn new(ty: Type) -> List {
        List { ty, items: vec![] }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::List(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

macro_rules! impl_scalar {
    ( $( $variant:ident($ty:ty) ),* $(,)? ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Value::$variant(*value)
                }
            }

            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    matches!(self, Value::$variant(val) if val == other)
                }
            }

            impl PartialEq<Value> for $ty {
                fn eq(&self, other: &Value) -> bool {
                    other.eq(self)
                }
            }
        )*
    };
}

impl_scalar! {
    Bool(bool),
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
    F32(f32),
    F64(f64),
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}
