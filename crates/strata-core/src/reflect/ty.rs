use super::{Kind, List, Shape, Value};

use std::any::TypeId;

/// The static type of a record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    String,

    /// A record held by value
    Record(RecordType),

    /// A reference (`Box<T>`, possibly optional) to a value of the inner type
    Ref(Box<Type>),

    /// A growable sequence of the inner type
    List(Box<Type>),
}

/// Handle to a record type's [`Shape`].
///
/// Holds a function pointer rather than the shape itself so that
/// self-referential and mutually recursive record types can describe each
/// other without initialization cycles.
#[derive(Clone, Copy)]
pub struct RecordType {
    shape: fn() -> &'static Shape,
}

impl Type {
    pub fn reference(inner: Type) -> Type {
        Type::Ref(Box::new(inner))
    }

    pub fn list(elem: Type) -> Type {
        Type::List(Box::new(elem))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Type::Bool => Kind::Bool,
            Type::I8 => Kind::I8,
            Type::I16 => Kind::I16,
            Type::I32 => Kind::I32,
            Type::I64 => Kind::I64,
            Type::Isize => Kind::Isize,
            Type::U8 => Kind::U8,
            Type::U16 => Kind::U16,
            Type::U32 => Kind::U32,
            Type::U64 => Kind::U64,
            Type::Usize => Kind::Usize,
            Type::F32 => Kind::F32,
            Type::F64 => Kind::F64,
            Type::String => Kind::String,
            Type::Record(_) => Kind::Record,
            Type::Ref(_) => Kind::Ref,
            Type::List(_) => Kind::List,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Type::List(_))
    }

    pub fn is_ref(&self) -> bool {
        matches!(self, Type::Ref(_))
    }

    /// The element type of a list.
    pub fn elem(&self) -> Option<&Type> {
        match self {
            Type::List(elem) => Some(elem),
            _ => None,
        }
    }

    /// The record type of a record, or of a reference to one.
    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            Type::Record(record) => Some(*record),
            Type::Ref(inner) => match &**inner {
                Type::Record(record) => Some(*record),
                _ => None,
            },
            _ => None,
        }
    }

    /// The zero value of this type.
    ///
    /// References start out null, records are default-constructed and lists
    /// are empty.
    pub fn zero(&self) -> Value {
        match self {
            Type::Bool => Value::Bool(false),
            Type::I8 => Value::I8(0),
            Type::I16 => Value::I16(0),
            Type::I32 => Value::I32(0),
            Type::I64 => Value::I64(0),
            Type::Isize => Value::Isize(0),
            Type::U8 => Value::U8(0),
            Type::U16 => Value::U16(0),
            Type::U32 => Value::U32(0),
            Type::U64 => Value::U64(0),
            Type::Usize => Value::Usize(0),
            Type::F32 => Value::F32(0.0),
            Type::F64 => Value::F64(0.0),
            Type::String => Value::String(String::new()),
            Type::Record(record) => Value::Record(record.shape().new_record()),
            Type::Ref(_) => Value::Null,
            Type::List(elem) => Value::List(List::new((**elem).clone())),
        }
    }
}

impl core::fmt::Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Type::Record(record) => f.write_str(record.name()),
            Type::Ref(inner) => write!(f, "&{inner}"),
            Type::List(elem) => write!(f, "[{elem}]"),
            ty => f.write_str(ty.kind().as_str()),
        }
    }
}

impl RecordType {
    pub fn new(shape: fn() -> &'static Shape) -> RecordType {
        RecordType { shape }
    }

    pub fn shape(&self) -> &'static Shape {
        (self.shape)()
    }

    pub fn name(&self) -> &'static str {
        self.shape().name
    }

    pub fn type_id(&self) -> TypeId {
        self.shape().type_id()
    }

    /// The collection name when the record is a model.
    pub fn collection(&self) -> Option<&'static str> {
        self.shape().collection
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &RecordType) -> bool {
        self.type_id() == other.type_id()
    }
}

impl Eq for RecordType {}

impl core::fmt::Debug for RecordType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("RecordType").field(&self.name()).finish()
    }
}
