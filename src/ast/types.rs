//! Type annotations.
//!
//! A type node describes a compile-time type written in a declaration, not a
//! value. Its size (in abstract storage units) is intrinsic to the variant
//! and exposed through [`Type::size`].

use std::fmt::Display;

use crate::SourceLocation;

use super::ast::Node;

/// Size of `int` and of every pointer.
pub const WORD_SIZE: u64 = 8;
/// Size of `char`.
pub const CHAR_SIZE: u64 = 1;

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Primitive(PrimitiveType),
    Array(ArrayType),
    Pointer(PointerType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Int,
    Char,
}

/// `int` or `char`, anchored at the keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveType {
    pub primitive: Primitive,
    pub location: SourceLocation,
}

/// `array(length) of underlying`, anchored at `array`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub length: u32,
    pub underlying: Box<Type>,
    pub location: SourceLocation,
}

/// `ptr to underlying`, anchored at `ptr`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerType {
    pub underlying: Box<Type>,
    pub location: SourceLocation,
}

impl Type {
    /// Storage occupied by a value of this type.
    ///
    /// Array sizes saturate at `u64::MAX` instead of wrapping.
    pub fn size(&self) -> u64 {
        match self {
            Type::Primitive(primitive) => match primitive.primitive {
                Primitive::Int => WORD_SIZE,
                Primitive::Char => CHAR_SIZE,
            },
            Type::Array(array) => u64::from(array.length).saturating_mul(array.underlying.size()),
            Type::Pointer(_) => WORD_SIZE,
        }
    }
}

impl Node for Type {
    fn get_location(&self) -> &SourceLocation {
        match self {
            Type::Primitive(primitive) => &primitive.location,
            Type::Array(array) => &array.location,
            Type::Pointer(pointer) => &pointer.location,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Primitive(primitive) => match primitive.primitive {
                Primitive::Int => write!(f, "int"),
                Primitive::Char => write!(f, "char"),
            },
            Type::Array(array) => write!(f, "Array[{}, {}]", array.length, array.underlying),
            Type::Pointer(pointer) => write!(f, "Pointer[{}]", pointer.underlying),
        }
    }
}
