// Thu Oct 15 2026 - Alex

//! JVM type descriptors.
//!
//! Field descriptors (`I`, `Ljava/lang/String;`, `[[J`) and method descriptors
//! (`(ILjava/lang/Object;)V`) are parsed into [`TypeDescriptor`] trees. The
//! resolver never compares these directly, it compares their normalized
//! categories, but catalogs and reports carry the full form.

use crate::classes::error::ClassError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseType {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
}

impl BaseType {
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'B' => Some(Self::Byte),
            'C' => Some(Self::Char),
            'D' => Some(Self::Double),
            'F' => Some(Self::Float),
            'I' => Some(Self::Int),
            'J' => Some(Self::Long),
            'S' => Some(Self::Short),
            'Z' => Some(Self::Boolean),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Byte => 'B',
            Self::Char => 'C',
            Self::Double => 'D',
            Self::Float => 'F',
            Self::Int => 'I',
            Self::Long => 'J',
            Self::Short => 'S',
            Self::Boolean => 'Z',
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
            Self::Boolean => "boolean",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeDescriptor {
    Void,
    Primitive(BaseType),
    Object(String),
    Array(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    pub fn object(internal_name: &str) -> Self {
        Self::Object(internal_name.to_string())
    }

    pub fn array_of(element: TypeDescriptor) -> Self {
        Self::Array(Box::new(element))
    }

    /// Parses a field descriptor, or `V` for a return position.
    pub fn parse(desc: &str) -> Result<Self, ClassError> {
        if desc == "V" {
            return Ok(Self::Void);
        }
        let (ty, rest) = parse_field_type(desc)?;
        if !rest.is_empty() {
            return Err(ClassError::InvalidDescriptor(desc.to_string()));
        }
        Ok(ty)
    }

    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn dimensions(&self) -> usize {
        let mut dims = 0;
        let mut current = self;
        while let Self::Array(element) = current {
            dims += 1;
            current = element;
        }
        dims
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => write!(f, "V"),
            Self::Primitive(base) => write!(f, "{}", base.as_char()),
            Self::Object(name) => write!(f, "L{};", name),
            Self::Array(element) => write!(f, "[{}", element),
        }
    }
}

impl FromStr for TypeDescriptor {
    type Err = ClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TypeDescriptor {
    type Error = ClassError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TypeDescriptor> for String {
    fn from(value: TypeDescriptor) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub parameters: Vec<TypeDescriptor>,
    pub return_type: TypeDescriptor,
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for param in &self.parameters {
            write!(f, "{}", param)?;
        }
        write!(f, "){}", self.return_type)
    }
}

pub fn parse_method_descriptor(desc: &str) -> Result<MethodDescriptor, ClassError> {
    let invalid = || ClassError::InvalidDescriptor(desc.to_string());

    let mut rest = desc.strip_prefix('(').ok_or_else(invalid)?;
    let mut parameters = Vec::new();
    loop {
        if let Some(after) = rest.strip_prefix(')') {
            rest = after;
            break;
        }
        if rest.is_empty() {
            return Err(invalid());
        }
        let (param, after) = parse_field_type(rest).map_err(|_| invalid())?;
        parameters.push(param);
        rest = after;
    }

    let return_type = TypeDescriptor::parse(rest).map_err(|_| invalid())?;

    Ok(MethodDescriptor { parameters, return_type })
}

fn parse_field_type(input: &str) -> Result<(TypeDescriptor, &str), ClassError> {
    let first = input
        .chars()
        .next()
        .ok_or_else(|| ClassError::InvalidDescriptor(input.to_string()))?;

    if let Some(base) = BaseType::from_char(first) {
        return Ok((TypeDescriptor::Primitive(base), &input[1..]));
    }

    match first {
        'L' => match input.find(';') {
            Some(end) if end > 1 => Ok((TypeDescriptor::object(&input[1..end]), &input[end + 1..])),
            _ => Err(ClassError::InvalidDescriptor(input.to_string())),
        },
        '[' => {
            let (element, rest) = parse_field_type(&input[1..])?;
            Ok((TypeDescriptor::array_of(element), rest))
        }
        _ => Err(ClassError::InvalidDescriptor(input.to_string())),
    }
}
