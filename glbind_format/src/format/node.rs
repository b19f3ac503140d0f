use std::fmt::{Display, Formatter};

use glbind_utils::transmutable_u32;

use crate::Span;

/// Scalar type an attribute chunk is uploaded as.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    UnsignedByte = gl::UNSIGNED_BYTE,
    HalfFloat = gl::HALF_FLOAT,
    Float = gl::FLOAT,
    Double = gl::DOUBLE,
    Byte = gl::BYTE,
    Short = gl::SHORT,
    Int = gl::INT,
    UnsignedShort = gl::UNSIGNED_SHORT,
    UnsignedInt = gl::UNSIGNED_INT,
}
transmutable_u32!(ScalarType);

/// Which `glVertexAttrib*Pointer` family binds a scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttribFunc {
    /// `glVertexAttribPointer`, converted to float in the shader
    Float,
    /// `glVertexAttribIPointer`, kept as integers
    Int,
    /// `glVertexAttribLPointer`, 64-bit doubles
    Long,
}

impl ScalarType {
    pub const fn width(self) -> u32 {
        match self {
            Self::UnsignedByte | Self::Byte => 1,
            Self::HalfFloat | Self::Short | Self::UnsignedShort => 2,
            Self::Float | Self::Int | Self::UnsignedInt => 4,
            Self::Double => 8,
        }
    }

    pub const fn attrib_func(self) -> AttribFunc {
        match self {
            Self::Double => AttribFunc::Long,
            Self::HalfFloat | Self::Float => AttribFunc::Float,
            _ => AttribFunc::Int,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Scalar(ScalarType),
    /// Skipped bytes, no attribute is bound
    Padding,
}

impl NodeKind {
    pub const fn is_padding(self) -> bool {
        matches!(self, Self::Padding)
    }

    pub const fn scalar(self) -> Option<ScalarType> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            Self::Padding => None,
        }
    }
}

/// One parsed `[count]kind[width]` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatNode {
    /// Bytes taken in the vertex, `count * width`
    pub size: u32,
    pub count: u32,
    /// Bytes per scalar
    pub width: u32,
    pub kind: NodeKind,
    pub normalize: bool,
    /// The kind letter as written, one of `f i u x`
    pub letter: u8,
    pub span: Span,
}

impl FormatNode {
    /// Resolves a kind letter and an optional width digit.
    ///
    /// Returns `None` when the width is not allowed for that kind.
    pub(crate) fn from_parts(letter: u8, width: Option<u8>) -> Option<(NodeKind, u32, bool)> {
        use ScalarType as S;

        let (kind, normalize) = match (letter, width) {
            (b'f', Some(b'1')) => (NodeKind::Scalar(S::UnsignedByte), true),
            (b'f', Some(b'2')) => (NodeKind::Scalar(S::HalfFloat), false),
            (b'f', Some(b'4') | None) => (NodeKind::Scalar(S::Float), false),
            (b'f', Some(b'8')) => (NodeKind::Scalar(S::Double), false),

            (b'i', Some(b'1')) => (NodeKind::Scalar(S::Byte), false),
            (b'i', Some(b'2')) => (NodeKind::Scalar(S::Short), false),
            (b'i', Some(b'4') | None) => (NodeKind::Scalar(S::Int), false),

            (b'u', Some(b'1')) => (NodeKind::Scalar(S::UnsignedByte), false),
            (b'u', Some(b'2')) => (NodeKind::Scalar(S::UnsignedShort), false),
            (b'u', Some(b'4') | None) => (NodeKind::Scalar(S::UnsignedInt), false),

            (b'x', Some(digit @ (b'1' | b'2' | b'4' | b'8'))) => {
                return Some((NodeKind::Padding, u32::from(digit - b'0'), false));
            }
            (b'x', None) => return Some((NodeKind::Padding, 1, false)),

            _ => return None,
        };

        let width = kind.scalar().map_or(0, ScalarType::width);
        Some((kind, width, normalize))
    }

    pub const fn is_padding(&self) -> bool {
        self.kind.is_padding()
    }

    pub fn gl_type(&self) -> Option<u32> {
        self.kind.scalar().map(ScalarType::to_u32)
    }

    /// Binding family for this node, `None` for padding.
    pub fn attrib_func(&self) -> Option<AttribFunc> {
        let scalar = self.kind.scalar()?;
        // `f1` and `u1` share a scalar type but not a binding family.
        Some(match (self.letter, scalar) {
            (b'f', ScalarType::Double) => AttribFunc::Long,
            (b'f', _) => AttribFunc::Float,
            _ => scalar.attrib_func(),
        })
    }
}

impl Display for FormatNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.count, char::from(self.letter), self.width)
    }
}
