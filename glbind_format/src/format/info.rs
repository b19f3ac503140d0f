/// How often an attribute advances to the next element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Divisor {
    /// `/v`, once per vertex
    #[default]
    PerVertex,
    /// `/i`, once per instance
    PerInstance,
    /// `/r`, one value for the whole render call
    PerRender,
}

impl Divisor {
    /// Divisor used for `/r`. No realistic instance count reaches it.
    pub const PER_RENDER: u32 = 0x7fff_ffff;

    pub const fn value(self) -> u32 {
        match self {
            Self::PerVertex => 0,
            Self::PerInstance => 1,
            Self::PerRender => Self::PER_RENDER,
        }
    }

    pub const fn from_suffix(byte: u8) -> Option<Self> {
        Some(match byte {
            b'v' => Self::PerVertex,
            b'i' => Self::PerInstance,
            b'r' => Self::PerRender,
            _ => return None,
        })
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Self::PerVertex => "/v",
            Self::PerInstance => "/i",
            Self::PerRender => "/r",
        }
    }
}

/// Summary of a whole format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Bytes per element, padding included
    pub size: u32,
    /// Number of non-padding tokens
    pub nodes: u32,
    pub divisor: Divisor,
    pub valid: bool,
}

impl Default for FormatInfo {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FormatInfo {
    pub const EMPTY: Self = Self {
        size: 0,
        nodes: 0,
        divisor: Divisor::PerVertex,
        valid: true,
    };

    pub const INVALID: Self = Self {
        valid: false,
        ..Self::EMPTY
    };
}
