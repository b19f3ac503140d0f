use gl::types::GLenum;
use thiserror::Error;

use crate::methods::{GlMethods, Method};

/// Errors reported by `glGetError`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlError {
    #[error("GL_INVALID_ENUM")]
    InvalidEnum,
    #[error("GL_INVALID_VALUE")]
    InvalidValue,
    #[error("GL_INVALID_OPERATION")]
    InvalidOperation,
    #[error("GL_INVALID_FRAMEBUFFER_OPERATION")]
    InvalidFramebufferOperation,
    #[error("GL_OUT_OF_MEMORY")]
    OutOfMemory,
    #[error("GL_STACK_UNDERFLOW")]
    StackUnderflow,
    #[error("GL_STACK_OVERFLOW")]
    StackOverflow,
    #[error("unknown GL error 0x{0:04x}")]
    Unknown(GLenum),
}

impl GlError {
    pub const fn from_code(code: GLenum) -> Option<Self> {
        Some(match code {
            gl::NO_ERROR => return None,
            gl::INVALID_ENUM => Self::InvalidEnum,
            gl::INVALID_VALUE => Self::InvalidValue,
            gl::INVALID_OPERATION => Self::InvalidOperation,
            gl::INVALID_FRAMEBUFFER_OPERATION => Self::InvalidFramebufferOperation,
            gl::OUT_OF_MEMORY => Self::OutOfMemory,
            gl::STACK_UNDERFLOW => Self::StackUnderflow,
            gl::STACK_OVERFLOW => Self::StackOverflow,
            code => Self::Unknown(code),
        })
    }

    pub const fn code(self) -> GLenum {
        match self {
            Self::InvalidEnum => gl::INVALID_ENUM,
            Self::InvalidValue => gl::INVALID_VALUE,
            Self::InvalidOperation => gl::INVALID_OPERATION,
            Self::InvalidFramebufferOperation => gl::INVALID_FRAMEBUFFER_OPERATION,
            Self::OutOfMemory => gl::OUT_OF_MEMORY,
            Self::StackUnderflow => gl::STACK_UNDERFLOW,
            Self::StackOverflow => gl::STACK_OVERFLOW,
            Self::Unknown(code) => code,
        }
    }

    /// Pops one error flag. `None` when there is none, or when the context
    /// has no `glGetError`.
    pub fn try_get(methods: &GlMethods) -> Option<Self> {
        let code = unsafe { methods.GetError() }.ok()?;
        Self::from_code(code)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MethodError {
    #[error("{} is not available in the current GL context", .0.symbol())]
    Unsupported(Method),
    #[error("no GL entry point is named {0:?}")]
    UnknownName(String),
}

pub type MethodResult<T> = Result<T, MethodError>;

// A context can hold several error flags at once.
const MAX_PENDING_ERRORS: usize = 16;

/// Clears any GL errors on creation, asserts
/// that no GL errors occur in its lifetime.
///
/// Checks for GL errors on `Drop`, and panics
/// if any occured.
pub struct GlErrorGuard<'gl> {
    methods: &'gl GlMethods,
    name: Option<&'static str>,
}

impl Drop for GlErrorGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }

        if let Some(err) = GlError::try_get(self.methods) {
            match self.name {
                Some(name) => panic!("GL error assert \"{name}\" failed: {err}"),
                None => panic!("GL error assert failed: {err}"),
            }
        }
    }
}

impl<'gl> GlErrorGuard<'gl> {
    pub fn clear_existing(methods: &GlMethods, name: Option<&'static str>) {
        let pending = std::iter::from_fn(|| GlError::try_get(methods)).take(MAX_PENDING_ERRORS);
        for err in pending {
            match name {
                Some(name) => log::warn!("existing error on guard \"{name}\" creation: {err}"),
                None => log::warn!("existing error on guard creation: {err}"),
            }
        }
    }

    fn new_internal(methods: &'gl GlMethods, name: Option<&'static str>) -> Self {
        Self::clear_existing(methods, name);
        Self { methods, name }
    }

    pub fn new(methods: &'gl GlMethods) -> Self {
        Self::new_internal(methods, None)
    }

    pub fn named(methods: &'gl GlMethods, name: &'static str) -> Self {
        Self::new_internal(methods, Some(name))
    }

    pub fn guarded<T>(methods: &'gl GlMethods, run: impl FnOnce() -> T) -> T {
        let guard = Self::new(methods);
        let result = run();
        drop(guard);
        result
    }

    pub fn guard_named<T>(methods: &'gl GlMethods, name: &'static str, run: impl FnOnce() -> T) -> T {
        let guard = Self::named(methods, name);
        let result = run();
        drop(guard);
        result
    }
}
