//! A runtime-resolved OpenGL dispatch table.
//!
//! [`GlMethods`] holds one pointer per core entry point, resolved once per
//! context. Calls go through typed wrappers that refuse to call entry points
//! the driver does not provide and can report every call, and the GL error it
//! raised, to a [`TraceSink`].

pub mod buffer;
mod config;
mod error;
#[cfg(feature = "glfw")]
pub mod glfw;
pub mod info;
pub mod loader;
pub mod methods;
pub mod trace;
pub mod vertex;

pub use config::LoadOptions;
pub use error::{GlError, GlErrorGuard, MethodError, MethodResult};
pub use methods::{Availability, GlMethods, Method};
pub use trace::{LogSink, TraceEvent, TraceMode, TraceSink};

pub use gl;

#[macro_export]
macro_rules! has_handle {
    ($name: ty) => {
        impl $name {
            pub fn as_handle(&self) -> gl::types::GLuint {
                self.handle
            }
        }
    };
}

#[cfg(test)]
mod fake;
