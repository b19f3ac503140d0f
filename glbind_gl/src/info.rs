use std::ffi::CStr;
use std::fmt::{Display, Formatter};

use glbind_utils::transmutable_u32;

use crate::error::MethodResult;
use crate::methods::GlMethods;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlString {
    Vendor = gl::VENDOR,
    Renderer = gl::RENDERER,
    Version = gl::VERSION,
    ShadingLanguageVersion = gl::SHADING_LANGUAGE_VERSION,
}
transmutable_u32!(GlString);

impl GlString {
    /// `None` when the driver returns a null string.
    pub fn get(self, methods: &GlMethods) -> MethodResult<Option<String>> {
        let ptr = unsafe { methods.GetString(self.to_u32())? };
        if ptr.is_null() {
            return Ok(None);
        }
        let value = unsafe { CStr::from_ptr(ptr.cast()) };
        Ok(Some(value.to_string_lossy().into_owned()))
    }
}

/// The identification strings of the current context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextInfo {
    pub vendor: Option<String>,
    pub renderer: Option<String>,
    pub version: Option<String>,
    pub shading_language: Option<String>,
}

impl ContextInfo {
    pub fn query(methods: &GlMethods) -> MethodResult<Self> {
        Ok(Self {
            vendor: GlString::Vendor.get(methods)?,
            renderer: GlString::Renderer.get(methods)?,
            version: GlString::Version.get(methods)?,
            shading_language: GlString::ShadingLanguageVersion.get(methods)?,
        })
    }
}

impl Display for ContextInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "?".to_string());
        writeln!(f, "vendor:   {}", show(&self.vendor))?;
        writeln!(f, "renderer: {}", show(&self.renderer))?;
        writeln!(f, "version:  {}", show(&self.version))?;
        write!(f, "glsl:     {}", show(&self.shading_language))
    }
}
