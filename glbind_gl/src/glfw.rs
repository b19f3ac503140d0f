//! Just enough GLFW to get a current context for the probe.

use std::ffi::{c_char, c_int, c_void, CStr, CString};
use std::ptr::{self, NonNull};

use color_eyre::{eyre::eyre, Result as EyreResult};
use glam::IVec2;
use glfw::ffi;

#[repr(i32)]
#[derive(Debug, Clone, Copy)]
pub enum GlfwError {
    NotInitialized,
    NoCurrentContext,
    InvalidEnum,
    InvalidValue,
    OutOfMemory,
    ApiUnavailable,
    VersionUnavailable,
    PlatformError,
    FormatUnavailable,
    NoWindowContext,
    CursorUnavailable,
    FeatureUnavailable,
    FeatureUnimplemented,
    PlatformUnavailable,
}

impl GlfwError {
    pub fn from_num(err: i32) -> Option<Self> {
        Some(match err {
            0x00010001 => Self::NotInitialized,
            0x00010002 => Self::NoCurrentContext,
            0x00010003 => Self::InvalidEnum,
            0x00010004 => Self::InvalidValue,
            0x00010005 => Self::OutOfMemory,
            0x00010006 => Self::ApiUnavailable,
            0x00010007 => Self::VersionUnavailable,
            0x00010008 => Self::PlatformError,
            0x00010009 => Self::FormatUnavailable,
            0x0001000a => Self::NoWindowContext,
            0x0001000b => Self::CursorUnavailable,
            0x0001000c => Self::FeatureUnavailable,
            0x0001000d => Self::FeatureUnimplemented,
            0x0001000e => Self::PlatformUnavailable,
            _ => return None,
        })
    }
}

extern "C" fn err_callback(err: c_int, desc: *const c_char) {
    let desc = match desc.is_null() {
        true => "<no description>".into(),
        false => unsafe { CStr::from_ptr(desc) }.to_string_lossy(),
    };
    match GlfwError::from_num(err) {
        Some(err) => log::error!("GLFW {err:?}: {desc}"),
        None => log::error!("GLFW error 0x{err:x}: {desc}"),
    }
}

pub fn init() -> EyreResult<()> {
    let ok = unsafe { ffi::glfwInit() };
    match ok == ffi::TRUE {
        true => Ok(()),
        false => Err(eyre!("GLFW initialization failed")),
    }
}

pub fn terminate() {
    unsafe { ffi::glfwTerminate() }
}

pub fn install_errors() {
    unsafe { ffi::glfwSetErrorCallback(Some(err_callback)) };
}

/// Resolver for the context current on this thread.
pub fn get_proc_address(name: &CStr) -> *const c_void {
    unsafe { ffi::glfwGetProcAddress(name.as_ptr()) }
}

/// Requests a core profile context for windows created afterwards.
pub fn hint_core_profile(major: i32, minor: i32) {
    unsafe {
        ffi::glfwWindowHint(ffi::CONTEXT_VERSION_MAJOR, major);
        ffi::glfwWindowHint(ffi::CONTEXT_VERSION_MINOR, minor);
        ffi::glfwWindowHint(ffi::OPENGL_PROFILE, ffi::OPENGL_CORE_PROFILE);
        if cfg!(target_vendor = "apple") {
            ffi::glfwWindowHint(ffi::OPENGL_FORWARD_COMPAT, ffi::TRUE);
        }
    }
}

pub struct Window {
    window: NonNull<ffi::GLFWwindow>,
}

impl Drop for Window {
    fn drop(&mut self) {
        unsafe { ffi::glfwDestroyWindow(self.window.as_ptr()) }
    }
}

impl Window {
    pub fn create(width: i32, height: i32, title: &str) -> EyreResult<Self> {
        let as_c_str = CString::new(title)?;
        let window = unsafe {
            ffi::glfwCreateWindow(
                width,
                height,
                as_c_str.as_ptr(),
                ptr::null_mut(),
                ptr::null_mut(),
            )
        };

        if let Some(window) = NonNull::new(window) {
            Ok(Self { window })
        } else {
            Err(eyre!("Window creation failed: nullptr"))
        }
    }

    /// A window that is never shown, only there for its context.
    pub fn create_hidden(title: &str) -> EyreResult<Self> {
        unsafe { ffi::glfwWindowHint(ffi::VISIBLE, ffi::FALSE) };
        Self::create(64, 64, title)
    }

    pub fn make_current(&self) {
        unsafe { ffi::glfwMakeContextCurrent(self.window.as_ptr()) };
    }

    pub fn get_framebuffer_size(&self) -> IVec2 {
        let mut result = IVec2::ZERO;
        unsafe { ffi::glfwGetFramebufferSize(self.window.as_ptr(), &mut result.x, &mut result.y) };
        result
    }
}
