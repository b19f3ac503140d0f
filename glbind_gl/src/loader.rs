//! Symbol resolution.
//!
//! [`PlatformResolver`] looks entry points up in the system GL library first
//! and falls back to the window-system `GetProcAddress` for everything the
//! library does not export directly:
//!
//! | platform | library | fallback |
//! |---|---|---|
//! | Windows | `opengl32.dll` | `wglGetProcAddress` |
//! | Apple | `OpenGL.framework` | none |
//! | other unix | `libGL.so.1`, `libGL.so` | `glXGetProcAddressARB`, `glXGetProcAddress` |
//!
//! Apple's dynamic loader adds the leading underscore of the C symbol
//! (`_glBindBuffer`) itself, so names are passed as is everywhere.

use std::ffi::{c_char, c_void, CStr};
use std::ptr::NonNull;

use glbind_utils::OptExt;
use libloading::Library;
use thiserror::Error;

pub trait SymbolResolver {
    fn resolve(&mut self, symbol: &CStr) -> Option<NonNull<c_void>>;
}

impl<F: FnMut(&CStr) -> Option<NonNull<c_void>>> SymbolResolver for F {
    fn resolve(&mut self, symbol: &CStr) -> Option<NonNull<c_void>> {
        self(symbol)
    }
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("could not open any of {tried:?}")]
    Open {
        tried: &'static [&'static str],
        #[source]
        source: libloading::Error,
    },
}

pub type LoaderResult<T> = Result<T, LoaderError>;

type GetProcAddress = unsafe extern "system" fn(*const c_char) -> *const c_void;

/// `wglGetProcAddress` reports failure with a few small sentinels besides null.
#[cfg_attr(not(windows), allow(dead_code))]
fn is_wgl_failure(address: *const c_void) -> bool {
    matches!(address as isize, 0 | 1 | 2 | 3 | -1)
}

#[cfg_attr(windows, allow(dead_code))]
fn is_null(address: *const c_void) -> bool {
    address.is_null()
}

/// Takes the exported symbol when there is one, otherwise whatever `fallback`
/// finds. `fallback` only runs when the export lookup failed.
fn pick_address(
    exported: *const c_void,
    fallback: Option<impl FnOnce() -> *const c_void>,
    is_failure: impl Fn(*const c_void) -> bool,
) -> Option<NonNull<c_void>> {
    let address = match is_failure(exported) {
        false => exported,
        true => fallback?(),
    };

    match is_failure(address) {
        true => None,
        false => NonNull::new(address.cast_mut()),
    }
}

#[cfg(windows)]
mod platform {
    pub const LIBRARIES: &[&str] = &["opengl32.dll"];
    pub const FALLBACKS: &[&[u8]] = &[b"wglGetProcAddress\0"];

    pub fn is_failure(address: *const std::ffi::c_void) -> bool {
        super::is_wgl_failure(address)
    }
}

#[cfg(target_vendor = "apple")]
mod platform {
    pub const LIBRARIES: &[&str] = &["/System/Library/Frameworks/OpenGL.framework/OpenGL"];
    pub const FALLBACKS: &[&[u8]] = &[];

    pub fn is_failure(address: *const std::ffi::c_void) -> bool {
        super::is_null(address)
    }
}

#[cfg(all(unix, not(target_vendor = "apple")))]
mod platform {
    pub const LIBRARIES: &[&str] = &["libGL.so.1", "libGL.so"];
    pub const FALLBACKS: &[&[u8]] = &[b"glXGetProcAddressARB\0", b"glXGetProcAddress\0"];

    pub fn is_failure(address: *const std::ffi::c_void) -> bool {
        super::is_null(address)
    }
}

/// Resolver over the system GL library.
pub struct PlatformResolver {
    library: Library,
    get_proc_address: Option<GetProcAddress>,
}

impl PlatformResolver {
    pub const LIBRARIES: &'static [&'static str] = platform::LIBRARIES;

    /// Opens the first GL library that loads.
    pub fn open() -> LoaderResult<Self> {
        let (&last, rest) = Self::LIBRARIES.split_last().unwrap_unreach();
        for &name in rest {
            match unsafe { Library::new(name) } {
                Ok(library) => return Ok(Self::opened(name, library)),
                Err(err) => log::debug!("could not open {name}: {err}"),
            }
        }

        match unsafe { Library::new(last) } {
            Ok(library) => Ok(Self::opened(last, library)),
            Err(source) => Err(LoaderError::Open {
                tried: Self::LIBRARIES,
                source,
            }),
        }
    }

    fn opened(name: &str, library: Library) -> Self {
        log::debug!("opened {name}");
        Self::from_library(library)
    }

    pub fn from_library(library: Library) -> Self {
        let get_proc_address = platform::FALLBACKS.iter().find_map(|&name| {
            let symbol = unsafe { library.get::<GetProcAddress>(name) }.ok()?;
            Some(*symbol)
        });

        if get_proc_address.is_none() && !platform::FALLBACKS.is_empty() {
            log::debug!("no GetProcAddress fallback, only exported symbols resolve");
        }

        Self {
            library,
            get_proc_address,
        }
    }

    pub fn into_library(self) -> Library {
        self.library
    }

    fn exported(&self, symbol: &CStr) -> *const c_void {
        match unsafe { self.library.get::<*const c_void>(symbol.to_bytes_with_nul()) } {
            Ok(address) => *address,
            Err(_) => std::ptr::null(),
        }
    }
}

impl SymbolResolver for PlatformResolver {
    fn resolve(&mut self, symbol: &CStr) -> Option<NonNull<c_void>> {
        let fallback = self
            .get_proc_address
            .map(|get_proc_address| move || unsafe { get_proc_address(symbol.as_ptr()) });
        pick_address(self.exported(symbol), fallback, platform::is_failure)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::ptr;

    use pretty_assertions::assert_eq;

    use super::*;

    fn address(value: isize) -> *const c_void {
        value as *const c_void
    }

    fn found(value: isize) -> Option<NonNull<c_void>> {
        NonNull::new(address(value).cast_mut())
    }

    #[test]
    fn exported_symbols_skip_the_fallback() {
        let asked = Cell::new(false);
        let fallback = || {
            asked.set(true);
            address(0x2000)
        };
        assert_eq!(pick_address(address(0x1000), Some(fallback), is_null), found(0x1000));
        assert!(!asked.get());
    }

    #[test]
    fn missing_exports_use_the_fallback() {
        assert_eq!(pick_address(ptr::null(), Some(|| address(0x2000)), is_null), found(0x2000));
        assert_eq!(pick_address(ptr::null(), Some(|| ptr::null()), is_null), None);

        let no_fallback: Option<fn() -> *const c_void> = None;
        assert_eq!(pick_address(ptr::null(), no_fallback, is_null), None);
    }

    #[test]
    fn wgl_sentinels_are_failures() {
        for sentinel in [0, 1, 2, 3, -1] {
            assert!(is_wgl_failure(address(sentinel)), "{sentinel}");
            assert_eq!(pick_address(ptr::null(), Some(|| address(sentinel)), is_wgl_failure), None);
        }
        assert!(!is_wgl_failure(address(4)));

        // an export of 1 is a sentinel too, so the fallback gets asked
        assert_eq!(pick_address(address(1), Some(|| address(0x3000)), is_wgl_failure), found(0x3000));
    }

    #[test]
    fn only_null_fails_elsewhere() {
        assert!(is_null(ptr::null()));
        assert_eq!(pick_address(address(1), Some(|| ptr::null()), is_null), found(1));
    }
}
