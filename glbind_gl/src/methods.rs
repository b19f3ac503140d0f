//! The dispatch table.
//!
//! Every entry point is listed once in [`entry_points`]; the `gl_methods!`
//! macro turns that list into the [`Method`] enum, the symbol names and one
//! typed wrapper per entry point on [`GlMethods`].
//!
//! # Safety
//!
//! The wrappers are `unsafe` for the same reasons raw GL calls are: the
//! context the table was loaded for must be current on the calling thread and
//! pointer arguments must be valid for what the entry point does with them.
//! A wrapper never calls a null pointer; it returns
//! [`MethodError::Unsupported`] instead.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::{c_void, CStr};
use std::fmt::{Debug, Formatter};
use std::ptr::{self, NonNull};
use std::str::FromStr;

use gl::types::GLenum;
use glbind_utils::{words_for, BitSet, OptExt};

use crate::config::LoadOptions;
use crate::error::{GlError, MethodError, MethodResult};
use crate::loader::{LoaderResult, PlatformResolver, SymbolResolver};
use crate::trace::{LogSink, TraceEvent, TraceMode, TraceSink};

macro_rules! gl_methods {
    (@ret) => { () };
    (@ret $ret:ty) => { $ret };
    (
        manual {
            $(fn $manual:ident($($manual_arg:ident: $manual_ty:ty),* $(,)?) $(-> $manual_ret:ty)?;)*
        }
        $(
            fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)? $([$($traced:ident),+ $(,)?])?;
        )*
    ) => {
        /// One variant per entry point the table resolves.
        #[allow(non_camel_case_types)]
        #[repr(u16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Method {
            $($manual,)*
            $($name,)*
        }

        impl Method {
            pub const ALL: &'static [Method] = &[$(Method::$manual,)* $(Method::$name,)*];

            /// Name without the `gl` prefix, `BindBuffer`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Method::$manual => stringify!($manual),)*
                    $(Method::$name => stringify!($name),)*
                }
            }

            /// Exported symbol, `glBindBuffer`.
            pub const fn symbol(self) -> &'static str {
                match self {
                    $(Method::$manual => concat!("gl", stringify!($manual)),)*
                    $(Method::$name => concat!("gl", stringify!($name)),)*
                }
            }

            pub(super) fn symbol_with_nul(self) -> &'static str {
                match self {
                    $(Method::$manual => concat!("gl", stringify!($manual), "\0"),)*
                    $(Method::$name => concat!("gl", stringify!($name), "\0"),)*
                }
            }
        }

        #[allow(non_snake_case, clippy::too_many_arguments, clippy::missing_safety_doc)]
        impl GlMethods {
            $(
                #[inline]
                pub unsafe fn $name(&self, $($arg: $ty),*) -> MethodResult<gl_methods!(@ret $($ret)?)> {
                    type Func = unsafe extern "system" fn($($ty),*) $(-> $ret)?;
                    let ptr = self.require_ptr(Method::$name)?;
                    let func = unsafe { std::mem::transmute::<*const c_void, Func>(ptr) };
                    let result = unsafe { func($($arg),*) };
                    self.record_call(Method::$name, &[$($($traced as i64),+)?]);
                    Ok(result)
                }
            )*
        }
    };
}

mod entry_points;

pub use entry_points::Method;

impl Method {
    pub const COUNT: usize = Self::ALL.len();

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn c_symbol(self) -> &'static CStr {
        CStr::from_bytes_with_nul(self.symbol_with_nul().as_bytes()).unwrap_unreach()
    }
}

impl FromStr for Method {
    type Err = MethodError;

    /// Accepts both `BindBuffer` and `glBindBuffer`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix("gl").unwrap_or(s);
        Self::ALL
            .iter()
            .copied()
            .find(|method| method.name() == name)
            .ok_or_else(|| MethodError::UnknownName(s.to_string()))
    }
}

type GetErrorFunc = unsafe extern "system" fn() -> GLenum;

/// Which entry points resolved to a non-null pointer.
pub type Availability = BitSet<{ words_for(Method::COUNT) }>;

/// Resolved GL entry points for one context.
pub struct GlMethods {
    pointers: [*const c_void; Method::COUNT],
    has: Availability,
    trace: TraceMode,
    sink: Box<dyn TraceSink>,
    // Error flags the tracer popped from the driver, oldest first. At most one
    // per error code, like the flags themselves.
    traced_errors: RefCell<VecDeque<GlError>>,
    // Keeps the GL library mapped while `pointers` point into it.
    _library: Option<libloading::Library>,
}

impl Debug for GlMethods {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlMethods")
            .field("resolved", &self.resolved_count())
            .field("total", &Method::COUNT)
            .field("trace", &self.trace)
            .finish_non_exhaustive()
    }
}

impl GlMethods {
    /// Resolves every entry point through `get_proc_address`, once each.
    ///
    /// Never fails: an entry point the driver lacks is only marked as missing.
    pub fn load_with(
        mut get_proc_address: impl FnMut(&CStr) -> *const c_void,
        options: LoadOptions,
    ) -> Self {
        let mut pointers = [ptr::null(); Method::COUNT];
        let mut has = Availability::new();

        for &method in Method::ALL {
            let address = get_proc_address(method.c_symbol());
            has.set(method.index(), !address.is_null());
            pointers[method.index()] = address;
            if address.is_null() {
                log::trace!("{} is not available", method.symbol());
            }
        }

        log::debug!(
            "resolved {}/{} GL entry points",
            has.len(),
            Method::COUNT
        );

        Self {
            pointers,
            has,
            trace: options.trace,
            sink: Box::new(LogSink),
            traced_errors: RefCell::default(),
            _library: None,
        }
    }

    pub fn load(resolver: &mut impl SymbolResolver, options: LoadOptions) -> Self {
        Self::load_with(
            |symbol| resolver.resolve(symbol).map_or(ptr::null(), |p| p.as_ptr().cast_const()),
            options,
        )
    }

    /// Loads through the platform GL library and keeps it open for the
    /// table's lifetime.
    pub fn load_platform(options: LoadOptions) -> LoaderResult<Self> {
        let mut resolver = PlatformResolver::open()?;
        let mut methods = Self::load(&mut resolver, options);
        methods._library = Some(resolver.into_library());
        Ok(methods)
    }

    pub fn with_sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn set_trace_mode(&mut self, trace: TraceMode) {
        self.trace = trace;
    }

    pub fn trace_mode(&self) -> TraceMode {
        self.trace
    }

    /// `glGetError`.
    ///
    /// Flags that tracing already read off the driver are returned first, so
    /// the result is the same with tracing on or off.
    ///
    /// # Safety
    ///
    /// The table's context must be current on this thread.
    #[allow(non_snake_case)]
    pub unsafe fn GetError(&self) -> MethodResult<GLenum> {
        let ptr = self.require_ptr(Method::GetError)?;
        if let Some(error) = self.traced_errors.borrow_mut().pop_front() {
            return Ok(error.code());
        }
        let get_error = unsafe { std::mem::transmute::<*const c_void, GetErrorFunc>(ptr) };
        Ok(unsafe { get_error() })
    }

    #[inline]
    pub fn has(&self, method: Method) -> bool {
        self.has.contains(method.index())
    }

    #[inline]
    pub fn get(&self, method: Method) -> Option<NonNull<c_void>> {
        NonNull::new(self.pointers[method.index()].cast_mut())
    }

    pub fn availability(&self) -> &Availability {
        &self.has
    }

    pub fn resolved_count(&self) -> usize {
        self.has.len()
    }

    pub fn missing(&self) -> impl Iterator<Item = Method> + '_ {
        Method::ALL.iter().copied().filter(|&m| !self.has(m))
    }

    /// Errors with the first method of `methods` the context lacks.
    pub fn require(&self, methods: &[Method]) -> MethodResult<()> {
        match methods.iter().find(|&&m| !self.has(m)) {
            Some(&missing) => Err(MethodError::Unsupported(missing)),
            None => Ok(()),
        }
    }

    #[inline]
    fn require_ptr(&self, method: Method) -> MethodResult<*const c_void> {
        self.get(method)
            .map(|p| p.as_ptr().cast_const())
            .ok_or(MethodError::Unsupported(method))
    }

    fn record_call(&self, method: Method, args: &[i64]) {
        if self.trace == TraceMode::Off {
            return;
        }

        let error = self.raw_error();
        if let Some(error) = error {
            let mut traced_errors = self.traced_errors.borrow_mut();
            if !traced_errors.contains(&error) {
                traced_errors.push_back(error);
            }
        } else if self.trace == TraceMode::ErrorsOnly {
            return;
        }

        self.sink.record(&TraceEvent {
            method,
            error,
            args,
        });
    }

    /// Asks the driver directly, skipping `traced_errors`.
    fn raw_error(&self) -> Option<GlError> {
        let ptr = self.get(Method::GetError)?;
        let get_error = unsafe { std::mem::transmute::<*mut c_void, GetErrorFunc>(ptr.as_ptr()) };
        GlError::from_code(unsafe { get_error() })
    }
}
