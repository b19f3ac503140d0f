//! An in-process stand-in for a GL driver.
//!
//! Every entry point records what it was called with into a thread local, so
//! tests running in parallel never see each other's calls.

use std::cell::{Cell, RefCell};
use std::ffi::{c_void, CStr};
use std::ptr;

use gl::types::*;

use crate::{GlMethods, LoadOptions, TraceMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Enable(GLenum),
    IsEnabled(GLenum),
    GetString(GLenum),
    GenBuffers(GLsizei),
    BindBuffer(GLenum, GLuint),
    BindBufferBase(GLenum, GLuint, GLuint),
    BufferData { target: GLenum, size: GLsizeiptr, usage: GLenum },
    BufferSubData { target: GLenum, offset: GLintptr, size: GLsizeiptr },
    DeleteBuffers(Vec<GLuint>),
    GenVertexArrays(GLsizei),
    BindVertexArray(GLuint),
    DeleteVertexArrays(Vec<GLuint>),
    AttribPointer(Pointer),
    AttribDivisor(GLuint, GLuint),
    EnableAttrib(GLuint),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerFunc {
    Float { normalized: bool },
    Int,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    pub func: PointerFunc,
    pub index: GLuint,
    pub size: GLint,
    pub type_: GLenum,
    pub stride: GLsizei,
    pub offset: usize,
}

thread_local! {
    static CALLS: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
    static PENDING_ERROR: Cell<GLenum> = const { Cell::new(gl::NO_ERROR) };
    static NEXT_HANDLE: Cell<GLuint> = const { Cell::new(1) };
}

fn record(call: Call) {
    CALLS.with_borrow_mut(|calls| calls.push(call));
}

fn next_handles(n: GLsizei, out: *mut GLuint) {
    for i in 0..n.max(0) as usize {
        let handle = NEXT_HANDLE.replace(NEXT_HANDLE.get() + 1);
        unsafe { *out.add(i) = handle };
    }
}

fn read_handles(n: GLsizei, handles: *const GLuint) -> Vec<GLuint> {
    (0..n.max(0) as usize).map(|i| unsafe { *handles.add(i) }).collect()
}

/// Everything recorded since the last call, oldest first.
pub fn take_calls() -> Vec<Call> {
    CALLS.with_borrow_mut(std::mem::take)
}

pub fn set_error(code: GLenum) {
    PENDING_ERROR.set(code);
}

pub fn pending_error() -> GLenum {
    PENDING_ERROR.get()
}

extern "system" fn get_error() -> GLenum {
    PENDING_ERROR.replace(gl::NO_ERROR)
}

// Zero is never a valid capability, so it raises the error tests look for.
extern "system" fn enable(cap: GLenum) {
    if cap == 0 {
        set_error(gl::INVALID_ENUM);
    }
    record(Call::Enable(cap));
}

extern "system" fn is_enabled(cap: GLenum) -> GLboolean {
    record(Call::IsEnabled(cap));
    (cap == gl::BLEND) as GLboolean
}

extern "system" fn get_string(name: GLenum) -> *const GLubyte {
    record(Call::GetString(name));
    let value: &'static [u8] = match name {
        gl::VENDOR => b"Fake Vendor\0",
        gl::RENDERER => b"Fake Renderer\0",
        gl::VERSION => b"4.6.0 Fake\0",
        _ => return ptr::null(),
    };
    value.as_ptr()
}

extern "system" fn gen_buffers(n: GLsizei, buffers: *mut GLuint) {
    record(Call::GenBuffers(n));
    next_handles(n, buffers);
}

extern "system" fn bind_buffer(target: GLenum, buffer: GLuint) {
    record(Call::BindBuffer(target, buffer));
}

extern "system" fn bind_buffer_base(target: GLenum, index: GLuint, buffer: GLuint) {
    record(Call::BindBufferBase(target, index, buffer));
}

extern "system" fn buffer_data(target: GLenum, size: GLsizeiptr, _data: *const c_void, usage: GLenum) {
    record(Call::BufferData { target, size, usage });
}

extern "system" fn buffer_sub_data(target: GLenum, offset: GLintptr, size: GLsizeiptr, _data: *const c_void) {
    record(Call::BufferSubData { target, offset, size });
}

extern "system" fn delete_buffers(n: GLsizei, buffers: *const GLuint) {
    record(Call::DeleteBuffers(read_handles(n, buffers)));
}

extern "system" fn gen_vertex_arrays(n: GLsizei, arrays: *mut GLuint) {
    record(Call::GenVertexArrays(n));
    next_handles(n, arrays);
}

extern "system" fn bind_vertex_array(array: GLuint) {
    record(Call::BindVertexArray(array));
}

extern "system" fn delete_vertex_arrays(n: GLsizei, arrays: *const GLuint) {
    record(Call::DeleteVertexArrays(read_handles(n, arrays)));
}

extern "system" fn vertex_attrib_pointer(
    index: GLuint,
    size: GLint,
    type_: GLenum,
    normalized: GLboolean,
    stride: GLsizei,
    pointer: *const c_void,
) {
    record(Call::AttribPointer(Pointer {
        func: PointerFunc::Float {
            normalized: normalized != gl::FALSE,
        },
        index,
        size,
        type_,
        stride,
        offset: pointer as usize,
    }));
}

extern "system" fn vertex_attrib_i_pointer(
    index: GLuint,
    size: GLint,
    type_: GLenum,
    stride: GLsizei,
    pointer: *const c_void,
) {
    record(Call::AttribPointer(Pointer {
        func: PointerFunc::Int,
        index,
        size,
        type_,
        stride,
        offset: pointer as usize,
    }));
}

extern "system" fn vertex_attrib_l_pointer(
    index: GLuint,
    size: GLint,
    type_: GLenum,
    stride: GLsizei,
    pointer: *const c_void,
) {
    record(Call::AttribPointer(Pointer {
        func: PointerFunc::Long,
        index,
        size,
        type_,
        stride,
        offset: pointer as usize,
    }));
}

extern "system" fn vertex_attrib_divisor(index: GLuint, divisor: GLuint) {
    record(Call::AttribDivisor(index, divisor));
}

extern "system" fn enable_vertex_attrib_array(index: GLuint) {
    record(Call::EnableAttrib(index));
}

/// The fake's `GetProcAddress`. Unknown names resolve to null.
pub fn get_proc_address(symbol: &CStr) -> *const c_void {
    match symbol.to_bytes() {
        b"glGetError" => get_error as *const c_void,
        b"glEnable" => enable as *const c_void,
        b"glIsEnabled" => is_enabled as *const c_void,
        b"glGetString" => get_string as *const c_void,
        b"glGenBuffers" => gen_buffers as *const c_void,
        b"glBindBuffer" => bind_buffer as *const c_void,
        b"glBindBufferBase" => bind_buffer_base as *const c_void,
        b"glBufferData" => buffer_data as *const c_void,
        b"glBufferSubData" => buffer_sub_data as *const c_void,
        b"glDeleteBuffers" => delete_buffers as *const c_void,
        b"glGenVertexArrays" => gen_vertex_arrays as *const c_void,
        b"glBindVertexArray" => bind_vertex_array as *const c_void,
        b"glDeleteVertexArrays" => delete_vertex_arrays as *const c_void,
        b"glVertexAttribPointer" => vertex_attrib_pointer as *const c_void,
        b"glVertexAttribIPointer" => vertex_attrib_i_pointer as *const c_void,
        b"glVertexAttribLPointer" => vertex_attrib_l_pointer as *const c_void,
        b"glVertexAttribDivisor" => vertex_attrib_divisor as *const c_void,
        b"glEnableVertexAttribArray" => enable_vertex_attrib_array as *const c_void,
        _ => ptr::null(),
    }
}

/// Number of symbols [`get_proc_address`] knows.
pub const RESOLVED: usize = 18;

/// A fresh table over the fake, with nothing recorded yet.
pub fn load(trace: TraceMode) -> GlMethods {
    take_calls();
    set_error(gl::NO_ERROR);
    GlMethods::load_with(get_proc_address, LoadOptions::default().with_trace(trace))
}
