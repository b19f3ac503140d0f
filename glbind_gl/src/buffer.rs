use gl::types::*;
use glbind_utils::transmutable_u32;
use thiserror::Error;

use crate::error::{MethodError, MethodResult};
use crate::has_handle;
use crate::methods::GlMethods;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessFrequency {
    /// Written once, drawn a few times
    Stream,
    /// Written once, drawn many times
    #[default]
    Static,
    /// Rewritten often
    Dynamic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessNature {
    /// Written by the app, read by GL
    #[default]
    Draw,
    /// Written by GL, read by the app
    Read,
    /// Written and read by GL
    Copy,
}

/// A `GL_*_DRAW` / `GL_*_READ` / `GL_*_COPY` usage hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataUsage {
    frequency: AccessFrequency,
    nature: AccessNature,
}

use AccessFrequency as Freq;
use AccessNature as Nat;

impl DataUsage {
    pub const STATIC_DRAW: Self = Self::new(Freq::Static, Nat::Draw);
    pub const DYNAMIC_DRAW: Self = Self::new(Freq::Dynamic, Nat::Draw);
    pub const STREAM_DRAW: Self = Self::new(Freq::Stream, Nat::Draw);

    pub const fn new(frequency: Freq, nature: Nat) -> Self {
        Self { frequency, nature }
    }

    pub const fn to_u32(self) -> u32 {
        match (self.frequency, self.nature) {
            (Freq::Stream, Nat::Draw) => gl::STREAM_DRAW,
            (Freq::Static, Nat::Draw) => gl::STATIC_DRAW,
            (Freq::Dynamic, Nat::Draw) => gl::DYNAMIC_DRAW,

            (Freq::Stream, Nat::Copy) => gl::STREAM_COPY,
            (Freq::Static, Nat::Copy) => gl::STATIC_COPY,
            (Freq::Dynamic, Nat::Copy) => gl::DYNAMIC_COPY,

            (Freq::Stream, Nat::Read) => gl::STREAM_READ,
            (Freq::Static, Nat::Read) => gl::STATIC_READ,
            (Freq::Dynamic, Nat::Read) => gl::DYNAMIC_READ,
        }
    }
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferBindTarget {
    /// Vertex attributes
    Array = gl::ARRAY_BUFFER,
    /// Vertex array indices
    ElementArray = gl::ELEMENT_ARRAY_BUFFER,
    /// Buffer copy source
    CopyRead = gl::COPY_READ_BUFFER,
    /// Buffer copy destination
    CopyWrite = gl::COPY_WRITE_BUFFER,
    /// Indirect command arguments
    DrawIndirect = gl::DRAW_INDIRECT_BUFFER,
    /// Read-write storage for shaders
    ShaderStorage = gl::SHADER_STORAGE_BUFFER,
    /// Texture data buffer
    Texture = gl::TEXTURE_BUFFER,
    /// Uniform block storage
    Uniform = gl::UNIFORM_BUFFER,
}
transmutable_u32!(BufferBindTarget);

impl BufferBindTarget {
    pub const fn can_bind_base(self) -> bool {
        matches!(self, Self::ShaderStorage | Self::Uniform)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("buffer generation failed")]
    Creation,
    #[error("write of {len} bytes at {offset} is outside the {size} byte buffer")]
    OutOfRange { offset: usize, len: usize, size: usize },
    #[error("{target:?} buffers cannot be bound to an indexed binding point")]
    NotIndexed { target: BufferBindTarget },
    #[error(transparent)]
    Method(#[from] MethodError),
}

/// A buffer object created through a [`GlMethods`] table.
///
/// Deleted on drop; the table's context has to be current then.
#[derive(Debug)]
pub struct Buffer<'gl> {
    methods: &'gl GlMethods,
    handle: GLuint,
    target: BufferBindTarget,
    size: usize,
}
has_handle!(Buffer<'_>);

impl Drop for Buffer<'_> {
    fn drop(&mut self) {
        if let Err(err) = unsafe { self.methods.DeleteBuffers(1, &self.handle) } {
            log::warn!("leaking buffer {}: {err}", self.handle);
        }
    }
}

impl<'gl> Buffer<'gl> {
    /// Generates a buffer, binds it to `target` and uploads `data`.
    pub fn new<T: Copy>(
        methods: &'gl GlMethods,
        target: BufferBindTarget,
        data: &[T],
        usage: DataUsage,
    ) -> Result<Self, BufferError> {
        let mut handle = 0;
        unsafe { methods.GenBuffers(1, &mut handle)? };
        if handle == 0 {
            return Err(BufferError::Creation);
        }

        // From here on `Drop` cleans up after a failed call.
        let mut buffer = Self {
            methods,
            handle,
            target,
            size: 0,
        };
        buffer.store_realloc(data, usage)?;
        Ok(buffer)
    }

    pub fn target(&self) -> BufferBindTarget {
        self.target
    }

    /// Size of the data store in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn bind_self(&self) -> MethodResult<()> {
        self.bind_self_to(self.target)
    }

    /// Binds to some other target, e.g. an index buffer as `Array` for a copy.
    pub fn bind_self_to(&self, target: BufferBindTarget) -> MethodResult<()> {
        unsafe { self.methods.BindBuffer(target.to_u32(), self.handle) }
    }

    /// Replaces the data store. Leaves the buffer bound to its target.
    pub fn store_realloc<T: Copy>(&mut self, data: &[T], usage: DataUsage) -> MethodResult<()> {
        let size = std::mem::size_of_val(data);
        self.bind_self()?;
        unsafe {
            self.methods.BufferData(
                self.target.to_u32(),
                size as GLsizeiptr,
                data.as_ptr().cast(),
                usage.to_u32(),
            )?;
        }
        self.size = size;
        Ok(())
    }

    /// Overwrites part of the data store without reallocating.
    pub fn store_in_place<T: Copy>(&self, offset: usize, data: &[T]) -> Result<(), BufferError> {
        let len = std::mem::size_of_val(data);
        if offset.checked_add(len).map_or(true, |end| end > self.size) {
            return Err(BufferError::OutOfRange {
                offset,
                len,
                size: self.size,
            });
        }

        self.bind_self()?;
        unsafe {
            self.methods.BufferSubData(
                self.target.to_u32(),
                offset as GLintptr,
                len as GLsizeiptr,
                data.as_ptr().cast(),
            )?;
        }
        Ok(())
    }

    /// Binds the whole buffer to indexed binding point `index`.
    pub fn bind_base(&self, index: GLuint) -> Result<(), BufferError> {
        if !self.target.can_bind_base() {
            return Err(BufferError::NotIndexed {
                target: self.target,
            });
        }
        unsafe {
            self.methods
                .BindBufferBase(self.target.to_u32(), index, self.handle)?;
        }
        Ok(())
    }
}
