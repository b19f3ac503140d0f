//! Vertex arrays built from format strings.
//!
//! Each [`Content`] pairs a buffer with a format such as `"3f 2f1 x4/i"` and
//! the attribute locations its nodes bind to. Everything is validated before
//! the first GL call, so a bad entry never leaves a half-built vertex array
//! behind.

use std::ffi::c_void;

use gl::types::*;
use glbind_format::{parse_format, AttribFunc, Divisor, FormatError, FormatNode, ParsedFormat};
use thiserror::Error;

use crate::buffer::{Buffer, BufferBindTarget};
use crate::error::{MethodError, MethodResult};
use crate::has_handle;
use crate::methods::{GlMethods, Method};

// Components per attribute location; wider nodes spill into the next ones.
const MAX_COMPONENTS: u32 = 4;

/// One buffer and how its bytes map onto attributes.
#[derive(Debug, Clone, Copy)]
pub struct Content<'a, 'gl> {
    pub buffer: &'a Buffer<'gl>,
    pub format: &'a str,
    /// One entry per non-padding node. `None` skips the node.
    pub locations: &'a [Option<GLuint>],
}

impl<'a, 'gl> Content<'a, 'gl> {
    pub fn new(buffer: &'a Buffer<'gl>, format: &'a str, locations: &'a [Option<GLuint>]) -> Self {
        Self {
            buffer,
            format,
            locations,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content[{index}]: invalid format {format:?} at byte {position}: {error}")]
    InvalidFormat {
        index: usize,
        format: String,
        position: usize,
        error: FormatError,
    },
    #[error("content[{index}]: format has {nodes} attributes but {locations} locations were given")]
    AttributeCount {
        index: usize,
        nodes: u32,
        locations: usize,
    },
    #[error("content[{index}]: buffer of {size} bytes is not a multiple of the {stride} byte stride")]
    BufferSize {
        index: usize,
        size: usize,
        stride: u32,
    },
    #[error("vertex array creation failed")]
    Creation,
    #[error(transparent)]
    Method(#[from] MethodError),
}

/// Entry points [`VertexArray::new`] may call.
pub const REQUIRED_METHODS: &[Method] = &[
    Method::GenVertexArrays,
    Method::BindVertexArray,
    Method::DeleteVertexArrays,
    Method::BindBuffer,
    Method::VertexAttribPointer,
    Method::EnableVertexAttribArray,
];

#[derive(Debug)]
pub struct VertexArray<'gl> {
    methods: &'gl GlMethods,
    handle: GLuint,
    vertices: Option<usize>,
}
has_handle!(VertexArray<'_>);

impl Drop for VertexArray<'_> {
    fn drop(&mut self) {
        if let Err(err) = unsafe { self.methods.DeleteVertexArrays(1, &self.handle) } {
            log::warn!("leaking vertex array {}: {err}", self.handle);
        }
    }
}

impl<'gl> VertexArray<'gl> {
    /// Validates every entry of `contents`, then creates the vertex array and
    /// points its attributes at the buffers.
    pub fn new(
        methods: &'gl GlMethods,
        contents: &[Content<'_, 'gl>],
        index_buffer: Option<&Buffer<'gl>>,
    ) -> Result<Self, ContentError> {
        let parsed = contents
            .iter()
            .enumerate()
            .map(|(index, content)| validate(index, content))
            .collect::<Result<Vec<_>, _>>()?;

        let vertices = contents
            .iter()
            .zip(&parsed)
            .find(|(_, parsed)| parsed.info.divisor == Divisor::PerVertex && parsed.info.size > 0)
            .map(|(content, parsed)| content.buffer.size() / parsed.info.size as usize);

        methods.require(REQUIRED_METHODS)?;
        if let Some(missing) = parsed
            .iter()
            .flat_map(format_methods)
            .find(|&method| !methods.has(method))
        {
            return Err(MethodError::Unsupported(missing).into());
        }

        let mut handle = 0;
        unsafe { methods.GenVertexArrays(1, &mut handle)? };
        if handle == 0 {
            return Err(ContentError::Creation);
        }

        // Dropping on an error below deletes the half-built array.
        let vertex_array = Self {
            methods,
            handle,
            vertices,
        };

        unsafe { methods.BindVertexArray(handle)? };
        for (content, parsed) in contents.iter().zip(&parsed) {
            vertex_array.bind_content(content, parsed)?;
        }
        if let Some(index_buffer) = index_buffer {
            index_buffer.bind_self_to(BufferBindTarget::ElementArray)?;
        }
        unsafe { methods.BindVertexArray(0)? };

        log::debug!(
            "vertex array {handle}: {} buffers, {vertices:?} vertices",
            contents.len()
        );
        Ok(vertex_array)
    }

    /// Vertices in the first per-vertex buffer.
    pub fn vertices(&self) -> Option<usize> {
        self.vertices
    }

    pub fn use_self(&self) -> MethodResult<()> {
        unsafe { self.methods.BindVertexArray(self.handle) }
    }

    fn bind_content(&self, content: &Content<'_, '_>, parsed: &ParsedFormat) -> MethodResult<()> {
        content.buffer.bind_self_to(BufferBindTarget::Array)?;

        let stride = parsed.info.size;
        let divisor = parsed.info.divisor.value();
        let mut locations = content.locations.iter();
        let mut offset = 0;

        for node in &parsed.nodes {
            if !node.is_padding() {
                if let Some(&Some(location)) = locations.next() {
                    self.bind_node(node, location, stride, offset, divisor)?;
                }
            }
            offset += node.size;
        }
        Ok(())
    }

    fn bind_node(
        &self,
        node: &FormatNode,
        location: GLuint,
        stride: u32,
        offset: u32,
        divisor: u32,
    ) -> MethodResult<()> {
        let mut remaining = node.count;
        let mut location = location;
        let mut offset = offset;

        while remaining > 0 {
            let components = remaining.min(MAX_COMPONENTS);
            self.attrib_pointer(node, location, components, stride, offset)?;
            unsafe {
                if divisor != 0 {
                    self.methods.VertexAttribDivisor(location, divisor)?;
                }
                self.methods.EnableVertexAttribArray(location)?;
            }

            remaining -= components;
            offset += components * node.width;
            location += 1;
        }
        Ok(())
    }

    fn attrib_pointer(
        &self,
        node: &FormatNode,
        location: GLuint,
        components: u32,
        stride: u32,
        offset: u32,
    ) -> MethodResult<()> {
        let (Some(func), Some(gl_type)) = (node.attrib_func(), node.gl_type()) else {
            return Ok(());
        };

        let size = components as GLint;
        let stride = stride as GLsizei;
        let pointer = offset as usize as *const c_void;

        unsafe {
            match func {
                AttribFunc::Float => self.methods.VertexAttribPointer(
                    location,
                    size,
                    gl_type,
                    node.normalize as GLboolean,
                    stride,
                    pointer,
                ),
                AttribFunc::Int => {
                    self.methods
                        .VertexAttribIPointer(location, size, gl_type, stride, pointer)
                }
                AttribFunc::Long => {
                    self.methods
                        .VertexAttribLPointer(location, size, gl_type, stride, pointer)
                }
            }
        }
    }
}

/// Entry points a format needs beyond [`REQUIRED_METHODS`].
fn format_methods(parsed: &ParsedFormat) -> impl Iterator<Item = Method> + '_ {
    let divisor = (parsed.info.divisor != Divisor::PerVertex).then_some(Method::VertexAttribDivisor);
    parsed
        .attributes()
        .filter_map(|node| match node.attrib_func()? {
            AttribFunc::Float => None,
            AttribFunc::Int => Some(Method::VertexAttribIPointer),
            AttribFunc::Long => Some(Method::VertexAttribLPointer),
        })
        .chain(divisor)
}

fn validate(index: usize, content: &Content<'_, '_>) -> Result<ParsedFormat, ContentError> {
    let parsed = parse_format(content.format).map_err(|err| ContentError::InvalidFormat {
        index,
        format: content.format.to_string(),
        position: err.index,
        error: err.error,
    })?;

    if parsed.info.nodes as usize != content.locations.len() {
        return Err(ContentError::AttributeCount {
            index,
            nodes: parsed.info.nodes,
            locations: content.locations.len(),
        });
    }

    let stride = parsed.info.size;
    let size = content.buffer.size();
    if stride > 0 && size % stride as usize != 0 {
        return Err(ContentError::BufferSize { index, size, stride });
    }

    Ok(parsed)
}
