//! Core profile entry points, GL 1.0 through 4.6.
//!
//! `fn Name(args) -> Ret [traced args];` resolves `glName`. Arguments listed
//! in brackets are copied into the [`TraceEvent`](crate::trace::TraceEvent)
//! of each call. Entries in the `manual` block get a [`Method`] variant but
//! no generated wrapper.

use std::ffi::c_void;

use gl::types::*;

use super::GlMethods;
use crate::error::MethodResult;

gl_methods! {
    // Wrapped by hand in `methods.rs`.
    manual {
        fn GetError() -> GLenum;
    }

    // 1.0
    fn CullFace(mode: GLenum) [mode];
    fn FrontFace(mode: GLenum) [mode];
    fn Hint(target: GLenum, mode: GLenum) [target, mode];
    fn LineWidth(width: GLfloat);
    fn PointSize(size: GLfloat);
    fn PolygonMode(face: GLenum, mode: GLenum) [face, mode];
    fn Scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei) [x, y, width, height];
    fn TexParameterf(target: GLenum, pname: GLenum, param: GLfloat) [target, pname];
    fn TexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat) [target, pname];
    fn TexParameteri(target: GLenum, pname: GLenum, param: GLint) [target, pname, param];
    fn TexParameteriv(target: GLenum, pname: GLenum, params: *const GLint) [target, pname];
    fn TexImage1D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void) [target, level, internalformat, width];
    fn TexImage2D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void) [target, level, internalformat, width, height];
    fn DrawBuffer(buf: GLenum) [buf];
    fn Clear(mask: GLbitfield) [mask];
    fn ClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    fn ClearStencil(s: GLint) [s];
    fn ClearDepth(depth: GLdouble);
    fn StencilMask(mask: GLuint) [mask];
    fn ColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean) [red, green, blue, alpha];
    fn DepthMask(flag: GLboolean) [flag];
    fn Disable(cap: GLenum) [cap];
    fn Enable(cap: GLenum) [cap];
    fn Finish();
    fn Flush();
    fn BlendFunc(sfactor: GLenum, dfactor: GLenum) [sfactor, dfactor];
    fn LogicOp(opcode: GLenum) [opcode];
    fn StencilFunc(func: GLenum, ref_: GLint, mask: GLuint) [func, ref_, mask];
    fn StencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum) [fail, zfail, zpass];
    fn DepthFunc(func: GLenum) [func];
    fn PixelStoref(pname: GLenum, param: GLfloat) [pname];
    fn PixelStorei(pname: GLenum, param: GLint) [pname, param];
    fn ReadBuffer(src: GLenum) [src];
    fn ReadPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *mut c_void) [x, y, width, height, format, type_];
    fn GetBooleanv(pname: GLenum, data: *mut GLboolean);
    fn GetDoublev(pname: GLenum, data: *mut GLdouble);
    fn GetFloatv(pname: GLenum, data: *mut GLfloat);
    fn GetIntegerv(pname: GLenum, data: *mut GLint);
    fn GetString(name: GLenum) -> *const GLubyte;
    fn GetTexImage(target: GLenum, level: GLint, format: GLenum, type_: GLenum, pixels: *mut c_void);
    fn GetTexParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat);
    fn GetTexParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    fn GetTexLevelParameterfv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLfloat);
    fn GetTexLevelParameteriv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLint);
    fn IsEnabled(cap: GLenum) -> GLboolean;
    fn DepthRange(n: GLdouble, f: GLdouble);
    fn Viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei) [x, y, width, height];

    // 1.1
    fn DrawArrays(mode: GLenum, first: GLint, count: GLsizei) [mode, first, count];
    fn DrawElements(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void) [mode, count, type_];
    fn PolygonOffset(factor: GLfloat, units: GLfloat);
    fn CopyTexImage1D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, border: GLint);
    fn CopyTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint);
    fn CopyTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei);
    fn CopyTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn TexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void) [target, level, xoffset, width];
    fn TexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void) [target, level, xoffset, yoffset, width, height];
    fn BindTexture(target: GLenum, texture: GLuint) [target, texture];
    fn DeleteTextures(n: GLsizei, textures: *const GLuint) [n];
    fn GenTextures(n: GLsizei, textures: *mut GLuint) [n];
    fn IsTexture(texture: GLuint) -> GLboolean;

    // 1.2
    fn DrawRangeElements(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, type_: GLenum, indices: *const c_void) [mode, start, end, count, type_];
    fn TexImage3D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void) [target, level, internalformat, width, height, depth];
    fn TexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
    fn CopyTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);

    // 1.3
    fn ActiveTexture(texture: GLenum) [texture];
    fn SampleCoverage(value: GLfloat, invert: GLboolean);
    fn CompressedTexImage3D(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void);
    fn CompressedTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void);
    fn CompressedTexImage1D(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void);
    fn CompressedTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
    fn CompressedTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
    fn CompressedTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
    fn GetCompressedTexImage(target: GLenum, level: GLint, img: *mut c_void);

    // 1.4
    fn BlendFuncSeparate(sfactor_rgb: GLenum, dfactor_rgb: GLenum, sfactor_alpha: GLenum, dfactor_alpha: GLenum) [sfactor_rgb, dfactor_rgb, sfactor_alpha, dfactor_alpha];
    fn MultiDrawArrays(mode: GLenum, first: *const GLint, count: *const GLsizei, drawcount: GLsizei) [mode, drawcount];
    fn MultiDrawElements(mode: GLenum, count: *const GLsizei, type_: GLenum, indices: *const *const c_void, drawcount: GLsizei) [mode, type_, drawcount];
    fn PointParameterf(pname: GLenum, param: GLfloat) [pname];
    fn PointParameterfv(pname: GLenum, params: *const GLfloat) [pname];
    fn PointParameteri(pname: GLenum, param: GLint) [pname, param];
    fn PointParameteriv(pname: GLenum, params: *const GLint) [pname];
    fn BlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    fn BlendEquation(mode: GLenum) [mode];

    // 1.5
    fn GenQueries(n: GLsizei, ids: *mut GLuint) [n];
    fn DeleteQueries(n: GLsizei, ids: *const GLuint) [n];
    fn IsQuery(id: GLuint) -> GLboolean;
    fn BeginQuery(target: GLenum, id: GLuint) [target, id];
    fn EndQuery(target: GLenum) [target];
    fn GetQueryiv(target: GLenum, pname: GLenum, params: *mut GLint);
    fn GetQueryObjectiv(id: GLuint, pname: GLenum, params: *mut GLint);
    fn GetQueryObjectuiv(id: GLuint, pname: GLenum, params: *mut GLuint);
    fn BindBuffer(target: GLenum, buffer: GLuint) [target, buffer];
    fn DeleteBuffers(n: GLsizei, buffers: *const GLuint) [n];
    fn GenBuffers(n: GLsizei, buffers: *mut GLuint) [n];
    fn IsBuffer(buffer: GLuint) -> GLboolean;
    fn BufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum) [target, size, usage];
    fn BufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void) [target, offset, size];
    fn GetBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *mut c_void) [target, offset, size];
    fn MapBuffer(target: GLenum, access: GLenum) -> *mut c_void [target, access];
    fn UnmapBuffer(target: GLenum) -> GLboolean [target];
    fn GetBufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    fn GetBufferPointerv(target: GLenum, pname: GLenum, params: *mut *mut c_void);

    // 2.0
    fn BlendEquationSeparate(mode_rgb: GLenum, mode_alpha: GLenum) [mode_rgb, mode_alpha];
    fn DrawBuffers(n: GLsizei, bufs: *const GLenum) [n];
    fn StencilOpSeparate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum) [face, sfail, dpfail, dppass];
    fn StencilFuncSeparate(face: GLenum, func: GLenum, ref_: GLint, mask: GLuint) [face, func, ref_, mask];
    fn StencilMaskSeparate(face: GLenum, mask: GLuint) [face, mask];
    fn AttachShader(program: GLuint, shader: GLuint) [program, shader];
    fn BindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar) [program, index];
    fn CompileShader(shader: GLuint) [shader];
    fn CreateProgram() -> GLuint;
    fn CreateShader(type_: GLenum) -> GLuint [type_];
    fn DeleteProgram(program: GLuint) [program];
    fn DeleteShader(shader: GLuint) [shader];
    fn DetachShader(program: GLuint, shader: GLuint) [program, shader];
    fn DisableVertexAttribArray(index: GLuint) [index];
    fn EnableVertexAttribArray(index: GLuint) [index];
    fn GetActiveAttrib(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar);
    fn GetActiveUniform(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar);
    fn GetAttachedShaders(program: GLuint, max_count: GLsizei, count: *mut GLsizei, shaders: *mut GLuint);
    fn GetAttribLocation(program: GLuint, name: *const GLchar) -> GLint [program];
    fn GetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
    fn GetProgramInfoLog(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
    fn GetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint);
    fn GetShaderInfoLog(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
    fn GetShaderSource(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, source: *mut GLchar);
    fn GetUniformLocation(program: GLuint, name: *const GLchar) -> GLint [program];
    fn GetUniformfv(program: GLuint, location: GLint, params: *mut GLfloat);
    fn GetUniformiv(program: GLuint, location: GLint, params: *mut GLint);
    fn GetVertexAttribdv(index: GLuint, pname: GLenum, params: *mut GLdouble);
    fn GetVertexAttribfv(index: GLuint, pname: GLenum, params: *mut GLfloat);
    fn GetVertexAttribiv(index: GLuint, pname: GLenum, params: *mut GLint);
    fn GetVertexAttribPointerv(index: GLuint, pname: GLenum, pointer: *mut *mut c_void);
    fn IsProgram(program: GLuint) -> GLboolean;
    fn IsShader(shader: GLuint) -> GLboolean;
    fn LinkProgram(program: GLuint) [program];
    fn ShaderSource(shader: GLuint, count: GLsizei, string: *const *const GLchar, length: *const GLint) [shader, count];
    fn UseProgram(program: GLuint) [program];
    fn Uniform1f(location: GLint, v0: GLfloat) [location];
    fn Uniform2f(location: GLint, v0: GLfloat, v1: GLfloat) [location];
    fn Uniform3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat) [location];
    fn Uniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat) [location];
    fn Uniform1i(location: GLint, v0: GLint) [location, v0];
    fn Uniform2i(location: GLint, v0: GLint, v1: GLint) [location, v0, v1];
    fn Uniform3i(location: GLint, v0: GLint, v1: GLint, v2: GLint) [location, v0, v1, v2];
    fn Uniform4i(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint) [location, v0, v1, v2, v3];
    fn Uniform1fv(location: GLint, count: GLsizei, value: *const GLfloat) [location, count];
    fn Uniform2fv(location: GLint, count: GLsizei, value: *const GLfloat) [location, count];
    fn Uniform3fv(location: GLint, count: GLsizei, value: *const GLfloat) [location, count];
    fn Uniform4fv(location: GLint, count: GLsizei, value: *const GLfloat) [location, count];
    fn Uniform1iv(location: GLint, count: GLsizei, value: *const GLint) [location, count];
    fn Uniform2iv(location: GLint, count: GLsizei, value: *const GLint) [location, count];
    fn Uniform3iv(location: GLint, count: GLsizei, value: *const GLint) [location, count];
    fn Uniform4iv(location: GLint, count: GLsizei, value: *const GLint) [location, count];
    fn UniformMatrix2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) [location, count, transpose];
    fn UniformMatrix3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) [location, count, transpose];
    fn UniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) [location, count, transpose];
    fn ValidateProgram(program: GLuint) [program];
    fn VertexAttrib1f(index: GLuint, x: GLfloat) [index];
    fn VertexAttrib2f(index: GLuint, x: GLfloat, y: GLfloat) [index];
    fn VertexAttrib3f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat) [index];
    fn VertexAttrib4f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) [index];
    fn VertexAttrib4fv(index: GLuint, v: *const GLfloat) [index];
    fn VertexAttribPointer(index: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, stride: GLsizei, pointer: *const c_void) [index, size, type_, normalized, stride];

    // 2.1
    fn UniformMatrix2x3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) [location, count, transpose];
    fn UniformMatrix3x2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) [location, count, transpose];
    fn UniformMatrix2x4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) [location, count, transpose];
    fn UniformMatrix4x2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) [location, count, transpose];
    fn UniformMatrix3x4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) [location, count, transpose];
    fn UniformMatrix4x3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) [location, count, transpose];

    // 3.0
    fn ColorMaski(index: GLuint, r: GLboolean, g: GLboolean, b: GLboolean, a: GLboolean) [index, r, g, b, a];
    fn GetBooleani_v(target: GLenum, index: GLuint, data: *mut GLboolean);
    fn GetIntegeri_v(target: GLenum, index: GLuint, data: *mut GLint);
    fn Enablei(target: GLenum, index: GLuint) [target, index];
    fn Disablei(target: GLenum, index: GLuint) [target, index];
    fn IsEnabledi(target: GLenum, index: GLuint) -> GLboolean;
    fn BeginTransformFeedback(primitive_mode: GLenum) [primitive_mode];
    fn EndTransformFeedback();
    fn BindBufferRange(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr, size: GLsizeiptr) [target, index, buffer, offset, size];
    fn BindBufferBase(target: GLenum, index: GLuint, buffer: GLuint) [target, index, buffer];
    fn TransformFeedbackVaryings(program: GLuint, count: GLsizei, varyings: *const *const GLchar, buffer_mode: GLenum) [program, count, buffer_mode];
    fn GetTransformFeedbackVarying(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLsizei, type_: *mut GLenum, name: *mut GLchar);
    fn ClampColor(target: GLenum, clamp: GLenum) [target, clamp];
    fn BeginConditionalRender(id: GLuint, mode: GLenum) [id, mode];
    fn EndConditionalRender();
    fn VertexAttribIPointer(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void) [index, size, type_, stride];
    fn GetVertexAttribIiv(index: GLuint, pname: GLenum, params: *mut GLint);
    fn GetVertexAttribIuiv(index: GLuint, pname: GLenum, params: *mut GLuint);
    fn VertexAttribI4i(index: GLuint, x: GLint, y: GLint, z: GLint, w: GLint) [index, x, y, z, w];
    fn VertexAttribI4ui(index: GLuint, x: GLuint, y: GLuint, z: GLuint, w: GLuint) [index, x, y, z, w];
    fn VertexAttribI4iv(index: GLuint, v: *const GLint) [index];
    fn VertexAttribI4uiv(index: GLuint, v: *const GLuint) [index];
    fn GetUniformuiv(program: GLuint, location: GLint, params: *mut GLuint);
    fn BindFragDataLocation(program: GLuint, color: GLuint, name: *const GLchar) [program, color];
    fn GetFragDataLocation(program: GLuint, name: *const GLchar) -> GLint [program];
    fn Uniform1ui(location: GLint, v0: GLuint) [location, v0];
    fn Uniform2ui(location: GLint, v0: GLuint, v1: GLuint) [location, v0, v1];
    fn Uniform3ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint) [location, v0, v1, v2];
    fn Uniform4ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint) [location, v0, v1, v2, v3];
    fn Uniform1uiv(location: GLint, count: GLsizei, value: *const GLuint) [location, count];
    fn Uniform2uiv(location: GLint, count: GLsizei, value: *const GLuint) [location, count];
    fn Uniform3uiv(location: GLint, count: GLsizei, value: *const GLuint) [location, count];
    fn Uniform4uiv(location: GLint, count: GLsizei, value: *const GLuint) [location, count];
    fn TexParameterIiv(target: GLenum, pname: GLenum, params: *const GLint) [target, pname];
    fn TexParameterIuiv(target: GLenum, pname: GLenum, params: *const GLuint) [target, pname];
    fn GetTexParameterIiv(target: GLenum, pname: GLenum, params: *mut GLint);
    fn GetTexParameterIuiv(target: GLenum, pname: GLenum, params: *mut GLuint);
    fn ClearBufferiv(buffer: GLenum, drawbuffer: GLint, value: *const GLint) [buffer, drawbuffer];
    fn ClearBufferuiv(buffer: GLenum, drawbuffer: GLint, value: *const GLuint) [buffer, drawbuffer];
    fn ClearBufferfv(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat) [buffer, drawbuffer];
    fn ClearBufferfi(buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint) [buffer, drawbuffer, stencil];
    fn GetStringi(name: GLenum, index: GLuint) -> *const GLubyte;
    fn IsRenderbuffer(renderbuffer: GLuint) -> GLboolean;
    fn BindRenderbuffer(target: GLenum, renderbuffer: GLuint) [target, renderbuffer];
    fn DeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint) [n];
    fn GenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint) [n];
    fn RenderbufferStorage(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei) [target, internalformat, width, height];
    fn GetRenderbufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    fn IsFramebuffer(framebuffer: GLuint) -> GLboolean;
    fn BindFramebuffer(target: GLenum, framebuffer: GLuint) [target, framebuffer];
    fn DeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint) [n];
    fn GenFramebuffers(n: GLsizei, framebuffers: *mut GLuint) [n];
    fn CheckFramebufferStatus(target: GLenum) -> GLenum [target];
    fn FramebufferTexture1D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint) [target, attachment, textarget, texture, level];
    fn FramebufferTexture2D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint) [target, attachment, textarget, texture, level];
    fn FramebufferTexture3D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint, zoffset: GLint) [target, attachment, textarget, texture, level, zoffset];
    fn FramebufferRenderbuffer(target: GLenum, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint) [target, attachment, renderbuffertarget, renderbuffer];
    fn GetFramebufferAttachmentParameteriv(target: GLenum, attachment: GLenum, pname: GLenum, params: *mut GLint);
    fn GenerateMipmap(target: GLenum) [target];
    fn BlitFramebuffer(src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint, dst_x0: GLint, dst_y0: GLint, dst_x1: GLint, dst_y1: GLint, mask: GLbitfield, filter: GLenum) [mask, filter];
    fn RenderbufferStorageMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei) [target, samples, internalformat, width, height];
    fn FramebufferTextureLayer(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint) [target, attachment, texture, level, layer];
    fn MapBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut c_void [target, offset, length, access];
    fn FlushMappedBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr) [target, offset, length];
    fn BindVertexArray(array: GLuint) [array];
    fn DeleteVertexArrays(n: GLsizei, arrays: *const GLuint) [n];
    fn GenVertexArrays(n: GLsizei, arrays: *mut GLuint) [n];
    fn IsVertexArray(array: GLuint) -> GLboolean;

    // 3.1
    fn DrawArraysInstanced(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei) [mode, first, count, instancecount];
    fn DrawElementsInstanced(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei) [mode, count, type_, instancecount];
    fn TexBuffer(target: GLenum, internalformat: GLenum, buffer: GLuint) [target, internalformat, buffer];
    fn PrimitiveRestartIndex(index: GLuint) [index];
    fn CopyBufferSubData(read_target: GLenum, write_target: GLenum, read_offset: GLintptr, write_offset: GLintptr, size: GLsizeiptr) [read_target, write_target, read_offset, write_offset, size];
    fn GetUniformIndices(program: GLuint, uniform_count: GLsizei, uniform_names: *const *const GLchar, uniform_indices: *mut GLuint);
    fn GetActiveUniformsiv(program: GLuint, uniform_count: GLsizei, uniform_indices: *const GLuint, pname: GLenum, params: *mut GLint);
    fn GetActiveUniformName(program: GLuint, uniform_index: GLuint, buf_size: GLsizei, length: *mut GLsizei, uniform_name: *mut GLchar);
    fn GetUniformBlockIndex(program: GLuint, uniform_block_name: *const GLchar) -> GLuint [program];
    fn GetActiveUniformBlockiv(program: GLuint, uniform_block_index: GLuint, pname: GLenum, params: *mut GLint);
    fn GetActiveUniformBlockName(program: GLuint, uniform_block_index: GLuint, buf_size: GLsizei, length: *mut GLsizei, uniform_block_name: *mut GLchar);
    fn UniformBlockBinding(program: GLuint, uniform_block_index: GLuint, uniform_block_binding: GLuint) [program, uniform_block_index, uniform_block_binding];

    // 3.2
    fn DrawElementsBaseVertex(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, basevertex: GLint) [mode, count, type_, basevertex];
    fn DrawRangeElementsBaseVertex(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, type_: GLenum, indices: *const c_void, basevertex: GLint) [mode, start, end, count, type_, basevertex];
    fn DrawElementsInstancedBaseVertex(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, basevertex: GLint) [mode, count, type_, instancecount, basevertex];
    fn MultiDrawElementsBaseVertex(mode: GLenum, count: *const GLsizei, type_: GLenum, indices: *const *const c_void, drawcount: GLsizei, basevertex: *const GLint) [mode, type_, drawcount];
    fn ProvokingVertex(mode: GLenum) [mode];
    fn FenceSync(condition: GLenum, flags: GLbitfield) -> GLsync [condition, flags];
    fn IsSync(sync: GLsync) -> GLboolean;
    fn DeleteSync(sync: GLsync);
    fn ClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum [flags];
    fn WaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) [flags];
    fn GetInteger64v(pname: GLenum, data: *mut GLint64);
    fn GetSynciv(sync: GLsync, pname: GLenum, count: GLsizei, length: *mut GLsizei, values: *mut GLint);
    fn GetInteger64i_v(target: GLenum, index: GLuint, data: *mut GLint64);
    fn GetBufferParameteri64v(target: GLenum, pname: GLenum, params: *mut GLint64);
    fn FramebufferTexture(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint) [target, attachment, texture, level];
    fn TexImage2DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean) [target, samples, internalformat, width, height];
    fn TexImage3DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean) [target, samples, internalformat, width, height, depth];
    fn GetMultisamplefv(pname: GLenum, index: GLuint, val: *mut GLfloat);
    fn SampleMaski(mask_number: GLuint, mask: GLbitfield) [mask_number, mask];

    // 3.3
    fn BindFragDataLocationIndexed(program: GLuint, color_number: GLuint, index: GLuint, name: *const GLchar) [program, color_number, index];
    fn GetFragDataIndex(program: GLuint, name: *const GLchar) -> GLint [program];
    fn GenSamplers(count: GLsizei, samplers: *mut GLuint) [count];
    fn DeleteSamplers(count: GLsizei, samplers: *const GLuint) [count];
    fn IsSampler(sampler: GLuint) -> GLboolean;
    fn BindSampler(unit: GLuint, sampler: GLuint) [unit, sampler];
    fn SamplerParameteri(sampler: GLuint, pname: GLenum, param: GLint) [sampler, pname, param];
    fn SamplerParameteriv(sampler: GLuint, pname: GLenum, param: *const GLint) [sampler, pname];
    fn SamplerParameterf(sampler: GLuint, pname: GLenum, param: GLfloat) [sampler, pname];
    fn SamplerParameterfv(sampler: GLuint, pname: GLenum, param: *const GLfloat) [sampler, pname];
    fn SamplerParameterIiv(sampler: GLuint, pname: GLenum, param: *const GLint) [sampler, pname];
    fn SamplerParameterIuiv(sampler: GLuint, pname: GLenum, param: *const GLuint) [sampler, pname];
    fn GetSamplerParameteriv(sampler: GLuint, pname: GLenum, params: *mut GLint);
    fn GetSamplerParameterIiv(sampler: GLuint, pname: GLenum, params: *mut GLint);
    fn GetSamplerParameterfv(sampler: GLuint, pname: GLenum, params: *mut GLfloat);
    fn GetSamplerParameterIuiv(sampler: GLuint, pname: GLenum, params: *mut GLuint);
    fn QueryCounter(id: GLuint, target: GLenum) [id, target];
    fn GetQueryObjecti64v(id: GLuint, pname: GLenum, params: *mut GLint64);
    fn GetQueryObjectui64v(id: GLuint, pname: GLenum, params: *mut GLuint64);
    fn VertexAttribDivisor(index: GLuint, divisor: GLuint) [index, divisor];

    // 4.0
    fn MinSampleShading(value: GLfloat);
    fn BlendEquationi(buf: GLuint, mode: GLenum) [buf, mode];
    fn BlendEquationSeparatei(buf: GLuint, mode_rgb: GLenum, mode_alpha: GLenum) [buf, mode_rgb, mode_alpha];
    fn BlendFunci(buf: GLuint, src: GLenum, dst: GLenum) [buf, src, dst];
    fn BlendFuncSeparatei(buf: GLuint, src_rgb: GLenum, dst_rgb: GLenum, src_alpha: GLenum, dst_alpha: GLenum) [buf, src_rgb, dst_rgb, src_alpha, dst_alpha];
    fn DrawArraysIndirect(mode: GLenum, indirect: *const c_void) [mode];
    fn DrawElementsIndirect(mode: GLenum, type_: GLenum, indirect: *const c_void) [mode, type_];
    fn Uniform1d(location: GLint, x: GLdouble) [location];
    fn Uniform2d(location: GLint, x: GLdouble, y: GLdouble) [location];
    fn Uniform3d(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble) [location];
    fn Uniform4d(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble) [location];
    fn Uniform1dv(location: GLint, count: GLsizei, value: *const GLdouble) [location, count];
    fn Uniform2dv(location: GLint, count: GLsizei, value: *const GLdouble) [location, count];
    fn Uniform3dv(location: GLint, count: GLsizei, value: *const GLdouble) [location, count];
    fn Uniform4dv(location: GLint, count: GLsizei, value: *const GLdouble) [location, count];
    fn UniformMatrix2dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble) [location, count, transpose];
    fn UniformMatrix3dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble) [location, count, transpose];
    fn UniformMatrix4dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble) [location, count, transpose];
    fn UniformMatrix2x3dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble) [location, count, transpose];
    fn UniformMatrix2x4dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble) [location, count, transpose];
    fn UniformMatrix3x2dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble) [location, count, transpose];
    fn UniformMatrix3x4dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble) [location, count, transpose];
    fn UniformMatrix4x2dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble) [location, count, transpose];
    fn UniformMatrix4x3dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble) [location, count, transpose];
    fn GetUniformdv(program: GLuint, location: GLint, params: *mut GLdouble);
    fn GetSubroutineUniformLocation(program: GLuint, shadertype: GLenum, name: *const GLchar) -> GLint [program, shadertype];
    fn GetSubroutineIndex(program: GLuint, shadertype: GLenum, name: *const GLchar) -> GLuint [program, shadertype];
    fn GetActiveSubroutineUniformiv(program: GLuint, shadertype: GLenum, index: GLuint, pname: GLenum, values: *mut GLint);
    fn GetActiveSubroutineUniformName(program: GLuint, shadertype: GLenum, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, name: *mut GLchar);
    fn GetActiveSubroutineName(program: GLuint, shadertype: GLenum, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, name: *mut GLchar);
    fn UniformSubroutinesuiv(shadertype: GLenum, count: GLsizei, indices: *const GLuint) [shadertype, count];
    fn GetUniformSubroutineuiv(shadertype: GLenum, location: GLint, params: *mut GLuint);
    fn GetProgramStageiv(program: GLuint, shadertype: GLenum, pname: GLenum, values: *mut GLint);
    fn PatchParameteri(pname: GLenum, value: GLint) [pname, value];
    fn PatchParameterfv(pname: GLenum, values: *const GLfloat) [pname];
    fn BindTransformFeedback(target: GLenum, id: GLuint) [target, id];
    fn DeleteTransformFeedbacks(n: GLsizei, ids: *const GLuint) [n];
    fn GenTransformFeedbacks(n: GLsizei, ids: *mut GLuint) [n];
    fn IsTransformFeedback(id: GLuint) -> GLboolean;
    fn PauseTransformFeedback();
    fn ResumeTransformFeedback();
    fn DrawTransformFeedback(mode: GLenum, id: GLuint) [mode, id];
    fn DrawTransformFeedbackStream(mode: GLenum, id: GLuint, stream: GLuint) [mode, id, stream];
    fn BeginQueryIndexed(target: GLenum, index: GLuint, id: GLuint) [target, index, id];
    fn EndQueryIndexed(target: GLenum, index: GLuint) [target, index];
    fn GetQueryIndexediv(target: GLenum, index: GLuint, pname: GLenum, params: *mut GLint);

    // 4.1
    fn ReleaseShaderCompiler();
    fn ShaderBinary(count: GLsizei, shaders: *const GLuint, binary_format: GLenum, binary: *const c_void, length: GLsizei) [count, binary_format, length];
    fn GetShaderPrecisionFormat(shadertype: GLenum, precisiontype: GLenum, range: *mut GLint, precision: *mut GLint);
    fn DepthRangef(n: GLfloat, f: GLfloat);
    fn ClearDepthf(d: GLfloat);
    fn GetProgramBinary(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, binary_format: *mut GLenum, binary: *mut c_void);
    fn ProgramBinary(program: GLuint, binary_format: GLenum, binary: *const c_void, length: GLsizei) [program, binary_format, length];
    fn ProgramParameteri(program: GLuint, pname: GLenum, value: GLint) [program, pname, value];
    fn UseProgramStages(pipeline: GLuint, stages: GLbitfield, program: GLuint) [pipeline, stages, program];
    fn ActiveShaderProgram(pipeline: GLuint, program: GLuint) [pipeline, program];
    fn CreateShaderProgramv(type_: GLenum, count: GLsizei, strings: *const *const GLchar) -> GLuint [type_, count];
    fn BindProgramPipeline(pipeline: GLuint) [pipeline];
    fn DeleteProgramPipelines(n: GLsizei, pipelines: *const GLuint) [n];
    fn GenProgramPipelines(n: GLsizei, pipelines: *mut GLuint) [n];
    fn IsProgramPipeline(pipeline: GLuint) -> GLboolean;
    fn GetProgramPipelineiv(pipeline: GLuint, pname: GLenum, params: *mut GLint);
    fn ProgramUniform1i(program: GLuint, location: GLint, v0: GLint) [program, location, v0];
    fn ProgramUniform1ui(program: GLuint, location: GLint, v0: GLuint) [program, location, v0];
    fn ProgramUniform1f(program: GLuint, location: GLint, v0: GLfloat) [program, location];
    fn ProgramUniform1iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint) [program, location, count];
    fn ProgramUniform1uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint) [program, location, count];
    fn ProgramUniform1fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat) [program, location, count];
    fn ProgramUniform2fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat) [program, location, count];
    fn ProgramUniform3fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat) [program, location, count];
    fn ProgramUniform4fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat) [program, location, count];
    fn ProgramUniformMatrix4fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) [program, location, count, transpose];
    fn ValidateProgramPipeline(pipeline: GLuint) [pipeline];
    fn GetProgramPipelineInfoLog(pipeline: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
    fn VertexAttribL1d(index: GLuint, x: GLdouble) [index];
    fn VertexAttribL4dv(index: GLuint, v: *const GLdouble) [index];
    fn VertexAttribLPointer(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void) [index, size, type_, stride];
    fn GetVertexAttribLdv(index: GLuint, pname: GLenum, params: *mut GLdouble);
    fn ViewportArrayv(first: GLuint, count: GLsizei, v: *const GLfloat) [first, count];
    fn ViewportIndexedf(index: GLuint, x: GLfloat, y: GLfloat, w: GLfloat, h: GLfloat) [index];
    fn ScissorArrayv(first: GLuint, count: GLsizei, v: *const GLint) [first, count];
    fn ScissorIndexed(index: GLuint, left: GLint, bottom: GLint, width: GLsizei, height: GLsizei) [index, left, bottom, width, height];
    fn DepthRangeArrayv(first: GLuint, count: GLsizei, v: *const GLdouble) [first, count];
    fn DepthRangeIndexed(index: GLuint, n: GLdouble, f: GLdouble) [index];
    fn GetFloati_v(target: GLenum, index: GLuint, data: *mut GLfloat);
    fn GetDoublei_v(target: GLenum, index: GLuint, data: *mut GLdouble);

    // 4.2
    fn DrawArraysInstancedBaseInstance(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei, baseinstance: GLuint) [mode, first, count, instancecount, baseinstance];
    fn DrawElementsInstancedBaseInstance(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, baseinstance: GLuint) [mode, count, type_, instancecount, baseinstance];
    fn DrawElementsInstancedBaseVertexBaseInstance(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, basevertex: GLint, baseinstance: GLuint) [mode, count, type_, instancecount, basevertex, baseinstance];
    fn GetInternalformativ(target: GLenum, internalformat: GLenum, pname: GLenum, count: GLsizei, params: *mut GLint);
    fn GetActiveAtomicCounterBufferiv(program: GLuint, buffer_index: GLuint, pname: GLenum, params: *mut GLint);
    fn BindImageTexture(unit: GLuint, texture: GLuint, level: GLint, layered: GLboolean, layer: GLint, access: GLenum, format: GLenum) [unit, texture, level, layered, layer, access, format];
    fn MemoryBarrier(barriers: GLbitfield) [barriers];
    fn TexStorage1D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei) [target, levels, internalformat, width];
    fn TexStorage2D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei) [target, levels, internalformat, width, height];
    fn TexStorage3D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei) [target, levels, internalformat, width, height, depth];
    fn DrawTransformFeedbackInstanced(mode: GLenum, id: GLuint, instancecount: GLsizei) [mode, id, instancecount];
    fn DrawTransformFeedbackStreamInstanced(mode: GLenum, id: GLuint, stream: GLuint, instancecount: GLsizei) [mode, id, stream, instancecount];

    // 4.3
    fn ClearBufferData(target: GLenum, internalformat: GLenum, format: GLenum, type_: GLenum, data: *const c_void) [target, internalformat, format, type_];
    fn ClearBufferSubData(target: GLenum, internalformat: GLenum, offset: GLintptr, size: GLsizeiptr, format: GLenum, type_: GLenum, data: *const c_void) [target, internalformat, offset, size, format, type_];
    fn DispatchCompute(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint) [num_groups_x, num_groups_y, num_groups_z];
    fn DispatchComputeIndirect(indirect: GLintptr) [indirect];
    fn CopyImageSubData(src_name: GLuint, src_target: GLenum, src_level: GLint, src_x: GLint, src_y: GLint, src_z: GLint, dst_name: GLuint, dst_target: GLenum, dst_level: GLint, dst_x: GLint, dst_y: GLint, dst_z: GLint, src_width: GLsizei, src_height: GLsizei, src_depth: GLsizei) [src_name, src_target, dst_name, dst_target];
    fn FramebufferParameteri(target: GLenum, pname: GLenum, param: GLint) [target, pname, param];
    fn GetFramebufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    fn GetInternalformati64v(target: GLenum, internalformat: GLenum, pname: GLenum, count: GLsizei, params: *mut GLint64);
    fn InvalidateTexSubImage(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei) [texture, level];
    fn InvalidateTexImage(texture: GLuint, level: GLint) [texture, level];
    fn InvalidateBufferSubData(buffer: GLuint, offset: GLintptr, length: GLsizeiptr) [buffer, offset, length];
    fn InvalidateBufferData(buffer: GLuint) [buffer];
    fn InvalidateFramebuffer(target: GLenum, num_attachments: GLsizei, attachments: *const GLenum) [target, num_attachments];
    fn InvalidateSubFramebuffer(target: GLenum, num_attachments: GLsizei, attachments: *const GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei) [target, num_attachments, x, y, width, height];
    fn MultiDrawArraysIndirect(mode: GLenum, indirect: *const c_void, drawcount: GLsizei, stride: GLsizei) [mode, drawcount, stride];
    fn MultiDrawElementsIndirect(mode: GLenum, type_: GLenum, indirect: *const c_void, drawcount: GLsizei, stride: GLsizei) [mode, type_, drawcount, stride];
    fn GetProgramInterfaceiv(program: GLuint, program_interface: GLenum, pname: GLenum, params: *mut GLint);
    fn GetProgramResourceIndex(program: GLuint, program_interface: GLenum, name: *const GLchar) -> GLuint [program, program_interface];
    fn GetProgramResourceName(program: GLuint, program_interface: GLenum, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, name: *mut GLchar);
    fn GetProgramResourceiv(program: GLuint, program_interface: GLenum, index: GLuint, prop_count: GLsizei, props: *const GLenum, count: GLsizei, length: *mut GLsizei, params: *mut GLint);
    fn GetProgramResourceLocation(program: GLuint, program_interface: GLenum, name: *const GLchar) -> GLint [program, program_interface];
    fn GetProgramResourceLocationIndex(program: GLuint, program_interface: GLenum, name: *const GLchar) -> GLint [program, program_interface];
    fn ShaderStorageBlockBinding(program: GLuint, storage_block_index: GLuint, storage_block_binding: GLuint) [program, storage_block_index, storage_block_binding];
    fn TexBufferRange(target: GLenum, internalformat: GLenum, buffer: GLuint, offset: GLintptr, size: GLsizeiptr) [target, internalformat, buffer, offset, size];
    fn TexStorage2DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean) [target, samples, internalformat, width, height];
    fn TexStorage3DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean) [target, samples, internalformat, width, height, depth];
    fn TextureView(texture: GLuint, target: GLenum, origtexture: GLuint, internalformat: GLenum, minlevel: GLuint, numlevels: GLuint, minlayer: GLuint, numlayers: GLuint) [texture, target, origtexture, internalformat];
    fn BindVertexBuffer(bindingindex: GLuint, buffer: GLuint, offset: GLintptr, stride: GLsizei) [bindingindex, buffer, offset, stride];
    fn VertexAttribFormat(attribindex: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, relativeoffset: GLuint) [attribindex, size, type_, normalized, relativeoffset];
    fn VertexAttribIFormat(attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint) [attribindex, size, type_, relativeoffset];
    fn VertexAttribLFormat(attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint) [attribindex, size, type_, relativeoffset];
    fn VertexAttribBinding(attribindex: GLuint, bindingindex: GLuint) [attribindex, bindingindex];
    fn VertexBindingDivisor(bindingindex: GLuint, divisor: GLuint) [bindingindex, divisor];
    fn DebugMessageControl(source: GLenum, type_: GLenum, severity: GLenum, count: GLsizei, ids: *const GLuint, enabled: GLboolean) [source, type_, severity, count, enabled];
    fn DebugMessageInsert(source: GLenum, type_: GLenum, id: GLuint, severity: GLenum, length: GLsizei, buf: *const GLchar) [source, type_, id, severity];
    fn DebugMessageCallback(callback: GLDEBUGPROC, user_param: *const c_void);
    fn GetDebugMessageLog(count: GLuint, buf_size: GLsizei, sources: *mut GLenum, types: *mut GLenum, ids: *mut GLuint, severities: *mut GLenum, lengths: *mut GLsizei, message_log: *mut GLchar) -> GLuint;
    fn PushDebugGroup(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar) [source, id];
    fn PopDebugGroup();
    fn ObjectLabel(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar) [identifier, name];
    fn GetObjectLabel(identifier: GLenum, name: GLuint, buf_size: GLsizei, length: *mut GLsizei, label: *mut GLchar);
    fn GetPointerv(pname: GLenum, params: *mut *mut c_void);

    // 4.4
    fn BufferStorage(target: GLenum, size: GLsizeiptr, data: *const c_void, flags: GLbitfield) [target, size, flags];
    fn ClearTexImage(texture: GLuint, level: GLint, format: GLenum, type_: GLenum, data: *const c_void) [texture, level, format, type_];
    fn ClearTexSubImage(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, data: *const c_void) [texture, level];
    fn BindBuffersBase(target: GLenum, first: GLuint, count: GLsizei, buffers: *const GLuint) [target, first, count];
    fn BindBuffersRange(target: GLenum, first: GLuint, count: GLsizei, buffers: *const GLuint, offsets: *const GLintptr, sizes: *const GLsizeiptr) [target, first, count];
    fn BindTextures(first: GLuint, count: GLsizei, textures: *const GLuint) [first, count];
    fn BindSamplers(first: GLuint, count: GLsizei, samplers: *const GLuint) [first, count];
    fn BindImageTextures(first: GLuint, count: GLsizei, textures: *const GLuint) [first, count];
    fn BindVertexBuffers(first: GLuint, count: GLsizei, buffers: *const GLuint, offsets: *const GLintptr, strides: *const GLsizei) [first, count];

    // 4.5
    fn ClipControl(origin: GLenum, depth: GLenum) [origin, depth];
    fn CreateTransformFeedbacks(n: GLsizei, ids: *mut GLuint) [n];
    fn CreateBuffers(n: GLsizei, buffers: *mut GLuint) [n];
    fn NamedBufferStorage(buffer: GLuint, size: GLsizeiptr, data: *const c_void, flags: GLbitfield) [buffer, size, flags];
    fn NamedBufferData(buffer: GLuint, size: GLsizeiptr, data: *const c_void, usage: GLenum) [buffer, size, usage];
    fn NamedBufferSubData(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *const c_void) [buffer, offset, size];
    fn CopyNamedBufferSubData(read_buffer: GLuint, write_buffer: GLuint, read_offset: GLintptr, write_offset: GLintptr, size: GLsizeiptr) [read_buffer, write_buffer, read_offset, write_offset, size];
    fn ClearNamedBufferData(buffer: GLuint, internalformat: GLenum, format: GLenum, type_: GLenum, data: *const c_void) [buffer, internalformat, format, type_];
    fn MapNamedBuffer(buffer: GLuint, access: GLenum) -> *mut c_void [buffer, access];
    fn MapNamedBufferRange(buffer: GLuint, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut c_void [buffer, offset, length, access];
    fn UnmapNamedBuffer(buffer: GLuint) -> GLboolean [buffer];
    fn GetNamedBufferSubData(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *mut c_void) [buffer, offset, size];
    fn CreateFramebuffers(n: GLsizei, framebuffers: *mut GLuint) [n];
    fn NamedFramebufferTexture(framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint) [framebuffer, attachment, texture, level];
    fn NamedFramebufferDrawBuffers(framebuffer: GLuint, n: GLsizei, bufs: *const GLenum) [framebuffer, n];
    fn CheckNamedFramebufferStatus(framebuffer: GLuint, target: GLenum) -> GLenum [framebuffer, target];
    fn CreateRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint) [n];
    fn NamedRenderbufferStorage(renderbuffer: GLuint, internalformat: GLenum, width: GLsizei, height: GLsizei) [renderbuffer, internalformat, width, height];
    fn CreateTextures(target: GLenum, n: GLsizei, textures: *mut GLuint) [target, n];
    fn TextureBuffer(texture: GLuint, internalformat: GLenum, buffer: GLuint) [texture, internalformat, buffer];
    fn TextureStorage2D(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei) [texture, levels, internalformat, width, height];
    fn TextureStorage3D(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei) [texture, levels, internalformat, width, height, depth];
    fn TextureSubImage2D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void) [texture, level, xoffset, yoffset, width, height];
    fn TextureSubImage3D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void) [texture, level];
    fn TextureParameteri(texture: GLuint, pname: GLenum, param: GLint) [texture, pname, param];
    fn GenerateTextureMipmap(texture: GLuint) [texture];
    fn BindTextureUnit(unit: GLuint, texture: GLuint) [unit, texture];
    fn GetTextureImage(texture: GLuint, level: GLint, format: GLenum, type_: GLenum, buf_size: GLsizei, pixels: *mut c_void) [texture, level, format, type_, buf_size];
    fn CreateVertexArrays(n: GLsizei, arrays: *mut GLuint) [n];
    fn DisableVertexArrayAttrib(vaobj: GLuint, index: GLuint) [vaobj, index];
    fn EnableVertexArrayAttrib(vaobj: GLuint, index: GLuint) [vaobj, index];
    fn VertexArrayElementBuffer(vaobj: GLuint, buffer: GLuint) [vaobj, buffer];
    fn VertexArrayVertexBuffer(vaobj: GLuint, bindingindex: GLuint, buffer: GLuint, offset: GLintptr, stride: GLsizei) [vaobj, bindingindex, buffer, offset, stride];
    fn VertexArrayAttribBinding(vaobj: GLuint, attribindex: GLuint, bindingindex: GLuint) [vaobj, attribindex, bindingindex];
    fn VertexArrayAttribFormat(vaobj: GLuint, attribindex: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, relativeoffset: GLuint) [vaobj, attribindex, size, type_, normalized, relativeoffset];
    fn VertexArrayAttribIFormat(vaobj: GLuint, attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint) [vaobj, attribindex, size, type_, relativeoffset];
    fn VertexArrayAttribLFormat(vaobj: GLuint, attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint) [vaobj, attribindex, size, type_, relativeoffset];
    fn VertexArrayBindingDivisor(vaobj: GLuint, bindingindex: GLuint, divisor: GLuint) [vaobj, bindingindex, divisor];
    fn CreateSamplers(n: GLsizei, samplers: *mut GLuint) [n];
    fn CreateProgramPipelines(n: GLsizei, pipelines: *mut GLuint) [n];
    fn CreateQueries(target: GLenum, n: GLsizei, ids: *mut GLuint) [target, n];
    fn MemoryBarrierByRegion(barriers: GLbitfield) [barriers];
    fn GetGraphicsResetStatus() -> GLenum;
    fn TextureBarrier();

    // 4.6
    fn SpecializeShader(shader: GLuint, entry_point: *const GLchar, num_specialization_constants: GLuint, constant_index: *const GLuint, constant_value: *const GLuint) [shader, num_specialization_constants];
    fn MultiDrawArraysIndirectCount(mode: GLenum, indirect: *const c_void, drawcount: GLintptr, maxdrawcount: GLsizei, stride: GLsizei) [mode, drawcount, maxdrawcount, stride];
    fn MultiDrawElementsIndirectCount(mode: GLenum, type_: GLenum, indirect: *const c_void, drawcount: GLintptr, maxdrawcount: GLsizei, stride: GLsizei) [mode, type_, drawcount, maxdrawcount, stride];
    fn PolygonOffsetClamp(factor: GLfloat, units: GLfloat, clamp: GLfloat);
}
