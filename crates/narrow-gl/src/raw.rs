//! [`FloatGl`] backed by the host's loaded OpenGL functions.

use std::ffi::c_void;
use std::marker::PhantomData;
use std::sync::Once;

use anyhow::{bail, Result};
use gl::types::{GLboolean, GLfloat, GLint, GLsizei, GLuint};
use tracing::{debug, error};

use crate::FloatGl;

static GL_INIT_ONCE: Once = Once::new();

/// Entry points every forwarding call relies on.
const REQUIRED_ENTRY_POINTS: &[(&str, fn() -> bool)] = &[
    ("glUniform1f", gl::Uniform1f::is_loaded),
    ("glUniform2fv", gl::Uniform2fv::is_loaded),
    ("glUniform3fv", gl::Uniform3fv::is_loaded),
    ("glUniform4fv", gl::Uniform4fv::is_loaded),
    ("glUniformMatrix2fv", gl::UniformMatrix2fv::is_loaded),
    ("glUniformMatrix3fv", gl::UniformMatrix3fv::is_loaded),
    ("glUniformMatrix4fv", gl::UniformMatrix4fv::is_loaded),
    ("glVertexAttrib1f", gl::VertexAttrib1f::is_loaded),
    ("glVertexAttrib2f", gl::VertexAttrib2f::is_loaded),
    ("glVertexAttrib3f", gl::VertexAttrib3f::is_loaded),
    ("glVertexAttrib4f", gl::VertexAttrib4f::is_loaded),
    ("glVertexAttrib2fv", gl::VertexAttrib2fv::is_loaded),
    ("glVertexAttrib3fv", gl::VertexAttrib3fv::is_loaded),
    ("glVertexAttrib4fv", gl::VertexAttrib4fv::is_loaded),
];

/// Calls the OpenGL functions loaded into the `gl` crate.
///
/// A `RawGl` can only be created by asserting that a GL context is current,
/// and it is neither `Send` nor `Sync`, so it stays on the thread that owns
/// that context.
#[derive(Debug, Clone, Copy)]
pub struct RawGl {
    _thread_bound: PhantomData<*const ()>,
}

impl RawGl {
    /// Load GL function pointers via `gl_loader` (once per process) and check
    /// that every required entry point resolved.
    ///
    /// # Safety
    ///
    /// An OpenGL context must be current on the calling thread, and must stay
    /// current whenever the returned value is used.
    pub unsafe fn load() -> Result<Self> {
        GL_INIT_ONCE.call_once(|| {
            gl_loader::init_gl();
            gl::load_with(|s| gl_loader::get_proc_address(s).cast());
        });
        Self::verify()
    }

    /// Load GL function pointers with a caller-supplied symbol loader, such
    /// as the windowing library's `get_proc_address`.
    ///
    /// # Safety
    ///
    /// Same as [`RawGl::load`]. The loader must return valid function
    /// pointers (or null) for the current context.
    pub unsafe fn load_with(loader: impl FnMut(&'static str) -> *const c_void) -> Result<Self> {
        gl::load_with(loader);
        Self::verify()
    }

    fn verify() -> Result<Self> {
        if let Some((name, _)) = REQUIRED_ENTRY_POINTS
            .iter()
            .find(|(_, is_loaded)| !is_loaded())
        {
            error!(name, "required GL entry point is not loaded");
            bail!("GL entry point {name} is not available in the current context");
        }

        debug!(
            entry_points = REQUIRED_ENTRY_POINTS.len(),
            "float uniform/attribute entry points loaded"
        );

        Ok(Self {
            _thread_bound: PhantomData,
        })
    }
}

/// Panic unless `value` holds `count` elements of `components` floats.
///
/// GL reads through the pointer without knowing the slice length.
fn check_len(value: &[GLfloat], count: GLsizei, components: usize) {
    let needed = usize::try_from(count)
        .unwrap_or(0)
        .saturating_mul(components);
    assert!(
        value.len() >= needed,
        "{} floats supplied, {needed} required",
        value.len()
    );
}

fn gl_bool(value: bool) -> GLboolean {
    if value {
        gl::TRUE
    } else {
        gl::FALSE
    }
}

// SAFETY (all calls below): a `RawGl` exists only after the caller asserted a
// current context with loaded entry points, and slice lengths are checked
// against what GL will read.
impl FloatGl for RawGl {
    fn uniform_1f(&self, location: GLint, v0: GLfloat) {
        unsafe { gl::Uniform1f(location, v0) }
    }

    fn uniform_2fv(&self, location: GLint, count: GLsizei, value: &[GLfloat]) {
        check_len(value, count, 2);
        unsafe { gl::Uniform2fv(location, count, value.as_ptr()) }
    }

    fn uniform_3fv(&self, location: GLint, count: GLsizei, value: &[GLfloat]) {
        check_len(value, count, 3);
        unsafe { gl::Uniform3fv(location, count, value.as_ptr()) }
    }

    fn uniform_4fv(&self, location: GLint, count: GLsizei, value: &[GLfloat]) {
        check_len(value, count, 4);
        unsafe { gl::Uniform4fv(location, count, value.as_ptr()) }
    }

    fn uniform_matrix2fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: bool,
        value: &[GLfloat],
    ) {
        check_len(value, count, 4);
        unsafe { gl::UniformMatrix2fv(location, count, gl_bool(transpose), value.as_ptr()) }
    }

    fn uniform_matrix3fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: bool,
        value: &[GLfloat],
    ) {
        check_len(value, count, 9);
        unsafe { gl::UniformMatrix3fv(location, count, gl_bool(transpose), value.as_ptr()) }
    }

    fn uniform_matrix4fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: bool,
        value: &[GLfloat],
    ) {
        check_len(value, count, 16);
        unsafe { gl::UniformMatrix4fv(location, count, gl_bool(transpose), value.as_ptr()) }
    }

    fn vertex_attrib_1f(&self, index: GLuint, x: GLfloat) {
        unsafe { gl::VertexAttrib1f(index, x) }
    }

    fn vertex_attrib_2f(&self, index: GLuint, x: GLfloat, y: GLfloat) {
        unsafe { gl::VertexAttrib2f(index, x, y) }
    }

    fn vertex_attrib_3f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat) {
        unsafe { gl::VertexAttrib3f(index, x, y, z) }
    }

    fn vertex_attrib_4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        unsafe { gl::VertexAttrib4f(index, x, y, z, w) }
    }

    fn vertex_attrib_2fv(&self, index: GLuint, v: &[GLfloat]) {
        check_len(v, 1, 2);
        unsafe { gl::VertexAttrib2fv(index, v.as_ptr()) }
    }

    fn vertex_attrib_3fv(&self, index: GLuint, v: &[GLfloat]) {
        check_len(v, 1, 3);
        unsafe { gl::VertexAttrib3fv(index, v.as_ptr()) }
    }

    fn vertex_attrib_4fv(&self, index: GLuint, v: &[GLfloat]) {
        check_len(v, 1, 4);
        unsafe { gl::VertexAttrib4fv(index, v.as_ptr()) }
    }
}
