//! The float-typed GL entry points the double shims forward to.

use gl::types::{GLfloat, GLint, GLsizei, GLuint};

/// Single-precision uniform and vertex-attribute entry points.
///
/// [`RawGl`](crate::RawGl) calls the loaded OpenGL functions. Other
/// implementations can record or redirect the calls.
///
/// Slice arguments hold at least `count * components` values for the
/// uniform calls and at least `components` values for the attribute calls.
pub trait FloatGl {
    /// `glUniform1f`
    fn uniform_1f(&self, location: GLint, v0: GLfloat);
    /// `glUniform2fv`
    fn uniform_2fv(&self, location: GLint, count: GLsizei, value: &[GLfloat]);
    /// `glUniform3fv`
    fn uniform_3fv(&self, location: GLint, count: GLsizei, value: &[GLfloat]);
    /// `glUniform4fv`
    fn uniform_4fv(&self, location: GLint, count: GLsizei, value: &[GLfloat]);

    /// `glUniformMatrix2fv`
    fn uniform_matrix2fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: bool,
        value: &[GLfloat],
    );
    /// `glUniformMatrix3fv`
    fn uniform_matrix3fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: bool,
        value: &[GLfloat],
    );
    /// `glUniformMatrix4fv`
    fn uniform_matrix4fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: bool,
        value: &[GLfloat],
    );

    /// `glVertexAttrib1f`
    fn vertex_attrib_1f(&self, index: GLuint, x: GLfloat);
    /// `glVertexAttrib2f`
    fn vertex_attrib_2f(&self, index: GLuint, x: GLfloat, y: GLfloat);
    /// `glVertexAttrib3f`
    fn vertex_attrib_3f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat);
    /// `glVertexAttrib4f`
    fn vertex_attrib_4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);

    /// `glVertexAttrib2fv`
    fn vertex_attrib_2fv(&self, index: GLuint, v: &[GLfloat]);
    /// `glVertexAttrib3fv`
    fn vertex_attrib_3fv(&self, index: GLuint, v: &[GLfloat]);
    /// `glVertexAttrib4fv`
    fn vertex_attrib_4fv(&self, index: GLuint, v: &[GLfloat]);
}

impl<T: FloatGl + ?Sized> FloatGl for &T {
    fn uniform_1f(&self, location: GLint, v0: GLfloat) {
        (**self).uniform_1f(location, v0);
    }
    fn uniform_2fv(&self, location: GLint, count: GLsizei, value: &[GLfloat]) {
        (**self).uniform_2fv(location, count, value);
    }
    fn uniform_3fv(&self, location: GLint, count: GLsizei, value: &[GLfloat]) {
        (**self).uniform_3fv(location, count, value);
    }
    fn uniform_4fv(&self, location: GLint, count: GLsizei, value: &[GLfloat]) {
        (**self).uniform_4fv(location, count, value);
    }
    fn uniform_matrix2fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: bool,
        value: &[GLfloat],
    ) {
        (**self).uniform_matrix2fv(location, count, transpose, value);
    }
    fn uniform_matrix3fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: bool,
        value: &[GLfloat],
    ) {
        (**self).uniform_matrix3fv(location, count, transpose, value);
    }
    fn uniform_matrix4fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: bool,
        value: &[GLfloat],
    ) {
        (**self).uniform_matrix4fv(location, count, transpose, value);
    }
    fn vertex_attrib_1f(&self, index: GLuint, x: GLfloat) {
        (**self).vertex_attrib_1f(index, x);
    }
    fn vertex_attrib_2f(&self, index: GLuint, x: GLfloat, y: GLfloat) {
        (**self).vertex_attrib_2f(index, x, y);
    }
    fn vertex_attrib_3f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat) {
        (**self).vertex_attrib_3f(index, x, y, z);
    }
    fn vertex_attrib_4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        (**self).vertex_attrib_4f(index, x, y, z, w);
    }
    fn vertex_attrib_2fv(&self, index: GLuint, v: &[GLfloat]) {
        (**self).vertex_attrib_2fv(index, v);
    }
    fn vertex_attrib_3fv(&self, index: GLuint, v: &[GLfloat]) {
        (**self).vertex_attrib_3fv(index, v);
    }
    fn vertex_attrib_4fv(&self, index: GLuint, v: &[GLfloat]) {
        (**self).vertex_attrib_4fv(index, v);
    }
}
