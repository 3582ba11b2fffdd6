//! [`DoubleGl`]: double-precision uniform and vertex-attribute setters.

use gl::types::{GLfloat, GLint, GLsizei, GLuint};
use narrow_core::ScratchConverter;

use crate::FloatGl;

/// Forwards double-precision values to a [`FloatGl`] after narrowing them.
///
/// Each value owns the scratch buffer its conversions go through, so keep one
/// per GL context (or per thread issuing GL calls). Matrices are column-major
/// and uploaded untransposed.
///
/// ```no_run
/// use narrow_gl::{DoubleGl, RawGl};
///
/// # fn main() -> anyhow::Result<()> {
/// // SAFETY: the windowing layer made a GL context current on this thread.
/// let gl = unsafe { RawGl::load()? };
/// let mut dgl = DoubleGl::new(gl);
///
/// let (mvp_location, normal_attr) = (0, 2);
/// let model_view_projection = [0.0f64; 16];
/// dgl.uniform_matrix4dv(mvp_location, &model_view_projection);
/// dgl.vertex_attrib_3d(normal_attr, 0.0, 0.0, 1.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DoubleGl<G> {
    gl: G,
    scratch: ScratchConverter,
}

impl<G: FloatGl> DoubleGl<G> {
    pub fn new(gl: G) -> Self {
        Self::from_parts(gl, ScratchConverter::new())
    }

    /// Pre-size the scratch buffer, e.g. for the largest uniform array the
    /// caller uploads.
    pub fn with_capacity(gl: G, capacity: usize) -> Self {
        Self::from_parts(gl, ScratchConverter::with_capacity(capacity))
    }

    pub fn from_parts(gl: G, scratch: ScratchConverter) -> Self {
        Self { gl, scratch }
    }

    pub fn gl(&self) -> &G {
        &self.gl
    }

    pub fn scratch(&self) -> &ScratchConverter {
        &self.scratch
    }

    pub fn into_parts(self) -> (G, ScratchConverter) {
        (self.gl, self.scratch)
    }

    // -----------------------------------------------------------------------
    // Uniforms
    // -----------------------------------------------------------------------

    pub fn uniform_1d(&self, location: GLint, v0: f64) {
        self.gl.uniform_1f(location, v0 as GLfloat);
    }

    pub fn uniform_2dv(&mut self, location: GLint, value: &[f64; 2]) {
        let f = self.scratch.convert(value);
        self.gl.uniform_2fv(location, 1, &f);
    }

    pub fn uniform_3dv(&mut self, location: GLint, value: &[f64; 3]) {
        let f = self.scratch.convert(value);
        self.gl.uniform_3fv(location, 1, &f);
    }

    pub fn uniform_4dv(&mut self, location: GLint, value: &[f64; 4]) {
        let f = self.scratch.convert(value);
        self.gl.uniform_4fv(location, 1, &f);
    }

    pub fn uniform_matrix2dv(&mut self, location: GLint, value: &[f64; 4]) {
        let f = self.scratch.convert(value);
        self.gl.uniform_matrix2fv(location, 1, false, &f);
    }

    pub fn uniform_matrix3dv(&mut self, location: GLint, value: &[f64; 9]) {
        let f = self.scratch.convert(value);
        self.gl.uniform_matrix3fv(location, 1, false, &f);
    }

    pub fn uniform_matrix4dv(&mut self, location: GLint, value: &[f64; 16]) {
        let f = self.scratch.convert(value);
        self.gl.uniform_matrix4fv(location, 1, false, &f);
    }

    /// Upload a `vec3[]` uniform array starting at `location`.
    pub fn uniform_3dv_array(&mut self, location: GLint, values: &[[f64; 3]]) {
        let count = element_count(values.len());
        let f = self.scratch.convert(values.as_flattened());
        self.gl.uniform_3fv(location, count, &f);
    }

    /// Upload a `vec4[]` uniform array starting at `location`.
    pub fn uniform_4dv_array(&mut self, location: GLint, values: &[[f64; 4]]) {
        let count = element_count(values.len());
        let f = self.scratch.convert(values.as_flattened());
        self.gl.uniform_4fv(location, count, &f);
    }

    /// Upload a `mat4[]` uniform array starting at `location`.
    pub fn uniform_matrix4dv_array(&mut self, location: GLint, values: &[[f64; 16]]) {
        let count = element_count(values.len());
        let f = self.scratch.convert(values.as_flattened());
        self.gl.uniform_matrix4fv(location, count, false, &f);
    }

    // -----------------------------------------------------------------------
    // Vertex attributes
    // -----------------------------------------------------------------------

    pub fn vertex_attrib_1d(&self, index: GLuint, x: f64) {
        self.gl.vertex_attrib_1f(index, x as GLfloat);
    }

    pub fn vertex_attrib_2d(&self, index: GLuint, x: f64, y: f64) {
        self.gl.vertex_attrib_2f(index, x as GLfloat, y as GLfloat);
    }

    pub fn vertex_attrib_3d(&self, index: GLuint, x: f64, y: f64, z: f64) {
        self.gl
            .vertex_attrib_3f(index, x as GLfloat, y as GLfloat, z as GLfloat);
    }

    pub fn vertex_attrib_4d(&self, index: GLuint, x: f64, y: f64, z: f64, w: f64) {
        self.gl.vertex_attrib_4f(
            index,
            x as GLfloat,
            y as GLfloat,
            z as GLfloat,
            w as GLfloat,
        );
    }

    pub fn vertex_attrib_2dv(&mut self, index: GLuint, v: &[f64; 2]) {
        let f = self.scratch.convert(v);
        self.gl.vertex_attrib_2fv(index, &f);
    }

    pub fn vertex_attrib_3dv(&mut self, index: GLuint, v: &[f64; 3]) {
        let f = self.scratch.convert(v);
        self.gl.vertex_attrib_3fv(index, &f);
    }

    pub fn vertex_attrib_4dv(&mut self, index: GLuint, v: &[f64; 4]) {
        let f = self.scratch.convert(v);
        self.gl.vertex_attrib_4fv(index, &f);
    }

    /// Set a `mat2` attribute: column `c` goes to location `index + c`.
    ///
    /// Locations wrap at `GLuint::MAX`; GL reports out-of-range indices.
    pub fn vertex_attrib_matrix2(&mut self, index: GLuint, columns: &[[f64; 2]; 2]) {
        self.attrib_columns(index, columns, G::vertex_attrib_2fv);
    }

    /// Set a `mat3` attribute: column `c` goes to location `index + c`.
    pub fn vertex_attrib_matrix3(&mut self, index: GLuint, columns: &[[f64; 3]; 3]) {
        self.attrib_columns(index, columns, G::vertex_attrib_3fv);
    }

    /// Set a `mat4` attribute: column `c` goes to location `index + c`.
    pub fn vertex_attrib_matrix4(&mut self, index: GLuint, columns: &[[f64; 4]; 4]) {
        self.attrib_columns(index, columns, G::vertex_attrib_4fv);
    }

    fn attrib_columns<const N: usize>(
        &mut self,
        index: GLuint,
        columns: &[[f64; N]],
        set_column: fn(&G, GLuint, &[GLfloat]),
    ) {
        for (offset, column) in (0..).zip(columns) {
            let f = self.scratch.convert(column);
            set_column(&self.gl, index.wrapping_add(offset), &f);
        }
    }
}

/// Element count for a uniform array upload. Lengths beyond `GLsizei::MAX`
/// saturate instead of wrapping negative.
fn element_count(len: usize) -> GLsizei {
    GLsizei::try_from(len).unwrap_or(GLsizei::MAX)
}
