#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::Once;

use gl::types::{GLfloat, GLint, GLsizei, GLuint};
use narrow_gl::FloatGl;

static LOG_INIT: Once = Once::new();

/// Route `tracing` output through the test harness. `RUST_LOG` selects levels.
pub fn init_logging() {
    LOG_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// One forwarded GL call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Uniform1f {
        location: GLint,
        v0: GLfloat,
    },
    UniformFv {
        components: usize,
        location: GLint,
        count: GLsizei,
        values: Vec<GLfloat>,
    },
    UniformMatrixFv {
        dim: usize,
        location: GLint,
        count: GLsizei,
        transpose: bool,
        values: Vec<GLfloat>,
    },
    VertexAttribF {
        index: GLuint,
        values: Vec<GLfloat>,
    },
    VertexAttribFv {
        components: usize,
        index: GLuint,
        values: Vec<GLfloat>,
    },
}

/// Records every call instead of talking to a driver.
#[derive(Debug, Default)]
pub struct RecordingGl {
    calls: RefCell<Vec<Call>>,
}

impl RecordingGl {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn uniform(&self, components: usize, location: GLint, count: GLsizei, value: &[GLfloat]) {
        self.push(Call::UniformFv {
            components,
            location,
            count,
            values: value.to_vec(),
        });
    }

    fn matrix(
        &self,
        dim: usize,
        location: GLint,
        count: GLsizei,
        transpose: bool,
        value: &[GLfloat],
    ) {
        self.push(Call::UniformMatrixFv {
            dim,
            location,
            count,
            transpose,
            values: value.to_vec(),
        });
    }

    fn attrib_v(&self, components: usize, index: GLuint, v: &[GLfloat]) {
        self.push(Call::VertexAttribFv {
            components,
            index,
            values: v.to_vec(),
        });
    }
}

impl FloatGl for RecordingGl {
    fn uniform_1f(&self, location: GLint, v0: GLfloat) {
        self.push(Call::Uniform1f { location, v0 });
    }
    fn uniform_2fv(&self, location: GLint, count: GLsizei, value: &[GLfloat]) {
        self.uniform(2, location, count, value);
    }
    fn uniform_3fv(&self, location: GLint, count: GLsizei, value: &[GLfloat]) {
        self.uniform(3, location, count, value);
    }
    fn uniform_4fv(&self, location: GLint, count: GLsizei, value: &[GLfloat]) {
        self.uniform(4, location, count, value);
    }
    fn uniform_matrix2fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: bool,
        value: &[GLfloat],
    ) {
        self.matrix(2, location, count, transpose, value);
    }
    fn uniform_matrix3fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: bool,
        value: &[GLfloat],
    ) {
        self.matrix(3, location, count, transpose, value);
    }
    fn uniform_matrix4fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: bool,
        value: &[GLfloat],
    ) {
        self.matrix(4, location, count, transpose, value);
    }
    fn vertex_attrib_1f(&self, index: GLuint, x: GLfloat) {
        self.push(Call::VertexAttribF {
            index,
            values: vec![x],
        });
    }
    fn vertex_attrib_2f(&self, index: GLuint, x: GLfloat, y: GLfloat) {
        self.push(Call::VertexAttribF {
            index,
            values: vec![x, y],
        });
    }
    fn vertex_attrib_3f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat) {
        self.push(Call::VertexAttribF {
            index,
            values: vec![x, y, z],
        });
    }
    fn vertex_attrib_4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        self.push(Call::VertexAttribF {
            index,
            values: vec![x, y, z, w],
        });
    }
    fn vertex_attrib_2fv(&self, index: GLuint, v: &[GLfloat]) {
        self.attrib_v(2, index, v);
    }
    fn vertex_attrib_3fv(&self, index: GLuint, v: &[GLfloat]) {
        self.attrib_v(3, index, v);
    }
    fn vertex_attrib_4fv(&self, index: GLuint, v: &[GLfloat]) {
        self.attrib_v(4, index, v);
    }
}
