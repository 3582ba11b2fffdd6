//! Double-precision uniform and vertex-attribute setters for OpenGL.
//!
//! Many GL implementations (notably on macOS) expose only the single-precision
//! `glUniform*fv` / `glVertexAttrib*f` entry points. [`DoubleGl`] accepts
//! `f64` values, narrows them through a reusable
//! [`ScratchConverter`](narrow_core::ScratchConverter), and forwards them to
//! a [`FloatGl`] implementation.
//!
//! - [`FloatGl`] is the float-typed surface being forwarded to.
//! - [`RawGl`] implements it with the functions loaded into the `gl` crate.
//! - [`DoubleGl`] owns the scratch buffer and provides the `*d` / `*dv`
//!   setters.
//!
//! ### Warning
//!
//! GL errors (bad locations, wrong uniform types) are left to the driver and
//! are not checked here.

pub mod float_gl;
pub mod raw;
pub mod shim;

pub use float_gl::FloatGl;
pub use narrow_core::{ConversionView, ScratchConverter};
pub use raw::RawGl;
pub use shim::DoubleGl;
