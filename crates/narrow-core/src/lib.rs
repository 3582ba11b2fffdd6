//! Grow-only scratch storage for narrowing `f64` values to `f32`.
//!
//! Graphics APIs often expose only single-precision entry points while scene
//! code works in double precision. This crate provides the piece in between:
//!
//! - [`ScratchConverter`] narrows a slice of `f64` into a reusable buffer and
//!   hands back a [`ConversionView`] of the result.
//! - [`ScratchBuffer`] is the backing storage. Its capacity only ever grows,
//!   so repeated conversions from the same context stop allocating once the
//!   largest request has been seen.
//! - [`with_thread_converter`] looks up a converter bound to the calling
//!   thread, for call sites that cannot carry one of their own.
//!
//! A view borrows its converter, so the borrow checker enforces that it is
//! consumed before the next conversion overwrites it.

pub mod context;
pub mod converter;
pub mod scratch;

pub use context::with_thread_converter;
pub use converter::ScratchConverter;
pub use scratch::{ConversionView, ScratchBuffer};
