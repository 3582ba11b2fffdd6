//! Backing storage and result views for narrowing conversions.

use std::ops::Deref;

/// Reusable `f32` storage owned by a single execution context.
///
/// Capacity is the number of elements the buffer can hold without
/// reallocating. It grows to exactly the requested size when a conversion
/// needs more room and never shrinks afterwards.
#[derive(Debug, Default)]
pub struct ScratchBuffer {
    /// Backing storage. `data.len()` is the capacity.
    data: Vec<f32>,
    /// Element count written by the most recent conversion.
    len: usize,
}

impl ScratchBuffer {
    /// Create an empty buffer. Nothing is allocated until first use.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            len: 0,
        }
    }

    /// Create a buffer pre-sized to hold `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0.0; capacity],
            len: 0,
        }
    }

    /// Number of elements the buffer holds without growing.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Element count written by the most recent conversion.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the most recent conversion was empty (or none has happened).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Grow to exactly `count` elements if smaller. Returns the previous
    /// capacity when a reallocation happened.
    pub(crate) fn ensure_capacity(&mut self, count: usize) -> Option<usize> {
        let previous = self.data.len();
        if previous >= count {
            return None;
        }
        self.data.resize(count, 0.0);
        Some(previous)
    }

    /// Narrow `source` into the front of the buffer.
    ///
    /// The buffer must already hold at least `source.len()` elements.
    pub(crate) fn narrow_from(&mut self, source: &[f64]) -> ConversionView<'_> {
        let count = source.len();
        let dst = &mut self.data[..count];
        for (out, &value) in dst.iter_mut().zip(source) {
            *out = value as f32;
        }
        self.len = count;
        ConversionView { values: dst }
    }
}

/// Read-only view of the values produced by one conversion.
///
/// The view borrows the converter that produced it, so it cannot be held
/// across the next conversion on the same context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionView<'a> {
    values: &'a [f32],
}

impl<'a> ConversionView<'a> {
    /// The narrowed values.
    pub fn as_slice(&self) -> &'a [f32] {
        self.values
    }

    /// Pointer to the first narrowed value, for APIs that take `*const f32`.
    pub fn as_ptr(&self) -> *const f32 {
        self.values.as_ptr()
    }

    /// Number of narrowed values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the conversion produced no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Deref for ConversionView<'_> {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        self.values
    }
}

impl AsRef<[f32]> for ConversionView<'_> {
    fn as_ref(&self) -> &[f32] {
        self.values
    }
}
