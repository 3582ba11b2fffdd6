//! [`ScratchConverter`]: narrows `f64` sequences into a per-context buffer.

use tracing::trace;

use crate::scratch::{ConversionView, ScratchBuffer};

/// Narrows caller-supplied `f64` values into a reusable [`ScratchBuffer`].
///
/// One converter belongs to one execution context. Own it in whatever object
/// represents that context (a renderer, a worker) or reach the calling
/// thread's instance through [`with_thread_converter`](crate::with_thread_converter).
///
/// ```
/// use narrow_core::ScratchConverter;
///
/// let mut scratch = ScratchConverter::new();
/// let view = scratch.convert(&[1.0, 2.5]);
/// assert_eq!(view.as_slice(), &[1.0f32, 2.5]);
/// ```
#[derive(Debug, Default)]
pub struct ScratchConverter {
    buffer: ScratchBuffer,
}

impl ScratchConverter {
    /// Create a converter with an empty buffer.
    pub const fn new() -> Self {
        Self {
            buffer: ScratchBuffer::new(),
        }
    }

    /// Create a converter whose buffer already holds `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: ScratchBuffer::with_capacity(capacity),
        }
    }

    /// Narrow every value in `source` and return a view of the result.
    ///
    /// Each element is converted with `as f32` (round to nearest, ties to
    /// even). Out-of-range values become infinities and NaN stays NaN. The
    /// view stays valid until the next conversion on this converter.
    pub fn convert(&mut self, source: &[f64]) -> ConversionView<'_> {
        let count = source.len();
        if let Some(previous) = self.buffer.ensure_capacity(count) {
            trace!(previous, count, "grew scratch buffer");
        }
        self.buffer.narrow_from(source)
    }

    /// Narrow `count` values starting at `source`.
    ///
    /// `source` is not read when `count` is zero and may be null in that
    /// case.
    ///
    /// # Safety
    ///
    /// When `count > 0`, `source` must be non-null, aligned, and point to at
    /// least `count` initialized `f64` values that are not mutated for the
    /// duration of the call.
    pub unsafe fn convert_raw(&mut self, source: *const f64, count: usize) -> ConversionView<'_> {
        if count == 0 {
            return self.convert(&[]);
        }
        // SAFETY: upheld by the caller per the contract above.
        let source = unsafe { std::slice::from_raw_parts(source, count) };
        self.convert(source)
    }

    /// The backing buffer.
    pub fn buffer(&self) -> &ScratchBuffer {
        &self.buffer
    }

    /// Capacity of the backing buffer, in elements.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Element count produced by the most recent conversion.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the most recent conversion produced no values.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
