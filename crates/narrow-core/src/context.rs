//! Thread-bound converter lookup.
//!
//! For call sites that cannot thread a [`ScratchConverter`] through their own
//! context object, each thread gets one lazily. The buffer lives until the
//! thread exits and is never visible to other threads.

use std::cell::RefCell;

use crate::converter::ScratchConverter;

thread_local! {
    static THREAD_CONVERTER: RefCell<ScratchConverter> =
        const { RefCell::new(ScratchConverter::new()) };
}

/// Run `f` with the calling thread's converter.
///
/// # Panics
///
/// Panics if called re-entrantly from inside `f` on the same thread.
pub fn with_thread_converter<R>(f: impl FnOnce(&mut ScratchConverter) -> R) -> R {
    THREAD_CONVERTER.with(|cell| f(&mut cell.borrow_mut()))
}
