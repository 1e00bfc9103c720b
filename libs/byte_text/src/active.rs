//! Selection of the encoder used by [`Bytes`](crate::Bytes) and
//! [`ByteArray`](crate::ByteArray).
//!
//! There is one process-wide active encoder, [`Encoder::Hex`] unless changed
//! via [`set_active`]. A thread may temporarily override it with [`scoped`],
//! which doesn't affect any other thread.
//!
//! Changing the process-wide encoder while other threads are serializing
//! is memory-safe, but which encoding those threads observe is unspecified.
//! Pick the encoder once at startup, or use [`scoped`] or the markers in
//! [`crate::with`] when different parts of a program need different encodings.

use std::cell::Cell;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::encoder::Encoder;

// the slot guards no other memory, so relaxed ordering is enough
static ACTIVE: AtomicU8 = AtomicU8::new(Encoder::Hex as u8);

thread_local! {
    static SCOPED: Cell<Option<Encoder>> = const { Cell::new(None) };
}

/// Gets the encoder currently in effect on this thread.
///
/// This is the innermost [`scoped`] override, if any, and otherwise the
/// process-wide encoder.
#[must_use]
pub fn active() -> Encoder {
    SCOPED.get().unwrap_or_else(global)
}

/// Gets the process-wide encoder, ignoring any [`scoped`] override.
#[must_use]
pub fn global() -> Encoder {
    Encoder::from_repr(ACTIVE.load(Ordering::Relaxed))
}

/// Sets the process-wide encoder, returning the previous one.
///
/// This affects all serialization started afterwards on threads without a
/// [`scoped`] override. Already produced text is, naturally, unaffected.
pub fn set_active(encoder: Encoder) -> Encoder {
    let prev = Encoder::from_repr(ACTIVE.swap(encoder as u8, Ordering::Relaxed));
    if prev != encoder {
        log::debug!("Active byte encoder changed from `{prev}` to `{encoder}`.");
    }

    prev
}

/// Runs `f` with `encoder` as the active encoder of the current thread.
///
/// Overrides nest; the previous override is restored when `f` returns or
/// unwinds.
///
/// # Examples
///
/// ```
/// use byte_text::{Bytes, Encoder};
///
/// let bytes = Bytes::from(b"foo".to_vec());
/// let text = byte_text::scoped(Encoder::RawBase64, || bytes.marshal());
/// assert_eq!(text, r#""Zm9v""#);
/// ```
pub fn scoped<R>(encoder: Encoder, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<Encoder>);

    impl Drop for Restore {
        fn drop(&mut self) {
            SCOPED.set(self.0);
        }
    }

    log::trace!("Entering scope with byte encoder `{encoder}`.");
    let _restore = Restore(SCOPED.replace(Some(encoder)));
    f()
}
