// Per-thread error channel
//
// The boundary reports failures by invoking a callback before the failing
// call returns. The callback handed over here stores the message in a
// thread-local slot, so concurrent calls on other threads never see each
// other's errors. The slot is drained after every call.

use std::cell::RefCell;
use std::slice;

use dfst_core::abi::ErrorCallback;
use dfst_core::error::NativeError;

use crate::{Error, Result};

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

unsafe extern "C" fn record_error(message: *const u8, len: usize) {
    let text = if message.is_null() {
        String::new()
    } else {
        // SAFETY: the boundary passes `len` readable bytes, valid during this
        // invocation.
        String::from_utf8_lossy(unsafe { slice::from_raw_parts(message, len) }).into_owned()
    };
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(text));
}

fn take() -> Option<String> {
    LAST_ERROR.with(|slot| slot.borrow_mut().take())
}

pub(crate) struct ErrorChannel;

impl ErrorChannel {
    /// Make one boundary call with this thread's callback, then turn a
    /// reported error into `Err`.
    pub(crate) fn call<T, F>(call: F) -> Result<T>
    where
        F: FnOnce(ErrorCallback) -> T,
    {
        // A message left over from a call that panicked on this side.
        if let Some(stale) = take() {
            tracing::debug!(message = %stale, "discarding stale boundary error");
        }

        let value = call(Some(record_error));
        match take() {
            None => Ok(value),
            Some(message) => {
                let err = Error::from_native(NativeError::parse(&message));
                tracing::debug!(error = %err, "boundary call reported an error");
                Err(err)
            }
        }
    }
}
