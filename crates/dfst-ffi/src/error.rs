// Error reporting and panic containment for exported calls

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use dfst_core::abi::ErrorCallback;
use dfst_core::error::{ErrorKind, NativeError};

/// Send `err` through the caller's error channel, if it gave one.
pub(crate) fn report(callback: ErrorCallback, err: &NativeError) {
    let Some(callback) = callback else {
        return;
    };
    let message = err.to_string();
    // SAFETY: the caller promises the callback is valid for the duration of
    // the call; the message outlives the invocation.
    unsafe { callback(message.as_ptr(), message.len()) };
}

/// Run the body of a fallible exported call.
///
/// Errors and panics are reported through `callback` and turn into
/// `fallback`.
pub(crate) fn guard<T, F>(call: &'static str, callback: ErrorCallback, fallback: T, body: F) -> T
where
    F: FnOnce() -> Result<T, NativeError>,
{
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(value)) => value,
        Ok(Err(err)) => {
            tracing::warn!(call, error = %err, "boundary call failed");
            report(callback, &err);
            fallback
        }
        Err(payload) => {
            let err = NativeError::new(ErrorKind::Panic, panic_message(payload.as_ref()));
            tracing::error!(call, error = %err, "panic caught at the boundary");
            report(callback, &err);
            fallback
        }
    }
}

/// Run the body of an exported call that has no error channel. A panic
/// turns into `fallback`.
pub(crate) fn contain<T, F>(call: &'static str, fallback: T, body: F) -> T
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|payload| {
        tracing::error!(
            call,
            panic = %panic_message(payload.as_ref()),
            "panic caught at the boundary"
        );
        fallback
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
