use std::sync::Mutex;

use clipboard_rs::{Clipboard, ClipboardContext};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Writes through the platform clipboard.
///
/// The context is opened on the first write and kept for the life of the
/// writer. On X11 every context owns a server thread and a display
/// connection, so it must not be reopened per copy.
pub struct SystemClipboard {
    context: SharedContext<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            context: SharedContext::new(|| {
                ClipboardContext::new().map_err(|err| err.to_string())
            }),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.context.with(|ctx| {
            ctx.set_text(text.to_string())
                .map_err(|err| ClipboardError::Write(err.to_string()))
        })
    }
}

/// Lazily opened context. A failed open is not cached, so the next write
/// tries again.
struct SharedContext<T> {
    open: fn() -> Result<T, String>,
    slot: Mutex<Option<T>>,
}

impl<T> SharedContext<T> {
    fn new(open: fn() -> Result<T, String>) -> Self {
        Self {
            open,
            slot: Mutex::new(None),
        }
    }

    fn with<R>(
        &self,
        f: impl FnOnce(&T) -> Result<R, ClipboardError>,
    ) -> Result<R, ClipboardError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))?;
        let ctx = match slot.take() {
            Some(ctx) => ctx,
            None => (self.open)().map_err(ClipboardError::Unavailable)?,
        };
        let result = f(&ctx);
        *slot = Some(ctx);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Default)]
    struct FakeContext {
        writes: RefCell<Vec<String>>,
    }

    fn write(shared: &SharedContext<FakeContext>, text: &str) -> Result<(), ClipboardError> {
        shared.with(|ctx| {
            ctx.writes.borrow_mut().push(text.to_string());
            Ok(())
        })
    }

    #[test]
    fn context_is_opened_once_and_reused() {
        static OPENS: AtomicUsize = AtomicUsize::new(0);
        let shared = SharedContext::new(|| {
            OPENS.fetch_add(1, Ordering::SeqCst);
            Ok(FakeContext::default())
        });

        write(&shared, "first").unwrap();
        write(&shared, "second").unwrap();
        write(&shared, "third").unwrap();

        assert_eq!(OPENS.load(Ordering::SeqCst), 1);
        let slot = shared.slot.lock().unwrap();
        assert_eq!(
            *slot.as_ref().unwrap().writes.borrow(),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn failed_open_reports_unavailable_and_retries() {
        static OPENS: AtomicUsize = AtomicUsize::new(0);
        let shared = SharedContext::new(|| {
            if OPENS.fetch_add(1, Ordering::SeqCst) == 0 {
                Err("no display".to_string())
            } else {
                Ok(FakeContext::default())
            }
        });

        assert_eq!(
            write(&shared, "lost"),
            Err(ClipboardError::Unavailable("no display".to_string()))
        );
        write(&shared, "kept").unwrap();
        write(&shared, "again").unwrap();

        assert_eq!(OPENS.load(Ordering::SeqCst), 2);
        let slot = shared.slot.lock().unwrap();
        assert_eq!(
            *slot.as_ref().unwrap().writes.borrow(),
            vec!["kept", "again"]
        );
    }

    #[test]
    fn write_error_keeps_the_open_context() {
        static OPENS: AtomicUsize = AtomicUsize::new(0);
        let shared = SharedContext::new(|| {
            OPENS.fetch_add(1, Ordering::SeqCst);
            Ok(FakeContext::default())
        });

        let failed: Result<(), ClipboardError> =
            shared.with(|_| Err(ClipboardError::Write("denied".to_string())));
        assert!(failed.is_err());
        write(&shared, "after").unwrap();

        assert_eq!(OPENS.load(Ordering::SeqCst), 1);
    }
}
