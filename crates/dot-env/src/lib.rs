//! Load `KEY=value` pairs from a `.env` file into the process environment.
//!
//! This crate provides a small line parser, a store that layers file values
//! over the process environment, and typed numeric accessors with explicit
//! byte-order control.
//!
//! ```no_run
//! use dot_env::EnvStore;
//!
//! let mut env = EnvStore::new();
//! if env.load(".env", None) {
//!     let port: Option<u16> = env.get_native("PORT");
//!     let url = env.require("DATABASE_URL")?;
//!     # let _ = (port, url);
//! }
//! # Ok::<(), dot_env::EnvError>(())
//! ```

pub mod backend;
pub mod codec;
pub mod compare;
pub mod constants;
mod error;
pub mod locator;
pub mod parser;
mod store;

pub use backend::{EnvironmentBackend, InMemoryEnvironment, SystemEnvironment};
pub use codec::Numeric;
pub use error::EnvError;
pub use parser::{InvalidReason, ParsedLine};
pub use store::{EnvStore, LoadReport};

#[cfg(test)]
pub(crate) mod test_util {
    use std::path::{Path, PathBuf};
    use std::sync::{
        Arc, Mutex, OnceLock,
        atomic::{AtomicU64, Ordering},
    };

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    /// RAII guard for temporarily changing the current working directory.
    pub struct CwdGuard {
        original_dir: PathBuf,
    }

    impl CwdGuard {
        pub fn new(dir: &Path) -> Self {
            let original_dir = std::env::current_dir().expect("Failed to get current directory");
            std::env::set_current_dir(dir).expect("Failed to set current directory");
            Self { original_dir }
        }
    }

    impl Drop for CwdGuard {
        fn drop(&mut self) {
            let _ = std::env::set_current_dir(&self.original_dir);
        }
    }

    /// Minimal tracing subscriber that records event messages and their fields.
    #[derive(Clone, Default)]
    struct CapturingSubscriber {
        events: Arc<Mutex<Vec<String>>>,
        next_id: Arc<AtomicU64>,
    }

    #[derive(Default)]
    struct EventVisitor {
        rendered: String,
    }

    impl tracing::field::Visit for EventVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if !self.rendered.is_empty() {
                self.rendered.push(' ');
            }
            if field.name() == "message" {
                self.rendered.push_str(&format!("{value:?}"));
            } else {
                self.rendered.push_str(&format!("{}={value:?}", field.name()));
            }
        }
    }

    impl tracing::Subscriber for CapturingSubscriber {
        fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _attrs: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            tracing::span::Id::from_u64(id)
        }

        fn record(&self, _span: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _span: &tracing::span::Id, _follows: &tracing::span::Id) {}

        fn event(&self, event: &tracing::Event<'_>) {
            let mut visitor = EventVisitor::default();
            event.record(&mut visitor);
            self.events
                .lock()
                .expect("lock poisoned")
                .push(format!("{} {}", event.metadata().level(), visitor.rendered));
        }

        fn enter(&self, _span: &tracing::span::Id) {}

        fn exit(&self, _span: &tracing::span::Id) {}

        fn register_callsite(
            &self,
            _metadata: &'static tracing::Metadata<'static>,
        ) -> tracing::subscriber::Interest {
            tracing::subscriber::Interest::always()
        }
    }

    /// Run `f` with a capturing subscriber installed and return `LEVEL message fields` lines.
    pub fn capture_logs<R, F: FnOnce() -> R>(f: F) -> (R, Vec<String>) {
        let subscriber = CapturingSubscriber {
            events: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        };

        let dispatch = tracing::Dispatch::new(subscriber.clone());
        let result = tracing::dispatcher::with_default(&dispatch, f);
        let messages = std::mem::take(&mut *subscriber.events.lock().expect("lock poisoned"));
        (result, messages)
    }
}
