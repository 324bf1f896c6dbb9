//! Logging init for hosts that don't bring their own `tracing` subscriber.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,crawl_dumper=debug";

/// Initialize structured logging to stderr. `RUST_LOG` overrides the default filter,
/// which keeps the dump outcomes (logged at debug) visible.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[cfg(any(test, feature = "test-util"))]
pub use capture::capture_logs;

#[cfg(any(test, feature = "test-util"))]
mod capture {
    use std::{
        io,
        sync::{Arc, Mutex},
    };
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Runs `f` under a debug-level subscriber and returns everything it logged.
    pub fn capture_logs<F: FnOnce()>(f: F) -> String {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(buffer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let logs = buffer.0.lock().unwrap().clone();
        String::from_utf8_lossy(&logs).into_owned()
    }
}
