//! Logging setup shared by the binaries.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// The crates whose `info` messages are shown when `RUST_LOG` is unset: this
/// library and both binaries.
const TARGETS: [&str; 3] = [env!("CARGO_CRATE_NAME"), "pokedex_fetch", "pokedex_flatten"];

/// Returns the filter directives used when `RUST_LOG` is unset.
pub fn default_directives() -> String {
  let mut directives = String::from("warn");
  for target in TARGETS {
    directives.push_str(&format!(",{}=info", target));
  }
  directives
}

/// Installs a line-oriented subscriber on stderr.
///
/// The filter comes from `RUST_LOG`, defaulting to [`default_directives()`].
pub fn init() {
  tracing_subscriber::registry()
    .with(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives())),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();
}

/// Runs `f` with a subscriber that records every event as text.
#[cfg(test)]
pub(crate) fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
  use std::io;
  use std::sync::Arc;
  use std::sync::Mutex;

  #[derive(Clone, Default)]
  struct Buffer(Arc<Mutex<Vec<u8>>>);

  impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.0.lock().unwrap().extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  let buffer = Buffer::default();
  let writer = buffer.clone();
  let subscriber = tracing_subscriber::fmt()
    .with_writer(move || writer.clone())
    .with_ansi(false)
    .with_max_level(tracing::Level::DEBUG)
    .finish();

  let result = tracing::subscriber::with_default(subscriber, f);
  let text = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
  (result, text)
}
