//! Transports, which perform the actual GET requests for an [`Api`].

use std::collections::HashMap;
use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::api::Error;

#[cfg(doc)]
use crate::api::Api;

/// A type that can fetch raw response bodies for an [`Api`].
pub trait Transport {
  /// Performs a GET request for `url`, returning the whole response body.
  ///
  /// Any non-2xx response must be reported as [`Error::Status`].
  fn get(&self, url: &str) -> Result<Vec<u8>, Error>;
}

/// A blocking HTTP transport.
pub struct HttpTransport {
  client: Client,
}

impl HttpTransport {
  /// Creates a new [`HttpTransport`] whose requests give up after `timeout`.
  pub fn new(timeout: Duration) -> Result<Self, Error> {
    let client = Client::builder().timeout(timeout).build()?;
    Ok(Self { client })
  }
}

impl Transport for HttpTransport {
  fn get(&self, url: &str) -> Result<Vec<u8>, Error> {
    let mut response = self.client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
      return Err(Error::Status {
        url: url.to_string(),
        status: status.as_u16(),
      });
    }

    let mut buf = Vec::new();
    response.read_to_end(&mut buf)?;
    Ok(buf)
  }
}

/// An in-memory transport serving canned response bodies.
///
/// URLs without a body behave like a 404.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
  bodies: HashMap<String, Vec<u8>>,
}

impl MemoryTransport {
  /// Creates an empty [`MemoryTransport`].
  pub fn new() -> Self {
    Self::default()
  }

  /// Serves `body` for every request to `url`.
  pub fn insert(&mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) {
    self.bodies.insert(url.into(), body.into());
  }

  /// Stops serving `url`, returning its body if there was one.
  pub fn remove(&mut self, url: &str) -> Option<Vec<u8>> {
    self.bodies.remove(url)
  }
}

impl Transport for MemoryTransport {
  fn get(&self, url: &str) -> Result<Vec<u8>, Error> {
    self.bodies.get(url).cloned().ok_or_else(|| Error::Status {
      url: url.to_string(),
      status: 404,
    })
  }
}
