//! A PokéAPI client.

use std::io;

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

mod transport;
pub use transport::HttpTransport;
pub use transport::MemoryTransport;
pub use transport::Transport;

/// An API client.
///
/// This type is the entrypoint for downloading information from PokéAPI. It
/// performs no caching of its own: every call to [`Api::by_id()`] or
/// [`Resource::load()`](crate::model::Resource::load) goes out through the
/// configured [`Transport`].
pub struct Api<T = HttpTransport> {
  base_url: String,
  transport: T,
}

/// An [`Api`] client error.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
  #[error(transparent)]
  Io(#[from] io::Error),

  #[error(transparent)]
  Http(#[from] reqwest::Error),

  #[error(transparent)]
  Json(#[from] serde_json::Error),

  #[error("request to {url} failed with status {status}")]
  Status { url: String, status: u16 },
}

impl Api {
  /// Creates a new [`Api`] talking HTTP to the configured base URL.
  pub fn new(config: &ApiConfig) -> Result<Self, Error> {
    let transport = HttpTransport::new(config.timeout())?;
    Ok(Self::with_transport(&config.base_url, transport))
  }
}

impl<T> Api<T> {
  /// Creates a new [`Api`] that sends its requests through `transport`.
  pub fn with_transport(base_url: &str, transport: T) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      transport,
    }
  }

  /// Returns the base URL this client points at, without a trailing slash.
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Returns the URL of the resource of type `E` with the given numeric id.
  pub fn url_of<E: Endpoint>(&self, id: u32) -> String {
    format!("{}/{}/{}", self.base_url, E::NAME, id)
  }
}

impl<T: Transport> Api<T> {
  /// Base request-generating function.
  pub(crate) fn request_json<R: DeserializeOwned>(
    &self,
    url: &str,
  ) -> Result<R, Error> {
    tracing::debug!("GET {}", url);
    let buf = self.transport.get(url)?;
    Ok(serde_json::from_slice(&buf)?)
  }

  /// Try to get the specific resource of type `E` with the given id.
  pub fn by_id<E: Endpoint>(&self, id: u32) -> Result<E, Error> {
    self.request_json(&self.url_of::<E>(id))
  }
}

/// An endpoint type, representing a type that can be requested directly from
/// an [`Api`].
pub trait Endpoint: DeserializeOwned {
  /// The name of the endpoint, used to construct the request.
  const NAME: &'static str;
}
