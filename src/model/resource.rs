//! Resources are named hyperlinks to other PokeAPI objects.
//!
//! PokeAPI uses [`Resource`]s as hyperlinks between the objects it returns.

use std::marker::PhantomData;

use serde::Deserialize;
use serde::Serialize;

use crate::api::Api;
use crate::api::Endpoint;
use crate::api::Error;
use crate::api::Transport;

/// A named PokeAPI resource.
///
/// Call [`Resource::load()`] to convert this into a `T`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Resource<T> {
  name: String,
  url: String,

  #[serde(skip)]
  _ph: PhantomData<fn() -> T>,
}

impl<T> Resource<T> {
  /// Creates a new [`Resource`] pointing at `url`.
  pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      url: url.into(),
      _ph: PhantomData,
    }
  }

  /// Returns this [`Resource`]'s API name.
  pub fn name(&self) -> &str {
    &self.name
  }
}

impl<T> Clone for Resource<T> {
  fn clone(&self) -> Self {
    Self::new(self.name.clone(), self.url.clone())
  }
}

impl<T: Endpoint> Resource<T> {
  /// Performs a network request to obtain the `T` represented by this
  /// [`Resource`].
  pub fn load<X: Transport>(&self, api: &Api<X>) -> Result<T, Error> {
    api.request_json(&self.url)
  }
}
