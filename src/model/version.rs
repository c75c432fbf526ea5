//! Game versions.

use serde::Deserialize;
use serde::Serialize;

/// A generation of Pokemon games.
///
/// Only the name carried by a [`Resource`](crate::model::Resource) is read.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Generation;
