//! Pokemon species, which carry the lore and classification data that the
//! [`Pokemon`](crate::model::Pokemon) endpoint leaves out.

use serde::Deserialize;
use serde::Serialize;

use crate::api::Endpoint;
use crate::model::lang::Translation;
use crate::model::resource::Resource;
use crate::model::version::Generation;

/// A Pokemon species.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Species {
  /// This species' numeric ID.
  #[serde(default)]
  pub id: u32,
  /// This species' API name.
  #[serde(default)]
  pub name: String,

  /// The generation this species was introduced in.
  pub generation: Option<Resource<Generation>>,

  /// Whether this is a legendary Pokemon species.
  #[serde(default)]
  pub is_legendary: bool,
  /// Whether this is a mythical Pokemon species.
  #[serde(default)]
  pub is_mythical: bool,

  /// This species' habitat according to the Pokedex.
  pub habitat: Option<Resource<Habitat>>,
  /// Flavor text for this species in different languages.
  #[serde(rename = "flavor_text_entries", default)]
  pub flavor_text: Vec<Translation>,
  /// This species' genus in different languages.
  ///
  /// For example, Bulbasaur is the "Seed Pokemon".
  #[serde(rename = "genera", default)]
  pub genus: Vec<Translation>,

  /// The species this species evolves from.
  #[serde(rename = "evolves_from_species")]
  pub evolves_from: Option<Resource<Species>>,
}

impl Endpoint for Species {
  const NAME: &'static str = "pokemon-species";
}

/// A habitat, which can be used for sorting through a Pokedex.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Habitat;

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::lang::ENGLISH;

  #[test]
  fn null_links_decode_as_none() {
    let species: Species = serde_json::from_str(
      r#"{
        "id": 1,
        "name": "bulbasaur",
        "generation": {"name": "generation-i", "url": "g"},
        "habitat": null,
        "evolves_from_species": null,
        "genera": [{"genus": "Seed Pokémon", "language": {"name": "en", "url": "l"}}]
      }"#,
    )
    .unwrap();

    assert!(species.habitat.is_none());
    assert!(species.evolves_from.is_none());
    assert!(!species.is_legendary);
    assert!(species.flavor_text.is_empty());
    assert_eq!(
      Translation::find(&species.genus, ENGLISH),
      Some("Seed Pokémon")
    );
  }
}
