//! Pokemon, the primary per-creature records served by PokeAPI.

use serde::Deserialize;
use serde::Serialize;

use crate::api::Endpoint;
use crate::model::resource::Resource;
use crate::model::species::Species;
use crate::model::stat::Stat;
use crate::model::ty::Type;

///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ability;

/// A Pokemon.
///
/// `id`, `name`, `height`, `weight`, `types`, `species` and `sprites` are
/// required; a payload without them fails to decode.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pokemon {
  /// This Pokemon's numeric ID.
  pub id: u32,
  /// This Pokemon's API name.
  pub name: String,
  /// This Pokemon's height, in decimeters.
  pub height: u32,
  /// This Pokemon's weight, in hectograms.
  pub weight: u32,

  /// The types this Pokemon has, in slot order.
  pub types: Vec<TypeSlot>,
  /// The species this Pokemon belongs to.
  pub species: Resource<Species>,
  /// The abilities this Pokemon can have.
  #[serde(default)]
  pub abilities: Vec<AbilitySlot>,
  /// This Pokemon's base stat values.
  #[serde(default)]
  pub stats: Vec<BaseStat>,

  /// Sprite images for this Pokemon.
  pub sprites: Sprites,
  /// Recorded cries for this Pokemon.
  #[serde(default)]
  pub cries: Cries,
}

impl Pokemon {
  /// Returns the API names of this Pokemon's types, in slot order.
  pub fn type_names(&self) -> Vec<String> {
    let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
    slots.sort_by_key(|slot| slot.slot);
    slots.iter().map(|slot| slot.ty.name().to_string()).collect()
  }
}

impl Endpoint for Pokemon {
  const NAME: &'static str = "pokemon";
}

/// One of a Pokemon's (at most two) type slots.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeSlot {
  /// Which of the two type slots this is.
  pub slot: u8,
  /// The type in this slot.
  #[serde(rename = "type")]
  pub ty: Resource<Type>,
}

/// An ability a Pokemon may have.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AbilitySlot {
  /// The ability itself.
  pub ability: Resource<Ability>,
  /// Whether this is a hidden or "Dream World" ability.
  #[serde(default)]
  pub is_hidden: bool,
  /// Which ability slot this ability belongs to.
  pub slot: u8,
}

/// A base stat value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BaseStat {
  /// The stat this value is for.
  pub stat: Resource<Stat>,
  /// The value of the stat before any modifiers.
  pub base_stat: u32,
}

/// Sprite image URLs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sprites {
  /// The default front-facing sprite.
  pub front_default: Option<String>,
  /// The shiny front-facing sprite.
  pub front_shiny: Option<String>,
}

/// Cry sound URLs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Cries {
  /// The cry used by the most recent games.
  pub latest: Option<String>,
  /// The cry used by older games.
  pub legacy: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn type_names_follow_slot_order() {
    let pokemon: Pokemon = serde_json::from_str(
      r#"{
        "id": 6,
        "name": "charizard",
        "height": 17,
        "weight": 905,
        "types": [
          {"slot": 2, "type": {"name": "flying", "url": "t3"}},
          {"slot": 1, "type": {"name": "fire", "url": "t10"}}
        ],
        "species": {"name": "charizard", "url": "s6"},
        "sprites": {"front_default": "a.png", "front_shiny": null, "back_default": "b.png"}
      }"#,
    )
    .unwrap();

    assert_eq!(pokemon.type_names(), vec!["fire", "flying"]);
    assert!(pokemon.abilities.is_empty());
    assert!(pokemon.cries.latest.is_none());
    assert_eq!(pokemon.sprites.front_shiny, None);
  }

  #[test]
  fn missing_sprites_fails_to_decode() {
    let result = serde_json::from_str::<Pokemon>(
      r#"{"id": 1, "name": "x", "height": 1, "weight": 1, "types": [], "species": {"name": "x", "url": "s"}}"#,
    );
    assert!(result.is_err());
  }
}
