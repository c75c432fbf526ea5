//! Pokemon types, which describe how different Pokemon are strong against
//! others in battle.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::api::Endpoint;
use crate::model::resource::Resource;

/// A Pokemon type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Type {
  /// This type's numeric ID.
  pub id: u32,
  /// This type's API name.
  pub name: String,
  /// How this type relates to other types.
  #[serde(rename = "damage_relations")]
  pub relations: Relations,
}

impl Endpoint for Type {
  const NAME: &'static str = "type";
}

/// How a particular type is related to other types on the type chart, seen
/// from the defending side.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Relations {
  /// Move types this type is weak to (2x damage).
  #[serde(rename = "double_damage_from", default)]
  pub weak_to: Vec<Resource<Type>>,
  /// Move types this type resists (0.5x damage).
  #[serde(rename = "half_damage_from", default)]
  pub resists: Vec<Resource<Type>>,
  /// Move types this type is immune to (0x damage).
  #[serde(rename = "no_damage_from", default)]
  pub immune_to: Vec<Resource<Type>>,
}

/// One of the eighteen canonical types.
///
/// Variants are declared in canonical column order, which is also their
/// [`Ord`] order.
#[derive(
  Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum TypeName {
  Normal,
  Fire,
  Water,
  Electric,
  Grass,
  Ice,
  Fighting,
  Poison,
  Ground,
  Flying,
  Psychic,
  Bug,
  Rock,
  Ghost,
  Dragon,
  Steel,
  Dark,
  Fairy,
}

impl TypeName {
  /// The number of canonical types.
  pub const COUNT: u32 = 18;

  /// Every canonical type, in canonical column order.
  pub const ALL: [TypeName; 18] = [
    TypeName::Normal,
    TypeName::Fire,
    TypeName::Water,
    TypeName::Electric,
    TypeName::Grass,
    TypeName::Ice,
    TypeName::Fighting,
    TypeName::Poison,
    TypeName::Ground,
    TypeName::Flying,
    TypeName::Psychic,
    TypeName::Bug,
    TypeName::Rock,
    TypeName::Ghost,
    TypeName::Dragon,
    TypeName::Steel,
    TypeName::Dark,
    TypeName::Fairy,
  ];

  /// Returns the API name of this type.
  pub fn as_str(self) -> &'static str {
    match self {
      TypeName::Normal => "normal",
      TypeName::Fire => "fire",
      TypeName::Water => "water",
      TypeName::Electric => "electric",
      TypeName::Grass => "grass",
      TypeName::Ice => "ice",
      TypeName::Fighting => "fighting",
      TypeName::Poison => "poison",
      TypeName::Ground => "ground",
      TypeName::Flying => "flying",
      TypeName::Psychic => "psychic",
      TypeName::Bug => "bug",
      TypeName::Rock => "rock",
      TypeName::Ghost => "ghost",
      TypeName::Dragon => "dragon",
      TypeName::Steel => "steel",
      TypeName::Dark => "dark",
      TypeName::Fairy => "fairy",
    }
  }

  /// Returns the type PokeAPI serves under the numeric id `id`.
  ///
  /// PokeAPI numbers types in order of their introduction, which differs from
  /// canonical column order.
  pub fn from_id(id: u32) -> Option<Self> {
    let ty = match id {
      1 => TypeName::Normal,
      2 => TypeName::Fighting,
      3 => TypeName::Flying,
      4 => TypeName::Poison,
      5 => TypeName::Ground,
      6 => TypeName::Rock,
      7 => TypeName::Bug,
      8 => TypeName::Ghost,
      9 => TypeName::Steel,
      10 => TypeName::Fire,
      11 => TypeName::Water,
      12 => TypeName::Grass,
      13 => TypeName::Electric,
      14 => TypeName::Psychic,
      15 => TypeName::Ice,
      16 => TypeName::Dragon,
      17 => TypeName::Dark,
      18 => TypeName::Fairy,
      _ => return None,
    };
    Some(ty)
  }
}

impl fmt::Display for TypeName {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// The error returned when parsing a name that is not a canonical type.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown type name {0:?}")]
pub struct UnknownType(pub String);

impl FromStr for TypeName {
  type Err = UnknownType;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    TypeName::ALL
      .iter()
      .copied()
      .find(|ty| ty.as_str() == s)
      .ok_or_else(|| UnknownType(s.to_string()))
  }
}
