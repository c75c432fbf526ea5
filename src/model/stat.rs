//! Pokemon battle statistics, which describe how powerful Pokemon are relative
//! to each other.

use serde::Deserialize;
use serde::Serialize;

///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stat;

/// A name for one of the six base stats.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatName {
  /// Hit Points determine how much damage a Pokemon can take in battle.
  HitPoints,
  /// Attack determines the power of a Pokemon's physical moves.
  Attack,
  /// Defense determines the effectiveness of a physical move on a Pokemon.
  Defense,
  /// Special Attack determines the power of a Pokemon's special moves.
  SpAttack,
  /// Special Defense determines the effectiveness of a special move on a
  /// Pokemon.
  SpDefense,
  /// Speed determines which Pokemon moves first in a turn.
  Speed,
}

impl StatName {
  /// Every base stat, in the order they appear in exported tables.
  pub const ALL: [StatName; 6] = [
    StatName::HitPoints,
    StatName::Attack,
    StatName::Defense,
    StatName::SpAttack,
    StatName::SpDefense,
    StatName::Speed,
  ];

  /// Returns the API name of this stat.
  pub fn api_name(self) -> &'static str {
    match self {
      StatName::HitPoints => "hp",
      StatName::Attack => "attack",
      StatName::Defense => "defense",
      StatName::SpAttack => "special-attack",
      StatName::SpDefense => "special-defense",
      StatName::Speed => "speed",
    }
  }

  /// Returns the stat with the given API name.
  ///
  /// Battle-only stats such as accuracy and evasion have no base value and
  /// yield `None`.
  pub fn from_api_name(name: &str) -> Option<Self> {
    StatName::ALL
      .iter()
      .copied()
      .find(|stat| stat.api_name() == name)
  }
}
