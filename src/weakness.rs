//! Weakness profiles: the combined damage multiplier a Pokemon takes from each
//! attacking type.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::chart::TypeChart;
use crate::model::TypeName;

/// The damage multiplier for every attacking type.
///
/// A computed profile has all eighteen entries; a profile for a Pokemon whose
/// species could not be loaded is empty. Serializes as a JSON object keyed by
/// lowercase type name, in canonical order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeaknessProfile {
  multipliers: BTreeMap<TypeName, f64>,
}

impl WeaknessProfile {
  /// Returns a profile with no entries at all.
  pub fn empty() -> Self {
    Self::default()
  }

  /// Returns a profile with every attacking type at 1.0.
  pub fn neutral() -> Self {
    Self {
      multipliers: TypeName::ALL.iter().map(|&ty| (ty, 1.0)).collect(),
    }
  }

  /// Computes the profile of a Pokemon with the given types.
  ///
  /// Every defending type's relations are applied to a neutral profile in
  /// turn, multiplying by 2.0, 0.5 or 0.0. Defending types missing from
  /// `chart`, and attacking types outside the canonical eighteen, are ignored.
  /// An immunity pins its multiplier at 0.0 no matter what else applies.
  pub fn compute<S: AsRef<str>>(types: &[S], chart: &TypeChart) -> Self {
    let mut profile = Self::neutral();
    for ty in types {
      let relations = match chart.relations(ty.as_ref()) {
        Some(relations) => relations,
        None => continue,
      };

      profile.scale_all(&relations.double_damage_from, 2.0);
      profile.scale_all(&relations.half_damage_from, 0.5);
      profile.scale_all(&relations.no_damage_from, 0.0);
    }
    profile
  }

  fn scale_all<'a>(&mut self, attackers: impl IntoIterator<Item = &'a String>, factor: f64) {
    for name in attackers {
      let ty = match name.parse::<TypeName>() {
        Ok(ty) => ty,
        Err(_) => continue,
      };
      if let Some(multiplier) = self.multipliers.get_mut(&ty) {
        *multiplier *= factor;
      }
    }
  }

  /// Returns the multiplier for attacks of type `ty`, if the profile has one.
  pub fn get(&self, ty: TypeName) -> Option<f64> {
    self.multipliers.get(&ty).copied()
  }

  /// Returns the number of entries.
  pub fn len(&self) -> usize {
    self.multipliers.len()
  }

  /// Returns whether the profile has no entries.
  pub fn is_empty(&self) -> bool {
    self.multipliers.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeSet;

  use super::*;
  use crate::chart::TypeRelations;

  fn relations(double: &[&str], half: &[&str], none: &[&str]) -> TypeRelations {
    let set =
      |names: &[&str]| -> BTreeSet<String> { names.iter().map(|n| n.to_string()).collect() };
    TypeRelations {
      double_damage_from: set(double),
      half_damage_from: set(half),
      no_damage_from: set(none),
    }
  }

  fn chart() -> TypeChart {
    vec![
      (
        "fire",
        relations(
          &["ground", "rock", "water"],
          &["bug", "steel", "fire", "grass", "ice", "fairy"],
          &[],
        ),
      ),
      (
        "flying",
        relations(&["rock", "electric", "ice"], &["fighting", "bug", "grass"], &["ground"]),
      ),
      ("ghost", relations(&["ghost", "dark"], &["poison", "bug"], &["normal", "fighting"])),
      ("normal", relations(&["fighting"], &[], &["ghost"])),
      ("odd", relations(&["shadow", "fire"], &[], &[])),
    ]
    .into_iter()
    .collect()
  }

  #[test]
  fn single_type_copies_its_relations() {
    let profile = WeaknessProfile::compute(&["fire"], &chart());

    assert_eq!(profile.len(), 18);
    assert_eq!(profile.get(TypeName::Water), Some(2.0));
    assert_eq!(profile.get(TypeName::Rock), Some(2.0));
    assert_eq!(profile.get(TypeName::Fairy), Some(0.5));
    assert_eq!(profile.get(TypeName::Normal), Some(1.0));
    assert_eq!(profile.get(TypeName::Dragon), Some(1.0));
  }

  #[test]
  fn dual_type_is_the_product_of_each_type() {
    let chart = chart();
    let fire = WeaknessProfile::compute(&["fire"], &chart);
    let flying = WeaknessProfile::compute(&["flying"], &chart);
    let both = WeaknessProfile::compute(&["fire", "flying"], &chart);
    let reversed = WeaknessProfile::compute(&["flying", "fire"], &chart);

    for ty in TypeName::ALL.iter().copied() {
      let expected = fire.get(ty).unwrap() * flying.get(ty).unwrap();
      assert_eq!(both.get(ty), Some(expected), "attacking type {}", ty);
    }
    assert_eq!(both, reversed);
    assert_eq!(both.get(TypeName::Rock), Some(4.0));
    assert_eq!(both.get(TypeName::Bug), Some(0.25));
    assert_eq!(both.get(TypeName::Grass), Some(0.25));
  }

  #[test]
  fn immunity_absorbs_every_other_multiplier() {
    let chart = chart();
    // Ground is doubled by fire but nullified by flying.
    let profile = WeaknessProfile::compute(&["fire", "flying"], &chart);
    assert_eq!(profile.get(TypeName::Ground), Some(0.0));

    // Fighting is doubled by normal and nullified by ghost.
    let profile = WeaknessProfile::compute(&["normal", "ghost"], &chart);
    assert_eq!(profile.get(TypeName::Fighting), Some(0.0));
    assert_eq!(profile.get(TypeName::Ghost), Some(0.0));
    assert_eq!(profile.get(TypeName::Normal), Some(0.0));
  }

  #[test]
  fn unknown_names_are_ignored() {
    let chart = chart();
    let profile = WeaknessProfile::compute(&["odd", "stellar"], &chart);

    assert_eq!(profile.len(), 18);
    assert_eq!(profile.get(TypeName::Fire), Some(2.0));
    assert!(TypeName::ALL
      .iter()
      .all(|&ty| ty == TypeName::Fire || profile.get(ty) == Some(1.0)));
  }

  #[test]
  fn serializes_in_canonical_order() {
    let profile = WeaknessProfile::compute(&["ghost"], &chart());
    let json = serde_json::to_string(&profile).unwrap();
    assert!(json.starts_with(r#"{"normal":0.0,"fire":1.0,"water":1.0,"#));
    assert!(json.ends_with(r#""dark":2.0,"fairy":1.0}"#));

    let back: WeaknessProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, profile);
    assert_eq!(serde_json::to_string(&WeaknessProfile::empty()).unwrap(), "{}");
  }
}
