//! The type chart: for every defending type, which attacking types deal
//! double, half or no damage to it.

use std::collections::BTreeSet;
use std::collections::HashMap;

use crate::api::Api;
use crate::api::Transport;
use crate::model::ty::Relations;
use crate::model::Resource;
use crate::model::Type;
use crate::model::TypeName;

/// The damage relations of a single defending type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeRelations {
  /// Attacking types that deal double damage.
  pub double_damage_from: BTreeSet<String>,
  /// Attacking types that deal half damage.
  pub half_damage_from: BTreeSet<String>,
  /// Attacking types that deal no damage.
  pub no_damage_from: BTreeSet<String>,
}

impl From<&Relations> for TypeRelations {
  fn from(relations: &Relations) -> Self {
    let names = |list: &[Resource<Type>]| -> BTreeSet<String> {
      list.iter().map(|r| r.name().to_string()).collect()
    };
    Self {
      double_damage_from: names(&relations.weak_to),
      half_damage_from: names(&relations.resists),
      no_damage_from: names(&relations.immune_to),
    }
  }
}

/// The full type chart, keyed by defending type name.
///
/// Built once per run and read-only afterwards. Lookups for names the chart
/// does not know return `None` and contribute nothing.
#[derive(Clone, Debug, Default)]
pub struct TypeChart {
  relations: HashMap<String, TypeRelations>,
}

impl TypeChart {
  /// Creates an empty chart.
  pub fn new() -> Self {
    Self::default()
  }

  /// Downloads the relations of every canonical type.
  ///
  /// A type that fails to download is recorded with no relations, so this
  /// never fails as a whole; weakness profiles computed from such a chart are
  /// simply less accurate.
  pub fn load<T: Transport>(api: &Api<T>) -> Self {
    tracing::info!("--- Pre-loading type chart ---");
    let mut chart = Self::new();
    for id in 1..=TypeName::COUNT {
      match api.by_id::<Type>(id) {
        Ok(ty) => chart.insert(ty.name.clone(), TypeRelations::from(&ty.relations)),
        Err(e) => {
          tracing::warn!("Failed to load type #{}: {}", id, e);
          if let Some(name) = TypeName::from_id(id) {
            chart.insert(name.as_str(), TypeRelations::default());
          }
        }
      }
    }
    tracing::info!("--- Type chart loaded ({} types) ---", chart.len());
    chart
  }

  /// Records the relations of the defending type `name`.
  pub fn insert(&mut self, name: impl Into<String>, relations: TypeRelations) {
    self.relations.insert(name.into(), relations);
  }

  /// Returns the relations of the defending type `name`, if known.
  pub fn relations(&self, name: &str) -> Option<&TypeRelations> {
    self.relations.get(name)
  }

  /// Returns the number of defending types in the chart.
  pub fn len(&self) -> usize {
    self.relations.len()
  }
}

impl<S: Into<String>> FromIterator<(S, TypeRelations)> for TypeChart {
  fn from_iter<I: IntoIterator<Item = (S, TypeRelations)>>(iter: I) -> Self {
    let mut chart = Self::new();
    for (name, relations) in iter {
      chart.insert(name, relations);
    }
    chart
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::MemoryTransport;

  fn type_body(name: &str, double: &[&str], half: &[&str], none: &[&str]) -> String {
    let list = |names: &[&str]| {
      names
        .iter()
        .map(|n| format!(r#"{{"name": "{}", "url": "u"}}"#, n))
        .collect::<Vec<_>>()
        .join(", ")
    };
    format!(
      r#"{{"id": 0, "name": "{}", "damage_relations": {{"double_damage_from": [{}], "half_damage_from": [{}], "no_damage_from": [{}]}}}}"#,
      name,
      list(double),
      list(half),
      list(none)
    )
  }

  #[test]
  fn load_degrades_failed_types_to_empty_relations() {
    let mut transport = MemoryTransport::new();
    for id in 1..=TypeName::COUNT {
      let name = TypeName::from_id(id).unwrap().as_str();
      let body = if name == "ghost" {
        type_body(name, &["ghost", "dark"], &["poison", "bug"], &["normal", "fighting"])
      } else {
        type_body(name, &[], &[], &[])
      };
      transport.insert(format!("http://dex.test/type/{}", id), body);
    }
    // Fire is served under id 10; drop it to simulate an outage.
    transport.remove("http://dex.test/type/10");

    let api = Api::with_transport("http://dex.test", transport);
    let chart = TypeChart::load(&api);

    assert_eq!(chart.len(), 18);
    assert_eq!(chart.relations("fire"), Some(&TypeRelations::default()));

    let ghost = chart.relations("ghost").unwrap();
    assert!(ghost.no_damage_from.contains("normal"));
    assert!(ghost.double_damage_from.contains("dark"));
    assert!(ghost.half_damage_from.contains("bug"));
  }

  #[test]
  fn unknown_names_have_no_relations() {
    let chart: TypeChart = vec![("fire", TypeRelations::default())].into_iter().collect();
    assert!(chart.relations("fire").is_some());
    assert!(chart.relations("shadow").is_none());
  }
}
