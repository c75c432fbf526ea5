//! Entity records: one denormalized row of Pokedex data per Pokemon, assembled
//! from the `pokemon` and `pokemon-species` endpoints.

use serde::Deserialize;
use serde::Serialize;

use crate::api::Api;
use crate::api::Error;
use crate::api::Transport;
use crate::chart::TypeChart;
use crate::model::lang::ENGLISH;
use crate::model::pokemon::AbilitySlot;
use crate::model::pokemon::BaseStat;
use crate::model::Pokemon;
use crate::model::Species;
use crate::model::StatName;
use crate::model::Translation;
use crate::weakness::WeaknessProfile;

/// A fully assembled Pokedex entry.
///
/// This is the unit of the JSON document written by the fetch phase and read
/// back by the flatten phase; its field order is the document's field order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct EntityRecord {
  pub id: u32,
  pub name: String,
  /// The English genus, e.g. "Seed Pokemon".
  pub category: String,
  pub generation: String,
  pub is_legendary: bool,
  pub is_mythical: bool,
  /// Type names in slot order; one or two entries.
  pub types: Vec<String>,
  /// Height in meters.
  pub height: f64,
  /// Weight in kilograms.
  pub weight: f64,
  pub habitat: String,
  /// The capitalized name of the pre-evolution, or "None".
  pub evolves_from: String,
  /// The first English Pokedex entry.
  pub description: String,
  pub stats: Stats,
  /// The damage multiplier taken from each attacking type.
  pub damage_taken: WeaknessProfile,
  pub abilities: Vec<String>,
  pub cry_url: Option<String>,
  pub shiny_sprite_url: Option<String>,
  pub sprite_url: Option<String>,
}

/// The six base stats.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Stats {
  pub hp: u32,
  pub attack: u32,
  pub defense: u32,
  pub special_attack: u32,
  pub special_defense: u32,
  pub speed: u32,
}

impl Stats {
  /// Collects base stats from the API's stat list, in any order.
  ///
  /// Stats missing from the list stay at 0.
  pub fn from_base_stats(list: &[BaseStat]) -> Self {
    let mut stats = Self::default();
    for entry in list {
      if let Some(name) = StatName::from_api_name(entry.stat.name()) {
        *stats.slot_mut(name) = entry.base_stat;
      }
    }
    stats
  }

  /// Returns the value of the stat `name`.
  pub fn get(&self, name: StatName) -> u32 {
    match name {
      StatName::HitPoints => self.hp,
      StatName::Attack => self.attack,
      StatName::Defense => self.defense,
      StatName::SpAttack => self.special_attack,
      StatName::SpDefense => self.special_defense,
      StatName::Speed => self.speed,
    }
  }

  fn slot_mut(&mut self, name: StatName) -> &mut u32 {
    match name {
      StatName::HitPoints => &mut self.hp,
      StatName::Attack => &mut self.attack,
      StatName::Defense => &mut self.defense,
      StatName::SpAttack => &mut self.special_attack,
      StatName::SpDefense => &mut self.special_defense,
      StatName::Speed => &mut self.speed,
    }
  }
}

/// The fields of an [`EntityRecord`] that come from the species endpoint.
///
/// [`SpeciesDetails::default()`] holds the placeholder for each of them, used
/// verbatim when the species cannot be loaded.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct SpeciesDetails {
  pub description: String,
  pub category: String,
  pub habitat: String,
  pub evolves_from: String,
  pub generation: String,
  pub is_legendary: bool,
  pub is_mythical: bool,
}

impl Default for SpeciesDetails {
  fn default() -> Self {
    Self {
      description: "No description available.".to_string(),
      category: "Unknown Category".to_string(),
      habitat: "Unknown Habitat".to_string(),
      evolves_from: "None".to_string(),
      generation: "Unknown Generation".to_string(),
      is_legendary: false,
      is_mythical: false,
    }
  }
}

impl From<&Species> for SpeciesDetails {
  fn from(species: &Species) -> Self {
    let mut details = Self::default();
    if let Some(text) = Translation::find(&species.flavor_text, ENGLISH) {
      details.description = normalize_text(text);
    }
    if let Some(genus) = Translation::find(&species.genus, ENGLISH) {
      details.category = normalize_text(genus);
    }
    if let Some(habitat) = &species.habitat {
      details.habitat = capitalize(habitat.name());
    }
    if let Some(parent) = &species.evolves_from {
      details.evolves_from = capitalize(parent.name());
    }
    if let Some(generation) = &species.generation {
      details.generation = capitalize(generation.name());
    }
    details.is_legendary = species.is_legendary;
    details.is_mythical = species.is_mythical;
    details
  }
}

impl EntityRecord {
  /// Assembles a record from a Pokemon and, if it could be loaded, its
  /// species.
  ///
  /// Without a species, every species-sourced field takes its placeholder
  /// from [`SpeciesDetails::default()`], stats are all zero and the weakness
  /// profile is empty.
  pub fn assemble(
    pokemon: &Pokemon,
    species: Option<&Species>,
    chart: &TypeChart,
  ) -> Self {
    let types = pokemon.type_names();
    let (details, stats, damage_taken) = match species {
      Some(species) => (
        SpeciesDetails::from(species),
        Stats::from_base_stats(&pokemon.stats),
        WeaknessProfile::compute(&types, chart),
      ),
      None => (
        SpeciesDetails::default(),
        Stats::default(),
        WeaknessProfile::empty(),
      ),
    };

    Self {
      id: pokemon.id,
      name: pokemon.name.clone(),
      category: details.category,
      generation: details.generation,
      is_legendary: details.is_legendary,
      is_mythical: details.is_mythical,
      types,
      height: tenths(pokemon.height),
      weight: tenths(pokemon.weight),
      habitat: details.habitat,
      evolves_from: details.evolves_from,
      description: details.description,
      stats,
      damage_taken,
      abilities: pokemon.abilities.iter().map(ability_label).collect(),
      cry_url: pokemon.cries.latest.clone(),
      shiny_sprite_url: pokemon.sprites.front_shiny.clone(),
      sprite_url: pokemon.sprites.front_default.clone(),
    }
  }
}

/// Downloads and assembles [`EntityRecord`]s one id at a time.
pub struct Fetcher<'a, T> {
  api: &'a Api<T>,
  chart: &'a TypeChart,
}

impl<'a, T: Transport> Fetcher<'a, T> {
  /// Creates a new [`Fetcher`] using a previously loaded type chart.
  pub fn new(api: &'a Api<T>, chart: &'a TypeChart) -> Self {
    Self { api, chart }
  }

  /// Fetches the Pokemon with the given id and its species.
  ///
  /// Fails only if the Pokemon itself cannot be loaded or decoded; a missing
  /// species degrades the record instead.
  pub fn fetch(&self, id: u32) -> Result<EntityRecord, Error> {
    let pokemon = self.api.by_id::<Pokemon>(id)?;
    let species = match pokemon.species.load(self.api) {
      Ok(species) => Some(species),
      Err(e) => {
        tracing::warn!(
          "Failed to get species for Pokemon ID {} ({}): {}",
          id,
          pokemon.name,
          e
        );
        None
      }
    };
    Ok(EntityRecord::assemble(&pokemon, species.as_ref(), self.chart))
  }
}

/// Converts a value in tenths of a unit (decimeters, hectograms) to whole
/// units.
pub fn tenths(value: u32) -> f64 {
  f64::from(value) / 10.0
}

/// Cleans up game text for export.
///
/// Line breaks and form feeds become single spaces; accented "é" and curly
/// quotes are folded to their ASCII counterparts.
pub fn normalize_text(text: &str) -> String {
  text
    .chars()
    .map(|c| match c {
      '\n' | '\u{c}' | '\r' => ' ',
      'é' => 'e',
      'É' => 'E',
      '\u{2018}' | '\u{2019}' => '\'',
      '\u{201c}' | '\u{201d}' => '"',
      c => c,
    })
    .collect()
}

/// Uppercases the first character of `name` and lowercases the rest.
pub fn capitalize(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    Some(first) => first
      .to_uppercase()
      .chain(chars.flat_map(char::to_lowercase))
      .collect(),
    None => String::new(),
  }
}

/// Renders an ability for export, e.g. `solar-power` as "Solar Power", with
/// " (Hidden)" appended for hidden abilities.
pub fn ability_label(slot: &AbilitySlot) -> String {
  // Every word is capitalized: "solar-power" is "Solar Power", not
  // "Solar power".
  let mut label = slot
    .ability
    .name()
    .split('-')
    .filter(|word| !word.is_empty())
    .map(capitalize)
    .collect::<Vec<_>>()
    .join(" ");
  if slot.is_hidden {
    label.push_str(" (Hidden)");
  }
  label
}
