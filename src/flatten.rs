//! The flatten phase: one CSV row per [`EntityRecord`].

use std::fs::File;
use std::io;
use std::path::Path;

use crate::config::OutputConfig;
use crate::document;
use crate::model::StatName;
use crate::model::TypeName;
use crate::record::EntityRecord;

/// A flattening error.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
  #[error(transparent)]
  Document(#[from] document::Error),

  #[error(transparent)]
  Io(#[from] io::Error),

  #[error(transparent)]
  Csv(#[from] csv::Error),
}

const LEADING: [&str; 13] = [
  "id",
  "name",
  "category",
  "generation",
  "is_legendary",
  "is_mythical",
  "types",
  "height",
  "weight",
  "abilities",
  "habitat",
  "evolves_from",
  "description",
];

const MEDIA: [&str; 3] = ["cry_url", "sprite_url", "shiny_sprite_url"];

/// Returns the column names, in table order.
pub fn headers() -> Vec<String> {
  let stats = StatName::ALL.iter().map(|&stat| stat_column(stat).to_string());
  let weaknesses = TypeName::ALL.iter().map(|ty| format!("against_{}", ty));

  LEADING
    .iter()
    .map(|s| s.to_string())
    .chain(stats)
    .chain(weaknesses)
    .chain(MEDIA.iter().map(|s| s.to_string()))
    .collect()
}

fn stat_column(stat: StatName) -> &'static str {
  match stat {
    StatName::HitPoints => "hp",
    StatName::Attack => "attack",
    StatName::Defense => "defense",
    StatName::SpAttack => "special_attack",
    StatName::SpDefense => "special_defense",
    StatName::Speed => "speed",
  }
}

/// Returns the cells of `record`'s row, in the order of [`headers()`].
///
/// Lists are joined with ", ", booleans are `True`/`False`, and missing URLs
/// or weakness entries are empty cells.
pub fn row(record: &EntityRecord) -> Vec<String> {
  let mut cells = vec![
    record.id.to_string(),
    record.name.clone(),
    record.category.clone(),
    record.generation.clone(),
    boolean(record.is_legendary).to_string(),
    boolean(record.is_mythical).to_string(),
    record.types.join(", "),
    real(record.height),
    real(record.weight),
    record.abilities.join(", "),
    record.habitat.clone(),
    record.evolves_from.clone(),
    record.description.clone(),
  ];

  cells.extend(
    StatName::ALL
      .iter()
      .map(|&stat| record.stats.get(stat).to_string()),
  );
  cells.extend(
    TypeName::ALL
      .iter()
      .map(|&ty| record.damage_taken.get(ty).map(real).unwrap_or_default()),
  );
  for url in [&record.cry_url, &record.sprite_url, &record.shiny_sprite_url] {
    cells.push(url.clone().unwrap_or_default());
  }
  cells
}

fn boolean(value: bool) -> &'static str {
  if value {
    "True"
  } else {
    "False"
  }
}

/// Renders a real number with at least one decimal place, so whole numbers
/// come out as `1.0` rather than `1`.
fn real(value: f64) -> String {
  if value.is_finite() && value.fract() == 0.0 {
    format!("{:.1}", value)
  } else {
    value.to_string()
  }
}

/// Writes a header row and then one row per record, in order.
pub fn write_table<W: io::Write>(records: &[EntityRecord], out: W) -> Result<(), Error> {
  let mut writer = csv::Writer::from_writer(out);
  writer.write_record(headers())?;
  for record in records {
    writer.write_record(row(record))?;
  }
  writer.flush()?;
  Ok(())
}

/// Flattens the document at `source` into a CSV table at `table`.
///
/// The whole document is read and decoded before `table` is created, so a
/// missing or unreadable document leaves no table behind. Returns the number
/// of rows written.
pub fn flatten_file(source: &Path, table: &Path) -> Result<usize, Error> {
  let records = document::read(source)?;
  tracing::debug!("Read {} records from {}", records.len(), source.display());

  write_table(&records, File::create(table)?)?;
  Ok(records.len())
}

/// Runs the flatten phase over the paths in `output`.
///
/// A missing document is reported and yields `Ok(None)`; nothing is written.
/// Any other failure is returned.
pub fn run(output: &OutputConfig) -> Result<Option<usize>, Error> {
  tracing::info!("Converting {} to CSV", output.document.display());

  match flatten_file(&output.document, &output.table) {
    Ok(rows) => {
      tracing::info!(
        "Success! Converted {} rows to {}",
        rows,
        output.table.display()
      );
      Ok(Some(rows))
    }
    Err(Error::Document(e @ document::Error::Missing { .. })) => {
      tracing::error!("Error: {}!", e);
      Ok(None)
    }
    Err(e) => Err(e),
  }
}
