//! The fetch phase: walk an id range, one request at a time.

use std::ops::RangeInclusive;
use std::thread;
use std::time::Duration;

use crate::api::Api;
use crate::api::Transport;
use crate::chart::TypeChart;
use crate::config::Config;
use crate::document;
use crate::record::EntityRecord;
use crate::record::Fetcher;

/// A policy for spacing out consecutive requests.
pub trait Pacing {
  /// Called between two consecutive ids; never before the first or after the
  /// last.
  fn pause(&mut self);
}

/// Sleeps for a fixed duration between ids.
#[derive(Copy, Clone, Debug)]
pub struct FixedDelay(pub Duration);

impl Pacing for FixedDelay {
  fn pause(&mut self) {
    thread::sleep(self.0);
  }
}

/// Does not pause at all.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoPacing;

impl Pacing for NoPacing {
  fn pause(&mut self) {}
}

/// Fetches every id in `ids`, in ascending order.
///
/// Ids that fail are logged and skipped; the returned records keep the order
/// of the ids that succeeded.
pub fn fetch_all<T: Transport, P: Pacing>(
  fetcher: &Fetcher<'_, T>,
  ids: RangeInclusive<u32>,
  pacing: &mut P,
) -> Vec<EntityRecord> {
  tracing::info!(
    "Starting download of Pokemon #{} to #{}...",
    ids.start(),
    ids.end()
  );

  let mut records = Vec::new();
  let mut first = true;
  for id in ids {
    if !first {
      pacing.pause();
    }
    first = false;

    match fetcher.fetch(id) {
      Ok(record) => {
        tracing::info!("Got #{}: {}", id, record.name);
        records.push(record);
      }
      Err(e) => tracing::warn!("Failed to get data for Pokemon ID {}: {}", id, e),
    }
  }

  tracing::info!("Download finished: {} records", records.len());
  records
}

/// Runs the fetch phase: loads the type chart, fetches ids `1..=limit` and
/// writes the document named in `config`.
///
/// Returns the number of records saved.
pub fn run<T: Transport>(api: &Api<T>, config: &Config) -> Result<usize, document::Error> {
  tracing::info!("Using PokeAPI at {}", api.base_url());

  let chart = TypeChart::load(api);
  let fetcher = Fetcher::new(api, &chart);
  let mut pacing = FixedDelay(config.fetch.delay());
  let records = fetch_all(&fetcher, 1..=config.fetch.limit, &mut pacing);

  let path = &config.output.document;
  document::write(path, &records)?;
  tracing::info!("Done! {} Pokemon saved to {}", records.len(), path.display());
  Ok(records.len())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::MemoryTransport;
  use crate::logging;

  struct CountingPacing(usize);

  impl Pacing for CountingPacing {
    fn pause(&mut self) {
      self.0 += 1;
    }
  }

  fn pokemon(id: u32, name: &str) -> String {
    format!(
      r#"{{
        "id": {id},
        "name": "{name}",
        "height": 10,
        "weight": 100,
        "types": [{{"slot": 1, "type": {{"name": "normal", "url": "t"}}}}],
        "species": {{"name": "{name}", "url": "http://dex.test/pokemon-species/{id}"}},
        "sprites": {{"front_default": null, "front_shiny": null}}
      }}"#,
      id = id,
      name = name
    )
  }

  #[test]
  fn skips_failures_and_keeps_order() {
    let mut transport = MemoryTransport::new();
    transport.insert("http://dex.test/pokemon/1", pokemon(1, "one"));
    // 2 is missing entirely; 3 is malformed.
    transport.insert("http://dex.test/pokemon/3", r#"{"id": 3, "name": "three"}"#);
    transport.insert("http://dex.test/pokemon/4", pokemon(4, "four"));
    let api = Api::with_transport("http://dex.test", transport);
    let chart = TypeChart::new();
    let fetcher = Fetcher::new(&api, &chart);

    let mut pacing = CountingPacing(0);
    let records = fetch_all(&fetcher, 1..=4, &mut pacing);

    let names: Vec<&str> = records.iter().map(|r| &r.name[..]).collect();
    assert_eq!(names, vec!["one", "four"]);
    assert_eq!(pacing.0, 3);
  }

  #[test]
  fn empty_range_fetches_nothing() {
    let api = Api::with_transport("http://dex.test", MemoryTransport::new());
    let chart = TypeChart::new();
    let fetcher = Fetcher::new(&api, &chart);

    let mut pacing = CountingPacing(0);
    #[allow(clippy::reversed_empty_ranges)]
    let records = fetch_all(&fetcher, 1..=0, &mut pacing);
    assert!(records.is_empty());
    assert_eq!(pacing.0, 0);
  }

  #[test]
  fn run_saves_the_document_and_reports_progress() {
    let mut transport = MemoryTransport::new();
    transport.insert("http://dex.test/pokemon/1", pokemon(1, "one"));
    transport.insert("http://dex.test/pokemon/3", pokemon(3, "three"));
    let api = Api::with_transport("http://dex.test", transport);

    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.fetch.limit = 3;
    config.fetch.delay_ms = 0;
    config.output.document = dir.path().join("dex.json");

    let (saved, log) = logging::capture(|| run(&api, &config));
    assert_eq!(saved.unwrap(), 2);
    assert!(log.contains("Using PokeAPI at http://dex.test"));
    assert!(log.contains("Failed to get data for Pokemon ID 2"));
    assert!(log.contains("Done! 2 Pokemon saved to"));

    let records = document::read(&config.output.document).unwrap();
    let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
  }
}
