//! Converts the JSON document written by `pokedex-fetch` into a CSV table.

use pokedex_etl::flatten;
use pokedex_etl::logging;
use pokedex_etl::Config;

fn main() -> anyhow::Result<()> {
  logging::init();

  let config = Config::load()?;
  flatten::run(&config.output)?;
  Ok(())
}
