//! Downloads every configured Pokemon and writes the JSON document.

use pokedex_etl::batch;
use pokedex_etl::logging;
use pokedex_etl::Api;
use pokedex_etl::Config;

fn main() -> anyhow::Result<()> {
  logging::init();

  let config = Config::load()?;
  let api = Api::new(&config.api)?;
  batch::run(&api, &config)?;
  Ok(())
}
