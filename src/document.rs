//! The JSON document handed from the fetch phase to the flatten phase.

use std::fs;
use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;

use crate::record::EntityRecord;

/// A document reading or writing error.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
  #[error("{} not found", .path.display())]
  Missing { path: PathBuf },

  #[error(transparent)]
  Io(#[from] io::Error),

  #[error(transparent)]
  Json(#[from] serde_json::Error),
}

/// Writes `records` to `path` as a JSON array indented by four spaces.
pub fn write(path: &Path, records: &[EntityRecord]) -> Result<(), Error> {
  let mut out = BufWriter::new(File::create(path)?);
  let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
  let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
  records.serialize(&mut ser)?;
  out.write_all(b"\n")?;
  out.flush()?;
  Ok(())
}

/// Reads the records at `path` back, in document order.
pub fn read(path: &Path) -> Result<Vec<EntityRecord>, Error> {
  let text = match fs::read(path) {
    Ok(text) => text,
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      return Err(Error::Missing {
        path: path.to_path_buf(),
      })
    }
    Err(e) => return Err(e.into()),
  };
  Ok(serde_json::from_slice(&text)?)
}
