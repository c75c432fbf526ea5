//! Language resources, for picking translations out of localized text.

use serde::Deserialize;
use serde::Serialize;

use crate::model::resource::Resource;

/// The API name of the English language.
pub const ENGLISH: &str = "en";

///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Language;

/// A translation of some kind of text.
///
/// This struct is used to represent a large number of similar structures in the
/// API schema, which differ only in the name of their text field.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Translation {
  /// The translated text.
  #[serde(alias = "name")]
  #[serde(alias = "genus")]
  #[serde(alias = "flavor_text")]
  pub text: String,

  /// The language this translation is in.
  pub language: Resource<Language>,
}

impl Translation {
  /// Returns whether this translation is in the language named `lang`.
  pub fn is_in(&self, lang: &str) -> bool {
    self.language.name() == lang
  }

  /// Returns the text of the first translation in `lang`, if any.
  pub fn find<'a>(translations: &'a [Translation], lang: &str) -> Option<&'a str> {
    translations
      .iter()
      .find(|t| t.is_in(lang))
      .map(|t| &t.text[..])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_either_text_key() {
    let entries: Vec<Translation> = serde_json::from_str(
      r#"[
        {"genus": "Seed Pokémon", "language": {"name": "ja", "url": "x"}},
        {"flavor_text": "A strange seed", "language": {"name": "en", "url": "y"}, "version": {"name": "red", "url": "z"}}
      ]"#,
    )
    .unwrap();

    assert_eq!(Translation::find(&entries, ENGLISH), Some("A strange seed"));
    assert_eq!(Translation::find(&entries, "ja"), Some("Seed Pokémon"));
    assert_eq!(Translation::find(&entries, "fr"), None);
  }
}
