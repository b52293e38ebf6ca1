//! Loading of flat JSON translation files.

use std::{collections::BTreeSet, fmt, fs, path::Path};

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

use super::error::{Error, Result};

/// A translation file: a JSON object mapping keys to arbitrary values.
///
/// Only the top-level keys are kept. Values are skipped without being
/// materialized, so `{"auth": {"login": "..."}}` contributes the single key
/// `auth` and a number too large for `f64` is still accepted.
#[derive(Debug, Clone)]
pub struct TranslationDocument {
    keys: BTreeSet<String>,
}

impl TranslationDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read(path).map_err(|source| Error::file_not_found(path, source))?;
        Self::from_slice(path, &content)
    }

    pub fn from_slice(path: &Path, content: &[u8]) -> Result<Self> {
        let top_level: TopLevel = serde_json::from_slice(content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        match top_level {
            TopLevel::Object(keys) => Ok(Self { keys }),
            TopLevel::Other(found) => Err(Error::Format {
                path: path.to_path_buf(),
                found,
            }),
        }
    }

    /// The top-level key set.
    pub fn keys(&self) -> &BTreeSet<String> {
        &self.keys
    }
}

/// Shape of a JSON document's root: the keys of an object, or the kind of
/// anything else.
enum TopLevel {
    Object(BTreeSet<String>),
    Other(&'static str),
}

impl<'de> Deserialize<'de> for TopLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(TopLevelVisitor)
    }
}

struct TopLevelVisitor;

impl<'de> Visitor<'de> for TopLevelVisitor {
    type Value = TopLevel;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<TopLevel, A::Error> {
        let mut keys = BTreeSet::new();
        while let Some((key, IgnoredAny)) = map.next_entry::<String, IgnoredAny>()? {
            keys.insert(key);
        }
        Ok(TopLevel::Object(keys))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<TopLevel, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(TopLevel::Other("an array"))
    }

    fn visit_str<E: de::Error>(self, _: &str) -> std::result::Result<TopLevel, E> {
        Ok(TopLevel::Other("a string"))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<TopLevel, E> {
        Ok(TopLevel::Other("a boolean"))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<TopLevel, E> {
        Ok(TopLevel::Other("a number"))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<TopLevel, E> {
        Ok(TopLevel::Other("a number"))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<TopLevel, E> {
        Ok(TopLevel::Other("a number"))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<TopLevel, E> {
        Ok(TopLevel::Other("null"))
    }
}
