//! Hashed JSON catalog export.

use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use sgram_core::{ErrorInfo, Family, NGram, SchemaVersion, SgramError};

/// Schema of the exported document.
pub const CATALOG_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Serialized form of an exported range.
#[derive(Debug, Serialize)]
pub struct CatalogDocument<'a> {
    /// Schema descriptor.
    pub schema_version: SchemaVersion,
    /// Exported family.
    pub family: Family,
    /// Family description.
    pub description: &'static str,
    /// Exported entries.
    pub entries: &'a [NGram],
    /// SHA-256 over the canonical JSON of `entries`.
    pub catalog_hash: String,
}

fn serde_error(code: &str, err: impl ToString) -> SgramError {
    SgramError::Io(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, canonicalize(value)))
                    .collect::<Map<_, _>>(),
            )
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Canonical JSON bytes with sorted object keys.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SgramError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    serde_json::to_vec(&canonicalize(value)).map_err(|err| serde_error("json-write", err))
}

/// Hex SHA-256 digest of the canonical entries.
pub fn catalog_hash(entries: &[NGram]) -> Result<String, SgramError> {
    let bytes = to_canonical_json_bytes(&entries)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

impl<'a> CatalogDocument<'a> {
    /// Builds and hashes the document.
    pub fn new(family: Family, entries: &'a [NGram]) -> Result<Self, SgramError> {
        Ok(Self {
            schema_version: CATALOG_SCHEMA,
            family,
            description: family.description(),
            entries,
            catalog_hash: catalog_hash(entries)?,
        })
    }

    /// Pretty printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SgramError> {
        serde_json::to_string_pretty(self).map_err(|err| serde_error("json-write", err))
    }
}

#[cfg(test)]
mod tests {
    use sgram_tables::{create_range, DEFAULT_RANGE};

    use super::*;

    #[test]
    fn hash_is_stable_across_builds() {
        let first = create_range(Family::Quadratic, DEFAULT_RANGE).unwrap();
        let second = create_range(Family::Quadratic, DEFAULT_RANGE).unwrap();
        let hash = catalog_hash(&first).unwrap();
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, catalog_hash(&second).unwrap());
        assert_ne!(hash, catalog_hash(&first[..11]).unwrap());
    }

    #[test]
    fn document_carries_schema_and_entries() {
        let entries = create_range(Family::Linear, 0..3).unwrap();
        let document = CatalogDocument::new(Family::Linear, &entries).unwrap();
        let value: Value = serde_json::from_str(&document.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["schema_version"]["major"], 1);
        assert_eq!(value["family"], "1st");
        assert_eq!(value["entries"].as_array().unwrap().len(), 3);
        assert_eq!(value["entries"][2]["value"], 4);
        assert_eq!(value["catalog_hash"], document.catalog_hash.as_str());
    }

    #[test]
    fn canonical_keys_are_sorted() {
        let value = serde_json::json!({"b": 1, "a": {"d": 2, "c": 3}});
        let bytes = to_canonical_json_bytes(&value).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), r#"{"a":{"c":3,"d":2},"b":1}"#);
    }
}
