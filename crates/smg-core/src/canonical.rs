use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::errors::{ErrorInfo, SmgError};

fn serde_error(code: &str, err: serde_json::Error) -> SmgError {
    SmgError::Serde(
        ErrorInfo::new(code, err.to_string())
            .with_context("line", err.line())
            .with_context("column", err.column()),
    )
}

/// Sorts object keys at every depth so the encoding only depends on content.
fn sort_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|lhs, rhs| lhs.0.cmp(&rhs.0));
            for (_, child) in entries.iter_mut() {
                sort_keys(child);
            }
            map.extend(entries);
        }
        Value::Array(items) => items.iter_mut().for_each(sort_keys),
        _ => {}
    }
}

/// Encodes `value` as compact JSON with sorted object keys.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SmgError> {
    let mut tree = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    sort_keys(&mut tree);
    serde_json::to_vec(&tree).map_err(|err| serde_error("json-write", err))
}

/// Decodes a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, SmgError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-read", err))
}

/// Lowercase hex SHA-256 of the canonical encoding of `value`.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, SmgError> {
    let mut hasher = Sha256::new();
    hasher.update(to_canonical_json_bytes(value)?);
    Ok(hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect())
}
