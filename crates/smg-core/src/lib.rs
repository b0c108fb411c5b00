#![deny(missing_docs)]
#![doc = "Error type, canonical JSON encoding and content hashing shared by the smgroup crates."]

mod canonical;
pub mod errors;

pub use canonical::{from_json_slice, stable_hash_string, to_canonical_json_bytes};
pub use errors::{ErrorInfo, SmgError};
