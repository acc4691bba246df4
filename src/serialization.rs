//! JSON helpers for the wire format.
//!
//! Serde already provides the encoding through the derives on
//! [`RemoteData`](crate::RemoteData) and [`Aggregate`](crate::Aggregate).
//! These helpers keep formatting stable and map failures into
//! [`RemoteDataError`].
//!
//! A state is an object with a `type` tag; an aggregate is an array of
//! states with at least two entries:
//!
//! ```json
//! [{"type": "SUCCESS", "data": 1}, {"type": "FAILURE", "error": "timeout"}]
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{RemoteDataError, RemoteDataResult};

/// Serialize a state or aggregate to compact JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> RemoteDataResult<String> {
    serde_json::to_string(value)
        .map_err(|e| RemoteDataError::serialization(format!("serialize remote data: {e}")))
}

/// Serialize a state or aggregate to pretty JSON.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> RemoteDataResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| RemoteDataError::serialization(format!("serialize remote data: {e}")))
}

/// Deserialize a state or aggregate from JSON.
///
/// An aggregate with fewer than two entries is rejected here as well.
pub fn from_json<T: DeserializeOwned>(s: &str) -> RemoteDataResult<T> {
    serde_json::from_str::<T>(s)
        .map_err(|e| RemoteDataError::serialization(format!("deserialize remote data: {e}")))
}
