//! The remote-data sum type.
//!
//! A [`RemoteData`] value records where an asynchronously fetched value
//! is in its lifecycle. Callers build a fresh value on every transition
//! of their own async operation; this crate only inspects it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of an asynchronously fetched value.
///
/// Exactly one variant is active and only that variant's payload is
/// present. On the wire the variant is carried in a `type` field:
///
/// ```json
/// {"type": "SUCCESS", "data": 42}
/// ```
///
/// # Examples
///
/// ```
/// use remote_data::{RemoteData, Tag};
///
/// let state: RemoteData<String, u32> = RemoteData::success(7);
/// assert!(state.is_success());
/// assert_eq!(state.tag(), Tag::Success);
/// assert_eq!(state.success_or_else(|_| 0), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemoteData<E, D> {
    /// Nothing has been requested yet.
    NotAsked,

    /// First request in flight.
    Loading,

    /// Refresh in flight after an earlier success or failure.
    Reloading,

    /// The request failed.
    Failure {
        /// Caller-defined error payload.
        error: E,
    },

    /// The request resolved.
    Success {
        /// Caller-defined data payload.
        data: D,
    },
}

/// The payload-free discriminant of a [`RemoteData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tag {
    NotAsked,
    Loading,
    Reloading,
    Failure,
    Success,
}

impl Tag {
    /// All tags in declaration order.
    pub const ALL: [Self; 5] = [
        Self::NotAsked,
        Self::Loading,
        Self::Reloading,
        Self::Failure,
        Self::Success,
    ];

    /// Wire name of the tag, as used in the `type` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotAsked => "NOT_ASKED",
            Self::Loading => "LOADING",
            Self::Reloading => "RELOADING",
            Self::Failure => "FAILURE",
            Self::Success => "SUCCESS",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<E, D> RemoteData<E, D> {
    /// Creates a `NotAsked` state.
    #[must_use]
    pub const fn not_asked() -> Self {
        Self::NotAsked
    }

    /// Creates a `Loading` state.
    #[must_use]
    pub const fn loading() -> Self {
        Self::Loading
    }

    /// Creates a `Reloading` state.
    #[must_use]
    pub const fn reloading() -> Self {
        Self::Reloading
    }

    /// Creates a `Failure` state carrying `error`.
    #[must_use]
    pub const fn failure(error: E) -> Self {
        Self::Failure { error }
    }

    /// Creates a `Success` state carrying `data`.
    #[must_use]
    pub const fn success(data: D) -> Self {
        Self::Success { data }
    }

    /// Classifies the state.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::NotAsked => Tag::NotAsked,
            Self::Loading => Tag::Loading,
            Self::Reloading => Tag::Reloading,
            Self::Failure { .. } => Tag::Failure,
            Self::Success { .. } => Tag::Success,
        }
    }

    pub const fn is_not_asked(&self) -> bool {
        matches!(self, Self::NotAsked)
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_reloading(&self) -> bool {
        matches!(self, Self::Reloading)
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub const fn data(&self) -> Option<&D> {
        match self {
            Self::Success { data } => Some(data),
            _ => None,
        }
    }

    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Failure { error } => Some(error),
            _ => None,
        }
    }

    /// Consumes the state, keeping the data if it is a success.
    pub fn into_data(self) -> Option<D> {
        match self {
            Self::Success { data } => Some(data),
            _ => None,
        }
    }

    /// Consumes the state, keeping the error if it is a failure.
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Failure { error } => Some(error),
            _ => None,
        }
    }

    /// Returns the data of a `Success`, otherwise hands the whole state
    /// to `or_else` and returns its result.
    ///
    /// # Examples
    ///
    /// ```
    /// use remote_data::RemoteData;
    ///
    /// let pending: RemoteData<(), i32> = RemoteData::loading();
    /// assert_eq!(pending.success_or_else(|_| -1), -1);
    /// ```
    pub fn success_or_else<F>(self, or_else: F) -> D
    where
        F: FnOnce(Self) -> D,
    {
        match self {
            Self::Success { data } => data,
            other => or_else(other),
        }
    }

    /// Borrows the payloads, so a state can be folded without being moved.
    pub const fn as_ref(&self) -> RemoteData<&E, &D> {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Reloading => RemoteData::Reloading,
            Self::Failure { error } => RemoteData::Failure { error },
            Self::Success { data } => RemoteData::Success { data },
        }
    }

    /// Maps the success payload, leaving every other state untouched.
    pub fn map<U, F: FnOnce(D) -> U>(self, op: F) -> RemoteData<E, U> {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Reloading => RemoteData::Reloading,
            Self::Failure { error } => RemoteData::Failure { error },
            Self::Success { data } => RemoteData::Success { data: op(data) },
        }
    }

    /// Maps the failure payload, leaving every other state untouched.
    pub fn map_err<U, F: FnOnce(E) -> U>(self, op: F) -> RemoteData<U, D> {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Reloading => RemoteData::Reloading,
            Self::Failure { error } => RemoteData::Failure { error: op(error) },
            Self::Success { data } => RemoteData::Success { data },
        }
    }
}

impl<E, D> Default for RemoteData<E, D> {
    fn default() -> Self {
        Self::NotAsked
    }
}

impl<E, D> From<Result<D, E>> for RemoteData<E, D> {
    fn from(result: Result<D, E>) -> Self {
        match result {
            Ok(data) => Self::Success { data },
            Err(error) => Self::Failure { error },
        }
    }
}

impl<E, D> From<Option<D>> for RemoteData<E, D> {
    fn from(option: Option<D>) -> Self {
        option.map_or(Self::NotAsked, |data| Self::Success { data })
    }
}

impl<E, D> fmt::Display for RemoteData<E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().as_str())
    }
}

/// Creates a `NotAsked` state.
#[must_use]
pub const fn not_asked<E, D>() -> RemoteData<E, D> {
    RemoteData::NotAsked
}

/// Creates a `Loading` state.
#[must_use]
pub const fn loading<E, D>() -> RemoteData<E, D> {
    RemoteData::Loading
}

/// Creates a `Reloading` state.
#[must_use]
pub const fn reloading<E, D>() -> RemoteData<E, D> {
    RemoteData::Reloading
}

/// Creates a `Failure` state.
#[must_use]
pub const fn failure<E, D>(error: E) -> RemoteData<E, D> {
    RemoteData::Failure { error }
}

/// Creates a `Success` state.
#[must_use]
pub const fn success<E, D>(data: D) -> RemoteData<E, D> {
    RemoteData::Success { data }
}
