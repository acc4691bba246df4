//! Fixed-size collections of remote-data states.
//!
//! An [`Aggregate`] lets several independent fetches be guarded and
//! folded as one: a screen that needs a user *and* their settings only
//! shows content once both are in, and surfaces either failure first.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::state::{RemoteData, Tag};

/// Minimum number of states in an [`Aggregate`].
pub const MIN_AGGREGATE_LEN: usize = 2;

/// An ordered collection of at least two [`RemoteData`] states.
///
/// The length is fixed once constructed. Order is preserved by every
/// operation that yields payload lists.
///
/// # Examples
///
/// ```
/// use remote_data::{Aggregate, RemoteData};
///
/// let both: Aggregate<String, i32> =
///     Aggregate::pair(RemoteData::success(1), RemoteData::loading());
/// assert!(both.any_loading());
/// assert!(!both.all_success());
///
/// assert!(Aggregate::<String, i32>::new(vec![RemoteData::loading()]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Aggregate<E, D> {
    states: Vec<RemoteData<E, D>>,
}

#[allow(clippy::len_without_is_empty)]
impl<E, D> Aggregate<E, D> {
    /// Builds an aggregate from a list of states.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooFewStates` if fewer than two states are given.
    pub fn new(states: Vec<RemoteData<E, D>>) -> Result<Self, ValidationError> {
        if states.len() < MIN_AGGREGATE_LEN {
            tracing::debug!(actual = states.len(), "rejected undersized aggregate");
            return Err(ValidationError::TooFewStates {
                actual: states.len(),
            });
        }
        Ok(Self { states })
    }

    /// Builds the smallest aggregate, which is always valid.
    #[must_use]
    pub fn pair(first: RemoteData<E, D>, second: RemoteData<E, D>) -> Self {
        Self {
            states: vec![first, second],
        }
    }

    /// Number of states; never below [`MIN_AGGREGATE_LEN`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn states(&self) -> &[RemoteData<E, D>] {
        &self.states
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RemoteData<E, D>> {
        self.states.iter()
    }

    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.states.iter().map(RemoteData::tag)
    }

    pub fn into_vec(self) -> Vec<RemoteData<E, D>> {
        self.states
    }

    /// Borrows every payload, so the aggregate can be folded without being moved.
    #[must_use]
    pub fn as_ref(&self) -> Aggregate<&E, &D> {
        Aggregate {
            states: self.states.iter().map(RemoteData::as_ref).collect(),
        }
    }

    /// True if at least one state is `NotAsked`.
    pub fn any_not_asked(&self) -> bool {
        self.states.iter().any(RemoteData::is_not_asked)
    }

    /// True if at least one state is `Loading`.
    pub fn any_loading(&self) -> bool {
        self.states.iter().any(RemoteData::is_loading)
    }

    /// True if at least one state is `Reloading`.
    pub fn any_reloading(&self) -> bool {
        self.states.iter().any(RemoteData::is_reloading)
    }

    /// True if at least one state is `Failure`.
    pub fn any_failure(&self) -> bool {
        self.states.iter().any(RemoteData::is_failure)
    }

    /// True only if every state is `Success`.
    pub fn all_success(&self) -> bool {
        self.states.iter().all(RemoteData::is_success)
    }

    /// Returns every data payload in order if all states succeeded,
    /// otherwise hands the aggregate to `or_else` and returns its result.
    pub fn success_or_else<F>(self, or_else: F) -> Vec<D>
    where
        F: FnOnce(Self) -> Vec<D>,
    {
        if self.all_success() {
            self.states
                .into_iter()
                .filter_map(RemoteData::into_data)
                .collect()
        } else {
            or_else(self)
        }
    }

    /// Error payloads of every `Failure`, in input order.
    pub(crate) fn into_errors(self) -> Vec<E> {
        self.states
            .into_iter()
            .filter_map(RemoteData::into_error)
            .collect()
    }

    /// Data payloads of every `Success`, in input order.
    pub(crate) fn into_data(self) -> Vec<D> {
        self.states
            .into_iter()
            .filter_map(RemoteData::into_data)
            .collect()
    }
}

impl<E, D> TryFrom<Vec<RemoteData<E, D>>> for Aggregate<E, D> {
    type Error = ValidationError;

    fn try_from(states: Vec<RemoteData<E, D>>) -> Result<Self, Self::Error> {
        Self::new(states)
    }
}

impl<E, D, const N: usize> From<[RemoteData<E, D>; N]> for Aggregate<E, D> {
    fn from(states: [RemoteData<E, D>; N]) -> Self {
        const {
            assert!(N >= MIN_AGGREGATE_LEN, "an aggregate needs at least two states");
        }
        Self {
            states: states.into(),
        }
    }
}

impl<E, D> IntoIterator for Aggregate<E, D> {
    type Item = RemoteData<E, D>;
    type IntoIter = std::vec::IntoIter<RemoteData<E, D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

impl<'a, E, D> IntoIterator for &'a Aggregate<E, D> {
    type Item = &'a RemoteData<E, D>;
    type IntoIter = std::slice::Iter<'a, RemoteData<E, D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl<'de, E, D> Deserialize<'de> for Aggregate<E, D>
where
    E: Deserialize<'de>,
    D: Deserialize<'de>,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let states = Vec::<RemoteData<E, D>>::deserialize(deserializer)?;
        Self::new(states).map_err(serde::de::Error::custom)
    }
}
