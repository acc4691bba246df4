//! Handler sets consumed by fold.
//!
//! [`FoldHandlers`] requires only `not_asked` and `success`; any omitted
//! optional handler makes its state collapse into `not_asked` (with
//! `reloading` first falling back to `loading`). [`ExhaustiveHandlers`]
//! requires every handler except `reloading`, for callers that want the
//! compiler to insist on a loading and a failure rendering.
//!
//! # Example
//! ```
//! use remote_data::{fold, FoldHandlers, RemoteData};
//!
//! let state: RemoteData<String, u32> = RemoteData::loading();
//! let text = fold(
//!     state,
//!     FoldHandlers::new(|| "nothing yet".to_string(), |n: u32| format!("got {n}"))
//!         .loading(|| "loading...".to_string()),
//! );
//! assert_eq!(text, "loading...");
//! ```

use std::fmt;

/// Handler taking no payload.
pub type Thunk<'a, R> = Box<dyn FnOnce() -> R + 'a>;

/// Handler taking one payload.
pub type Callback<'a, T, R> = Box<dyn FnOnce(T) -> R + 'a>;

/// Handlers for folding an [`Aggregate`](crate::Aggregate): the failure
/// handler gets every error and the success handler every data value,
/// both in input order.
pub type AggregateHandlers<'a, E, D, R> = FoldHandlers<'a, Vec<E>, Vec<D>, R>;

/// Which optional handlers a handler set carries.
///
/// This is all the resolution step needs to pick a branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HandlerPresence {
    pub loading: bool,
    pub reloading: bool,
    pub failure: bool,
}

impl HandlerPresence {
    /// Only the mandatory handlers.
    pub const REQUIRED_ONLY: Self = Self {
        loading: false,
        reloading: false,
        failure: false,
    };

    /// Every handler present.
    pub const ALL: Self = Self {
        loading: true,
        reloading: true,
        failure: true,
    };
}

/// A partial handler set: `not_asked` and `success` are mandatory.
pub struct FoldHandlers<'a, E, D, R> {
    pub(crate) not_asked: Thunk<'a, R>,
    pub(crate) success: Callback<'a, D, R>,
    pub(crate) loading: Option<Thunk<'a, R>>,
    pub(crate) reloading: Option<Thunk<'a, R>>,
    pub(crate) failure: Option<Callback<'a, E, R>>,
}

impl<'a, E, D, R> FoldHandlers<'a, E, D, R> {
    /// Creates a handler set from the two mandatory handlers.
    pub fn new<N, S>(not_asked: N, success: S) -> Self
    where
        N: FnOnce() -> R + 'a,
        S: FnOnce(D) -> R + 'a,
    {
        Self {
            not_asked: Box::new(not_asked),
            success: Box::new(success),
            loading: None,
            reloading: None,
            failure: None,
        }
    }

    /// Handler for `Loading`, also used for `Reloading` when no
    /// reloading handler is set.
    #[must_use]
    pub fn loading<F>(mut self, handler: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        self.loading = Some(Box::new(handler));
        self
    }

    /// Handler for `Reloading`.
    #[must_use]
    pub fn reloading<F>(mut self, handler: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        self.reloading = Some(Box::new(handler));
        self
    }

    /// Handler for `Failure`.
    #[must_use]
    pub fn failure<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(E) -> R + 'a,
    {
        self.failure = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub const fn presence(&self) -> HandlerPresence {
        HandlerPresence {
            loading: self.loading.is_some(),
            reloading: self.reloading.is_some(),
            failure: self.failure.is_some(),
        }
    }
}

impl<E, D, R> fmt::Debug for FoldHandlers<'_, E, D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoldHandlers")
            .field("presence", &self.presence())
            .finish_non_exhaustive()
    }
}

/// A handler set where only `reloading` may be omitted.
///
/// Folding with it behaves exactly like folding with the equivalent
/// [`FoldHandlers`]; the difference is purely what the compiler demands.
pub struct ExhaustiveHandlers<'a, E, D, R> {
    inner: FoldHandlers<'a, E, D, R>,
}

impl<'a, E, D, R> ExhaustiveHandlers<'a, E, D, R> {
    pub fn new<N, L, F, S>(not_asked: N, loading: L, failure: F, success: S) -> Self
    where
        N: FnOnce() -> R + 'a,
        L: FnOnce() -> R + 'a,
        F: FnOnce(E) -> R + 'a,
        S: FnOnce(D) -> R + 'a,
    {
        Self {
            inner: FoldHandlers::new(not_asked, success)
                .loading(loading)
                .failure(failure),
        }
    }

    /// Handler for `Reloading`; without it `Reloading` renders as `Loading`.
    #[must_use]
    pub fn reloading<F>(mut self, handler: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        self.inner = self.inner.reloading(handler);
        self
    }

    #[must_use]
    pub const fn presence(&self) -> HandlerPresence {
        self.inner.presence()
    }
}

impl<'a, E, D, R> From<ExhaustiveHandlers<'a, E, D, R>> for FoldHandlers<'a, E, D, R> {
    fn from(handlers: ExhaustiveHandlers<'a, E, D, R>) -> Self {
        handlers.inner
    }
}

impl<E, D, R> fmt::Debug for ExhaustiveHandlers<'_, E, D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExhaustiveHandlers")
            .field("presence", &self.presence())
            .finish_non_exhaustive()
    }
}
