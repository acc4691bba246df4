//! Curried adapters.
//!
//! Every operation takes its configuration first and returns a function
//! of the state, which suits pipelines and callback props:
//!
//! ```
//! use remote_data::{fp, FoldHandlers, RemoteData};
//!
//! let render = fp::fold(FoldHandlers::new(|| "empty".to_string(), |n: u8| n.to_string()));
//! assert_eq!(render(RemoteData::<(), u8>::success(3)), "3");
//!
//! let make = fp::success::<(), u8>();
//! assert!(fp::is_success()(&make(1)));
//! ```
//!
//! These are thin wrappers; they share the engine in [`crate::fold`].

use crate::aggregate::Aggregate;
use crate::guard::{self, Guard};
use crate::handlers::{AggregateHandlers, ExhaustiveHandlers, FoldHandlers};
use crate::state::RemoteData;

pub fn not_asked<E, D>() -> fn() -> RemoteData<E, D> {
    RemoteData::not_asked
}

pub fn loading<E, D>() -> fn() -> RemoteData<E, D> {
    RemoteData::loading
}

pub fn reloading<E, D>() -> fn() -> RemoteData<E, D> {
    RemoteData::reloading
}

pub fn success<E, D>() -> fn(D) -> RemoteData<E, D> {
    RemoteData::success
}

pub fn failure<E, D>() -> fn(E) -> RemoteData<E, D> {
    RemoteData::failure
}

pub fn is_not_asked<G: Guard>() -> fn(&G) -> bool {
    guard::is_not_asked
}

pub fn is_loading<G: Guard>() -> fn(&G) -> bool {
    guard::is_loading
}

pub fn is_reloading<G: Guard>() -> fn(&G) -> bool {
    guard::is_reloading
}

pub fn is_failure<G: Guard>() -> fn(&G) -> bool {
    guard::is_failure
}

pub fn is_success<G: Guard>() -> fn(&G) -> bool {
    guard::is_success
}

/// Takes the fallback first, then the state.
pub fn success_or_else<E, D, F>(or_else: F) -> impl FnOnce(RemoteData<E, D>) -> D
where
    F: FnOnce(RemoteData<E, D>) -> D,
{
    move |state| state.success_or_else(or_else)
}

/// Takes the fallback first, then the aggregate.
pub fn success_or_else_all<E, D, F>(or_else: F) -> impl FnOnce(Aggregate<E, D>) -> Vec<D>
where
    F: FnOnce(Aggregate<E, D>) -> Vec<D>,
{
    move |aggregate| aggregate.success_or_else(or_else)
}

/// Takes the handlers first, then the state.
pub fn fold<'a, E, D, R>(handlers: FoldHandlers<'a, E, D, R>) -> impl FnOnce(RemoteData<E, D>) -> R + 'a
where
    E: 'a,
    D: 'a,
    R: 'a,
{
    move |state| crate::fold::fold(state, handlers)
}

/// Takes the handlers first, then the aggregate.
pub fn fold_all<'a, E, D, R>(
    handlers: AggregateHandlers<'a, E, D, R>,
) -> impl FnOnce(Aggregate<E, D>) -> R + 'a
where
    E: 'a,
    D: 'a,
    R: 'a,
{
    move |aggregate| crate::fold::fold(aggregate, handlers)
}

/// Exhaustive variant of [`fold`].
pub fn fold_w<'a, E, D, R>(
    handlers: ExhaustiveHandlers<'a, E, D, R>,
) -> impl FnOnce(RemoteData<E, D>) -> R + 'a
where
    E: 'a,
    D: 'a,
    R: 'a,
{
    move |state| crate::fold::fold_w(state, handlers)
}

/// Exhaustive variant of [`fold_all`].
pub fn fold_all_w<'a, E, D, R>(
    handlers: ExhaustiveHandlers<'a, Vec<E>, Vec<D>, R>,
) -> impl FnOnce(Aggregate<E, D>) -> R + 'a
where
    E: 'a,
    D: 'a,
    R: 'a,
{
    move |aggregate| crate::fold::fold_w(aggregate, handlers)
}
