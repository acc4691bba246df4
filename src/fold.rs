//! The resolution engine.
//!
//! Folding is split into two steps. *Resolution* looks only at the
//! state tags and at which optional handlers exist, and picks a
//! [`Branch`]. *Dispatch* then invokes exactly that handler with the
//! payload it needs. Both steps are pure; the only observable effect is
//! the one handler call.
//!
//! ## Single state
//!
//! 1. `Loading` with a loading handler runs it.
//! 2. `Reloading` runs the reloading handler, or else the loading handler.
//! 3. `Failure` with a failure handler runs it with the error.
//! 4. `Success` runs the success handler with the data.
//! 5. Anything else runs `not_asked`.
//!
//! ## Aggregate
//!
//! 1. Any `Failure`, with a failure handler: all errors, in order.
//! 2. Any `Loading`, with a loading handler.
//! 3. Any `Reloading`, with a reloading handler or else a loading handler.
//! 4. Every state `Success`: all data, in order.
//! 5. Anything else runs `not_asked`, so partial success is never reported.

use crate::aggregate::Aggregate;
use crate::handlers::{ExhaustiveHandlers, FoldHandlers, HandlerPresence};
use crate::state::{RemoteData, Tag};

/// The handler a fold will invoke.
///
/// `Branch::Loading` is also what a reloading state resolves to when
/// only a loading handler was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    NotAsked,
    Loading,
    Reloading,
    Failure,
    Success,
}

/// Picks the branch for a single state.
#[must_use]
pub const fn resolve_single(tag: Tag, presence: HandlerPresence) -> Branch {
    match tag {
        Tag::Loading if presence.loading => Branch::Loading,
        Tag::Reloading if presence.reloading => Branch::Reloading,
        Tag::Reloading if presence.loading => Branch::Loading,
        Tag::Failure if presence.failure => Branch::Failure,
        Tag::Success => Branch::Success,
        _ => Branch::NotAsked,
    }
}

/// Picks the branch for an aggregate.
///
/// Loading beats reloading: a fresh load anywhere in the aggregate masks
/// a background refresh elsewhere.
#[must_use]
pub fn resolve_aggregate<E, D>(aggregate: &Aggregate<E, D>, presence: HandlerPresence) -> Branch {
    if presence.failure && aggregate.any_failure() {
        return Branch::Failure;
    }
    if presence.loading && aggregate.any_loading() {
        return Branch::Loading;
    }
    if aggregate.any_reloading() {
        if presence.reloading {
            return Branch::Reloading;
        }
        if presence.loading {
            return Branch::Loading;
        }
    }
    if aggregate.all_success() {
        return Branch::Success;
    }
    Branch::NotAsked
}

impl<E, D, R> FoldHandlers<'_, E, D, R> {
    /// Invokes the handler for `branch`.
    ///
    /// A branch whose handler or payload is missing falls through to
    /// `not_asked`, which keeps dispatch total.
    fn dispatch(self, branch: Branch, error: Option<E>, data: Option<D>) -> R {
        match branch {
            Branch::Loading => {
                if let Some(handler) = self.loading {
                    return handler();
                }
            }
            Branch::Reloading => {
                if let Some(handler) = self.reloading {
                    return handler();
                }
            }
            Branch::Failure => {
                if let (Some(handler), Some(error)) = (self.failure, error) {
                    return handler(error);
                }
            }
            Branch::Success => {
                if let Some(data) = data {
                    return (self.success)(data);
                }
            }
            Branch::NotAsked => {}
        }
        (self.not_asked)()
    }
}

/// Values that can be folded into a single result.
///
/// Implemented by [`RemoteData`], whose handlers receive one error or one
/// data value, and by [`Aggregate`], whose handlers receive ordered lists.
pub trait Foldable: Sized {
    /// Payload handed to the failure handler.
    type Error;

    /// Payload handed to the success handler, and returned by `success_or_else`.
    type Data;

    /// Invokes exactly one handler and returns its result.
    fn fold<R>(self, handlers: FoldHandlers<'_, Self::Error, Self::Data, R>) -> R;

    /// Like [`fold`](Foldable::fold), with every handler but `reloading` required.
    fn fold_w<R>(self, handlers: ExhaustiveHandlers<'_, Self::Error, Self::Data, R>) -> R {
        self.fold(handlers.into())
    }

    /// Returns the success payload, or the result of `or_else` applied to `self`.
    fn success_or_else<F>(self, or_else: F) -> Self::Data
    where
        F: FnOnce(Self) -> Self::Data;
}

impl<E, D> Foldable for RemoteData<E, D> {
    type Error = E;
    type Data = D;

    fn fold<R>(self, handlers: FoldHandlers<'_, E, D, R>) -> R {
        let tag = self.tag();
        let branch = resolve_single(tag, handlers.presence());
        tracing::trace!(%tag, ?branch, "folding remote data");

        let (error, data) = match self {
            Self::Failure { error } => (Some(error), None),
            Self::Success { data } => (None, Some(data)),
            _ => (None, None),
        };
        handlers.dispatch(branch, error, data)
    }

    fn success_or_else<F>(self, or_else: F) -> D
    where
        F: FnOnce(Self) -> D,
    {
        RemoteData::success_or_else(self, or_else)
    }
}

impl<E, D> Foldable for Aggregate<E, D> {
    type Error = Vec<E>;
    type Data = Vec<D>;

    fn fold<R>(self, handlers: FoldHandlers<'_, Vec<E>, Vec<D>, R>) -> R {
        let branch = resolve_aggregate(&self, handlers.presence());
        tracing::trace!(len = self.len(), ?branch, "folding aggregate");

        match branch {
            Branch::Failure => handlers.dispatch(branch, Some(self.into_errors()), None),
            Branch::Success => handlers.dispatch(branch, None, Some(self.into_data())),
            _ => handlers.dispatch(branch, None, None),
        }
    }

    fn success_or_else<F>(self, or_else: F) -> Vec<D>
    where
        F: FnOnce(Self) -> Vec<D>,
    {
        Aggregate::success_or_else(self, or_else)
    }
}

/// Folds a single state or an aggregate.
///
/// # Examples
///
/// ```
/// use remote_data::{fold, Aggregate, FoldHandlers, RemoteData};
///
/// let both: Aggregate<String, i32> =
///     Aggregate::pair(RemoteData::success(1), RemoteData::success(2));
/// let total = fold(
///     both,
///     FoldHandlers::new(|| 0, |ds: Vec<i32>| ds.iter().sum::<i32>()),
/// );
/// assert_eq!(total, 3);
/// ```
pub fn fold<T, R>(value: T, handlers: FoldHandlers<'_, T::Error, T::Data, R>) -> R
where
    T: Foldable,
{
    value.fold(handlers)
}

/// Folds with a handler set where only `reloading` may be omitted.
pub fn fold_w<T, R>(value: T, handlers: ExhaustiveHandlers<'_, T::Error, T::Data, R>) -> R
where
    T: Foldable,
{
    value.fold_w(handlers)
}

/// Returns the success payload (a list, for an aggregate that fully
/// succeeded), or the result of `or_else` applied to the value.
pub fn success_or_else<T, F>(value: T, or_else: F) -> T::Data
where
    T: Foldable,
    F: FnOnce(T) -> T::Data,
{
    value.success_or_else(or_else)
}

#[cfg(test)]
mod tests {
    use super::*;

    type Rd = RemoteData<String, i32>;

    fn full_handlers<'a>() -> FoldHandlers<'a, String, i32, String> {
        FoldHandlers::new(|| "no data".to_string(), |n: i32| (10 + n).to_string())
            .loading(|| "loading..".to_string())
            .reloading(|| "reloading..".to_string())
            .failure(|e: String| e)
    }

    fn full_aggregate_handlers<'a>() -> FoldHandlers<'a, Vec<String>, Vec<i32>, String> {
        FoldHandlers::new(
            || "no data".to_string(),
            |ns: Vec<i32>| (10 + ns.iter().sum::<i32>()).to_string(),
        )
        .loading(|| "loading..".to_string())
        .reloading(|| "reloading..".to_string())
        .failure(|es: Vec<String>| es.join(","))
    }

    fn err() -> Rd {
        Rd::failure("err".to_string())
    }

    #[test]
    fn test_resolve_single_table() {
        let none = HandlerPresence::REQUIRED_ONLY;
        let loading_only = HandlerPresence {
            loading: true,
            ..none
        };

        assert_eq!(resolve_single(Tag::Loading, none), Branch::NotAsked);
        assert_eq!(resolve_single(Tag::Loading, loading_only), Branch::Loading);
        assert_eq!(resolve_single(Tag::Reloading, none), Branch::NotAsked);
        assert_eq!(resolve_single(Tag::Reloading, loading_only), Branch::Loading);
        assert_eq!(resolve_single(Tag::Reloading, HandlerPresence::ALL), Branch::Reloading);
        assert_eq!(resolve_single(Tag::Failure, none), Branch::NotAsked);
        assert_eq!(resolve_single(Tag::Failure, HandlerPresence::ALL), Branch::Failure);
        assert_eq!(resolve_single(Tag::Success, none), Branch::Success);
        assert_eq!(resolve_single(Tag::NotAsked, HandlerPresence::ALL), Branch::NotAsked);
    }

    #[test]
    fn test_fold_each_state() {
        assert_eq!(fold(Rd::success(1), full_handlers()), "11");
        assert_eq!(fold(err(), full_handlers()), "err");
        assert_eq!(fold(Rd::loading(), full_handlers()), "loading..");
        assert_eq!(fold(Rd::reloading(), full_handlers()), "reloading..");
        assert_eq!(fold(Rd::not_asked(), full_handlers()), "no data");
    }

    #[test]
    fn test_fold_loading_precedence() {
        let handlers = FoldHandlers::new(|| 'N', |_: i32| 'S').loading(|| 'L');
        assert_eq!(fold(Rd::loading(), handlers), 'L');
    }

    #[test]
    fn test_fold_reloading_falls_back_to_loading() {
        let handlers = || {
            FoldHandlers::new(|| "no data", |_: i32| "data").loading(|| "loading..")
        };
        assert_eq!(fold(Rd::loading(), handlers()), "loading..");
        assert_eq!(fold(Rd::reloading(), handlers()), "loading..");
    }

    #[test]
    fn test_fold_missing_optional_handlers_collapse_to_not_asked() {
        let handlers = || FoldHandlers::new(|| 'N', |_: i32| 'S');
        assert_eq!(fold(Rd::reloading(), handlers()), 'N');
        assert_eq!(fold(Rd::loading(), handlers()), 'N');
        assert_eq!(fold(err(), handlers()), 'N');
        assert_eq!(fold(Rd::success(3), handlers()), 'S');
    }

    #[test]
    fn test_fold_failure_gets_error() {
        let handlers = FoldHandlers::new(|| "N".to_string(), |_: i32| "S".to_string())
            .failure(|e: String| e);
        assert_eq!(fold(Rd::failure("x".to_string()), handlers), "x");
    }

    #[test]
    fn test_fold_invokes_exactly_one_handler() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let bump = || calls.set(calls.get() + 1);
        let handlers = FoldHandlers::new(bump, |_: i32| bump())
            .loading(bump)
            .reloading(bump)
            .failure(|_: String| bump());
        fold(Rd::reloading(), handlers);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_fold_aggregate_base_cases() {
        let agg = |a: Rd, b: Rd| Aggregate::pair(a, b);

        assert_eq!(fold(agg(Rd::success(1), Rd::success(1)), full_aggregate_handlers()), "12");
        assert_eq!(fold(agg(err(), err()), full_aggregate_handlers()), "err,err");
        assert_eq!(fold(agg(Rd::loading(), Rd::loading()), full_aggregate_handlers()), "loading..");
        assert_eq!(
            fold(agg(Rd::reloading(), Rd::reloading()), full_aggregate_handlers()),
            "reloading.."
        );
        assert_eq!(
            fold(agg(Rd::not_asked(), Rd::not_asked()), full_aggregate_handlers()),
            "no data"
        );
    }

    #[test]
    fn test_fold_aggregate_priority() {
        let agg = |a: Rd, b: Rd| Aggregate::pair(a, b);

        assert_eq!(fold(agg(Rd::not_asked(), Rd::loading()), full_aggregate_handlers()), "loading..");
        assert_eq!(fold(agg(Rd::success(1), Rd::loading()), full_aggregate_handlers()), "loading..");

        assert_eq!(fold(agg(Rd::not_asked(), err()), full_aggregate_handlers()), "err");
        assert_eq!(fold(agg(Rd::loading(), err()), full_aggregate_handlers()), "err");
        assert_eq!(fold(agg(Rd::success(1), err()), full_aggregate_handlers()), "err");

        assert_eq!(fold(agg(Rd::success(1), Rd::not_asked()), full_aggregate_handlers()), "no data");
        assert_eq!(
            fold(agg(Rd::not_asked(), Rd::reloading()), full_aggregate_handlers()),
            "reloading.."
        );
        assert_eq!(fold(agg(Rd::loading(), Rd::reloading()), full_aggregate_handlers()), "loading..");
    }

    #[test]
    fn test_fold_aggregate_failure_dominates_loading() {
        let handlers = FoldHandlers::new(|| 0_i64, |ds: Vec<i32>| ds.len() as i64)
            .failure(|es: Vec<String>| es.len() as i64)
            .loading(|| -1);
        let agg = Aggregate::pair(Rd::failure("e1".to_string()), Rd::loading());
        assert_eq!(fold(agg, handlers), 1);
    }

    #[test]
    fn test_fold_aggregate_without_optional_handlers() {
        let handlers = || {
            FoldHandlers::new(
                || "no data".to_string(),
                |ns: Vec<i32>| (10 + ns.iter().sum::<i32>()).to_string(),
            )
        };
        let agg = |a: Rd, b: Rd| Aggregate::pair(a, b);

        assert_eq!(fold(agg(Rd::success(1), Rd::success(1)), handlers()), "12");
        assert_eq!(fold(agg(Rd::not_asked(), Rd::success(1)), handlers()), "no data");
        assert_eq!(fold(agg(err(), err()), handlers()), "no data");
        assert_eq!(fold(agg(Rd::loading(), err()), handlers()), "no data");
        assert_eq!(fold(agg(err(), Rd::reloading()), handlers()), "no data");
    }

    #[test]
    fn test_fold_aggregate_reloading_uses_loading_handler() {
        let handlers = || {
            FoldHandlers::new(|| "N", |_: Vec<i32>| "S").loading(|| "L")
        };
        let agg = |a: Rd, b: Rd| Aggregate::pair(a, b);

        assert_eq!(fold(agg(Rd::loading(), Rd::loading()), handlers()), "L");
        assert_eq!(fold(agg(Rd::reloading(), Rd::reloading()), handlers()), "L");
        assert_eq!(fold(agg(Rd::loading(), Rd::reloading()), handlers()), "L");
    }

    #[test]
    fn test_fold_aggregate_errors_keep_order() {
        let agg = Aggregate::from([
            Rd::failure("a".to_string()),
            Rd::success(1),
            Rd::failure("b".to_string()),
            Rd::loading(),
        ]);
        let handlers = FoldHandlers::new(Vec::new, |_: Vec<i32>| Vec::new())
            .failure(|es: Vec<String>| es);
        assert_eq!(fold(agg, handlers), vec!["a", "b"]);
    }

    #[test]
    fn test_fold_w_matches_fold() {
        let exhaustive = || {
            ExhaustiveHandlers::new(
                || "no data".to_string(),
                || "loading..".to_string(),
                |e: String| e,
                |n: i32| n.to_string(),
            )
        };

        assert_eq!(fold_w(Rd::reloading(), exhaustive()), "loading..");
        assert_eq!(fold_w(err(), exhaustive()), "err");
        assert_eq!(fold_w(Rd::success(4), exhaustive()), "4");
        assert_eq!(
            fold_w(Rd::reloading(), exhaustive().reloading(|| "reloading..".to_string())),
            "reloading.."
        );
    }

    #[test]
    fn test_fold_borrowed_state() {
        let state = Rd::success(5);
        let doubled = fold(state.as_ref(), FoldHandlers::new(|| 0, |n: &i32| n * 2));
        assert_eq!(doubled, 10);
        assert!(state.is_success());
    }

    #[test]
    fn test_success_or_else_generic() {
        assert_eq!(success_or_else(Rd::success(1), |_| -1), 1);
        assert_eq!(success_or_else(Rd::loading(), |_| -1), -1);
        assert_eq!(
            success_or_else(Aggregate::pair(Rd::success(1), Rd::success(2)), |_| vec![]),
            vec![1, 2]
        );
    }
}
