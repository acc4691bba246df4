//! # remote-data
//!
//! A sum type for the lifecycle of asynchronously fetched data, and a
//! total pattern matcher over it.
//!
//! ## Core Concepts
//!
//! - **RemoteData**: `NotAsked`, `Loading`, `Reloading`, `Failure` or `Success`
//! - **Aggregate**: two or more states guarded and folded together
//! - **FoldHandlers**: `not_asked` and `success` required, the rest optional
//! - **fold**: invokes exactly one handler, chosen by a fixed precedence
//!
//! The crate never fetches anything. Callers build states from their own
//! async operations and hand them over by value.
//!
//! ## Usage
//!
//! ```
//! use remote_data::{fold, Aggregate, FoldHandlers, RemoteData};
//!
//! let user: RemoteData<String, &str> = RemoteData::success("ada");
//! let greeting = fold(
//!     user,
//!     FoldHandlers::new(|| "sign in".to_string(), |name: &str| format!("hi {name}"))
//!         .loading(|| "...".to_string())
//!         .failure(|e: String| e),
//! );
//! assert_eq!(greeting, "hi ada");
//!
//! // Failure anywhere wins; partial success is never reported.
//! let page: Aggregate<String, u32> =
//!     Aggregate::pair(RemoteData::success(1), RemoteData::failure("gone".into()));
//! let shown = fold(
//!     page,
//!     FoldHandlers::new(|| 0, |ds: Vec<u32>| ds.len())
//!         .failure(|es: Vec<String>| es.len() + 100),
//! );
//! assert_eq!(shown, 101);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod error;
pub mod fold;
pub mod fp;
pub mod guard;
pub mod handlers;
pub mod render;
pub mod serialization;
pub mod state;

// Re-export primary types at crate root for convenience
pub use aggregate::{Aggregate, MIN_AGGREGATE_LEN};
pub use error::{RemoteDataError, RemoteDataResult, ValidationError};
pub use fold::{fold, fold_w, resolve_aggregate, resolve_single, success_or_else, Branch, Foldable};
pub use guard::{is_failure, is_loading, is_not_asked, is_reloading, is_success, Guard};
pub use handlers::{AggregateHandlers, ExhaustiveHandlers, FoldHandlers, HandlerPresence};
pub use render::{Node, Renderable};
pub use state::{failure, loading, not_asked, reloading, success, RemoteData, Tag};
