use std::sync::Arc;
use std::thread;

use remote_data::{fold, Aggregate, Branch, FoldHandlers, HandlerPresence, RemoteData};

type Rd = RemoteData<String, u64>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("remote_data=trace")
        .with_test_writer()
        .try_init();
}

#[test]
fn concurrent_folds_over_shared_aggregate_agree() {
    init_tracing();

    let shared = Arc::new(Aggregate::from([
        Rd::success(1),
        Rd::success(2),
        Rd::success(3),
        Rd::success(4),
    ]));

    let workers: Vec<_> = (0..8)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                fold(
                    Aggregate::as_ref(&shared),
                    FoldHandlers::new(|| 0, |ds: Vec<&u64>| ds.into_iter().sum::<u64>()),
                )
            })
        })
        .collect();

    for worker in workers {
        assert_eq!(worker.join().unwrap(), 10);
    }
}

#[test]
fn resolution_is_deterministic_across_threads() {
    init_tracing();

    let shared = Arc::new(Aggregate::from([
        Rd::reloading(),
        Rd::loading(),
        Rd::failure("late".to_string()),
    ]));

    let branches: Vec<Branch> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                remote_data::resolve_aggregate(
                    &shared,
                    HandlerPresence {
                        loading: true,
                        reloading: true,
                        failure: false,
                    },
                )
            })
        })
        .map(|handle| handle.join().unwrap())
        .collect();

    assert!(branches.iter().all(|branch| *branch == Branch::Loading));
}
