//! Root-split parallel search.
//!
//! Root actions are handed out one at a time to a pool of scoped workers.
//! Every action is still searched with a full window, so values and node
//! counts are identical to the single-threaded search; results are put back
//! into generation order before selection.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use log::debug;
use parking_lot::Mutex;

use super::{root_value, SearchParams};
use crate::board::{Action, State};

/// Values of all root actions in generation order, plus total nodes.
pub(super) fn search_root_parallel(
    state: &State,
    actions: &[Action],
    depth: u32,
    params: &SearchParams,
) -> (Vec<(Action, i32)>, u64) {
    let next = AtomicUsize::new(0);
    let results: Mutex<Vec<(usize, i32, u64)>> = Mutex::new(Vec::with_capacity(actions.len()));

    let work = || loop {
        let idx = next.fetch_add(1, Ordering::Relaxed);
        let Some(action) = actions.get(idx) else {
            break;
        };
        let mut nodes = 0;
        let value = root_value(state, action, depth, params, &mut nodes);
        results.lock().push((idx, value, nodes));
    };

    let helpers = params.threads.min(actions.len()).saturating_sub(1);
    thread::scope(|scope| {
        for worker_id in 1..=helpers {
            let spawned = thread::Builder::new()
                .name(format!("search-{worker_id}"))
                .spawn_scoped(scope, work);
            if let Err(err) = spawned {
                debug!("search worker {worker_id} not started: {err}");
            }
        }
        // The calling thread works too, so the split completes even if no
        // helper could be started.
        work();
    });

    let mut results = results.into_inner();
    results.sort_unstable_by_key(|(idx, _, _)| *idx);
    let nodes = results.iter().map(|(_, _, n)| n).sum();
    let root_values = results
        .into_iter()
        .map(|(idx, value, _)| (actions[idx], value))
        .collect();
    (root_values, nodes)
}
