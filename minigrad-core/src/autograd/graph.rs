use crate::autograd::variable::{Variable, VariableId};
use log::{debug, trace};
use std::collections::HashSet;

/// Builds a topological order of the graph reachable from `variable`.
///
/// Every variable appears exactly once and strictly after all of its inputs
/// (depth-first post-order, inputs visited in history order); `variable` itself
/// is last. Sub-expressions shared by several consumers are deduplicated by
/// `unique_id`. Constants are walked like any other node.
///
/// The walk uses an explicit stack, so long dependency chains cannot overflow
/// the call stack. The graph must be acyclic: a cycle makes this loop forever.
pub fn topological_sort<V: Variable>(variable: &V) -> Vec<V> {
    let mut visited: HashSet<VariableId> = HashSet::new();
    let mut ordered: Vec<V> = Vec::new();
    // Each frame holds a node and the position of the next input to descend into.
    let mut stack: Vec<(V, usize)> = vec![(variable.clone(), 0)];
    visited.insert(variable.unique_id());

    while let Some((node, cursor)) = stack.last_mut() {
        let next_input = node.parents().get(*cursor).cloned();
        *cursor += 1;

        match next_input {
            Some(input) => {
                if visited.insert(input.unique_id()) {
                    trace!("[topological_sort] Descending into {}", input.unique_id());
                    stack.push((input, 0));
                }
            }
            None => {
                if let Some((done, _)) = stack.pop() {
                    trace!("[topological_sort] Emitting {}", done.unique_id());
                    ordered.push(done);
                }
            }
        }
    }

    debug!(
        "[topological_sort] Ordered {} variables ending at {}",
        ordered.len(),
        variable.unique_id()
    );
    ordered
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
