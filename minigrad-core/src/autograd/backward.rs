use crate::autograd::graph::topological_sort;
use crate::autograd::variable::{Variable, VariableId};
use crate::error::MinigradError;
use log::{debug, trace};
use num_traits::Zero;
use std::collections::HashMap;
use std::ops::AddAssign;

/// Runs backpropagation from `variable` to the leaves of its graph.
///
/// `deriv` is the derivative of the final output with respect to `variable`
/// (`1` when `variable` is the loss itself). Results are not returned: each
/// reachable leaf receives its total derivative through
/// [`Variable::accumulate_derivative`].
///
/// # Algorithm
/// Variables are processed in reverse topological order, so every consumer of a
/// variable has contributed to its derivative before the variable itself is
/// reached. Contributions arriving along different paths are summed, never
/// overwritten. A variable that received no contribution at all (for example a
/// constant its consumer's chain rule left out) is skipped.
///
/// # Errors
/// Stops at, and returns, the first error raised by a chain rule or by a leaf's
/// accumulation. Leaves processed before the failure keep their deposits.
pub fn backpropagate<V>(variable: &V, deriv: V::Derivative) -> Result<(), MinigradError>
where
    V: Variable,
    V::Derivative: Zero + AddAssign,
{
    // Accumulated d(output)/d(node), keyed by node id. Local to this call.
    let mut derivatives: HashMap<VariableId, V::Derivative> = HashMap::new();
    derivatives.insert(variable.unique_id(), deriv);

    let ordered = topological_sort(variable);
    let mut leaves_reached = 0usize;

    for node in ordered.iter().rev() {
        let node_id = node.unique_id();
        let Some(d_node) = derivatives.remove(&node_id) else {
            trace!("[backpropagate] No derivative reached {}, skipping", node_id);
            continue;
        };

        if node.is_leaf() {
            trace!("[backpropagate] Depositing derivative into leaf {}", node_id);
            node.accumulate_derivative(d_node)?;
            leaves_reached += 1;
        } else {
            for (input, d_input) in node.chain_rule(d_node)? {
                *derivatives
                    .entry(input.unique_id())
                    .or_insert_with(<V::Derivative as Zero>::zero) += d_input;
            }
        }
    }

    debug!(
        "[backpropagate] Processed {} variables from {}, {} leaves reached",
        ordered.len(),
        variable.unique_id(),
        leaves_reached
    );
    Ok(())
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
