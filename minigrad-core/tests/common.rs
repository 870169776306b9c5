// Shared by several integration test crates; not every helper is used by each.
#![allow(dead_code)]

use minigrad_core::{History, IdAllocator, MinigradError, Variable, VariableId};
use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

#[derive(Debug)]
struct NodeData {
    id: VariableId,
    history: History<Node>,
    // Local derivative d(self)/d(input) for each input, in history order.
    weights: Vec<f64>,
    // Extra chain-rule output that is not part of the history.
    stray: Option<(Node, f64)>,
    derivative: Cell<f64>,
    deposits: Cell<usize>,
}

/// Linear graph node: its chain rule scales the incoming derivative by a fixed
/// weight per input.
#[derive(Debug, Clone)]
pub struct Node(Rc<NodeData>);

impl Node {
    pub fn leaf(ids: &IdAllocator) -> Node {
        Node::build(ids, &[], None)
    }

    pub fn op(ids: &IdAllocator, inputs: &[(&Node, f64)]) -> Node {
        Node::build(ids, inputs, None)
    }

    pub fn op_with_stray(ids: &IdAllocator, inputs: &[(&Node, f64)], stray: (&Node, f64)) -> Node {
        Node::build(ids, inputs, Some((stray.0.clone(), stray.1)))
    }

    fn build(ids: &IdAllocator, inputs: &[(&Node, f64)], stray: Option<(Node, f64)>) -> Node {
        Node(Rc::new(NodeData {
            id: ids.allocate(),
            history: History::new(inputs.iter().map(|(n, _)| (*n).clone()).collect()),
            weights: inputs.iter().map(|(_, w)| *w).collect(),
            stray,
            derivative: Cell::new(0.0),
            deposits: Cell::new(0),
        }))
    }

    pub fn derivative(&self) -> f64 {
        self.0.derivative.get()
    }

    pub fn deposits(&self) -> usize {
        self.0.deposits.get()
    }

    pub fn weighted_inputs(&self) -> impl Iterator<Item = (&Node, f64)> + '_ {
        self.0.history.inputs().iter().zip(self.0.weights.iter().copied())
    }
}

impl Variable for Node {
    type Derivative = f64;

    fn unique_id(&self) -> VariableId {
        self.0.id
    }

    fn parents(&self) -> &[Self] {
        self.0.history.inputs()
    }

    fn is_constant(&self) -> bool {
        false
    }

    fn accumulate_derivative(&self, x: f64) -> Result<(), MinigradError> {
        if !self.is_leaf() {
            return Err(MinigradError::NotALeaf { id: self.0.id });
        }
        self.0.derivative.set(self.0.derivative.get() + x);
        self.0.deposits.set(self.0.deposits.get() + 1);
        Ok(())
    }

    fn chain_rule(&self, d_output: f64) -> Result<Vec<(Self, f64)>, MinigradError> {
        let mut out: Vec<(Self, f64)> = self
            .weighted_inputs()
            .map(|(input, w)| (input.clone(), w * d_output))
            .collect();
        if let Some((node, w)) = &self.0.stray {
            out.push((node.clone(), w * d_output));
        }
        Ok(out)
    }
}

/// d(node)/d(target) as the sum over all paths of the product of edge weights.
pub fn path_sum(node: &Node, target: VariableId, memo: &mut HashMap<VariableId, f64>) -> f64 {
    if node.unique_id() == target {
        return 1.0;
    }
    if let Some(v) = memo.get(&node.unique_id()) {
        return *v;
    }
    let total: f64 = node
        .weighted_inputs()
        .map(|(input, w)| w * path_sum(input, target, memo))
        .sum();
    memo.insert(node.unique_id(), total);
    total
}

/// Ids of every node reachable from `node`, including itself.
pub fn reachable(node: &Node) -> HashSet<VariableId> {
    let mut seen = HashSet::new();
    let mut stack = vec![node.clone()];
    while let Some(n) = stack.pop() {
        if seen.insert(n.unique_id()) {
            stack.extend(n.parents().iter().cloned());
        }
    }
    seen
}
