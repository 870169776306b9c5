use crate::error::MinigradError;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Stable identity of a node in the computation graph.
///
/// Identities are the only thing the engine compares: visited-sets and
/// derivative accumulators are keyed by `VariableId`, never by the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(usize);

impl VariableId {
    /// Get the internal index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out strictly increasing `VariableId`s.
///
/// Graph builders own (or borrow) an allocator and request one id per node
/// they construct. The counter is atomic, so a single allocator can be shared
/// by builders running on different threads without ever repeating an id.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicUsize,
}

impl IdAllocator {
    /// Creates an allocator whose first id is 1.
    pub const fn new() -> Self {
        Self {
            next: AtomicUsize::new(1),
        }
    }

    /// Returns a fresh id, greater than every id previously returned.
    pub fn allocate(&self) -> VariableId {
        VariableId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// The id the next call to `allocate` will return.
    pub fn peek(&self) -> VariableId {
        VariableId(self.next.load(Ordering::Relaxed))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable record of how a variable was produced.
#[derive(Debug, Clone)]
pub struct History<V> {
    inputs: Vec<V>,
}

impl<V> History<V> {
    /// History of a raw, user-supplied value.
    pub fn leaf() -> Self {
        Self { inputs: Vec::new() }
    }

    pub fn new(inputs: Vec<V>) -> Self {
        Self { inputs }
    }

    /// Inputs in the order the operation consumed them.
    pub fn inputs(&self) -> &[V] {
        &self.inputs
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl<V> Default for History<V> {
    fn default() -> Self {
        Self::leaf()
    }
}

/// Capability set every node type must provide to take part in backpropagation.
///
/// Concrete numeric types (scalars, tensors) implement this trait; the engine
/// functions in [`graph`](super::graph) and [`backward`](super::backward) are
/// generic over it and never look at a concrete node type.
///
/// Implementors are expected to be cheap handles (typically an `Rc` or `Arc`
/// around the node data), since the engine clones them while walking the graph.
pub trait Variable: Clone {
    /// Payload flowing backward through the graph (e.g. `f64` for scalars).
    type Derivative;

    /// Stable identity, unique for the lifetime of the allocator that issued it.
    fn unique_id(&self) -> VariableId;

    /// Inputs recorded in this variable's history; empty for leaves.
    fn parents(&self) -> &[Self];

    /// True iff the variable has no recorded construction.
    fn is_leaf(&self) -> bool {
        self.parents().is_empty()
    }

    /// True iff the variable is excluded from gradient bookkeeping.
    fn is_constant(&self) -> bool;

    /// Adds `x` into the persisted derivative total.
    ///
    /// Only meaningful on leaves. Backpropagation calls it once per run, with the
    /// summed contribution of every path; repeated runs keep accumulating.
    /// Constant leaves conventionally ignore the call.
    fn accumulate_derivative(&self, x: Self::Derivative) -> Result<(), MinigradError>;

    /// Applies the local chain rule.
    ///
    /// Given `d_output`, the derivative of the final output with respect to this
    /// variable, returns one `(input, d_input)` pair per input that requires a
    /// gradient. Inputs are expected to come from [`parents`](Self::parents); the
    /// engine does not check this.
    fn chain_rule(
        &self,
        d_output: Self::Derivative,
    ) -> Result<Vec<(Self, Self::Derivative)>, MinigradError>;
}

#[cfg(test)]
#[path = "variable_test.rs"]
mod tests;
