//! Reverse-mode differentiation engine.
//!
//! Node types implement [`Variable`]; operations record their inputs in a
//! [`History`] and the values their chain rule needs in a [`Context`].
//! [`backpropagate`] then walks the graph once, in reverse
//! [`topological_sort`] order, and deposits each leaf's derivative.

pub mod backward;
pub mod context;
pub mod grad_check;
pub mod graph;
pub mod variable;

pub use backward::backpropagate;
pub use context::Context;
pub use grad_check::{central_difference, check_grad, GradCheckError, DEFAULT_EPSILON};
pub use graph::topological_sort;
pub use variable::{History, IdAllocator, Variable, VariableId};
