use crate::error::MinigradError;

/// Per-operation record of the forward-pass values its backward pass will need.
///
/// A `Context` is created by the operation that builds a variable, filled once
/// during the forward pass, then only read by that variable's chain rule.
/// With `no_grad` set, nothing is ever retained.
#[derive(Debug, Clone, PartialEq)]
pub struct Context<V> {
    no_grad: bool,
    saved_values: Box<[V]>,
}

impl<V> Context<V> {
    pub fn new(no_grad: bool) -> Self {
        Self {
            no_grad,
            saved_values: Box::new([]),
        }
    }

    pub fn no_grad(&self) -> bool {
        self.no_grad
    }

    /// Retains `values` for the backward pass, replacing anything saved before.
    /// Does nothing when the context was created with `no_grad`.
    pub fn save_for_backward<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
    {
        if self.no_grad {
            return;
        }
        self.saved_values = values.into_iter().collect();
    }

    /// Values retained by `save_for_backward`, in the order they were given.
    pub fn saved_tensors(&self) -> &[V] {
        &self.saved_values
    }

    /// Returns the saved values, checking that exactly `expected` were retained.
    pub fn unpack(&self, expected: usize) -> Result<&[V], MinigradError> {
        if self.saved_values.len() != expected {
            return Err(MinigradError::SavedValuesMismatch {
                expected,
                actual: self.saved_values.len(),
            });
        }
        Ok(&self.saved_values)
    }
}

impl<V> Default for Context<V> {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
