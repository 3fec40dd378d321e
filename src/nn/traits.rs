//! Tensor container handed to the learner.

use serde::{Deserialize, Serialize};

/// Encoded game state as a flat tensor for neural network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor (e.g., [frames, slots, channels]).
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Set element at a flat index.
    pub fn set(&mut self, index: usize, value: f32) {
        if index < self.tensor.len() {
            self.tensor[index] = value;
        }
    }
}
