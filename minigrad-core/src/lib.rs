// Déclare les modules principaux de la crate
pub mod autograd;
pub mod ops;


// Ré-exporte le contrat Variable et les points d'entrée du moteur
// pour qu'ils soient accessibles directement via `minigrad_core::...`
pub use autograd::{
    backpropagate, central_difference, topological_sort, Context, History, IdAllocator, Variable,
    VariableId,
};
// Re-export traits required by public functions/structs
pub use num_traits;

pub mod error;
pub use error::MinigradError;
