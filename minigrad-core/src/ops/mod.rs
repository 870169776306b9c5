//! # Operator Library (`ops`)
//!
//! Building blocks that concrete node types use to implement their forward
//! computations and chain rules. Nothing in here depends on the autograd engine.
//!
//! ## Key Submodules:
//!
//! - [`scalar`]: Elementary scalar operators (`add`, `mul`, `log`, `sigmoid`, ...)
//!   and the local derivative rules used by chain rules (`log_back`, `inv_back`, ...).
//! - [`sequence`]: Generic sequence transforms (`map`, `zip_with`, `reduce`) and the
//!   list helpers built from them (`neg_list`, `add_lists`, `sum`, `prod`).

pub mod scalar;
pub mod sequence;

pub use scalar::CLOSE_TOLERANCE;
