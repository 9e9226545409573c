pub mod constants;
pub mod errors;
pub mod relations;
pub mod utils;

pub use constants::*;
pub use errors::{Bound, ErrorKind, Parameter, RelationError};

// Re-export the two rocket relations
pub use relations::ideal::{c_f, c_star};

// Re-export the value model used by the relations
pub use utils::quantity::{Operand, Quantity};
