//! Registration list ordering checks.
//!
//! The backend registers every puzzle in a macro invocation such as
//!
//! ```text
//! puzzle_list!(
//!     (akari, ...),
//!     (heyawake, ...),
//! );
//! ```
//!
//! Entries must be strictly ascending by identifier (plain byte order, no
//! duplicates). The validator stops at the first problem and reports its
//! 1-based line number.

mod types;
mod validator;


pub use types::{RegistryBlock, RegistryEntry, RegistryMarkers};
pub use validator::OrderValidator;
