//! Regression-test scaffolds for backend puzzle modules.
//!
//! A backend module is considered covered once it declares `fn test_solve(`.
//! Uncovered modules can receive an appended `#[cfg(test)] mod tests` block
//! that calls the module's `solve` with the canonical URL and compares the
//! result against a skeleton 6x6 board the author fills in afterwards.
//!
//! [`Scaffold`] is the single description of that block: the presence check
//! and the rendered text both derive from it, so they cannot drift apart.

mod fragment;
mod injector;


pub use fragment::{BoardFixture, Scaffold, TEST_FN_NAME};
pub use injector::{InjectOutcome, TestStubInjector};
