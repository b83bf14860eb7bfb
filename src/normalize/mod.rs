//! The normalization pass: raw runner records in, report records out.
//!
//! Control flow runs leaf-ward: [`walker::normalize_tree`] folds the suite
//! tree, [`suite::normalize_suite`] shapes each node, [`test::normalize_test`]
//! shapes each test and hook, and [`error::normalize_error`] shapes each
//! failure, reaching into the diff builder when a diff is warranted.

pub mod error;
pub mod suite;
pub mod walker;

pub use error::normalize_error;
pub use suite::normalize_suite;
pub use test::{normalize_test, SuiteIdentity};
pub use walker::normalize_tree;
