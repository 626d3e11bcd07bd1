//! Fixtures and stand-in classifiers for tests.

pub mod dummies;
pub mod spies;
pub mod stubs;
