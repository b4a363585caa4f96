//! End-to-end serialization tests.

mod fixtures;
