//! Test utilities shared by unit and integration tests.

pub mod data;
