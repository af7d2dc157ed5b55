//! Integration tests for imgbuf crates.
//!
//! End-to-end scenarios that go through the public API only: building
//! images, converting them across layouts and scalar types, and reading the
//! results back.

#[cfg(test)]
mod round_trip;
