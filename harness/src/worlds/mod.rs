//! World implementations for the harness runner.

pub mod lattice;
pub mod two_jars;
