//! Core compute primitives (Matrix).
//!
//! The Matrix type is the buffer the benchmark kernel runs on: row-major
//! storage, fallible constant-fill allocation, naive multiplication.

mod matrix;

pub use matrix::Matrix;
