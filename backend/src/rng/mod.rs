//! Deterministic random number generation
//!
//! Uses xorshift64* algorithm for fast, deterministic random number generation.
//! CRITICAL: All randomness in a draw MUST go through this module so that a
//! seed is enough to replay it.

mod xorshift;

pub use xorshift::RngManager;
