//! Application layer orchestrating the domain.
//!
//! `LoanCalculator` owns the per-category loan state and is the single entry
//! point for edits. `Authenticator` gates access through a `SessionStore`.

pub mod auth;
pub mod calculator;
