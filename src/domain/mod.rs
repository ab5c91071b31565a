//! Domain layer: loan types, the amortization formula, the bound table and
//! the storage port for the session flag.

pub mod amortization;
pub mod bounds;
pub mod loan;
pub mod ports;
