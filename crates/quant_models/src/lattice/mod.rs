//! Cox-Ross-Rubinstein binomial lattice pricing.
//!
//! This module provides:
//! - `BinomialTree`: the CRR lattice engine for European and American
//!   exercise
//! - `LatticePrice`: price plus the probability-clamp diagnostic
//! - `LatticeError`: validation failures for lattice construction
//!
//! The lattice is independent of the analytic math primitives; it only
//! needs exponentials and the payoff helpers on [`crate::instruments`].

pub mod binomial;
pub mod error;

pub use binomial::{BinomialTree, LatticePrice};
pub use error::LatticeError;
