//! # quant_models: Option pricing engines
//!
//! The pricing kernel of the quantkit toolkit:
//! - Contract tags and payoff helpers (`instruments`)
//! - Closed-form Black-Scholes pricing with analytical Greeks (`analytical`)
//! - Cox-Ross-Rubinstein binomial lattice with early exercise (`lattice`)
//! - Put-call parity conversions and no-arbitrage bounds (`parity`)
//!
//! Every operation is a pure, synchronous function of its inputs: no
//! shared state, no I/O, no blocking. Calls either return a fully
//! populated value or fail with a validation error before any
//! computation runs.
//!
//! ## Design Principles
//!
//! - **Closed tags** (`OptionType`, `Exercise`) instead of free-form
//!   labels, so variant checks happen at compile time
//! - **Fixed-field result records** (`Greeks`, `ParityBounds`) instead of
//!   keyed maps
//! - **Defined numeric-edge branches**: expired or zero-volatility
//!   contracts select exact closed-form limits, they are not errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod lattice;
pub mod parity;
