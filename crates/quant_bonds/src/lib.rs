//! # quant_bonds
//!
//! Fixed-income analytics for plain-vanilla fixed-coupon bonds under a
//! flat yield curve with nominal compounding.
//!
//! All functions share the same five parameters: redemption value,
//! maturity in years, annual coupon rate, annual yield-to-maturity, and
//! the number of coupon payments per year. The cash-flow schedule uses
//! `n = round(maturity * frequency)` level coupons with the redemption
//! paid alongside the last one; there is no accrued-interest or
//! clean/dirty split.
//!
//! - [`bond_price`]: present value of coupons plus redemption
//! - [`macaulay_duration`]: cash-flow weighted average time, in years
//! - [`modified_duration`]: price sensitivity per unit yield move
//! - [`dollar_duration`]: `-dP/dy`, the price-scaled sensitivity
//! - [`convexity`]: second-order yield sensitivity

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod analytics;
mod error;

pub use analytics::{
    bond_price, convexity, dollar_duration, macaulay_duration, modified_duration,
};
pub use error::BondError;
