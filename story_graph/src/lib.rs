//! # Story Graph
//!
//! The data model of a choose-your-own-adventure story. A [`Story`] maps
//! chapter identifiers to [`Chapter`]s; each chapter carries its prose and the
//! [`Choice`]s that lead to other chapters.
//!
//! Stories are decoded from JSON with [`parse`] / [`Story::from_reader`]. The
//! loader checks shape only; [`Story::validate`] is an opt-in pass for hosts
//! that want to reject dangling links or unreachable chapters.

mod chapter;
mod error;
mod story;
mod validation;

pub use chapter::*;
pub use error::*;
pub use story::*;
pub use validation::*;
