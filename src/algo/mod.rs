//! Internal kernels behind the public functions.
//!
//! All functions are `pub(crate)`; the public API in `lib.rs` wraps them.
//!
//! # Precision
//!
//! The bit-level routines (`decompose`, `round`) are generic over
//! [`IeeeFloat`](crate::machine::IeeeFloat) and run at the width of the
//! argument. The transcendental kernels take and return `f64`; narrower types
//! are widened on the way in and rounded once on the way out.
//!
//! # Clippy suppressions
//!
//! Modules holding coefficient tables carry
//! `#![allow(clippy::excessive_precision)]`: the published constants are kept
//! digit for digit so they can be checked against their sources.

pub(crate) mod constants;

// Bit-level decomposition and rounding
pub(crate) mod decompose;
pub(crate) mod round;

// Circular functions
pub(crate) mod trig;

// Error function family
pub(crate) mod erf;
pub(crate) mod erfinv;

// Gamma function family
pub(crate) mod gamma;
pub(crate) mod lgamma;

// Cylindrical Bessel functions
pub(crate) mod j0;
pub(crate) mod j1;
pub(crate) mod jn;

// Large-order machinery for Jₙ and Yₙ
pub(crate) mod airy;
pub(crate) mod uniform;
