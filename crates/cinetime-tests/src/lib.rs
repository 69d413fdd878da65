//! Integration test crate for cinetime.
//!
//! This crate exists solely to hold cross-crate tests: the documented
//! conversion tables, randomized conversion laws driven by the
//! `cinetime-gen` strategies, and the serde boundary.

#[cfg(test)]
mod conversions;

#[cfg(test)]
mod properties;

#[cfg(test)]
mod ranges;
