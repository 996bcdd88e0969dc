//! # filpilote-domain
//!
//! Pure domain model for the fil-pilote heating controller.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Areas** (heating zones driven by a pair of output lines)
//! - Define **Modes** and the fixed **mode table** mapping each mode to line states
//! - Define **Line handles** (reserved physical output lines)
//! - Define the **thermostat vocabulary** and its translation into modes
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod area;
pub mod line;
pub mod mode;
pub mod thermostat;
