//! # filpilote-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AreaRepository`: persistence for areas
//!   - `LineController`: reservation and actuation of output lines
//! - Define **driving/inbound** use-case services:
//!   - `AreaService`: create/delete areas, apply modes with rollback
//!   - `ThermostatService`: translate thermostat events into mode changes
//! - Serialise mutating operations per area
//!
//! ## Dependency rule
//! Depends on `filpilote-domain` only (plus `tokio::sync` for locks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod area_locks;
pub mod ports;
pub mod services;
