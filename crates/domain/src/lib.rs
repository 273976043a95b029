//! # assistbridge-domain
//!
//! Pure domain model for the assistbridge conversational-AI plugin.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Entity states** (the host's tracked state snapshot) and their typed attributes
//! - Define **Entity metadata**, **Devices** and **Areas** (the registry records the filter reads)
//! - Define the **Exposure report** handed to the prompt builder, and the
//!   per-entity normalization rules (attribute allow-list, brightness scaling)
//! - Define **Config entries** and the **image generation** request/response types
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod area;
pub mod config_entry;
pub mod device;
pub mod entity;
pub mod exposure;
pub mod image;
