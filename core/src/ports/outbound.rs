//! # Outbound Ports (Driven Actors)
//!
//! Contracts for the collaborators the components call out to.
//!
//! ## Rules
//! 1. All items here must be `traits` (plus the type aliases their signatures need).
//! 2. No concrete implementations allowed.
//! 3. These traits are implemented in `adapters/outbound`.
pub mod host_surface;
pub mod product_source;
