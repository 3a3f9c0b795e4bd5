//! # Ports Layer (Boundaries)
//!
//! Traits that isolate the components from whatever hosts and feeds them.
//!
//! ## Types of Ports
//! * **[`inbound`]** (Primary/Driving): operations exposed *by* the application (e.g., `CartRouter`).
//! * **[`outbound`]** (Secondary/Driven): collaborators required *by* the application (e.g., `HostSurface`, `ProductSource`).
//!
//! ## Dependency Rule
//! * Components depend on these Ports.
//! * Adapters implement these Ports.

pub mod inbound;
pub mod outbound;
