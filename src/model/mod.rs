//! Core data structures for docking systems and interaction fingerprints.
//!
//! - [`atom`] – Atom records: position, AutoDock type, residue identity and role.
//! - [`types`] – AutoDock atom types, their interaction properties, and atom roles.
//! - [`system`] – In-memory structures, docked molecules and pose views that
//!   implement the provider traits consumed by [`crate::fingerprint`].
//! - [`spatial`] – Uniform grid index backing radius queries.
//! - [`label`] – Tagged interaction labels produced by the classifier.
//! - [`table`] – The one-hot interaction table produced by the encoder.

pub mod atom;
pub mod label;
pub mod spatial;
pub mod system;
pub mod table;
pub mod types;
