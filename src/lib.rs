//! A pure Rust library for structural interaction fingerprints of docking poses.
//! It classifies ligand–receptor atom contacts by geometric criteria and encodes the
//! interactions of many poses into a one-hot table for clustering, scoring, or learning.
//!
//! # Features
//!
//! - **Contact classification** — van der Waals contacts, directional hydrogen bonds
//!   (distance plus donor and acceptor angles), and water-mediated hydrogen bonds
//! - **Flexible receptors** — Flexible side chains and explicit waters travel with each
//!   pose and are searched alongside the rigid receptor
//! - **One-hot encoding** — Two-level columns (interaction type, receptor partner) with
//!   one row per pose; empty columns are dropped
//! - **Flexible I/O** — Read PDBQT receptors and multi-model docking results; write
//!   CSV/TSV tables and long-form contact lists
//!
//! # Quick Start
//!
//! The main entry point is [`Fingerprinter`]: build it for a receptor, feed it
//! pose providers with [`Fingerprinter::run`], then read the [`InteractionTable`]:
//!
//! ```
//! use pose_fingerprint::{Atom, AtomType, DockedMolecule, Role, Structure};
//! use pose_fingerprint::{FingerprintConfig, FingerprintError, Fingerprinter, InteractionKind};
//!
//! // Serine side chain of chain A, residue 12
//! let receptor = Structure::from_atoms(vec![
//!     Atom::new(0, "CB", 'A', 12, [-1.43, 0.0, 0.0], AtomType::C, Role::Receptor),
//!     Atom::new(0, "OG", 'A', 12, [0.00, 0.0, 0.0], AtomType::OA, Role::Receptor),
//! ])?;
//!
//! // One pose of a hydroxyl ligand pointing its hydrogen at OG
//! let pose = Structure::from_atoms(vec![
//!     Atom::new(0, "C1", 'L', 1, [3.50, 1.34, 0.0], AtomType::C, Role::Ligand),
//!     Atom::new(0, "O1", 'L', 1, [3.00, 0.00, 0.0], AtomType::OA, Role::Ligand),
//!     Atom::new(0, "H1", 'L', 1, [2.04, 0.00, 0.0], AtomType::HD, Role::Ligand),
//! ])?;
//! let ligand = DockedMolecule::new("ligand", vec![pose]);
//!
//! // Classify with the default criteria
//! let mut fingerprinter = Fingerprinter::new(receptor, &FingerprintConfig::default())?;
//! fingerprinter.run([&ligand])?;
//!
//! // One row, one hydrogen-bond column for A:12:OG
//! let table = fingerprinter.to_table();
//! assert_eq!(table.row_count(), 1);
//! assert_eq!(table.column_count(), 1);
//! assert_eq!(table.value("ligand", 1, InteractionKind::HBond, "A:12:OG"), Some(1));
//! # Ok::<(), FingerprintError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — PDBQT reading and CSV/TSV writing
//! - [`geometry`] — Vector primitives used by the hydrogen-bond validator
//! - [`Fingerprinter`] — Classification, accumulation, and encoding
//! - [`FingerprintConfig`] — Criteria and pair error policy
//!
//! # Data Types
//!
//! ## Structures
//!
//! - [`Structure`] — Atoms, bonds, and a spatial grid; a rigid receptor or one pose
//! - [`DockedMolecule`] — Named set of poses from one docking run
//! - [`Atom`] — Name, residue, position, AutoDock type, and role
//! - [`AtomType`] — AutoDock atom type (C, OA, HD, W, ...)
//! - [`AtomProperty`] — Interaction class of an atom type
//! - [`Role`] — Ligand, water, flexible residue, or receptor
//!
//! ## Results
//!
//! - [`InteractionLabel`] — Interaction kind plus receptor partner
//! - [`LabelSets`] — Deduplicated labels per kind for one pose
//! - [`PoseRecord`] — Labels recorded for one pose
//! - [`InteractionTable`] — One-hot encoded fingerprint table
//!
//! ## Capability Traits
//!
//! - [`AtomSource`] — Role selection, radius queries, and bonded neighbours
//! - [`Pose`] — One docked conformation
//! - [`PoseProvider`] — Anything that yields poses

mod fingerprint;
mod model;

pub mod io;

pub use model::atom::Atom;
pub use model::label::{InteractionKind, InteractionLabel, LabelSets};
pub use model::spatial::SpatialGrid;
pub use model::system::{Bond, DockedMolecule, PoseView, Structure};
pub use model::table::{ColumnKey, InteractionTable, RowKey};
pub use model::types::{AtomProperty, AtomType, ParseAtomTypeError, ParseRoleError, Role};

pub use fingerprint::{
    Accumulator, AtomSource, Classifier, Criteria, DistanceCriterion, FingerprintConfig,
    Fingerprinter, HBondCriterion, HBondGeometry, HBondMeasure, NON_DIRECTIONAL_ANGLE,
    PairErrorPolicy, Pose, PoseOutcome, PoseProvider, PoseRecord, encode, get_default_criteria,
    is_valid_hydrogen_bond, load_criteria, measure,
};

pub use fingerprint::geometry;

pub use fingerprint::Error as FingerprintError;
