//! Error types for interaction fingerprinting.
//!
//! Errors are categorized by source: criteria configuration, structure
//! construction, and per-pair geometric failures raised during classification.

use thiserror::Error;

/// Errors that can occur while building structures or fingerprinting poses.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to parse interaction criteria TOML.
    #[error("failed to parse interaction criteria: {0}")]
    CriteriaParse(#[from] toml::de::Error),

    /// Criteria parsed but hold values that cannot be used.
    #[error("invalid interaction criterion '{name}': {detail}")]
    InvalidCriteria {
        /// Criterion name (e.g. `hb_acc`).
        name: String,
        /// Description of the problem.
        detail: String,
    },

    /// Geometry that admits no angle or direction.
    ///
    /// Occurs for zero-length vectors (coincident atoms) and for directional
    /// atoms with no bonded neighbours to orient them.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Failed to classify one ligand/receptor atom pair.
    #[error(
        "failed to classify pose {pose} of '{name}' at ligand atom {ligand_atom} / receptor atom {receptor_atom}: {source}"
    )]
    Pair {
        /// Pose name.
        name: String,
        /// 1-based pose number.
        pose: usize,
        /// Ligand-side atom index.
        ligand_atom: usize,
        /// Receptor-side atom index.
        receptor_atom: usize,
        /// Underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// Invalid bond definition in an input structure.
    #[error("invalid bond between atoms {i} and {j}: {detail}")]
    InvalidBond {
        /// First atom index.
        i: usize,
        /// Second atom index.
        j: usize,
        /// Description of the problem.
        detail: String,
    },
}

impl Error {
    /// Creates an [`InvalidCriteria`](Error::InvalidCriteria) error.
    pub fn invalid_criteria(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidCriteria {
            name: name.into(),
            detail: detail.into(),
        }
    }

    pub fn degenerate(detail: impl Into<String>) -> Self {
        Self::DegenerateGeometry(detail.into())
    }

    /// Creates an [`InvalidBond`](Error::InvalidBond) error.
    ///
    /// # Arguments
    ///
    /// * `i` — First atom index
    /// * `j` — Second atom index
    /// * `details` — Description of the bond problem
    pub fn invalid_bond(i: usize, j: usize, details: impl Into<String>) -> Self {
        Self::InvalidBond {
            i,
            j,
            detail: details.into(),
        }
    }

    pub(crate) fn in_pair(
        self,
        name: &str,
        pose: usize,
        ligand_atom: usize,
        receptor_atom: usize,
    ) -> Self {
        Self::Pair {
            name: name.to_string(),
            pose,
            ligand_atom,
            receptor_atom,
            source: Box::new(self),
        }
    }

    /// Innermost error, looking through [`Pair`](Error::Pair) wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Pair { source, .. } => source.root(),
            other => other,
        }
    }
}
