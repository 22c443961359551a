//! Capability traits through which the fingerprint core reads structures.
//!
//! The core never owns atoms: a structure provider lends [`Atom`] records for
//! role selection, radius queries and bonded-neighbour lookups. Docking outputs
//! are exposed as [`PoseProvider`]s yielding one [`Pose`] per conformation.

use crate::model::atom::Atom;
use crate::model::types::Role;

/// Read access to a set of atoms with spatial and bond queries.
pub trait AtomSource {
    /// Atom with the given index, if any.
    fn atom(&self, index: usize) -> Option<&Atom>;

    /// All atoms with the given role, in index order.
    fn atoms_by_role(&self, role: Role) -> Vec<&Atom>;

    /// All atoms within `radius` of `center` (inclusive), optionally
    /// restricted to one role, in index order.
    fn atoms_within(&self, center: [f64; 3], radius: f64, role: Option<Role>) -> Vec<&Atom>;

    /// Indices of the atoms covalently bonded to `index`.
    ///
    /// Unknown indices have no neighbours.
    fn bonded_neighbors(&self, index: usize) -> &[usize];
}

impl<T: AtomSource + ?Sized> AtomSource for &T {
    fn atom(&self, index: usize) -> Option<&Atom> {
        (**self).atom(index)
    }

    fn atoms_by_role(&self, role: Role) -> Vec<&Atom> {
        (**self).atoms_by_role(role)
    }

    fn atoms_within(&self, center: [f64; 3], radius: f64, role: Option<Role>) -> Vec<&Atom> {
        (**self).atoms_within(center, radius, role)
    }

    fn bonded_neighbors(&self, index: usize) -> &[usize] {
        (**self).bonded_neighbors(index)
    }
}

/// One docked conformation: ligand atoms plus any flexible residues and
/// explicit waters that move with it.
pub trait Pose: AtomSource {
    fn name(&self) -> &str;

    /// 0-based position of the pose within its provider.
    fn pose_id(&self) -> usize;

    fn has_flexible_residues(&self) -> bool;

    fn has_water_molecules(&self) -> bool;
}

/// A source of poses, typically one docking output file.
pub trait PoseProvider {
    type Pose<'a>: Pose
    where
        Self: 'a;

    fn poses(&self) -> impl Iterator<Item = Self::Pose<'_>>;
}
