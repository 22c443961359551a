use super::atom::Atom;
use super::spatial::SpatialGrid;
use super::types::Role;
use crate::fingerprint::{AtomSource, Error, Pose, PoseProvider};

/// Grid cell size for structure radius queries, in Ångströms.
const GRID_CELL_SIZE: f64 = 4.2;

/// Scale applied to the sum of covalent radii when perceiving bonds.
const BOND_TOLERANCE: f64 = 1.1;

/// Largest covalent radius in the atom type table (Ca).
const MAX_COVALENT_RADIUS: f64 = 1.76;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
}

impl Bond {
    pub fn new(idx1: usize, idx2: usize) -> Self {
        if idx1 <= idx2 {
            Self { i: idx1, j: idx2 }
        } else {
            Self { i: idx2, j: idx1 }
        }
    }
}

/// A set of atoms with bonds and a spatial index.
///
/// Atom indices always equal positions in [`Structure::atoms`].
#[derive(Debug, Clone)]
pub struct Structure {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    neighbors: Vec<Vec<usize>>,
    positions: Vec<[f64; 3]>,
    grid: SpatialGrid,
}

impl Structure {
    /// Builds a structure from atoms and explicit bonds.
    ///
    /// Atom indices are reassigned to match their position in `atoms`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBond`] if a bond references an out-of-bounds
    /// atom or bonds an atom to itself.
    pub fn new(mut atoms: Vec<Atom>, bonds: Vec<Bond>) -> Result<Self, Error> {
        let n_atoms = atoms.len();
        for (idx, atom) in atoms.iter_mut().enumerate() {
            atom.index = idx;
        }

        let mut neighbors = vec![Vec::new(); n_atoms];
        for bond in &bonds {
            if bond.i >= n_atoms || bond.j >= n_atoms {
                return Err(Error::invalid_bond(
                    bond.i,
                    bond.j,
                    format!("atom index out of bounds (n_atoms = {})", n_atoms),
                ));
            }
            if bond.i == bond.j {
                return Err(Error::invalid_bond(bond.i, bond.j, "self-bond"));
            }
            neighbors[bond.i].push(bond.j);
            neighbors[bond.j].push(bond.i);
        }
        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }

        let positions: Vec<[f64; 3]> = atoms.iter().map(|a| a.position).collect();
        let grid = SpatialGrid::from_positions(&positions, GRID_CELL_SIZE);

        Ok(Self {
            atoms,
            bonds,
            neighbors,
            positions,
            grid,
        })
    }

    /// Builds a structure, perceiving bonds from interatomic distances.
    ///
    /// Two atoms are bonded when their distance is at most 1.1 times the sum of
    /// their covalent radii. Bonds never join atoms of different roles, and
    /// waters and flexible residues only bond within their own residue.
    pub fn from_atoms(atoms: Vec<Atom>) -> Result<Self, Error> {
        let bonds = perceive_bonds(&atoms);
        Self::new(atoms, bonds)
    }

    #[inline]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    #[inline]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.atoms.iter().any(|a| a.role == role)
    }

    pub fn role_count(&self, role: Role) -> usize {
        self.atoms.iter().filter(|a| a.role == role).count()
    }
}

fn bondable(a: &Atom, b: &Atom) -> bool {
    if a.role != b.role {
        return false;
    }
    match a.role {
        Role::Water | Role::FlexibleResidue => a.same_residue(b),
        Role::Ligand | Role::Receptor => true,
    }
}

fn perceive_bonds(atoms: &[Atom]) -> Vec<Bond> {
    let positions: Vec<[f64; 3]> = atoms.iter().map(|a| a.position).collect();
    let grid = SpatialGrid::from_positions(&positions, GRID_CELL_SIZE);

    let mut bonds = Vec::new();
    for (i, atom) in atoms.iter().enumerate() {
        let Some(r_i) = atom.atom_type.covalent_radius() else {
            continue;
        };
        let reach = (r_i + MAX_COVALENT_RADIUS) * BOND_TOLERANCE;
        for j in grid.query_radius(atom.position, &positions, reach) {
            if j <= i {
                continue;
            }
            let other = &atoms[j];
            let Some(r_j) = other.atom_type.covalent_radius() else {
                continue;
            };
            if !bondable(atom, other) {
                continue;
            }
            let d = crate::fingerprint::geometry::distance(atom.position, other.position);
            if d <= (r_i + r_j) * BOND_TOLERANCE {
                bonds.push(Bond::new(i, j));
            }
        }
    }
    bonds
}

impl AtomSource for Structure {
    fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    fn atoms_by_role(&self, role: Role) -> Vec<&Atom> {
        self.atoms.iter().filter(|a| a.role == role).collect()
    }

    fn atoms_within(&self, center: [f64; 3], radius: f64, role: Option<Role>) -> Vec<&Atom> {
        self.grid
            .query_radius(center, &self.positions, radius)
            .into_iter()
            .map(|idx| &self.atoms[idx])
            .filter(|a| role.is_none_or(|r| a.role == r))
            .collect()
    }

    fn bonded_neighbors(&self, index: usize) -> &[usize] {
        self.neighbors.get(index).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A docked ligand with one structure per pose.
#[derive(Debug, Clone)]
pub struct DockedMolecule {
    name: String,
    poses: Vec<Structure>,
    has_flexible_residues: bool,
}

impl DockedMolecule {
    pub fn new(name: impl Into<String>, poses: Vec<Structure>) -> Self {
        let has_flexible_residues = poses.iter().any(|p| p.has_role(Role::FlexibleResidue));
        Self {
            name: name.into(),
            poses,
            has_flexible_residues,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn pose_count(&self) -> usize {
        self.poses.len()
    }

    #[inline]
    pub fn has_flexible_residues(&self) -> bool {
        self.has_flexible_residues
    }
}

impl PoseProvider for DockedMolecule {
    type Pose<'a> = PoseView<'a>;

    fn poses(&self) -> impl Iterator<Item = PoseView<'_>> {
        self.poses
            .iter()
            .enumerate()
            .map(move |(pose_id, structure)| PoseView {
                molecule: self,
                pose_id,
                structure,
            })
    }
}

/// Borrowed view of one pose of a [`DockedMolecule`].
#[derive(Debug, Clone, Copy)]
pub struct PoseView<'a> {
    molecule: &'a DockedMolecule,
    pose_id: usize,
    structure: &'a Structure,
}

impl PoseView<'_> {
    #[inline]
    pub fn structure(&self) -> &Structure {
        self.structure
    }
}

impl AtomSource for PoseView<'_> {
    fn atom(&self, index: usize) -> Option<&Atom> {
        self.structure.atom(index)
    }

    fn atoms_by_role(&self, role: Role) -> Vec<&Atom> {
        self.structure.atoms_by_role(role)
    }

    fn atoms_within(&self, center: [f64; 3], radius: f64, role: Option<Role>) -> Vec<&Atom> {
        self.structure.atoms_within(center, radius, role)
    }

    fn bonded_neighbors(&self, index: usize) -> &[usize] {
        self.structure.bonded_neighbors(index)
    }
}

impl Pose for PoseView<'_> {
    fn name(&self) -> &str {
        self.molecule.name()
    }

    fn pose_id(&self) -> usize {
        self.pose_id
    }

    fn has_flexible_residues(&self) -> bool {
        self.molecule.has_flexible_residues()
    }

    fn has_water_molecules(&self) -> bool {
        self.structure.has_role(Role::Water)
    }
}
