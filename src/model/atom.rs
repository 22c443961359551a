use super::types::{AtomProperty, AtomType, Role};

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub index: usize,
    pub name: String,
    pub chain_id: char,
    pub residue_id: i32,
    pub position: [f64; 3],
    pub atom_type: AtomType,
    pub role: Role,
}

impl Atom {
    pub fn new(
        index: usize,
        name: impl Into<String>,
        chain_id: char,
        residue_id: i32,
        position: [f64; 3],
        atom_type: AtomType,
        role: Role,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            chain_id,
            residue_id,
            position,
            atom_type,
            role,
        }
    }

    #[inline]
    pub fn property(&self) -> AtomProperty {
        self.atom_type.property()
    }

    #[inline]
    pub fn same_residue(&self, other: &Atom) -> bool {
        self.chain_id == other.chain_id && self.residue_id == other.residue_id
    }
}
