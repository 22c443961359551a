//! Interaction labels and label sets.
//!
//! A label names an interaction type and the receptor partner it was observed
//! with. Labels are the unit of deduplication: many atom pairs that produce the
//! same label collapse to one entry per pose.

use std::collections::BTreeSet;
use std::fmt;

/// Interaction category of a label.
///
/// The declaration order is the column order used by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InteractionKind {
    HBond,
    Vdw,
    Water,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 3] = [
        InteractionKind::HBond,
        InteractionKind::Vdw,
        InteractionKind::Water,
    ];

    /// Column group name in the encoded table.
    pub fn name(&self) -> &'static str {
        match self {
            InteractionKind::HBond => "hb",
            InteractionKind::Vdw => "vdw",
            InteractionKind::Water => "water",
        }
    }

    /// Single-letter prefix of the legacy string token.
    pub fn prefix(&self) -> char {
        match self {
            InteractionKind::HBond => 'h',
            InteractionKind::Vdw => 'v',
            InteractionKind::Water => 'w',
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified contact between a ligand-side atom and a receptor residue.
///
/// Hydrogen-bond labels carry the receptor atom name; van der Waals and
/// water-bridge labels identify the residue only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InteractionLabel {
    pub kind: InteractionKind,
    pub chain_id: char,
    pub residue_id: i32,
    pub atom_name: Option<String>,
}

impl InteractionLabel {
    pub fn vdw(chain_id: char, residue_id: i32) -> Self {
        Self {
            kind: InteractionKind::Vdw,
            chain_id,
            residue_id,
            atom_name: None,
        }
    }

    pub fn hbond(chain_id: char, residue_id: i32, atom_name: impl Into<String>) -> Self {
        Self {
            kind: InteractionKind::HBond,
            chain_id,
            residue_id,
            atom_name: Some(atom_name.into()),
        }
    }

    pub fn water(chain_id: char, residue_id: i32) -> Self {
        Self {
            kind: InteractionKind::Water,
            chain_id,
            residue_id,
            atom_name: None,
        }
    }

    /// Partner identity without the type tag, e.g. `A:12:OG` or `B:5`.
    pub fn partner(&self) -> String {
        match &self.atom_name {
            Some(name) => format!("{}:{}:{}", self.chain_id, self.residue_id, name),
            None => format!("{}:{}", self.chain_id, self.residue_id),
        }
    }
}

impl fmt::Display for InteractionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind.prefix(), self.partner())
    }
}

/// One ordered label set per interaction kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSets {
    pub hbonds: BTreeSet<InteractionLabel>,
    pub vdw: BTreeSet<InteractionLabel>,
    pub water: BTreeSet<InteractionLabel>,
}

impl LabelSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: InteractionKind) -> &BTreeSet<InteractionLabel> {
        match kind {
            InteractionKind::HBond => &self.hbonds,
            InteractionKind::Vdw => &self.vdw,
            InteractionKind::Water => &self.water,
        }
    }

    fn get_mut(&mut self, kind: InteractionKind) -> &mut BTreeSet<InteractionLabel> {
        match kind {
            InteractionKind::HBond => &mut self.hbonds,
            InteractionKind::Vdw => &mut self.vdw,
            InteractionKind::Water => &mut self.water,
        }
    }

    /// Inserts a label into the set of its own kind.
    ///
    /// Returns `false` if the label was already present.
    pub fn insert(&mut self, label: InteractionLabel) -> bool {
        self.get_mut(label.kind).insert(label)
    }

    /// Set union with `other`, kind by kind.
    pub fn extend_from(&mut self, other: &LabelSets) {
        for kind in InteractionKind::ALL {
            self.get_mut(kind).extend(other.get(kind).iter().cloned());
        }
    }

    pub fn contains(&self, label: &InteractionLabel) -> bool {
        self.get(label.kind).contains(label)
    }

    pub fn is_subset(&self, other: &LabelSets) -> bool {
        InteractionKind::ALL
            .iter()
            .all(|&kind| self.get(kind).is_subset(other.get(kind)))
    }

    /// All labels, grouped by kind in column order.
    pub fn iter(&self) -> impl Iterator<Item = &InteractionLabel> {
        self.hbonds
            .iter()
            .chain(self.vdw.iter())
            .chain(self.water.iter())
    }

    pub fn len(&self) -> usize {
        self.hbonds.len() + self.vdw.len() + self.water.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<InteractionLabel> for LabelSets {
    fn from_iter<T: IntoIterator<Item = InteractionLabel>>(iter: T) -> Self {
        let mut sets = Self::new();
        for label in iter {
            sets.insert(label);
        }
        sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_token_rendering() {
        assert_eq!(InteractionLabel::vdw('B', 5).to_string(), "v_B:5");
        assert_eq!(InteractionLabel::hbond('A', 12, "OG").to_string(), "h_A:12:OG");
        assert_eq!(InteractionLabel::water('A', -3).to_string(), "w_A:-3");
    }

    #[test]
    fn partner_drops_type_tag() {
        assert_eq!(InteractionLabel::hbond('A', 12, "OG").partner(), "A:12:OG");
        assert_eq!(InteractionLabel::water('C', 7).partner(), "C:7");
    }

    #[test]
    fn insert_routes_by_kind_and_deduplicates() {
        let mut sets = LabelSets::new();
        assert!(sets.insert(InteractionLabel::vdw('A', 1)));
        assert!(!sets.insert(InteractionLabel::vdw('A', 1)));
        assert!(sets.insert(InteractionLabel::water('A', 1)));
        assert!(sets.insert(InteractionLabel::hbond('A', 1, "N")));

        assert_eq!(sets.hbonds.len(), 1);
        assert_eq!(sets.vdw.len(), 1);
        assert_eq!(sets.water.len(), 1);
        assert_eq!(sets.len(), 3);
    }

    #[test]
    fn same_residue_different_kind_are_distinct() {
        let sets: LabelSets = [InteractionLabel::vdw('A', 1), InteractionLabel::water('A', 1)]
            .into_iter()
            .collect();
        assert_eq!(sets.len(), 2);
        assert!(sets.contains(&InteractionLabel::water('A', 1)));
        assert!(!sets.contains(&InteractionLabel::hbond('A', 1, "O")));
    }

    #[test]
    fn union_and_subset() {
        let a: LabelSets = [InteractionLabel::vdw('A', 1)].into_iter().collect();
        let b: LabelSets = [InteractionLabel::hbond('A', 2, "OG")].into_iter().collect();

        let mut union = a.clone();
        union.extend_from(&b);

        assert!(a.is_subset(&union));
        assert!(b.is_subset(&union));
        assert!(!union.is_subset(&a));
        assert_eq!(union.len(), 2);
    }

    #[test]
    fn iteration_follows_column_order() {
        let sets: LabelSets = [
            InteractionLabel::water('A', 1),
            InteractionLabel::vdw('A', 2),
            InteractionLabel::hbond('A', 3, "N"),
        ]
        .into_iter()
        .collect();
        let kinds: Vec<_> = sets.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![InteractionKind::HBond, InteractionKind::Vdw, InteractionKind::Water]
        );
    }
}
