//! Per-pose interaction classification.
//!
//! Every ligand-side atom of a pose is paired with the receptor atoms inside
//! the search radius, and each pair is classified by the properties of its
//! two atom types. The result is one deduplicated [`LabelSets`] per pose.

use std::collections::HashMap;

use log::{debug, warn};

use super::config::{Criteria, PairErrorPolicy};
use super::error::Error;
use super::geometry::{centroid, distance};
use super::hbond::{HBondGeometry, is_valid_hydrogen_bond};
use super::provider::{AtomSource, Pose};
use crate::model::atom::Atom;
use crate::model::label::{InteractionLabel, LabelSets};
use crate::model::types::{AtomProperty, Role};

/// Which structure an atom index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Partition {
    /// The rigid receptor.
    Receptor,
    /// The pose itself (ligand, waters and flexible residues).
    Pose,
}

/// Hydrogen-bond vectors computed so far for one pose.
///
/// `None` records an atom with no bonded neighbours.
#[derive(Debug, Default)]
struct HbVectorCache {
    vectors: HashMap<(Partition, usize), Option<[f64; 3]>>,
}

impl HbVectorCache {
    fn get<S: AtomSource + ?Sized>(
        &mut self,
        partition: Partition,
        source: &S,
        atom: &Atom,
    ) -> Result<[f64; 3], Error> {
        let vector = *self
            .vectors
            .entry((partition, atom.index))
            .or_insert_with(|| hb_vector(source, atom.index));
        vector.ok_or_else(|| {
            Error::degenerate(format!(
                "{} atom '{}' ({}:{}) has no bonded neighbours to orient a hydrogen bond",
                atom.atom_type, atom.name, atom.chain_id, atom.residue_id
            ))
        })
    }
}

/// Centroid of the atoms bonded to `index`.
fn hb_vector<S: AtomSource + ?Sized>(source: &S, index: usize) -> Option<[f64; 3]> {
    let positions = source
        .bonded_neighbors(index)
        .iter()
        .filter_map(|&n| source.atom(n))
        .map(|a| a.position);
    centroid(positions).ok()
}

/// Labels found for one pose.
#[derive(Debug, Clone, Default)]
pub struct PoseOutcome {
    pub labels: LabelSets,
    /// Pairs dropped under [`PairErrorPolicy::Skip`].
    pub skipped_pairs: usize,
}

/// Classifies poses against a fixed receptor.
#[derive(Debug)]
pub struct Classifier<'a, R> {
    receptor: &'a R,
    criteria: &'a Criteria,
    policy: PairErrorPolicy,
}

impl<'a, R: AtomSource> Classifier<'a, R> {
    pub fn new(receptor: &'a R, criteria: &'a Criteria, policy: PairErrorPolicy) -> Self {
        Self {
            receptor,
            criteria,
            policy,
        }
    }

    /// Classifies every ligand-side atom of `pose` against its neighbourhood.
    ///
    /// # Errors
    ///
    /// Under [`PairErrorPolicy::Abort`], the first pair that cannot be
    /// evaluated fails the pose with [`Error::Pair`].
    pub fn classify<P: Pose>(&self, pose: &P) -> Result<PoseOutcome, Error> {
        let radius = self.criteria.search_radius();

        let mut ligand_side = pose.atoms_by_role(Role::Ligand);
        if pose.has_water_molecules() {
            ligand_side.extend(pose.atoms_by_role(Role::Water));
        }

        let mut cache = HbVectorCache::default();
        let mut outcome = PoseOutcome::default();

        for lig in ligand_side {
            let rigid = self.receptor.atoms_within(lig.position, radius, None);
            let flexible = if pose.has_flexible_residues() {
                pose.atoms_within(lig.position, radius, Some(Role::FlexibleResidue))
            } else {
                Vec::new()
            };

            let candidates = rigid
                .into_iter()
                .map(|a| (Partition::Receptor, a))
                .chain(flexible.into_iter().map(|a| (Partition::Pose, a)));

            for (partition, rec) in candidates {
                match self.classify_pair(pose, &mut cache, lig, partition, rec) {
                    Ok(Some(label)) => {
                        outcome.labels.insert(label);
                    }
                    Ok(None) => {}
                    Err(e) => {
                        let e = e.in_pair(pose.name(), pose.pose_id() + 1, lig.index, rec.index);
                        match self.policy {
                            PairErrorPolicy::Abort => return Err(e),
                            PairErrorPolicy::Skip => {
                                warn!("skipping atom pair: {}", e);
                                outcome.skipped_pairs += 1;
                            }
                        }
                    }
                }
            }
        }

        debug!(
            "pose {} of '{}': {} hb, {} vdw, {} water",
            pose.pose_id() + 1,
            pose.name(),
            outcome.labels.hbonds.len(),
            outcome.labels.vdw.len(),
            outcome.labels.water.len()
        );

        Ok(outcome)
    }

    fn classify_pair<P: Pose>(
        &self,
        pose: &P,
        cache: &mut HbVectorCache,
        lig: &Atom,
        partition: Partition,
        rec: &Atom,
    ) -> Result<Option<InteractionLabel>, Error> {
        use AtomProperty::*;

        let label = match (lig.property(), rec.property()) {
            (Vdw, Vdw) => (distance(lig.position, rec.position) <= self.criteria.vdw.max_distance)
                .then(|| InteractionLabel::vdw(rec.chain_id, rec.residue_id)),
            (HbDonor, HbAcceptor) => {
                let geom = HBondGeometry::ligand_donor(
                    rec.position,
                    self.receptor_vector(pose, cache, partition, rec)?,
                    lig.position,
                    cache.get(Partition::Pose, pose, lig)?,
                );
                is_valid_hydrogen_bond(&geom, &self.criteria.hb_don)?
                    .then(|| InteractionLabel::hbond(rec.chain_id, rec.residue_id, rec.name.as_str()))
            }
            (HbAcceptor, HbDonor) => {
                let geom = HBondGeometry::ligand_acceptor(
                    lig.position,
                    cache.get(Partition::Pose, pose, lig)?,
                    rec.position,
                    self.receptor_vector(pose, cache, partition, rec)?,
                );
                is_valid_hydrogen_bond(&geom, &self.criteria.hb_acc)?
                    .then(|| InteractionLabel::hbond(rec.chain_id, rec.residue_id, rec.name.as_str()))
            }
            (Water, HbDonor) => {
                let geom = HBondGeometry::water_acceptor(
                    lig.position,
                    rec.position,
                    self.receptor_vector(pose, cache, partition, rec)?,
                );
                is_valid_hydrogen_bond(&geom, &self.criteria.water)?
                    .then(|| InteractionLabel::water(rec.chain_id, rec.residue_id))
            }
            (Water, HbAcceptor) => {
                let geom = HBondGeometry::water_donor(
                    rec.position,
                    self.receptor_vector(pose, cache, partition, rec)?,
                    lig.position,
                );
                is_valid_hydrogen_bond(&geom, &self.criteria.water)?
                    .then(|| InteractionLabel::water(rec.chain_id, rec.residue_id))
            }
            _ => None,
        };

        Ok(label)
    }

    fn receptor_vector<P: Pose>(
        &self,
        pose: &P,
        cache: &mut HbVectorCache,
        partition: Partition,
        rec: &Atom,
    ) -> Result<[f64; 3], Error> {
        match partition {
            Partition::Receptor => cache.get(partition, self.receptor, rec),
            Partition::Pose => cache.get(partition, pose, rec),
        }
    }
}
