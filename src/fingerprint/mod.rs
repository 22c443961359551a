mod accumulator;
mod classify;
mod config;
mod encode;
mod error;
mod hbond;
mod provider;

pub mod geometry;

pub use accumulator::{Accumulator, PoseRecord};
pub use classify::{Classifier, PoseOutcome};
pub use config::{
    Criteria, DistanceCriterion, FingerprintConfig, HBondCriterion, PairErrorPolicy,
    get_default_criteria, load_criteria,
};
pub use encode::encode;
pub use error::Error;
pub use hbond::{HBondGeometry, HBondMeasure, NON_DIRECTIONAL_ANGLE, is_valid_hydrogen_bond, measure};
pub use provider::{AtomSource, Pose, PoseProvider};

use log::info;

use crate::model::table::InteractionTable;

/// Interaction fingerprinting of docked poses against one receptor.
///
/// Poses are fed in with [`run`](Fingerprinter::run), which classifies every
/// pose and appends the results. [`to_table`](Fingerprinter::to_table) encodes
/// everything recorded so far and may be called at any time.
#[derive(Debug)]
pub struct Fingerprinter<R> {
    receptor: R,
    criteria: Criteria,
    policy: PairErrorPolicy,
    accumulator: Accumulator,
    skipped_pairs: usize,
}

impl<R: AtomSource> Fingerprinter<R> {
    /// Creates a fingerprinter for `receptor`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured criteria fail to parse or validate.
    pub fn new(receptor: R, config: &FingerprintConfig) -> Result<Self, Error> {
        let criteria = load_criteria(config.criteria.as_deref())?;
        Ok(Self {
            receptor,
            criteria,
            policy: config.on_pair_error,
            accumulator: Accumulator::new(),
            skipped_pairs: 0,
        })
    }

    /// Classifies every pose of every provider and records the results.
    ///
    /// Pass a single provider as `[&molecule]`. The call is all-or-nothing:
    /// if any pose fails, nothing from this call is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pair`] when a pair cannot be evaluated under
    /// [`PairErrorPolicy::Abort`].
    pub fn run<'m, M, I>(&mut self, providers: I) -> Result<(), Error>
    where
        M: PoseProvider + 'm,
        I: IntoIterator<Item = &'m M>,
    {
        let classifier = Classifier::new(&self.receptor, &self.criteria, self.policy);

        let mut pending = Vec::new();
        let mut skipped = 0;
        for provider in providers {
            for pose in provider.poses() {
                let outcome = classifier.classify(&pose)?;
                skipped += outcome.skipped_pairs;
                pending.push((pose.name().to_string(), pose.pose_id(), outcome.labels));
            }
        }

        let n_poses = pending.len();
        for (name, pose_id, labels) in pending {
            self.accumulator.record(name, pose_id, labels);
        }
        self.skipped_pairs += skipped;

        info!(
            "fingerprinted {} pose(s); {} recorded, {} distinct label(s), {} pair(s) skipped",
            n_poses,
            self.accumulator.pose_count(),
            self.accumulator.vocabulary().len(),
            skipped
        );

        Ok(())
    }

    /// One-hot table of every pose recorded so far.
    pub fn to_table(&self) -> InteractionTable {
        encode(self.accumulator.records(), self.accumulator.vocabulary())
    }

    #[inline]
    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    #[inline]
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Pairs dropped under [`PairErrorPolicy::Skip`] over all runs.
    #[inline]
    pub fn skipped_pairs(&self) -> usize {
        self.skipped_pairs
    }
}
