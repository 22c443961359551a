//! Configuration for interaction fingerprinting.
//!
//! - [`FingerprintConfig`] — Main configuration struct
//! - [`Criteria`] — Distance and angle thresholds per interaction category
//! - [`PairErrorPolicy`] — What to do when a single atom pair cannot be classified

use serde::Deserialize;
use std::sync::OnceLock;

use super::error::Error;

const DEFAULT_CRITERIA_TOML: &str = include_str!("../../resources/default.criteria.toml");

static DEFAULT_CRITERIA: OnceLock<Criteria> = OnceLock::new();

/// Distance plus donor/acceptor angle thresholds for a hydrogen bond.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HBondCriterion {
    /// Maximum acceptor–donor distance (Å).
    #[serde(default = "default_hb_distance")]
    pub max_distance: f64,
    /// Minimum D–H···A angle at the hydrogen (degrees).
    #[serde(default = "default_donor_angle")]
    pub donor_angle: f64,
    /// Minimum pre-acceptor–A···H angle at the acceptor (degrees).
    #[serde(default = "default_acceptor_angle")]
    pub acceptor_angle: f64,
}

fn default_hb_distance() -> f64 {
    3.2
}
fn default_donor_angle() -> f64 {
    120.0
}
fn default_acceptor_angle() -> f64 {
    90.0
}

impl Default for HBondCriterion {
    fn default() -> Self {
        Self {
            max_distance: default_hb_distance(),
            donor_angle: default_donor_angle(),
            acceptor_angle: default_acceptor_angle(),
        }
    }
}

/// A pure distance threshold.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DistanceCriterion {
    pub max_distance: f64,
}

fn default_vdw() -> DistanceCriterion {
    DistanceCriterion { max_distance: 4.2 }
}
fn default_reactive() -> DistanceCriterion {
    DistanceCriterion { max_distance: 2.0 }
}

/// Interaction criteria, immutable once a fingerprinter is built.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Criteria {
    /// Used when the ligand atom is the acceptor.
    #[serde(default)]
    pub hb_acc: HBondCriterion,
    /// Used when the ligand atom is the donor.
    #[serde(default)]
    pub hb_don: HBondCriterion,
    #[serde(default = "default_vdw")]
    pub vdw: DistanceCriterion,
    /// Used for explicit waters on the ligand side.
    #[serde(default)]
    pub water: HBondCriterion,
    #[serde(default = "default_reactive")]
    pub reactive: DistanceCriterion,
}

impl Default for Criteria {
    fn default() -> Self {
        get_default_criteria().clone()
    }
}

impl Criteria {
    /// Largest distance over all criteria; bounds every neighbour search.
    pub fn search_radius(&self) -> f64 {
        [
            self.hb_acc.max_distance,
            self.hb_don.max_distance,
            self.vdw.max_distance,
            self.water.max_distance,
            self.reactive.max_distance,
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }

    /// Checks that distances are positive and angles lie in `[0, 180]`.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, c) in [
            ("hb_acc", &self.hb_acc),
            ("hb_don", &self.hb_don),
            ("water", &self.water),
        ] {
            check_distance(name, c.max_distance)?;
            check_angle(name, "donor_angle", c.donor_angle)?;
            check_angle(name, "acceptor_angle", c.acceptor_angle)?;
        }
        check_distance("vdw", self.vdw.max_distance)?;
        check_distance("reactive", self.reactive.max_distance)?;
        Ok(())
    }
}

fn check_distance(name: &str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_criteria(
            name,
            format!("max_distance must be a positive number, got {}", value),
        ))
    }
}

fn check_angle(name: &str, field: &str, value: f64) -> Result<(), Error> {
    if (0.0..=180.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid_criteria(
            name,
            format!("{} must lie within [0, 180] degrees, got {}", field, value),
        ))
    }
}

/// Parses custom criteria, or returns the embedded defaults when `None`.
pub fn load_criteria(custom_toml: Option<&str>) -> Result<Criteria, Error> {
    let criteria = match custom_toml {
        Some(toml) => toml::from_str::<Criteria>(toml)?,
        None => get_default_criteria().clone(),
    };
    criteria.validate()?;
    Ok(criteria)
}

pub fn get_default_criteria() -> &'static Criteria {
    DEFAULT_CRITERIA.get_or_init(|| {
        toml::from_str(DEFAULT_CRITERIA_TOML)
            .expect("Failed to parse embedded default criteria. This is a library bug.")
    })
}

/// Handling of atom pairs whose geometry cannot be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairErrorPolicy {
    /// Fail the whole `run` call; no pose of that call is recorded.
    #[default]
    Abort,
    /// Log a warning, count the pair as skipped, and keep going.
    Skip,
}

/// Main configuration for interaction fingerprinting.
///
/// # Examples
///
/// ```
/// use pose_fingerprint::{FingerprintConfig, PairErrorPolicy};
///
/// let config = FingerprintConfig {
///     criteria: Some("[vdw]\nmax_distance = 4.0\n".to_string()),
///     on_pair_error: PairErrorPolicy::Skip,
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct FingerprintConfig {
    /// Custom interaction criteria in TOML format.
    ///
    /// If `None`, uses the embedded `default.criteria.toml`.
    pub criteria: Option<String>,

    /// What to do when one atom pair cannot be classified.
    pub on_pair_error: PairErrorPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_values() {
        let c = Criteria::default();
        assert_eq!(c.hb_acc.max_distance, 3.2);
        assert_eq!(c.hb_acc.donor_angle, 120.0);
        assert_eq!(c.hb_acc.acceptor_angle, 90.0);
        assert_eq!(c.hb_don, c.hb_acc);
        assert_eq!(c.water, c.hb_acc);
        assert_eq!(c.vdw.max_distance, 4.2);
        assert_eq!(c.reactive.max_distance, 2.0);
    }

    #[test]
    fn search_radius_is_largest_distance() {
        assert_eq!(Criteria::default().search_radius(), 4.2);

        let c = load_criteria(Some("[water]\nmax_distance = 5.5\n")).unwrap();
        assert_eq!(c.search_radius(), 5.5);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let c = load_criteria(Some("[hb_don]\ndonor_angle = 135.0\n")).unwrap();
        assert_eq!(c.hb_don.donor_angle, 135.0);
        assert_eq!(c.hb_don.max_distance, 3.2);
        assert_eq!(c.vdw.max_distance, 4.2);
        assert_eq!(c.reactive.max_distance, 2.0);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = load_criteria(Some("[vdw\nmax_distance = ")).unwrap_err();
        assert!(matches!(err, Error::CriteriaParse(_)));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = load_criteria(Some("[vdw]\nmax_distance = -1.0\n")).unwrap_err();
        assert!(matches!(err, Error::InvalidCriteria { ref name, .. } if name == "vdw"));

        let err = load_criteria(Some("[hb_acc]\nacceptor_angle = 200.0\n")).unwrap_err();
        assert!(matches!(err, Error::InvalidCriteria { ref name, .. } if name == "hb_acc"));
    }

    #[test]
    fn default_config() {
        let config = FingerprintConfig::default();
        assert!(config.criteria.is_none());
        assert_eq!(config.on_pair_error, PairErrorPolicy::Abort);
    }
}
