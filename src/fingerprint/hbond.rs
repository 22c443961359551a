//! Geometric hydrogen-bond validation.
//!
//! A hydrogen bond is accepted when the acceptor lies within the distance
//! criterion of the donor reference point, the D–H···A angle at the hydrogen
//! reaches the donor-angle criterion, and the pre-acceptor–A···H angle at the
//! acceptor reaches the acceptor-angle criterion (Hbind convention).
//!
//! The distance is measured between the acceptor and the *donor reference*
//! (the centroid of the hydrogen's bonded neighbours, i.e. the heavy donor),
//! not the hydrogen itself.

use super::config::HBondCriterion;
use super::error::Error;
use super::geometry::{angle, distance, sub};

/// Angle substituted for a missing directional reference, in degrees.
pub const NON_DIRECTIONAL_ANGLE: f64 = 180.0;

/// The four points of a candidate hydrogen bond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HBondGeometry {
    /// Acceptor atom.
    pub acceptor: [f64; 3],
    /// Centroid of the acceptor's bonded neighbours; `None` for a
    /// non-directional acceptor.
    pub pre_acceptor: Option<[f64; 3]>,
    /// Donor hydrogen; `None` for a non-directional donor (water oxygen).
    pub hydrogen: Option<[f64; 3]>,
    /// Donor reference: centroid of the hydrogen's bonded neighbours, or the
    /// donor atom itself when there is no hydrogen.
    pub donor: [f64; 3],
}

impl HBondGeometry {
    /// Ligand hydrogen donating to a receptor acceptor.
    pub fn ligand_donor(
        receptor_atom: [f64; 3],
        receptor_hb_vector: [f64; 3],
        ligand_atom: [f64; 3],
        ligand_hb_vector: [f64; 3],
    ) -> Self {
        Self {
            acceptor: receptor_atom,
            pre_acceptor: Some(receptor_hb_vector),
            hydrogen: Some(ligand_atom),
            donor: ligand_hb_vector,
        }
    }

    /// Ligand acceptor receiving from a receptor hydrogen.
    pub fn ligand_acceptor(
        ligand_atom: [f64; 3],
        ligand_hb_vector: [f64; 3],
        receptor_atom: [f64; 3],
        receptor_hb_vector: [f64; 3],
    ) -> Self {
        Self {
            acceptor: ligand_atom,
            pre_acceptor: Some(ligand_hb_vector),
            hydrogen: Some(receptor_atom),
            donor: receptor_hb_vector,
        }
    }

    /// Water oxygen accepting from a receptor hydrogen.
    pub fn water_acceptor(
        water_atom: [f64; 3],
        receptor_atom: [f64; 3],
        receptor_hb_vector: [f64; 3],
    ) -> Self {
        Self {
            acceptor: water_atom,
            pre_acceptor: None,
            hydrogen: Some(receptor_atom),
            donor: receptor_hb_vector,
        }
    }

    /// Water oxygen donating to a receptor acceptor.
    pub fn water_donor(
        receptor_atom: [f64; 3],
        receptor_hb_vector: [f64; 3],
        water_atom: [f64; 3],
    ) -> Self {
        Self {
            acceptor: receptor_atom,
            pre_acceptor: Some(receptor_hb_vector),
            hydrogen: None,
            donor: water_atom,
        }
    }
}

/// Measured quantities of a hydrogen bond that passed the distance check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HBondMeasure {
    pub distance: f64,
    /// D–H···A angle in degrees.
    pub donor_angle: f64,
    /// Pre-acceptor–A···H angle in degrees.
    pub acceptor_angle: f64,
}

impl HBondMeasure {
    pub fn satisfies(&self, criterion: &HBondCriterion) -> bool {
        self.donor_angle >= criterion.donor_angle
            && self.acceptor_angle >= criterion.acceptor_angle
    }
}

/// Measures `geom`, or returns `None` when it is beyond `max_distance`.
///
/// No angle is evaluated for out-of-range pairs.
pub fn measure(geom: &HBondGeometry, max_distance: f64) -> Result<Option<HBondMeasure>, Error> {
    let d = distance(geom.acceptor, geom.donor);
    if d > max_distance {
        return Ok(None);
    }

    let donor_angle = match geom.hydrogen {
        Some(h) => angle(sub(geom.donor, h), sub(geom.acceptor, h))?.to_degrees(),
        None => NON_DIRECTIONAL_ANGLE,
    };

    let acceptor_angle = match geom.pre_acceptor {
        Some(pre) => {
            let toward_donor = geom.hydrogen.unwrap_or(geom.donor);
            angle(sub(pre, geom.acceptor), sub(toward_donor, geom.acceptor))?.to_degrees()
        }
        None => NON_DIRECTIONAL_ANGLE,
    };

    Ok(Some(HBondMeasure {
        distance: d,
        donor_angle,
        acceptor_angle,
    }))
}

/// Returns whether `geom` forms a hydrogen bond under `criterion`.
///
/// # Errors
///
/// Returns [`Error::DegenerateGeometry`] when an in-range pair has coincident
/// points, so that an angle cannot be measured.
pub fn is_valid_hydrogen_bond(geom: &HBondGeometry, criterion: &HBondCriterion) -> Result<bool, Error> {
    Ok(measure(geom, criterion.max_distance)?.is_some_and(|m| m.satisfies(criterion)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion() -> HBondCriterion {
        HBondCriterion {
            max_distance: 3.2,
            donor_angle: 120.0,
            acceptor_angle: 90.0,
        }
    }

    // O (acceptor) at origin with its carbon behind it; N-H pointing at O.
    const O: [f64; 3] = [0.0, 0.0, 0.0];
    const C: [f64; 3] = [-1.2, 0.0, 0.0];
    const H: [f64; 3] = [1.9, 0.0, 0.0];
    const N: [f64; 3] = [2.9, 0.0, 0.0];

    #[test]
    fn linear_bond_passes() {
        let g = HBondGeometry::ligand_donor(O, C, H, N);
        let m = measure(&g, 3.2).unwrap().unwrap();
        assert!((m.distance - 2.9).abs() < 1e-12);
        assert!((m.donor_angle - 180.0).abs() < 1e-9);
        assert!((m.acceptor_angle - 180.0).abs() < 1e-9);
        assert!(is_valid_hydrogen_bond(&g, &criterion()).unwrap());
    }

    #[test]
    fn out_of_range_is_rejected_without_angles() {
        // Coincident H and N would be degenerate if angles were evaluated.
        let far = [5.0, 0.0, 0.0];
        let g = HBondGeometry::ligand_donor(O, C, far, far);
        assert!(measure(&g, 3.2).unwrap().is_none());
        assert!(!is_valid_hydrogen_bond(&g, &criterion()).unwrap());
    }

    #[test]
    fn distance_uses_donor_reference_not_hydrogen() {
        // Hydrogen within 3.2 Å, donor reference beyond it.
        let g = HBondGeometry::ligand_donor(O, C, [3.0, 0.0, 0.0], [4.0, 0.0, 0.0]);
        assert!(!is_valid_hydrogen_bond(&g, &criterion()).unwrap());
    }

    #[test]
    fn bent_donor_angle_fails() {
        // H displaced so that N-H...O is ~90 degrees.
        let g = HBondGeometry::ligand_donor(O, C, [2.9, 1.0, 0.0], N);
        let m = measure(&g, 3.2).unwrap().unwrap();
        assert!(m.donor_angle < 120.0);
        assert!(!is_valid_hydrogen_bond(&g, &criterion()).unwrap());
    }

    #[test]
    fn acceptor_angle_fails_when_donor_is_behind_acceptor() {
        // Pre-acceptor on the same side as the hydrogen.
        let g = HBondGeometry::ligand_donor(O, [1.2, 0.1, 0.0], H, N);
        let m = measure(&g, 3.2).unwrap().unwrap();
        assert!(m.acceptor_angle < 90.0);
        assert!(!is_valid_hydrogen_bond(&g, &criterion()).unwrap());
    }

    #[test]
    fn non_directional_donor_uses_fixed_angle() {
        // Water oxygen as donor: no hydrogen, acceptor angle measured to the oxygen.
        let water = [2.8, 0.0, 0.0];
        let g = HBondGeometry::water_donor(O, C, water);
        let m = measure(&g, 3.2).unwrap().unwrap();
        assert_eq!(m.donor_angle, NON_DIRECTIONAL_ANGLE);
        assert!((m.acceptor_angle - 180.0).abs() < 1e-9);
        assert!(is_valid_hydrogen_bond(&g, &criterion()).unwrap());

        // Same oxygen placed behind the acceptor fails the single angle check.
        let behind = [-0.5, 2.7, 0.0];
        let g = HBondGeometry::water_donor(O, [0.0, 1.2, 0.0], behind);
        assert_eq!(measure(&g, 3.2).unwrap().unwrap().donor_angle, 180.0);
        assert!(!is_valid_hydrogen_bond(&g, &criterion()).unwrap());
    }

    #[test]
    fn non_directional_acceptor_uses_fixed_angle() {
        let g = HBondGeometry::water_acceptor(O, H, N);
        let m = measure(&g, 3.2).unwrap().unwrap();
        assert_eq!(m.acceptor_angle, NON_DIRECTIONAL_ANGLE);
        assert!(is_valid_hydrogen_bond(&g, &criterion()).unwrap());

        let bent = HBondGeometry::water_acceptor(O, [2.9, 1.0, 0.0], N);
        assert_eq!(measure(&bent, 3.2).unwrap().unwrap().acceptor_angle, 180.0);
        assert!(!is_valid_hydrogen_bond(&bent, &criterion()).unwrap());
    }

    #[test]
    fn coincident_points_in_range_are_degenerate() {
        let g = HBondGeometry::ligand_donor(O, C, H, H);
        let err = is_valid_hydrogen_bond(&g, &criterion()).unwrap_err();
        assert!(matches!(err, Error::DegenerateGeometry(_)));
    }
}
