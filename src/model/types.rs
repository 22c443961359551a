use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown atom type: '{0}'")]
pub struct ParseAtomTypeError(String);

impl ParseAtomTypeError {
    pub fn code(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid atom role: '{0}'")]
pub struct ParseRoleError(String);

/// AutoDock atom types recognized in docking inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AtomType {
    H,
    C,
    A,
    N,
    P,
    S,
    Br,
    I,
    F,
    NA,
    OA,
    SA,
    OS,
    NS,
    HD,
    HS,
    Cl,
    Mg,
    Ca,
    Fe,
    Zn,
    Mn,
    W,
    G0,
    G1,
    G2,
    G3,
    CG0,
    CG1,
    CG2,
    CG3,
}

/// Interaction property of an atom type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomProperty {
    Vdw,
    HbAcceptor,
    HbDonor,
    NonMetal,
    Metal,
    Water,
    Glue,
}

impl fmt::Display for AtomProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AtomProperty::Vdw => "vdw",
            AtomProperty::HbAcceptor => "hb_acc",
            AtomProperty::HbDonor => "hb_don",
            AtomProperty::NonMetal => "non-metal",
            AtomProperty::Metal => "metal",
            AtomProperty::Water => "water",
            AtomProperty::Glue => "glue",
        };
        write!(f, "{}", name)
    }
}

impl AtomType {
    pub fn property(&self) -> AtomProperty {
        use AtomType::*;
        match self {
            H | C | A | N | P | S | Br | I | F => AtomProperty::Vdw,
            NA | OA | SA | OS | NS => AtomProperty::HbAcceptor,
            HD | HS => AtomProperty::HbDonor,
            Cl => AtomProperty::NonMetal,
            Mg | Ca | Fe | Zn | Mn => AtomProperty::Metal,
            W => AtomProperty::Water,
            G0 | G1 | G2 | G3 | CG0 | CG1 | CG2 | CG3 => AtomProperty::Glue,
        }
    }

    /// Covalent radius in Ångströms used for distance-based bond perception.
    ///
    /// Glue pseudo-atoms have no radius and never take part in inferred bonds.
    pub fn covalent_radius(&self) -> Option<f64> {
        use AtomType::*;
        match self {
            H | HD | HS => Some(0.31),
            C | A | CG0 | CG1 | CG2 | CG3 => Some(0.76),
            N | NA | NS => Some(0.71),
            OA | OS | W => Some(0.66),
            P => Some(1.07),
            S | SA => Some(1.05),
            F => Some(0.57),
            Cl => Some(1.02),
            Br => Some(1.20),
            I => Some(1.39),
            Mg => Some(1.41),
            Ca => Some(1.76),
            Fe => Some(1.32),
            Zn => Some(1.22),
            Mn => Some(1.39),
            G0 | G1 | G2 | G3 => None,
        }
    }

    pub fn code(&self) -> &'static str {
        use AtomType::*;
        match self {
            H => "H",
            C => "C",
            A => "A",
            N => "N",
            P => "P",
            S => "S",
            Br => "Br",
            I => "I",
            F => "F",
            NA => "NA",
            OA => "OA",
            SA => "SA",
            OS => "OS",
            NS => "NS",
            HD => "HD",
            HS => "HS",
            Cl => "Cl",
            Mg => "Mg",
            Ca => "Ca",
            Fe => "Fe",
            Zn => "Zn",
            Mn => "Mn",
            W => "W",
            G0 => "G0",
            G1 => "G1",
            G2 => "G2",
            G3 => "G3",
            CG0 => "CG0",
            CG1 => "CG1",
            CG2 => "CG2",
            CG3 => "CG3",
        }
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for AtomType {
    type Err = ParseAtomTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use AtomType::*;
        match s {
            "H" => Ok(H),
            "C" => Ok(C),
            "A" => Ok(A),
            "N" => Ok(N),
            "P" => Ok(P),
            "S" => Ok(S),
            "Br" => Ok(Br),
            "I" => Ok(I),
            "F" => Ok(F),
            "NA" => Ok(NA),
            "OA" => Ok(OA),
            "SA" => Ok(SA),
            "OS" => Ok(OS),
            "NS" => Ok(NS),
            "HD" => Ok(HD),
            "HS" => Ok(HS),
            "Cl" => Ok(Cl),
            "Mg" => Ok(Mg),
            "Ca" => Ok(Ca),
            "Fe" => Ok(Fe),
            "Zn" => Ok(Zn),
            "Mn" => Ok(Mn),
            "W" => Ok(W),
            "G0" => Ok(G0),
            "G1" => Ok(G1),
            "G2" => Ok(G2),
            "G3" => Ok(G3),
            "CG0" => Ok(CG0),
            "CG1" => Ok(CG1),
            "CG2" => Ok(CG2),
            "CG3" => Ok(CG3),
            _ => Err(ParseAtomTypeError(s.to_string())),
        }
    }
}

/// Which partition of a docking system an atom belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Ligand,
    Water,
    FlexibleResidue,
    Receptor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Ligand => "ligand",
            Role::Water => "water",
            Role::FlexibleResidue => "flexible_residue",
            Role::Receptor => "receptor",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ligand" => Ok(Role::Ligand),
            "water" => Ok(Role::Water),
            "flexible_residue" | "flexres" => Ok(Role::FlexibleResidue),
            "receptor" => Ok(Role::Receptor),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atom_type_from_str_valid() {
        assert_eq!("OA".parse::<AtomType>().unwrap(), AtomType::OA);
        assert_eq!("HD".parse::<AtomType>().unwrap(), AtomType::HD);
        assert_eq!("Cl".parse::<AtomType>().unwrap(), AtomType::Cl);
        assert_eq!("CG2".parse::<AtomType>().unwrap(), AtomType::CG2);
    }

    #[test]
    fn atom_type_from_str_is_case_sensitive() {
        assert!("CL".parse::<AtomType>().is_err());
        assert!("oa".parse::<AtomType>().is_err());
    }

    #[test]
    fn unknown_atom_type_is_an_error() {
        let err = "Xx".parse::<AtomType>().unwrap_err();
        assert_eq!(err.code(), "Xx");
        assert!(err.to_string().contains("unknown atom type"));
    }

    #[test]
    fn property_table() {
        assert_eq!(AtomType::C.property(), AtomProperty::Vdw);
        assert_eq!(AtomType::A.property(), AtomProperty::Vdw);
        assert_eq!(AtomType::NA.property(), AtomProperty::HbAcceptor);
        assert_eq!(AtomType::OS.property(), AtomProperty::HbAcceptor);
        assert_eq!(AtomType::HS.property(), AtomProperty::HbDonor);
        assert_eq!(AtomType::Cl.property(), AtomProperty::NonMetal);
        assert_eq!(AtomType::Zn.property(), AtomProperty::Metal);
        assert_eq!(AtomType::W.property(), AtomProperty::Water);
        assert_eq!(AtomType::G1.property(), AtomProperty::Glue);
        assert_eq!(AtomType::CG3.property(), AtomProperty::Glue);
    }

    #[test]
    fn code_display_roundtrip() {
        for code in ["H", "NA", "Br", "Mg", "W", "G0", "CG1"] {
            let t: AtomType = code.parse().unwrap();
            assert_eq!(t.to_string(), code);
        }
    }

    #[test]
    fn glue_atoms_have_no_radius() {
        assert!(AtomType::G0.covalent_radius().is_none());
        assert!(AtomType::CG0.covalent_radius().is_some());
        assert!(AtomType::OA.covalent_radius().is_some());
    }

    #[test]
    fn role_parse_and_display() {
        assert_eq!("Ligand".parse::<Role>().unwrap(), Role::Ligand);
        assert_eq!("flexres".parse::<Role>().unwrap(), Role::FlexibleResidue);
        assert_eq!(Role::FlexibleResidue.to_string(), "flexible_residue");
        assert!("solvent".parse::<Role>().is_err());
    }

    #[test]
    fn property_display() {
        assert_eq!(AtomProperty::HbAcceptor.to_string(), "hb_acc");
    }
}
