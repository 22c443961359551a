use crate::io::{Format, error::Error};
use crate::model::{
    atom::Atom,
    system::{DockedMolecule, Structure},
    types::{AtomType, Role},
};
use std::io::BufRead;

pub fn read_receptor<R: BufRead>(reader: R) -> Result<Structure, Error> {
    let lines = collect_lines(reader)?;

    let mut atoms = Vec::new();
    for (ln, raw) in &lines {
        if is_atom_record(raw) {
            atoms.push(parse_atom(*ln, raw, |_| Role::Receptor)?);
        }
    }

    if atoms.is_empty() {
        return Err(Error::parse(
            Format::Pdbqt,
            lines.len(),
            "no ATOM or HETATM records in receptor",
        ));
    }

    Ok(Structure::from_atoms(atoms)?)
}

pub fn read_docked<R: BufRead>(reader: R, name: &str) -> Result<DockedMolecule, Error> {
    let lines = collect_lines(reader)?;

    let mut poses = Vec::new();
    let mut current: Vec<Atom> = Vec::new();
    let mut in_model = false;
    let mut saw_model = false;
    let mut in_flex = false;

    for (ln, raw) in &lines {
        let record = if is_atom_record(raw) {
            "ATOM"
        } else {
            record_name(raw)
        };
        match record {
            "MODEL" => {
                if in_model {
                    return Err(Error::parse(Format::Pdbqt, *ln, "MODEL before ENDMDL"));
                }
                if !saw_model && !current.is_empty() {
                    return Err(Error::parse(
                        Format::Pdbqt,
                        *ln,
                        "atom records found outside MODEL/ENDMDL",
                    ));
                }
                in_model = true;
                saw_model = true;
                in_flex = false;
            }
            "ENDMDL" => {
                if !in_model {
                    return Err(Error::parse(Format::Pdbqt, *ln, "ENDMDL without MODEL"));
                }
                poses.push(Structure::from_atoms(std::mem::take(&mut current))?);
                in_model = false;
            }
            "BEGIN_RES" => in_flex = true,
            "END_RES" => in_flex = false,
            "ATOM" => {
                if saw_model && !in_model {
                    return Err(Error::parse(
                        Format::Pdbqt,
                        *ln,
                        "atom records found outside MODEL/ENDMDL",
                    ));
                }
                let atom = parse_atom(*ln, raw, |t| match t {
                    AtomType::W => Role::Water,
                    _ if in_flex => Role::FlexibleResidue,
                    _ => Role::Ligand,
                })?;
                current.push(atom);
            }
            _ => {}
        }
    }

    if in_model {
        return Err(Error::parse(Format::Pdbqt, lines.len(), "missing ENDMDL"));
    }
    if !saw_model && !current.is_empty() {
        poses.push(Structure::from_atoms(current)?);
    }
    if poses.is_empty() {
        return Err(Error::parse(Format::Pdbqt, lines.len(), "no poses found"));
    }

    Ok(DockedMolecule::new(name, poses))
}

fn collect_lines<R: BufRead>(reader: R) -> Result<Vec<(usize, String)>, Error> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| {
            line.map(|v| (i + 1, v))
                .map_err(|e| Error::Io { source: e })
        })
        .collect()
}

fn record_name(raw: &str) -> &str {
    raw.split_whitespace().next().unwrap_or("")
}

fn is_atom_record(raw: &str) -> bool {
    raw.starts_with("ATOM") || raw.starts_with("HETATM")
}

/// Byte columns `start..end`, clipped to the line.
fn column(raw: &str, start: usize, end: usize) -> &str {
    let end = end.min(raw.len());
    if start >= end {
        return "";
    }
    raw.get(start..end).unwrap_or("")
}

fn parse_atom<F>(ln: usize, raw: &str, role_of: F) -> Result<Atom, Error>
where
    F: Fn(AtomType) -> Role,
{
    let name = column(raw, 12, 16).trim();
    if name.is_empty() {
        return Err(Error::parse(Format::Pdbqt, ln, "missing atom name"));
    }

    let chain_id = column(raw, 21, 22).chars().next().unwrap_or(' ');

    let residue_id = column(raw, 22, 26)
        .trim()
        .parse::<i32>()
        .map_err(|_| Error::parse(Format::Pdbqt, ln, "invalid residue number"))?;

    let x = parse_coord(raw, 30, 38, ln, "x")?;
    let y = parse_coord(raw, 38, 46, ln, "y")?;
    let z = parse_coord(raw, 46, 54, ln, "z")?;

    let code = column(raw, 66, raw.len())
        .split_whitespace()
        .last()
        .ok_or_else(|| Error::parse(Format::Pdbqt, ln, "missing atom type"))?;
    let atom_type = code
        .parse::<AtomType>()
        .map_err(|_| Error::unknown_atom_type(ln, code))?;

    Ok(Atom::new(
        0,
        name,
        chain_id,
        residue_id,
        [x, y, z],
        atom_type,
        role_of(atom_type),
    ))
}

fn parse_coord(raw: &str, start: usize, end: usize, ln: usize, axis: &str) -> Result<f64, Error> {
    column(raw, start, end)
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::parse(Format::Pdbqt, ln, format!("invalid {axis} coordinate")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::{AtomSource, Pose, PoseProvider};
    use std::io::Cursor;

    fn atom_line(record: &str, serial: usize, name: &str, resname: &str, chain: char, resid: i32, pos: [f64; 3], atom_type: &str) -> String {
        format!(
            "{:<6}{:>5} {:<4} {:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}    {:>6.3} {:<2}",
            record, serial, name, resname, chain, resid, pos[0], pos[1], pos[2], 1.0, 0.0, 0.0, atom_type
        )
    }

    fn receptor_text() -> String {
        [
            "REMARK  receptor".to_string(),
            atom_line("ATOM", 1, "CB", "SER", 'A', 12, [-1.43, 0.0, 0.0], "C"),
            atom_line("ATOM", 2, "OG", "SER", 'A', 12, [0.0, 0.0, 0.0], "OA"),
            atom_line("ATOM", 3, "HG", "SER", 'A', 12, [0.3, 0.9, 0.0], "HD"),
            atom_line("HETATM", 4, "ZN", "ZN", 'B', 300, [9.0, 9.0, 9.0], "Zn"),
            "TER".to_string(),
        ]
        .join("\n")
    }

    #[test]
    fn atom_line_columns_are_standard() {
        let line = atom_line("ATOM", 2, "OG", "SER", 'A', 12, [1.5, -2.25, 10.0], "OA");
        assert_eq!(&line[12..16], "OG  ");
        assert_eq!(&line[21..22], "A");
        assert_eq!(line[22..26].trim(), "12");
        assert_eq!(line[30..38].trim(), "1.500");
        assert_eq!(line[46..54].trim(), "10.000");
        assert!(line.len() > 66);
    }

    #[test]
    fn reads_receptor_atoms_and_bonds() {
        let s = read_receptor(Cursor::new(receptor_text())).unwrap();
        assert_eq!(s.atom_count(), 4);
        assert!(s.atoms().iter().all(|a| a.role == Role::Receptor));

        let og = &s.atoms()[1];
        assert_eq!(og.name, "OG");
        assert_eq!(og.chain_id, 'A');
        assert_eq!(og.residue_id, 12);
        assert_eq!(og.atom_type, AtomType::OA);
        assert_eq!(s.atoms()[3].atom_type, AtomType::Zn);

        // CB-OG and OG-HG.
        assert_eq!(s.bond_count(), 2);
        assert_eq!(s.bonded_neighbors(1), &[0, 2]);
    }

    #[test]
    fn empty_receptor_is_an_error() {
        let err = read_receptor(Cursor::new("REMARK nothing\n")).unwrap_err();
        assert!(matches!(err, Error::Parse { format: Format::Pdbqt, .. }));
    }

    #[test]
    fn unknown_atom_type_reports_line() {
        let text = format!(
            "REMARK\n{}\n",
            atom_line("ATOM", 1, "XX", "UNK", 'A', 1, [0.0; 3], "Qz")
        );
        let err = read_receptor(Cursor::new(text)).unwrap_err();
        match err {
            Error::UnknownAtomType { line, code } => {
                assert_eq!(line, 2);
                assert_eq!(code, "Qz");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_coordinate_is_a_parse_error() {
        let mut line = atom_line("ATOM", 1, "C1", "LIG", 'A', 1, [0.0; 3], "C");
        line.replace_range(30..38, "   abcde");
        let err = read_receptor(Cursor::new(line)).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn truncated_line_has_no_atom_type() {
        let line = atom_line("ATOM", 1, "C1", "LIG", 'A', 1, [0.0; 3], "C");
        let err = read_receptor(Cursor::new(&line[..60])).unwrap_err();
        assert!(matches!(err, Error::Parse { ref details, .. } if details == "missing atom type"));
    }

    fn docked_text() -> String {
        let mut lines = Vec::new();
        for (model, x) in [(1, 3.0), (2, 8.0)] {
            lines.push(format!("MODEL {model}"));
            lines.push("REMARK VINA RESULT:    -7.1      0.000      0.000".to_string());
            lines.push("ROOT".to_string());
            lines.push(atom_line("ATOM", 1, "C1", "UNL", ' ', 1, [x + 0.5, 1.34, 0.0], "C"));
            lines.push(atom_line("ATOM", 2, "O1", "UNL", ' ', 1, [x, 0.0, 0.0], "OA"));
            lines.push(atom_line("ATOM", 3, "H1", "UNL", ' ', 1, [x - 0.96, 0.0, 0.0], "HD"));
            lines.push("ENDROOT".to_string());
            lines.push("TORSDOF 1".to_string());
            lines.push("BEGIN_RES LYS A  20".to_string());
            lines.push(atom_line("ATOM", 4, "CE", "LYS", 'A', 20, [0.0, 5.0, 0.0], "C"));
            lines.push(atom_line("ATOM", 5, "NZ", "LYS", 'A', 20, [0.0, 6.47, 0.0], "N"));
            lines.push("END_RES LYS A  20".to_string());
            lines.push(atom_line("HETATM", 6, "O", "HOH", 'W', 900 + model, [0.0, -6.0, 0.0], "W"));
            lines.push("ENDMDL".to_string());
        }
        lines.join("\n")
    }

    #[test]
    fn reads_models_as_poses_with_roles() {
        let mol = read_docked(Cursor::new(docked_text()), "lig").unwrap();
        assert_eq!(mol.name(), "lig");
        assert_eq!(mol.pose_count(), 2);
        assert!(mol.has_flexible_residues());

        let poses: Vec<_> = mol.poses().collect();
        assert_eq!(poses[1].pose_id(), 1);
        for pose in &poses {
            assert_eq!(pose.atoms_by_role(Role::Ligand).len(), 3);
            assert_eq!(pose.atoms_by_role(Role::FlexibleResidue).len(), 2);
            assert_eq!(pose.atoms_by_role(Role::Water).len(), 1);
            assert!(pose.has_water_molecules());
        }

        let o1 = poses[1].atom(1).unwrap();
        assert_eq!(o1.name, "O1");
        assert_eq!(o1.position, [8.0, 0.0, 0.0]);
        assert_eq!(o1.chain_id, ' ');
        // O1 bonded to C1 and H1; ligand never bonds to the flexible residue.
        assert_eq!(poses[0].bonded_neighbors(1), &[0, 2]);
        assert_eq!(poses[0].bonded_neighbors(3), &[4]);
    }

    #[test]
    fn file_without_models_is_one_pose() {
        let text = [
            atom_line("ATOM", 1, "C1", "UNL", ' ', 1, [0.0; 3], "C"),
            atom_line("ATOM", 2, "C2", "UNL", ' ', 1, [1.5, 0.0, 0.0], "A"),
        ]
        .join("\n");
        let mol = read_docked(Cursor::new(text), "single").unwrap();
        assert_eq!(mol.pose_count(), 1);
        assert!(!mol.has_flexible_residues());
    }

    #[test]
    fn unterminated_model_is_an_error() {
        let text = format!(
            "MODEL 1\n{}\n",
            atom_line("ATOM", 1, "C1", "UNL", ' ', 1, [0.0; 3], "C")
        );
        let err = read_docked(Cursor::new(text), "lig").unwrap_err();
        assert!(matches!(err, Error::Parse { ref details, .. } if details == "missing ENDMDL"));
    }

    #[test]
    fn atoms_between_models_are_rejected() {
        let atom = atom_line("ATOM", 1, "C1", "UNL", ' ', 1, [0.0; 3], "C");
        let text = format!("MODEL 1\n{atom}\nENDMDL\n{atom}\n");
        let err = read_docked(Cursor::new(text), "lig").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 4, .. }));
    }

    #[test]
    fn empty_docking_file_has_no_poses() {
        let err = read_docked(Cursor::new(""), "lig").unwrap_err();
        assert!(matches!(err, Error::Parse { ref details, .. } if details == "no poses found"));
    }
}
