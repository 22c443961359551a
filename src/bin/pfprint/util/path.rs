use std::path::Path;

/// Name under which a docking result file is recorded: its file stem.
pub fn result_name(path: &Path) -> String {
    match path.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Short label for progress and summary output.
pub fn display_name(path: Option<&Path>) -> String {
    match path.and_then(|p| p.file_name()) {
        Some(name) => name.to_string_lossy().into_owned(),
        None => "stdout".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_name_strips_directory_and_extension() {
        assert_eq!(result_name(Path::new("runs/ligand_out.pdbqt")), "ligand_out");
    }

    #[test]
    fn result_name_keeps_inner_dots() {
        assert_eq!(result_name(Path::new("lig.v2.pdbqt")), "lig.v2");
    }

    #[test]
    fn display_name_defaults_to_stdout() {
        assert_eq!(display_name(None), "stdout");
        assert_eq!(display_name(Some(Path::new("out/fp.csv"))), "fp.csv");
    }
}
