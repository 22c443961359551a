use std::path::Path;

use pose_fingerprint::io::Format;

fn extension(path: &Path) -> Option<String> {
    Some(path.extension()?.to_str()?.to_lowercase())
}

pub fn input(path: &Path) -> Option<Format> {
    match extension(path)?.as_str() {
        "pdbqt" => Some(Format::Pdbqt),
        _ => None,
    }
}

pub fn output(path: &Path) -> Option<Format> {
    match extension(path)?.as_str() {
        "csv" => Some(Format::Csv),
        "tsv" | "tab" => Some(Format::Tsv),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_from_extension() {
        assert_eq!(output(Path::new("fp.csv")), Some(Format::Csv));
        assert_eq!(output(Path::new("fp.TSV")), Some(Format::Tsv));
        assert_eq!(output(Path::new("fp.tab")), Some(Format::Tsv));
        assert_eq!(output(Path::new("fp.txt")), None);
        assert_eq!(output(Path::new("fp")), None);
    }

    #[test]
    fn input_format_only_knows_pdbqt() {
        assert_eq!(input(Path::new("vina_out.pdbqt")), Some(Format::Pdbqt));
        assert_eq!(input(Path::new("vina_out.pdb")), None);
    }
}
