use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let causes: Vec<String> = err.chain().skip(1).map(|c| c.to_string()).collect();
    if !causes.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for (depth, cause) in causes.iter().enumerate() {
            let wrapped = wrap(cause, 53);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    {:>2}: {:<53} ║", depth, first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║        {:<53} ║", line);
                }
            }
        }
    }

    let hints = HintCollector::collect(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
    typed: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Vec<String> {
        let mut collector = Self::default();

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<pose_fingerprint::io::Error>() {
                collector.collect_io_hints(io_err);
            }
            if let Some(fp_err) = cause.downcast_ref::<pose_fingerprint::FingerprintError>() {
                collector.collect_fingerprint_hints(fp_err);
            }
            if let Some(std_err) = cause.downcast_ref::<std::io::Error>() {
                collector.collect_std_io_hints(std_err);
            }
            if collector.typed {
                break;
            }
        }

        if !collector.typed {
            collector.collect_fallback_hints(err);
        }

        collector.hints
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.typed = true;
        self.hints.push(hint.into());
    }

    fn collect_io_hints(&mut self, err: &pose_fingerprint::io::Error) {
        use pose_fingerprint::io::Error as IoError;

        match err {
            IoError::Io { source } => self.collect_std_io_hints(source),

            IoError::Parse { line, details, .. } => {
                self.add(format!("Inspect the file around line {} for malformed records", line));
                let details = details.to_lowercase();
                if details.contains("model") {
                    self.add("Every MODEL record must be closed by ENDMDL before the next MODEL");
                    self.add("A multi-pose file may not contain atoms outside MODEL/ENDMDL blocks");
                } else if details.contains("no atom") || details.contains("no poses") {
                    self.add("The file contains no ATOM/HETATM records");
                    self.add("Check that the right file was passed to -r/--receptor or -i/--input");
                } else if details.contains("coordinate") || details.contains("residue") {
                    self.add("PDBQT atom records use fixed columns; check for shifted fields");
                } else if details.contains("atom type") {
                    self.add("The AutoDock atom type is expected after column 77");
                }
            }

            IoError::UnknownAtomType { code, .. } => {
                self.add(format!("'{}' is not an AutoDock atom type", code));
                self.add("Prepare receptor and ligand with an AutoDock-compatible tool");
            }

            IoError::Csv(_) => {
                self.add("Writing the table failed; check the output path and free disk space");
            }

            IoError::Structure(inner) => self.collect_fingerprint_hints(inner),
        }
    }

    fn collect_fingerprint_hints(&mut self, err: &pose_fingerprint::FingerprintError) {
        use pose_fingerprint::FingerprintError;

        if let FingerprintError::Pair { name, pose, .. } = err {
            self.add(format!("The failing pair belongs to pose {} of '{}'", pose, name));
        }

        match err.root() {
            FingerprintError::CriteriaParse(_) => {
                self.add("The criteria file is not valid TOML or holds a value of the wrong type");
                self.add("Start from resources/default.criteria.toml and edit the values");
            }

            FingerprintError::InvalidCriteria { name, .. } => {
                self.add(format!("Check the [{}] section of the criteria file", name));
                self.add("Distances must be positive; angles must lie within 0 to 180 degrees");
            }

            FingerprintError::DegenerateGeometry(_) => {
                self.add("Two atoms coincide, or a donor/acceptor has no bonded neighbour");
                self.add("Use --skip-degenerate to ignore such pairs and continue");
            }

            FingerprintError::InvalidBond { .. } => {
                self.add("Bonds are inferred from covalent radii; check for overlapping atoms");
            }

            FingerprintError::Pair { .. } => {}
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("Check the path spelling and ensure the file exists");
            }
            ErrorKind::PermissionDenied => {
                self.add("Check file permissions with `ls -la`");
            }
            ErrorKind::InvalidData => {
                self.add("The file is not valid UTF-8 text; is it really a PDBQT file?");
            }
            ErrorKind::BrokenPipe => {
                self.add("The output consumer exited early (e.g. piping to `head`)");
            }
            _ => {
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let text = err
            .chain()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("\n")
            .to_lowercase();

        if text.contains("cannot infer format") {
            self.add("Use --format csv or --format tsv");
        } else if text.contains("no such file") || text.contains("not found") {
            self.add("Check that the file path is correct");
        } else if text.contains("permission denied") {
            self.add("Ensure you have the required access rights");
        }
    }
}
