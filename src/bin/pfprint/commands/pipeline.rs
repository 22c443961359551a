use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::warn;

use pose_fingerprint::io::{Format, read_docked, read_receptor};
use pose_fingerprint::{DockedMolecule, FingerprintConfig, Fingerprinter, Structure};

use crate::cli::IoOptions;
use crate::config::output_format;
use crate::display::Progress;
use crate::io::{OutputSpec, infer_input_format, infer_output_format, open_input};
use crate::util::path::{display_name, result_name};

/// Steps shared by every command: read, fingerprint, write.
pub const TOTAL_STEPS: u8 = 3;

const MAX_LISTED_FILES: usize = 5;

pub fn resolve_output(io: &IoOptions) -> Result<OutputSpec> {
    let format = match (io.format, io.output.as_deref()) {
        (Some(f), _) => output_format(f),
        (None, Some(path)) => match infer_output_format(path) {
            Some(f) => f,
            None => bail!(
                "Cannot infer format from '{}'. Use --format to specify.",
                path.display()
            ),
        },
        (None, None) => Format::Csv,
    };

    Ok(OutputSpec {
        path: io.output.clone(),
        format,
    })
}

pub fn read_structures(
    io: &IoOptions,
    progress: &mut Progress,
) -> Result<(Structure, Vec<DockedMolecule>)> {
    progress.detail(&display_name(Some(&io.receptor)));
    let receptor = read_receptor(open_input(&io.receptor)?)
        .with_context(|| format!("Failed to read receptor: {}", io.receptor.display()))?;

    let mut seen = HashSet::new();
    let mut molecules = Vec::with_capacity(io.input.len());
    for path in &io.input {
        progress.detail(&display_name(Some(path)));
        let molecule = read_result(path)?;
        if !seen.insert(molecule.name().to_string()) {
            warn!(
                "more than one docking result is named '{}'; their rows share that name",
                molecule.name()
            );
        }
        molecules.push(molecule);
    }

    Ok((receptor, molecules))
}

fn read_result(path: &Path) -> Result<DockedMolecule> {
    if infer_input_format(path) != Some(Format::Pdbqt) {
        warn!("'{}' has no .pdbqt extension; reading it as PDBQT", path.display());
    }
    read_docked(open_input(path)?, &result_name(path))
        .with_context(|| format!("Failed to read docking result: {}", path.display()))
}

pub fn fingerprint_poses(
    receptor: Structure,
    molecules: &[DockedMolecule],
    config: &FingerprintConfig,
    progress: &mut Progress,
) -> Result<Fingerprinter<Structure>> {
    let mut fingerprinter =
        Fingerprinter::new(receptor, config).context("Invalid interaction criteria")?;

    for (i, molecule) in molecules.iter().enumerate() {
        progress.detail(&format!("{} ({}/{})", molecule.name(), i + 1, molecules.len()));
        fingerprinter
            .run([molecule])
            .with_context(|| format!("Failed to fingerprint '{}'", molecule.name()))?;
    }

    if fingerprinter.skipped_pairs() > 0 {
        warn!(
            "{} atom pair(s) with degenerate geometry were skipped",
            fingerprinter.skipped_pairs()
        );
    }

    Ok(fingerprinter)
}

pub fn build_read_substeps(
    io: &IoOptions,
    receptor: &Structure,
    molecules: &[DockedMolecule],
) -> Vec<String> {
    let mut substeps = vec![format!(
        "Receptor {} ({} atoms)",
        display_name(Some(&io.receptor)),
        receptor.atom_count()
    )];

    for (path, molecule) in io.input.iter().zip(molecules).take(MAX_LISTED_FILES) {
        substeps.push(format!(
            "Docking result {} ({} poses)",
            display_name(Some(path)),
            molecule.pose_count()
        ));
    }
    if molecules.len() > MAX_LISTED_FILES {
        substeps.push(format!("... and {} more", molecules.len() - MAX_LISTED_FILES));
    }

    substeps
}

pub fn build_fingerprint_substeps(fingerprinter: &Fingerprinter<Structure>) -> Vec<String> {
    let accumulator = fingerprinter.accumulator();
    let mut substeps = vec![
        format!(
            "Search radius {:.2} Å",
            fingerprinter.criteria().search_radius()
        ),
        format!("Classify {} poses", accumulator.pose_count()),
        format!("Collect {} distinct interactions", accumulator.vocabulary().len()),
    ];
    if fingerprinter.skipped_pairs() > 0 {
        substeps.push(format!("Skip {} degenerate pairs", fingerprinter.skipped_pairs()));
    }
    substeps
}

pub fn build_write_substeps(output: &OutputSpec, what: &str) -> Vec<String> {
    vec![format!(
        "Write {} {} → {}",
        output.format,
        what,
        display_name(output.path.as_deref())
    )]
}
