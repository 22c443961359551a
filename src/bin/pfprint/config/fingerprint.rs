use std::fs;

use anyhow::{Context, Result};

use pose_fingerprint::io::Format;
use pose_fingerprint::{FingerprintConfig, PairErrorPolicy};

use crate::cli::{CriteriaOptions, OutputFormat};

pub fn build_fingerprint_config(opts: &CriteriaOptions) -> Result<FingerprintConfig> {
    let criteria = opts
        .criteria
        .as_ref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read criteria file: {}", path.display()))
        })
        .transpose()?;

    Ok(FingerprintConfig {
        criteria,
        on_pair_error: if opts.skip_degenerate {
            PairErrorPolicy::Skip
        } else {
            PairErrorPolicy::Abort
        },
    })
}

pub fn output_format(format: OutputFormat) -> Format {
    match format {
        OutputFormat::Csv => Format::Csv,
        OutputFormat::Tsv => Format::Tsv,
    }
}
