use std::io::Write;

use anyhow::{Context, Result};

use pose_fingerprint::io::write_table;

use crate::cli::TableArgs;
use crate::config::build_fingerprint_config;
use crate::display::{
    Context as DisplayContext, Progress, print_docking_summary, print_interaction_summary,
    print_receptor_info,
};
use crate::io::create_output;

use super::pipeline::{
    TOTAL_STEPS, build_fingerprint_substeps, build_read_substeps, build_write_substeps,
    fingerprint_poses, read_structures, resolve_output,
};

pub fn run_table(args: TableArgs, ctx: DisplayContext) -> Result<()> {
    let output = resolve_output(&args.io)?;
    let config = build_fingerprint_config(&args.criteria)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading structures");
    let (receptor, molecules) = read_structures(&args.io, &mut progress)?;

    let read_substeps = build_read_substeps(&args.io, &receptor, &molecules);
    let read_substeps_ref: Vec<&str> = read_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Reading structures", &read_substeps_ref);

    if ctx.interactive {
        print_receptor_info(&receptor);
        print_docking_summary(&molecules);
    }

    progress.step("Fingerprinting poses");
    let fingerprinter = fingerprint_poses(receptor, &molecules, &config, &mut progress)?;
    let table = fingerprinter.to_table();

    let fp_substeps = build_fingerprint_substeps(&fingerprinter);
    let fp_substeps_ref: Vec<&str> = fp_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Fingerprinting poses", &fp_substeps_ref);

    if ctx.interactive {
        print_interaction_summary(&table);
    }

    progress.step("Writing output");
    let mut writer = create_output(output.path.as_deref())?;
    write_table(&mut writer, &table, output.delimiter())
        .context("Failed to write interaction table")?;
    writer.flush().context("Failed to flush output")?;

    let write_substeps = build_write_substeps(&output, "table");
    let write_substeps_ref: Vec<&str> = write_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Writing output", &write_substeps_ref);

    progress.finish();

    Ok(())
}
