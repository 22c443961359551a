use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Step reporter on stderr. A silent instance tracks nothing and prints nothing.
pub struct Progress {
    spinner: Option<Spinner>,
}

struct Spinner {
    bar: Option<ProgressBar>,
    started: Instant,
    step_started: Instant,
    step: u8,
    total_steps: u8,
    label: String,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        let spinner = interactive.then(|| {
            let now = Instant::now();
            Spinner {
                bar: None,
                started: now,
                step_started: now,
                step: 0,
                total_steps,
                label: String::new(),
            }
        });
        Self { spinner }
    }

    pub fn step(&mut self, description: &str) {
        let Some(s) = self.spinner.as_mut() else {
            return;
        };
        s.clear();

        s.step += 1;
        s.step_started = Instant::now();
        s.label = format!("[{}/{}] {}", s.step, s.total_steps, description);

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .expect("invalid template")
                .tick_chars(TICK_CHARS),
        );
        bar.enable_steady_tick(Duration::from_millis(80));
        bar.set_message(format!("{}...", s.label));
        s.bar = Some(bar);
    }

    /// Updates the running step with the item currently being processed.
    pub fn detail(&mut self, item: &str) {
        if let Some(s) = self.spinner.as_ref() {
            if let Some(bar) = &s.bar {
                bar.set_message(format!("{}... {}", s.label, item));
            }
        }
    }

    pub fn complete_step(&mut self, description: &str, substeps: &[&str]) {
        let Some(s) = self.spinner.as_mut() else {
            return;
        };
        s.clear();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<44} {:>5.1}s",
            description,
            s.step_started.elapsed().as_secs_f64()
        );
        for substep in substeps {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {}", substep);
        }
    }

    pub fn finish(mut self) {
        if let Some(mut s) = self.spinner.take() {
            s.clear();
            print_footer(s.started.elapsed());
        }
    }
}

impl Spinner {
    fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

fn print_footer(elapsed: Duration) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(
        stderr,
        "  \x1b[2m╺━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╸\x1b[0m"
    );
    let _ = writeln!(stderr);
    let _ = writeln!(
        stderr,
        "  \x1b[32m✓\x1b[0m Fingerprint complete {:>29}",
        format!("Total: {:.2}s", elapsed.as_secs_f64())
    );
    let _ = writeln!(stderr);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_progress_ignores_all_calls() {
        let mut progress = Progress::new(false, 3);
        progress.step("Reading structures");
        progress.detail("ligand.pdbqt");
        progress.complete_step("Read structures", &["2 files"]);
        assert!(progress.spinner.is_none());
        progress.finish();
    }
}
