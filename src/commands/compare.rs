//! Main compare command

use crate::session::{ProgressCallback, Session};
use crate::source::Source;
use crate::types::CmpyError;
use crate::ui::{print_text_report, ProgressReporter, ReportDocument};
use crate::Config;

/// Result of a completed comparison run.
///
/// Process-level failures (open errors, bad configuration) never reach
/// this type; they travel as `Err(CmpyError)` so the caller can keep
/// "could not compare" and "compared, found differences" apart.
#[derive(Debug, Clone, Copy)]
pub struct CompareOutcome {
    /// Every pair matched byte for byte.
    pub all_matched: bool,
}

/// Run the compare operation
///
/// Opens the configured inputs, drives the comparison session to its
/// fixed point, and renders the verdict report (text or JSON).
pub fn run(config: Config) -> Result<CompareOutcome, CmpyError> {
    let sources = Source::open_all(&config.inputs)?;
    let mut session = Session::build(sources, config.buffer_size)?;

    let all_matched = if config.progress_enabled() {
        let reporter = ProgressReporter::new();
        let callback: ProgressCallback = {
            let progress = reporter.clone();
            Box::new(move |rounds, bytes| progress.update(rounds, bytes))
        };

        let all_matched = session.run_with_progress(Some(&callback))?;
        reporter.finish();
        all_matched
    } else {
        session.run()?
    };

    if config.json {
        let document = ReportDocument::from_session(&session, all_matched);
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print_text_report(&session, all_matched, config.only_matching);
    }

    Ok(CompareOutcome { all_matched })
}
