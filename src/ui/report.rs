//! Verdict reporting - text and JSON renderings of the pair table

use crate::session::Session;
use crate::types::Verdict;
use console::style;
use serde::Serialize;

/// Machine-readable verdict table for `--json` output.
#[derive(Debug, Serialize)]
pub struct ReportDocument {
    /// Every pair matched byte for byte.
    pub all_matched: bool,

    /// One entry per pair, in enumeration order.
    pub pairs: Vec<PairReport>,
}

/// One pair entry of the JSON report.
#[derive(Debug, Serialize)]
pub struct PairReport {
    pub a: usize,
    pub b: usize,
    pub a_identity: String,
    pub b_identity: String,
    pub verdict: Verdict,
}

impl ReportDocument {
    /// Snapshot the session's verdict table in enumeration order.
    pub fn from_session(session: &Session, all_matched: bool) -> Self {
        let mut pairs = Vec::with_capacity(session.pair_count());

        for position in 0..session.pair_count() {
            let (pair, verdict) = match (session.pair_at(position), session.verdict_at(position)) {
                (Some(pair), Some(verdict)) => (pair, verdict),
                _ => continue,
            };

            pairs.push(PairReport {
                a: pair.a,
                b: pair.b,
                a_identity: identity_of(session, pair.a),
                b_identity: identity_of(session, pair.b),
                verdict,
            });
        }

        Self { all_matched, pairs }
    }
}

fn identity_of(session: &Session, index: usize) -> String {
    session.identity(index).unwrap_or("?").to_string()
}

/// Print the human-readable verdict report.
///
/// A fully matched run collapses to a single line; otherwise one line per
/// pair in enumeration order, with unmatched pairs hidden when
/// `only_matching` is set.
pub fn print_text_report(session: &Session, all_matched: bool, only_matching: bool) {
    if all_matched {
        println!("{}", style("All inputs match, byte for byte.").green());
        return;
    }

    for position in 0..session.pair_count() {
        let (pair, verdict) = match (session.pair_at(position), session.verdict_at(position)) {
            (Some(pair), Some(verdict)) => (pair, verdict),
            _ => continue,
        };

        let left = identity_of(session, pair.a);
        let right = identity_of(session, pair.b);

        match verdict {
            Verdict::Matched => {
                println!("{} and {} {}", left, right, style("match").green());
            }
            Verdict::NotMatched => {
                if only_matching {
                    continue;
                }
                println!("{} and {} {}", left, right, style("do not match").red());
            }
            Verdict::Unknown => {
                // Unreachable after a completed run; printed anyway so a
                // bug here is visible instead of silent.
                println!("{} and {} {}", left, right, style("are undecided").yellow());
            }
        }
    }
}
