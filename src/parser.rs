//! A line-oriented parser for the simulator results log

use std::path::Path;

use crate::error::{ParseError, VizError, VizResult};
use crate::record::Record;

const TRACE_PREFIX: &str = "Testing with trace:";
const L2_CONFIG_PREFIX: &str = "L2 (C,B,S):";
const L1_HIT_RATIO_PREFIX: &str = "L1 hit ratio:";
const L1_AAT_PREFIX: &str = "L1 average access time (AAT):";
const L2_HIT_RATIO_PREFIX: &str = "L2 read hit ratio:";
const L2_AAT_PREFIX: &str = "L2 average access time (AAT):";

const POLICY_MARKER: &str = "Replace policy: ";

/// Typed classification of a single log line.
#[derive(Debug, PartialEq)]
pub enum LogLine {
    Trace(String),
    Policy(String),
    L1HitRatio(f64),
    L1Aat(f64),
    L2HitRatio(f64),
    L2Aat(f64),
    Other,
}

/// Classify one log line. `line_no` is 1-based and only used in errors.
pub fn classify_line(line: &str, line_no: usize) -> Result<LogLine, ParseError> {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix(TRACE_PREFIX) {
        Ok(LogLine::Trace(rest.trim().to_string()))
    } else if line.starts_with(L2_CONFIG_PREFIX) {
        Ok(LogLine::Policy(extract_policy(line, line_no)?))
    } else if let Some(rest) = line.strip_prefix(L1_HIT_RATIO_PREFIX) {
        Ok(LogLine::L1HitRatio(parse_metric(rest, "L1 hit ratio", line_no)?))
    } else if let Some(rest) = line.strip_prefix(L1_AAT_PREFIX) {
        Ok(LogLine::L1Aat(parse_metric(rest, "L1 AAT", line_no)?))
    } else if let Some(rest) = line.strip_prefix(L2_HIT_RATIO_PREFIX) {
        Ok(LogLine::L2HitRatio(parse_metric(
            rest,
            "L2 read hit ratio",
            line_no,
        )?))
    } else if let Some(rest) = line.strip_prefix(L2_AAT_PREFIX) {
        Ok(LogLine::L2Aat(parse_metric(rest, "L2 AAT", line_no)?))
    } else {
        Ok(LogLine::Other)
    }
}

/// Pull the policy name out of an `L2 (C,B,S):` configuration line.
/// The name is the text between `Replace policy: ` and the next period.
fn extract_policy(line: &str, line_no: usize) -> Result<String, ParseError> {
    let start = line.find(POLICY_MARKER).ok_or_else(|| {
        ParseError::MalformedPolicy { line_no, text: line.to_string() }
    })?;
    let rest = &line[start + POLICY_MARKER.len()..];
    let name = match rest.find('.') {
        Some(end) => &rest[..end],
        None => rest,
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::MalformedPolicy {
            line_no,
            text: line.to_string(),
        });
    }
    Ok(name.to_string())
}

fn parse_metric(
    text: &str,
    field: &'static str,
    line_no: usize,
) -> Result<f64, ParseError> {
    let text = text.trim();
    text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        line_no,
        field,
        text: text.to_string(),
    })
}

/// Accumulates one block's worth of fields. Trace and policy stick across
/// blocks until overwritten; the metric fields reset at every block boundary
/// and after every emission attempt, so an abandoned block can never leak
/// stale metrics into a later record.
#[derive(Default)]
struct BlockAccumulator {
    trace: Option<String>,
    policy: Option<String>,
    l1_hit_ratio: Option<f64>,
    l1_aat: Option<f64>,
    l2_hit_ratio: Option<f64>,
}

impl BlockAccumulator {
    fn reset_metrics(&mut self) {
        self.l1_hit_ratio = None;
        self.l1_aat = None;
        self.l2_hit_ratio = None;
    }

    /// Close the block on its L2 AAT line. Returns the names of the missing
    /// fields if the block is incomplete.
    fn finalize(&mut self, l2_aat: f64) -> Result<Record, Vec<&'static str>> {
        let result = match (
            &self.trace,
            &self.policy,
            self.l1_hit_ratio,
            self.l1_aat,
            self.l2_hit_ratio,
        ) {
            (
                Some(trace),
                Some(policy),
                Some(l1_hit_ratio),
                Some(l1_aat),
                Some(l2_hit_ratio),
            ) => Ok(Record {
                trace: trace.clone(),
                policy: policy.clone(),
                l1_hit_ratio,
                l1_aat,
                l2_hit_ratio,
                l2_aat,
            }),
            _ => {
                let mut missing = Vec::new();
                if self.trace.is_none() {
                    missing.push("trace");
                }
                if self.policy.is_none() {
                    missing.push("replacement policy");
                }
                if self.l1_hit_ratio.is_none() {
                    missing.push("L1 hit ratio");
                }
                if self.l1_aat.is_none() {
                    missing.push("L1 AAT");
                }
                if self.l2_hit_ratio.is_none() {
                    missing.push("L2 read hit ratio");
                }
                Err(missing)
            }
        };
        self.reset_metrics();
        result
    }
}

/// Parse the full log text into records, in file order.
///
/// Unrecognized lines are skipped. An incomplete block is dropped with a
/// warning on stderr; a malformed numeric field or policy clause aborts with
/// a line-numbered error.
pub fn parse_log(content: &str) -> VizResult<Vec<Record>> {
    let mut records = Vec::new();
    let mut block = BlockAccumulator::default();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        match classify_line(line, line_no)? {
            LogLine::Trace(trace) => {
                block.reset_metrics();
                block.trace = Some(trace);
            }
            LogLine::Policy(policy) => {
                block.reset_metrics();
                block.policy = Some(policy);
            }
            LogLine::L1HitRatio(value) => block.l1_hit_ratio = Some(value),
            LogLine::L1Aat(value) => block.l1_aat = Some(value),
            LogLine::L2HitRatio(value) => block.l2_hit_ratio = Some(value),
            LogLine::L2Aat(value) => match block.finalize(value) {
                Ok(record) => records.push(record),
                Err(missing) => eprintln!(
                    "Warning: dropping incomplete block ending at line {}: missing {}",
                    line_no,
                    missing.join(", ")
                ),
            },
            LogLine::Other => {}
        }
    }

    Ok(records)
}

/// Read a results log from disk and parse it.
pub fn parse_log_file<P: AsRef<Path>>(path: P) -> VizResult<Vec<Record>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| VizError::LogReadError(path.to_path_buf(), e))?;
    parse_log(&content)
}
