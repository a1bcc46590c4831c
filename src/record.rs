/// One finalized result block from the simulator log.
///
/// Hit ratios are fractions in [0, 1]; access times are taken verbatim from
/// the simulator's report.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub trace: String,
    pub policy: String,
    pub l1_hit_ratio: f64,
    pub l1_aat: f64,
    pub l2_hit_ratio: f64,
    pub l2_aat: f64,
}

/// Group records by trace, preserving the first-seen order of distinct traces
/// and file order within each group.
pub fn group_by_trace(records: &[Record]) -> Vec<(&str, Vec<&Record>)> {
    let mut groups: Vec<(&str, Vec<&Record>)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(trace, _)| *trace == record.trace) {
            Some((_, subset)) => subset.push(record),
            None => groups.push((record.trace.as_str(), vec![record])),
        }
    }
    groups
}

/// Distinct replacement policies in first-seen file order. This is the
/// categorical x-axis domain shared by both charts.
pub fn policy_order(records: &[Record]) -> Vec<&str> {
    let mut policies: Vec<&str> = Vec::new();
    for record in records {
        if !policies.contains(&record.policy.as_str()) {
            policies.push(record.policy.as_str());
        }
    }
    policies
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(trace: &str, policy: &str) -> Record {
        Record {
            trace: trace.to_string(),
            policy: policy.to_string(),
            l1_hit_ratio: 0.9,
            l1_aat: 2.0,
            l2_hit_ratio: 0.5,
            l2_aat: 12.0,
        }
    }

    #[test]
    fn test_group_by_trace_preserves_first_seen_order() {
        let records = vec![
            record("gcc", "LRU"),
            record("mcf", "LRU"),
            record("gcc", "FIFO"),
        ];
        let groups = group_by_trace(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "gcc");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "mcf");
        assert_eq!(groups[1].1.len(), 1);
    }

    #[test]
    fn test_group_by_trace_keeps_file_order_within_group() {
        let records = vec![
            record("gcc", "MIP"),
            record("mcf", "MIP"),
            record("gcc", "LIP"),
            record("gcc", "FIFO"),
        ];
        let groups = group_by_trace(&records);
        let policies: Vec<&str> =
            groups[0].1.iter().map(|r| r.policy.as_str()).collect();
        assert_eq!(policies, vec!["MIP", "LIP", "FIFO"]);
    }

    #[test]
    fn test_policy_order_deduplicates_across_traces() {
        let records = vec![
            record("gcc", "MIP"),
            record("gcc", "FIFO"),
            record("mcf", "MIP"),
            record("mcf", "RANDOM"),
        ];
        assert_eq!(policy_order(&records), vec!["MIP", "FIFO", "RANDOM"]);
    }

    #[test]
    fn test_empty_record_set() {
        let records: Vec<Record> = Vec::new();
        assert!(group_by_trace(&records).is_empty());
        assert!(policy_order(&records).is_empty());
    }
}
