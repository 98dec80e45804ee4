//! Report aggregator for emitting parallel results in input order
//!
//! Workers finish in any order. Reports are buffered in a min-heap keyed by
//! their command-line index and released once every earlier file has been
//! released.

use crate::executor::MazeReport;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Wrapper for min-heap ordering of MazeReport
struct OrderedReport(MazeReport);

impl Ord for OrderedReport {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (smallest first)
        other.0.index.cmp(&self.0.index)
    }
}

impl PartialOrd for OrderedReport {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedReport {}

impl PartialEq for OrderedReport {
    fn eq(&self, other: &Self) -> bool {
        self.0.index == other.0.index
    }
}

/// Aggregator that buffers reports and emits them in index order
pub struct ReportAggregator {
    /// Index of the next report to release
    next: usize,
    /// Total number of reports expected
    total: usize,
    /// Min-heap of received reports waiting to be output
    pending: BinaryHeap<OrderedReport>,
}

impl ReportAggregator {
    /// Create aggregator expecting reports `0..total`
    pub fn new(total: usize) -> Self {
        Self {
            next: 0,
            total,
            pending: BinaryHeap::new(),
        }
    }

    /// Add a report and return any reports ready for output (in order)
    pub fn add(&mut self, report: MazeReport) -> Vec<MazeReport> {
        self.pending.push(OrderedReport(report));

        let mut ready = Vec::new();
        while self
            .pending
            .peek()
            .is_some_and(|top| top.0.index == self.next)
        {
            if let Some(OrderedReport(report)) = self.pending.pop() {
                self.next += 1;
                ready.push(report);
            }
        }
        ready
    }

    /// Drain remaining reports in order (for final output)
    pub fn drain(&mut self) -> Vec<MazeReport> {
        let mut reports: Vec<_> = self.pending.drain().map(|o| o.0).collect();
        reports.sort_by_key(|r| r.index);
        reports
    }

    /// Check if all expected reports have been released
    pub fn is_complete(&self) -> bool {
        self.next >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_report(index: usize) -> MazeReport {
        MazeReport {
            index,
            path: PathBuf::from(format!("maze{}.txt", index)),
            outcome: Ok(Vec::new()),
        }
    }

    fn indices(reports: &[MazeReport]) -> Vec<usize> {
        reports.iter().map(|r| r.index).collect()
    }

    #[test]
    fn test_in_order_reports() {
        let mut agg = ReportAggregator::new(2);

        assert_eq!(indices(&agg.add(make_report(0))), vec![0]);
        assert!(!agg.is_complete());
        assert_eq!(indices(&agg.add(make_report(1))), vec![1]);
        assert!(agg.is_complete());
    }

    #[test]
    fn test_out_of_order_reports() {
        let mut agg = ReportAggregator::new(3);

        assert!(agg.add(make_report(2)).is_empty());
        assert!(agg.add(make_report(1)).is_empty());

        let ready = agg.add(make_report(0));
        assert_eq!(indices(&ready), vec![0, 1, 2]);
        assert_eq!(ready[2].path, PathBuf::from("maze2.txt"));
        assert!(agg.is_complete());
    }

    #[test]
    fn test_drain_remaining() {
        let mut agg = ReportAggregator::new(3);

        agg.add(make_report(2));
        agg.add(make_report(1));

        assert_eq!(indices(&agg.drain()), vec![1, 2]);
        assert!(!agg.is_complete());
    }
}
