//! Threshold alarm on the water height at one cell.

use crate::grid::GridState;
use crate::types::CellIndex;

/// Watches the water height at one cell against a reference level.
///
/// Every observation compares `|h - reference|` with the threshold. The
/// monitor raises its alarm the first time the deviation reaches the
/// threshold and asks the run to stop once an alarm was raised and the
/// deviation has dropped back below it. The largest deviation seen and
/// the time it occurred are kept for the final report.
///
/// # Example
///
/// ```
/// use swe_tsunami::analysis::WarningMonitor;
/// use swe_tsunami::types::CellIndex;
///
/// let mut monitor = WarningMonitor::new(CellIndex::new(3, 4), 0.5).with_reference(10.0);
/// assert!(!monitor.observe(10.25, 1.0));
/// assert!(!monitor.observe(10.75, 2.0));
/// assert!(monitor.is_alarmed());
/// assert!(monitor.observe(10.125, 3.0));
/// assert_eq!(monitor.peak(), Some((0.75, 2.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WarningMonitor {
    cell: CellIndex,
    threshold: f64,
    reference: f64,
    alarmed: bool,
    peak: Option<(f64, f64)>,
}

impl WarningMonitor {
    /// Monitor `cell` with reference level 0 until calibrated.
    ///
    /// # Panics
    ///
    /// Panics if `threshold` is not positive.
    pub fn new(cell: CellIndex, threshold: f64) -> Self {
        assert!(threshold > 0.0, "warning threshold must be positive, got {threshold}");
        Self {
            cell,
            threshold,
            reference: 0.0,
            alarmed: false,
            peak: None,
        }
    }

    pub fn with_reference(mut self, level: f64) -> Self {
        self.reference = level;
        self
    }

    /// Take the reference level from the current height at the cell.
    pub fn calibrate(&mut self, state: &GridState) {
        self.reference = state.h[(self.cell.x, self.cell.y)];
        tracing::debug!(cell = %self.cell, reference = self.reference, "calibrated warning monitor");
    }

    /// Move the monitored cell, e.g. after the grid was rotated.
    pub fn relocate(&mut self, cell: CellIndex) {
        self.cell = cell;
    }

    pub fn cell(&self) -> CellIndex {
        self.cell
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn reference(&self) -> f64 {
        self.reference
    }

    pub fn is_alarmed(&self) -> bool {
        self.alarmed
    }

    /// Largest deviation so far and the time it occurred.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.peak
    }

    /// Record the height at `time`. Returns `true` when the run should stop.
    pub fn observe(&mut self, height: f64, time: f64) -> bool {
        let deviation = (height - self.reference).abs();
        if self.peak.is_none_or(|(max, _)| deviation > max) {
            self.peak = Some((deviation, time));
        }

        if deviation >= self.threshold {
            if !self.alarmed {
                tracing::warn!(
                    cell = %self.cell,
                    time,
                    deviation,
                    threshold = self.threshold,
                    "water level exceeds warning threshold"
                );
            }
            self.alarmed = true;
            return false;
        }

        if self.alarmed {
            let (max, at) = self.peak.unwrap_or((deviation, time));
            tracing::info!(
                cell = %self.cell,
                time,
                max_deviation = max,
                max_deviation_time = at,
                "water level back below warning threshold"
            );
            return true;
        }
        false
    }

    /// Record the height of the monitored cell in `state`.
    pub fn observe_state(&mut self, state: &GridState, time: f64) -> bool {
        self.observe(state.h[(self.cell.x, self.cell.y)], time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::RadialDamBreakScenario;
    use crate::types::Resolution2D;

    #[test]
    fn test_no_alarm_below_threshold() {
        let mut monitor = WarningMonitor::new(CellIndex::new(1, 1), 2.0).with_reference(5.0);
        for (t, h) in [4.5, 5.25, 5.75, 3.5].into_iter().enumerate() {
            assert!(!monitor.observe(h, t as f64));
        }
        assert!(!monitor.is_alarmed());
        assert_eq!(monitor.peak(), Some((1.5, 3.0)));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut monitor = WarningMonitor::new(CellIndex::new(1, 1), 1.0).with_reference(5.0);
        assert!(!monitor.observe(4.0, 0.0));
        assert!(monitor.is_alarmed());
    }

    #[test]
    fn test_stop_requested_after_recovery() {
        let mut monitor = WarningMonitor::new(CellIndex::new(1, 1), 0.5).with_reference(0.0);
        assert!(!monitor.observe(-0.8, 1.0));
        assert!(!monitor.observe(0.6, 2.0));
        assert!(monitor.observe(0.1, 3.0));
        assert_eq!(monitor.peak(), Some((0.8, 1.0)));
    }

    #[test]
    fn test_calibrate_from_state() {
        let state =
            GridState::from_scenario(Resolution2D::new(10, 10), &RadialDamBreakScenario::default());
        let mut monitor = WarningMonitor::new(CellIndex::new(5, 5), 1.0);
        monitor.calibrate(&state);
        assert_eq!(monitor.reference(), 15.0);
        assert!(!monitor.observe_state(&state, 0.0));
        assert_eq!(monitor.peak(), Some((0.0, 0.0)));
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_rejects_zero_threshold() {
        WarningMonitor::new(CellIndex::new(1, 1), 0.0);
    }
}
