//! Progress reporting for batch render jobs.

/// A single progress update emitted after each attempted page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Number of pages attempted so far (rendered or skipped).
    pub current: u32,
    /// Total number of pages in the job.
    pub total: u32,
    /// 1-based number of the page just attempted.
    pub page: u32,
}

impl Progress {
    /// Fraction complete in `[0, 1]`. Exactly 1.0 once every page in the job
    /// has been attempted.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.current as f32 / self.total as f32
    }

    /// Percentage complete in `[0, 100]`, rounded down.
    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0) as u32
    }
}

/// Last-value projection of renderer progress events.
///
/// Holds no state beyond the most recent update; reset at the start of each
/// new export job.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProgressTracker {
    last: Option<Progress>,
}

impl ProgressTracker {
    /// Create a tracker at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the tracker for a new job.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Record a progress update.
    pub fn update(&mut self, progress: Progress) {
        self.last = Some(progress);
    }

    /// Pages attempted so far (0 before the first update).
    pub fn current(&self) -> u32 {
        self.last.map(|p| p.current).unwrap_or(0)
    }

    /// Total pages in the job (0 before the first update).
    pub fn total(&self) -> u32 {
        self.last.map(|p| p.total).unwrap_or(0)
    }

    /// Fraction complete in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        self.last.map(|p| p.fraction()).unwrap_or(0.0)
    }

    /// Whether every page in the job has been attempted.
    pub fn is_complete(&self) -> bool {
        matches!(self.last, Some(p) if p.total > 0 && p.current == p.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_and_percent() {
        let p = Progress {
            current: 1,
            total: 4,
            page: 3,
        };
        assert_eq!(p.fraction(), 0.25);
        assert_eq!(p.percent(), 25);

        let done = Progress {
            current: 4,
            total: 4,
            page: 9,
        };
        assert_eq!(done.fraction(), 1.0);
        assert_eq!(done.percent(), 100);
    }

    #[test]
    fn test_zero_total() {
        let p = Progress {
            current: 0,
            total: 0,
            page: 0,
        };
        assert_eq!(p.fraction(), 0.0);
    }

    #[test]
    fn test_tracker_projects_last_value() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.fraction(), 0.0);
        assert!(!tracker.is_complete());

        tracker.update(Progress {
            current: 1,
            total: 2,
            page: 4,
        });
        assert_eq!(tracker.current(), 1);
        assert_eq!(tracker.total(), 2);
        assert!(!tracker.is_complete());

        tracker.update(Progress {
            current: 2,
            total: 2,
            page: 7,
        });
        assert_eq!(tracker.fraction(), 1.0);
        assert!(tracker.is_complete());

        tracker.reset();
        assert_eq!(tracker.current(), 0);
        assert!(!tracker.is_complete());
    }
}
