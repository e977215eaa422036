//! Reduction strategies from a heat row to one vertical hand coordinate

use serde::{Deserialize, Serialize};

use crate::heat::HeatRow;

/// Default running-count threshold for [`TopmostThreshold`]
pub const DEFAULT_TOPMOST_THRESHOLD: u32 = 50;

/// Turns the per-row skin counts of one half into a hand height.
///
/// `None` means no hand was found in that half.
pub trait HandEstimator {
    fn estimate(&self, heat: &HeatRow) -> Option<f32>;

    /// Short name for logs
    fn label(&self) -> &'static str {
        "custom"
    }
}

/// Mean row of every skin pixel in the half
#[derive(Debug, Clone, Copy, Default)]
pub struct Centroid;

impl HandEstimator for Centroid {
    fn estimate(&self, heat: &HeatRow) -> Option<f32> {
        let mut weighted = 0.0f64;
        let mut total = 0u64;
        for (row, &count) in heat.counts().iter().enumerate() {
            weighted += row as f64 * count as f64;
            total += count as u64;
        }
        if total == 0 {
            return None;
        }
        Some((weighted / total as f64) as f32)
    }

    fn label(&self) -> &'static str {
        "centroid"
    }
}

/// First row at which the running skin count passes `threshold`.
///
/// The running count restarts whenever a row has no skin pixels.
#[derive(Debug, Clone, Copy)]
pub struct TopmostThreshold {
    pub threshold: u32,
}

impl Default for TopmostThreshold {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_TOPMOST_THRESHOLD,
        }
    }
}

impl HandEstimator for TopmostThreshold {
    fn estimate(&self, heat: &HeatRow) -> Option<f32> {
        let mut running = 0u64;
        for (row, &count) in heat.counts().iter().enumerate() {
            if count == 0 {
                running = 0;
                continue;
            }
            running += count as u64;
            if running > self.threshold as u64 {
                return Some(row as f32);
            }
        }
        None
    }

    fn label(&self) -> &'static str {
        "topmost_threshold"
    }
}

/// Midpoint of the contiguous non-zero run with the largest summed count.
///
/// Ties keep the earliest run.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestCluster;

impl LargestCluster {
    /// Inclusive row span and sum of the winning run
    pub fn find(heat: &HeatRow) -> Option<(usize, usize, u64)> {
        let mut best: Option<(usize, usize, u64)> = None;
        let mut current_start = 0usize;
        let mut current_sum = 0u64;

        for (row, &count) in heat.counts().iter().enumerate() {
            if count > 0 {
                if current_sum == 0 {
                    current_start = row;
                }
                current_sum += count as u64;
            } else if current_sum > 0 {
                keep_larger(current_start, row - 1, current_sum, &mut best);
                current_sum = 0;
            }
        }

        // Run touching the last row
        if current_sum > 0 {
            keep_larger(current_start, heat.len() - 1, current_sum, &mut best);
        }

        best
    }
}

fn keep_larger(start: usize, end: usize, sum: u64, best: &mut Option<(usize, usize, u64)>) {
    if sum > best.map_or(0, |(_, _, s)| s) {
        *best = Some((start, end, sum));
    }
}

impl HandEstimator for LargestCluster {
    fn estimate(&self, heat: &HeatRow) -> Option<f32> {
        Self::find(heat).map(|(start, end, _)| (start + end) as f32 / 2.0)
    }

    fn label(&self) -> &'static str {
        "largest_cluster"
    }
}

/// Strategy choice carried in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimatorKind {
    Centroid,
    TopmostThreshold {
        threshold: u32,
    },
    #[default]
    LargestCluster,
}

impl HandEstimator for EstimatorKind {
    fn estimate(&self, heat: &HeatRow) -> Option<f32> {
        match *self {
            EstimatorKind::Centroid => Centroid.estimate(heat),
            EstimatorKind::TopmostThreshold { threshold } => {
                TopmostThreshold { threshold }.estimate(heat)
            }
            EstimatorKind::LargestCluster => LargestCluster.estimate(heat),
        }
    }

    fn label(&self) -> &'static str {
        match *self {
            EstimatorKind::Centroid => Centroid.label(),
            EstimatorKind::TopmostThreshold { threshold } => {
                TopmostThreshold { threshold }.label()
            }
            EstimatorKind::LargestCluster => LargestCluster.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heat(counts: &[u32]) -> HeatRow {
        HeatRow::new(counts.to_vec())
    }

    #[test]
    fn test_largest_cluster_prefers_larger_sum() {
        let h = heat(&[0, 3, 5, 0, 0, 2, 2, 2, 0]);
        assert_eq!(LargestCluster::find(&h), Some((1, 2, 8)));
        assert_eq!(LargestCluster.estimate(&h), Some(1.5));
    }

    #[test]
    fn test_largest_cluster_tie_keeps_earliest() {
        let h = heat(&[4, 0, 2, 2]);
        assert_eq!(LargestCluster::find(&h), Some((0, 0, 4)));
        assert_eq!(LargestCluster.estimate(&h), Some(0.0));
    }

    #[test]
    fn test_largest_cluster_closes_run_at_end() {
        let h = heat(&[1, 0, 3, 3, 3]);
        assert_eq!(LargestCluster::find(&h), Some((2, 4, 9)));
        assert_eq!(LargestCluster.estimate(&h), Some(3.0));
    }

    #[test]
    fn test_largest_cluster_empty_is_none() {
        assert_eq!(LargestCluster.estimate(&heat(&[0, 0, 0])), None);
        assert_eq!(LargestCluster.estimate(&heat(&[])), None);
    }

    #[test]
    fn test_centroid_mean_row() {
        // rows 1 and 3 with one pixel each, row 5 with two
        let h = heat(&[0, 1, 0, 1, 0, 2]);
        assert_eq!(Centroid.estimate(&h), Some(3.5));
    }

    #[test]
    fn test_centroid_empty_is_none() {
        assert_eq!(Centroid.estimate(&heat(&[0, 0])), None);
    }

    #[test]
    fn test_topmost_reports_crossing_row() {
        let t = TopmostThreshold { threshold: 5 };
        assert_eq!(t.estimate(&heat(&[0, 2, 3, 1, 9])), Some(3.0));
    }

    #[test]
    fn test_topmost_resets_on_empty_row() {
        let t = TopmostThreshold { threshold: 5 };
        // 4 then reset, then 3 + 3 crosses at row 4
        assert_eq!(t.estimate(&heat(&[4, 0, 0, 3, 3])), Some(4.0));
        assert_eq!(t.estimate(&heat(&[4, 0, 4, 0, 4])), None);
    }

    #[test]
    fn test_topmost_requires_strictly_greater() {
        let t = TopmostThreshold { threshold: 5 };
        assert_eq!(t.estimate(&heat(&[5])), None);
        assert_eq!(t.estimate(&heat(&[6])), Some(0.0));
    }

    #[test]
    fn test_kind_dispatch_matches_strategies() {
        let h = heat(&[0, 3, 5, 0, 0, 2, 2, 2, 0]);
        for kind in [
            EstimatorKind::Centroid,
            EstimatorKind::TopmostThreshold { threshold: 4 },
            EstimatorKind::LargestCluster,
        ] {
            let expected = match kind {
                EstimatorKind::Centroid => Centroid.estimate(&h),
                EstimatorKind::TopmostThreshold { threshold } => {
                    TopmostThreshold { threshold }.estimate(&h)
                }
                EstimatorKind::LargestCluster => LargestCluster.estimate(&h),
            };
            assert_eq!(kind.estimate(&h), expected, "{}", kind.label());
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(EstimatorKind::Centroid.label(), "centroid");
        assert_eq!(
            EstimatorKind::TopmostThreshold { threshold: 9 }.label(),
            "topmost_threshold"
        );
        assert_eq!(EstimatorKind::default().label(), "largest_cluster");
    }

    #[test]
    fn test_kind_from_json() {
        let kind: EstimatorKind =
            serde_json::from_str(r#"{"kind":"topmost_threshold","threshold":50}"#).unwrap();
        assert_eq!(kind, EstimatorKind::TopmostThreshold { threshold: 50 });
        let kind: EstimatorKind = serde_json::from_str(r#"{"kind":"centroid"}"#).unwrap();
        assert_eq!(kind, EstimatorKind::Centroid);
    }
}
