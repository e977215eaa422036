use crate::skin::SkinMask;

/// Skin pixel count per frame row, restricted to one horizontal half
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeatRow(pub Vec<u32>);

impl HeatRow {
    pub fn new(counts: Vec<u32>) -> Self {
        Self(counts)
    }

    pub fn counts(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| c as u64).sum()
    }
}

/// Heat rows for the two paddles, already routed through the mirror flag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeatRows {
    pub left: HeatRow,
    pub right: HeatRow,
}

impl HeatRows {
    /// Count skin pixels per row for each half of the mask.
    ///
    /// A column is in the camera's left half when `2 * x < width`. Without
    /// `mirror` the camera-left half drives the left paddle; with `mirror` the
    /// halves are swapped, compensating for a laterally flipped feed.
    pub fn from_mask(mask: &SkinMask, mirror: bool) -> Self {
        let rows = mask.height as usize;
        let mut camera_left = vec![0u32; rows];
        let mut camera_right = vec![0u32; rows];

        for y in 0..mask.height {
            for (x, &skin) in mask.row(y).iter().enumerate() {
                if !skin {
                    continue;
                }
                if 2 * x < mask.width as usize {
                    camera_left[y as usize] += 1;
                } else {
                    camera_right[y as usize] += 1;
                }
            }
        }

        let (left, right) = if mirror {
            (camera_right, camera_left)
        } else {
            (camera_left, camera_right)
        };

        Self {
            left: HeatRow(left),
            right: HeatRow(right),
        }
    }
}
