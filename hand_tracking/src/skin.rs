//! Per-pixel skin classification
//!
//! A fixed RGB rule in the spirit of the classic "explicit skin cluster"
//! heuristics. It is coarse: warm lighting, wood and skin-toned walls all pass.

use serde::{Deserialize, Serialize};

use crate::frame::{Frame, CHANNELS};

/// Thresholds for the RGB skin rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinThresholds {
    pub min_red: u8,
    pub min_green: u8,
    pub min_blue: u8,
    /// Required gap between red and the smaller of green/blue
    pub min_spread: u8,
    /// Required absolute gap between red and green
    pub min_red_green_gap: u8,
}

impl Default for SkinThresholds {
    fn default() -> Self {
        Self {
            min_red: 95,
            min_green: 40,
            min_blue: 20,
            min_spread: 15,
            min_red_green_gap: 15,
        }
    }
}

impl SkinThresholds {
    /// `R>95 ∧ G>40 ∧ B>20 ∧ R>G ∧ R>B ∧ R−min(G,B)>15 ∧ |R−G|>15` with the defaults
    pub fn is_skin(&self, r: u8, g: u8, b: u8) -> bool {
        let (ri, gi, bi) = (r as i16, g as i16, b as i16);
        r > self.min_red
            && g > self.min_green
            && b > self.min_blue
            && r > g
            && r > b
            && ri - gi.min(bi) > self.min_spread as i16
            && (ri - gi).abs() > self.min_red_green_gap as i16
    }
}

/// Skin / not-skin flag for every pixel of one frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkinMask {
    pub width: u32,
    pub height: u32,
    bits: Vec<bool>,
}

impl SkinMask {
    /// Mask with no pixels (result for malformed frames)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_skin(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[y as usize * self.width as usize + x as usize]
    }

    pub fn skin_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Row slice of flags, empty for rows outside the mask
    pub fn row(&self, y: u32) -> &[bool] {
        if y >= self.height {
            return &[];
        }
        let w = self.width as usize;
        let start = y as usize * w;
        &self.bits[start..start + w]
    }
}

/// Classify every pixel of `frame`; malformed frames give an empty mask
pub fn classify(frame: &Frame, thresholds: &SkinThresholds) -> SkinMask {
    if !frame.is_well_formed() {
        return SkinMask::empty();
    }

    let bits = frame
        .rgba
        .chunks_exact(CHANNELS)
        .map(|px| thresholds.is_skin(px[0], px[1], px[2]))
        .collect();

    SkinMask {
        width: frame.width,
        height: frame.height,
        bits,
    }
}
