//! Distance-driven level-of-detail selection.
//!
//! Selection is a pure function of the current frame's camera distance.
//! There is no hysteresis: a camera parked exactly on a threshold may
//! alternate between two levels from one frame to the next.

/// One of the three mesh variants in a LOD family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LodLevel {
    /// Full-resolution mesh, used close to the origin.
    High = 0,
    /// Intermediate mesh.
    Medium = 1,
    /// Coarsest mesh, used far away.
    Low = 2,
}

impl LodLevel {
    /// All levels in index order.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Index into a LOD set (0 = high, 2 = low).
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index).
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Distances at which the selector steps down to a coarser mesh.
///
/// A distance equal to a threshold belongs to the coarser side, so every
/// distance maps to exactly one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LodThresholds {
    boundaries: [f32; 2],
}

impl Default for LodThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl LodThresholds {
    /// 1.5 units to medium, 3.0 units to low.
    pub const DEFAULT: Self = Self {
        boundaries: [1.5, 3.0],
    };

    /// Build thresholds from the medium and low switch distances.
    ///
    /// Returns `None` unless both are finite, non-negative and
    /// `medium <= low`.
    #[must_use]
    pub fn new(medium: f32, low: f32) -> Option<Self> {
        let valid = medium.is_finite()
            && low.is_finite()
            && medium >= 0.0
            && medium <= low;
        valid.then_some(Self {
            boundaries: [medium, low],
        })
    }

    /// Distance at which the medium mesh takes over.
    #[must_use]
    pub fn medium(&self) -> f32 {
        self.boundaries[0]
    }

    /// Distance at which the low mesh takes over.
    #[must_use]
    pub fn low(&self) -> f32 {
        self.boundaries[1]
    }

    /// Map a camera distance to a LOD level.
    ///
    /// NaN selects [`LodLevel::Low`], the cheapest mesh.
    #[must_use]
    pub fn select(&self, distance: f32) -> LodLevel {
        if distance.is_nan() {
            return LodLevel::Low;
        }
        let index = self.boundaries.partition_point(|&t| t <= distance);
        LodLevel::from_index(index).unwrap_or(LodLevel::Low)
    }
}

/// Select a level with the default 1.5 / 3.0 thresholds.
#[must_use]
pub fn select_lod(distance: f32) -> LodLevel {
    LodThresholds::DEFAULT.select(distance)
}
