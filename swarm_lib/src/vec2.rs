use glam::Vec2;

/// Magnitudes at or below this are treated as zero when normalizing, so
/// degenerate vectors come out as `Vec2::ZERO` instead of NaN.
pub const NORMALIZE_EPSILON: f32 = 1e-5;

// nannou 0.18 re-exports glam 0.17, which predates `normalize_or_zero`
// and keeps changing in between decimal versions, hence the pinned
// version and this local extension trait.
pub trait Vec2Ext {
    /// Unit vector in the same direction, or zero when the magnitude is
    /// at or below [`NORMALIZE_EPSILON`].
    fn normalize_safe(self) -> Vec2;
    /// Rescales to length `max` only when the current length exceeds it,
    /// comparing squared magnitudes so the common case pays no sqrt.
    fn limit(self, max: f32) -> Vec2;
    /// Direction of the vector via `atan2(y, x)`, well defined for x = 0.
    fn heading(self) -> f32;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn normalize_safe(self) -> Vec2 {
        let m = self.length();
        if m > NORMALIZE_EPSILON {
            self / m
        } else {
            Vec2::ZERO
        }
    }

    #[inline]
    fn limit(self, max: f32) -> Vec2 {
        let m_sq = self.length_squared();
        if m_sq > max * max {
            self / m_sq.sqrt() * max
        } else {
            self
        }
    }

    #[inline]
    fn heading(self) -> f32 {
        self.y.atan2(self.x)
    }
}
