//! Tank gauge — distance-from-top to gallons, percent, and flow rate.
//!
//! The ultrasonic sensor looks down at the water surface, so a *larger*
//! distance means *less* water.  Two calibration distances (brim-full
//! and empty) span the usable volume linearly; readings outside the
//! span clamp to the physical range.
//!
//! Net flow rate is the gallons delta between successive gauge updates
//! over the elapsed time — positive while filling, negative while
//! draining.  The first update has no predecessor and reports 0.

/// One gauged tank state.
#[derive(Debug, Clone, Copy)]
pub struct TankLevel {
    pub distance_from_top_mm: f32,
    pub level_gallons: f32,
    pub level_percent: f32,
    pub flow_gpm: f32,
}

pub struct TankGauge {
    full_distance_mm: f32,
    span_mm: f32,
    capacity_gallons: f32,
    prev: Option<(f32, u32)>, // (gallons, timestamp_ms)
}

impl TankGauge {
    pub fn new(full_distance_mm: f32, empty_distance_mm: f32, capacity_gallons: f32) -> Self {
        // A degenerate calibration (empty at or above full) collapses to
        // a 1 mm span rather than dividing by zero.
        let span_mm = (empty_distance_mm - full_distance_mm).max(1.0);
        Self {
            full_distance_mm,
            span_mm,
            capacity_gallons,
            prev: None,
        }
    }

    /// Fold a new distance reading into the gauge at `now_ms`.
    pub fn update(&mut self, distance_mm: f32, now_ms: u32) -> TankLevel {
        let fraction = (1.0 - (distance_mm - self.full_distance_mm) / self.span_mm).clamp(0.0, 1.0);
        let gallons = fraction * self.capacity_gallons;

        let flow_gpm = match self.prev {
            Some((prev_gallons, prev_ms)) => {
                let elapsed_min = now_ms.wrapping_sub(prev_ms) as f32 / 60_000.0;
                if elapsed_min > 0.0 {
                    (gallons - prev_gallons) / elapsed_min
                } else {
                    0.0
                }
            }
            None => 0.0,
        };
        self.prev = Some((gallons, now_ms));

        TankLevel {
            distance_from_top_mm: distance_mm,
            level_gallons: gallons,
            level_percent: fraction * 100.0,
            flow_gpm,
        }
    }
}
