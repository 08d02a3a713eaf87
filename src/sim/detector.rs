//! The detector: a rotating wedge of the arena that widens over the match
//!
//! Angles are kept in degrees for the kinematics and exposed in radians for
//! collision and rendering. The wedge's straight sides run from the arena
//! center to the boundary at `start_angle` and `end_angle`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Segment;
use super::state::Arena;
use crate::{deg_to_rad, polar_to_cartesian};

/// One band of the difficulty schedule, active while `progress < until`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseBand {
    /// Exclusive upper progress bound
    pub until: f32,
    /// Degrees added to the center angle per tick
    pub angular_velocity: f32,
    /// Player speed cap while in this band (`None` leaves it unchanged)
    #[serde(default)]
    pub speed_cap: Option<f32>,
}

/// Ordered list of bands; the first whose bound exceeds progress wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSchedule {
    pub bands: Vec<PhaseBand>,
}

impl Default for PhaseSchedule {
    fn default() -> Self {
        Self {
            bands: vec![
                PhaseBand {
                    until: 0.33,
                    angular_velocity: 1.0,
                    speed_cap: None,
                },
                PhaseBand {
                    until: 0.66,
                    angular_velocity: -1.2,
                    speed_cap: Some(2.2),
                },
                PhaseBand {
                    until: 1.0,
                    angular_velocity: 1.4,
                    speed_cap: Some(2.4),
                },
            ],
        }
    }
}

impl PhaseSchedule {
    /// Band index and band active at `progress`, if any
    pub fn band_at(&self, progress: f32) -> Option<(usize, &PhaseBand)> {
        self.bands
            .iter()
            .enumerate()
            .find(|(_, band)| progress < band.until)
    }
}

/// What one detector step asks of the rest of the tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorStep {
    pub band: Option<usize>,
    pub speed_cap: Option<f32>,
}

/// The sweeping arc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detector {
    /// Center of the wedge (degrees, unbounded)
    pub center_angle: f32,
    /// Angular width of the wedge (degrees)
    pub arc_span: f32,
    start_angle: f32,
    end_angle: f32,
    initial_angle: f32,
    base_arc: f32,
    arc_growth: f32,
    schedule: PhaseSchedule,
}

impl Detector {
    pub fn new(initial_angle: f32, base_arc: f32, arc_growth: f32, schedule: PhaseSchedule) -> Self {
        let mut detector = Self {
            center_angle: initial_angle,
            arc_span: base_arc,
            start_angle: 0.0,
            end_angle: 0.0,
            initial_angle,
            base_arc,
            arc_growth,
            schedule,
        };
        detector.derive_angles();
        detector
    }

    /// Back to the starting angle and base width
    pub fn reset(&mut self) {
        self.center_angle = self.initial_angle;
        self.arc_span = self.base_arc;
        self.derive_angles();
    }

    /// Start of the wedge (radians)
    #[inline]
    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    /// End of the wedge (radians)
    #[inline]
    pub fn end_angle(&self) -> f32 {
        self.end_angle
    }

    pub fn schedule(&self) -> &PhaseSchedule {
        &self.schedule
    }

    /// Recompute start/end from the center angle and span
    fn derive_angles(&mut self) {
        let half = self.arc_span / 2.0;
        self.start_angle = deg_to_rad(self.center_angle - half);
        self.end_angle = deg_to_rad(self.center_angle + half);
    }

    /// Wedge width at a given progress (degrees)
    #[inline]
    pub fn arc_span_at(&self, progress: f32) -> f32 {
        self.base_arc + self.arc_growth * progress
    }

    /// Advance one tick.
    ///
    /// The edges are derived from the previous tick's angle and span before
    /// either moves, so collision always sees the geometry one tick behind
    /// the values stored here afterwards.
    pub fn advance(&mut self, progress: f32) -> DetectorStep {
        self.derive_angles();
        self.arc_span = self.arc_span_at(progress);

        match self.schedule.band_at(progress) {
            Some((index, band)) => {
                self.center_angle += band.angular_velocity;
                DetectorStep {
                    band: Some(index),
                    speed_cap: band.speed_cap,
                }
            }
            None => DetectorStep {
                band: None,
                speed_cap: None,
            },
        }
    }

    /// The two straight sides of the wedge: center to boundary at start and end
    pub fn edges(&self, arena: &Arena) -> [Segment; 2] {
        [
            Segment::new(arena.center, self.boundary_point(arena, self.start_angle)),
            Segment::new(arena.center, self.boundary_point(arena, self.end_angle)),
        ]
    }

    fn boundary_point(&self, arena: &Arena, theta: f32) -> Vec2 {
        polar_to_cartesian(arena.center, arena.radius, theta)
    }
}

impl Default for Detector {
    fn default() -> Self {
        use crate::consts::*;
        Self::new(
            DETECTOR_START_ANGLE,
            DETECTOR_BASE_ARC,
            DETECTOR_ARC_GROWTH,
            PhaseSchedule::default(),
        )
    }
}
