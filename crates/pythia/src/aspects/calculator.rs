use crate::aspects::types::{Aspect, AspectCore, ASPECTS};
use crate::ephemeris::{Body, BodyPosition};
use std::collections::BTreeMap;

/// Exactness threshold in degrees
const EXACT_ORB: f64 = 0.1;

/// Angular separation of two longitudes, folded into [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).rem_euclid(360.0);
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Aspect calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct AspectCalculator;

impl AspectCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Aspects between every unordered pair of bodies, in body order.
    pub fn compute_aspects(&self, bodies: &BTreeMap<Body, BodyPosition>) -> Vec<Aspect> {
        let entries: Vec<(&Body, &BodyPosition)> = bodies.iter().collect();

        let mut aspects = Vec::new();
        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                let (first, p1) = entries[i];
                let (second, p2) = entries[j];

                if let Some(core) =
                    self.calculate_aspect(p1.lon, p2.lon, p1.speed_lon, p2.speed_lon)
                {
                    aspects.push(Aspect {
                        first: *first,
                        second: *second,
                        core,
                    });
                }
            }
        }
        aspects
    }

    /// Calculate aspect between two longitudes using planet speeds
    pub fn calculate_aspect(
        &self,
        lon1: f64,
        lon2: f64,
        speed1: f64,
        speed2: f64,
    ) -> Option<AspectCore> {
        let angle_diff = angular_separation(lon1, lon2);

        for spec in ASPECTS.iter() {
            let orb_value = (angle_diff - spec.angle).abs();

            if orb_value <= spec.orb {
                return Some(AspectCore {
                    kind: spec.kind,
                    separation: angle_diff,
                    orb: orb_value,
                    is_applying: self.is_aspect_applying(
                        lon1, lon2, speed1, speed2, spec.angle, angle_diff,
                    ),
                    is_exact: orb_value < EXACT_ORB,
                });
            }
        }

        None
    }

    /// Determine if an aspect is applying (approaching exact) or separating
    fn is_aspect_applying(
        &self,
        lon1: f64,
        lon2: f64,
        speed1: f64,
        speed2: f64,
        aspect_angle: f64,
        current_angle: f64,
    ) -> bool {
        let relative_speed = speed1 - speed2;

        // Direction is unreliable when the bodies move together
        if relative_speed.abs() < 0.01 {
            return current_angle < aspect_angle + 0.5;
        }

        let current_distance = (current_angle - aspect_angle).abs();

        // Project forward a fraction of a day
        let time_step = 0.1;
        let future_angle = angular_separation(lon1 + speed1 * time_step, lon2 + speed2 * time_step);
        let future_distance = (future_angle - aspect_angle).abs();

        future_distance < current_distance
    }
}
