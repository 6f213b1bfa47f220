//! Verbindungssegment zwischen zwei aufeinanderfolgenden Wegpunkten.

use glam::{EulerRot, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Feste Grundneigung: legt die Längsachse des Segments in die Ebene.
pub const SEGMENT_BASE_TILT: f32 = FRAC_PI_2;

/// Längen unterhalb dieser Schwelle gelten als entartet.
pub const DEGENERATE_LENGTH: f32 = 1e-6;

/// Abgeleitete Geometrie zwischen Wegpunkt i-1 und i
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Startposition (Wegpunkt i-1)
    pub from: Vec3,
    /// Endposition (Wegpunkt i)
    pub to: Vec3,
    /// Mittelpunkt
    pub midpoint: Vec3,
    /// Euklidische Länge
    pub length: f32,
    /// Euler-Winkel (x = Grundneigung, y = Vertikalwinkel, z = Peilung)
    pub euler_angles: Vec3,
}

impl Segment {
    /// Berechnet das Segment zwischen zwei Positionen.
    ///
    /// Bei identischen Positionen entsteht ein entartetes Segment mit
    /// Länge 0, das nur die Grundneigung trägt.
    pub fn between(from: Vec3, to: Vec3) -> Self {
        let (midpoint, length, euler_angles) = calculate_geometry(from, to);
        Self {
            from,
            to,
            midpoint,
            length,
            euler_angles,
        }
    }

    /// Rotation als Quaternion (Anwendungsreihenfolge z, y, x).
    pub fn rotation(&self) -> Quat {
        let e = self.euler_angles;
        Quat::from_euler(EulerRot::ZYX, e.z, e.y, e.x)
    }

    /// Normierte Richtung `from -> to`, `None` bei entartetem Segment.
    pub fn direction(&self) -> Option<Vec3> {
        (!self.is_degenerate()).then(|| (self.to - self.from) / self.length)
    }

    /// Gibt `true` zurück, wenn beide Endpunkte zusammenfallen.
    pub fn is_degenerate(&self) -> bool {
        self.length < DEGENERATE_LENGTH
    }
}

fn calculate_geometry(from: Vec3, to: Vec3) -> (Vec3, f32, Vec3) {
    let midpoint = (from + to) * 0.5;
    let delta = to - from;
    let length = delta.length();

    if length < DEGENERATE_LENGTH {
        return (midpoint, 0.0, Vec3::new(SEGMENT_BASE_TILT, 0.0, 0.0));
    }

    let vertical = (delta.z / length).clamp(-1.0, 1.0).acos();
    let bearing = delta.y.atan2(delta.x);

    (midpoint, length, Vec3::new(SEGMENT_BASE_TILT, vertical, bearing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn unit_segment_along_x() {
        let segment = Segment::between(Vec3::ZERO, Vec3::X);

        assert_relative_eq!(segment.length, 1.0);
        assert_eq!(segment.midpoint, Vec3::new(0.5, 0.0, 0.0));
        assert_relative_eq!(segment.euler_angles.x, FRAC_PI_2);
        assert_relative_eq!(segment.euler_angles.y, FRAC_PI_2);
        assert_relative_eq!(segment.euler_angles.z, 0.0);
    }

    #[test]
    fn bearing_and_vertical_angle() {
        let up = Segment::between(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));
        assert_relative_eq!(up.euler_angles.y, 0.0);

        let back = Segment::between(Vec3::ZERO, Vec3::new(-3.0, 0.0, 0.0));
        assert_relative_eq!(back.euler_angles.z, PI);
        assert_relative_eq!(back.length, 3.0);

        let diagonal = Segment::between(Vec3::new(1.0, 1.0, 0.0), Vec3::new(2.0, 2.0, 0.0));
        assert_relative_eq!(diagonal.euler_angles.z, PI / 4.0);
    }

    #[test]
    fn identical_points_give_degenerate_segment() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let segment = Segment::between(p, p);

        assert!(segment.is_degenerate());
        assert_eq!(segment.length, 0.0);
        assert_eq!(segment.midpoint, p);
        assert_eq!(segment.euler_angles, Vec3::new(SEGMENT_BASE_TILT, 0.0, 0.0));
        assert!(segment.direction().is_none());
        assert!(segment.euler_angles.is_finite());
    }

    #[test]
    fn geometry_is_pure() {
        let a = Vec3::new(0.3, -1.2, 0.7);
        let b = Vec3::new(-2.0, 4.5, 1.1);
        assert_eq!(Segment::between(a, b), Segment::between(a, b));
    }

    #[test]
    fn direction_is_normalized() {
        let segment = Segment::between(Vec3::ZERO, Vec3::new(0.0, 4.0, 0.0));
        let dir = segment.direction().expect("nicht entartet");
        assert_relative_eq!(dir.length(), 1.0);
        assert_relative_eq!(dir.y, 1.0);
    }
}
