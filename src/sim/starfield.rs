use std::f64::consts::TAU;

use fastrand::Rng;

pub const STAR_COUNT: usize = 60;
pub const STAR_COUNT_LOW: usize = 30;

/// Scene-space half extent; points wrap to the opposite face at ±WRAP_EXTENT.
pub const WRAP_EXTENT: f64 = 10.0;
const SPAWN_EXTENT: f64 = 15.0;

#[derive(Clone, Debug)]
pub struct DriftPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub phase: f64,
}

pub struct DriftField {
    pub points: Vec<DriftPoint>,
}

impl DriftField {
    pub fn new(count: usize, rng: &mut Rng) -> Self {
        let points = (0..count)
            .map(|_| DriftPoint {
                x: (rng.f64() - 0.5) * SPAWN_EXTENT,
                y: (rng.f64() - 0.5) * SPAWN_EXTENT,
                z: (rng.f64() - 0.5) * SPAWN_EXTENT,
                phase: rng.f64() * TAU,
            })
            .collect();

        Self { points }
    }

    /// Sine/cosine drift keyed by point index, wrapping at the scene bounds.
    pub fn step(&mut self, time: f64) {
        for (index, point) in self.points.iter_mut().enumerate() {
            let i = index as f64;
            point.x += (time * 0.5 + i * 0.1).sin() * 0.01;
            point.y += (time * 0.3 + i * 0.15).cos() * 0.008;
            point.z += (time * 0.4 + i * 0.2).sin() * 0.012;

            for axis in [&mut point.x, &mut point.y, &mut point.z] {
                if *axis > WRAP_EXTENT {
                    *axis = -WRAP_EXTENT;
                } else if *axis < -WRAP_EXTENT {
                    *axis = WRAP_EXTENT;
                }
            }
        }
    }

    /// Twinkle factor in [0.6, 1.0], phased per point.
    pub fn twinkle(&self, index: usize, time: f64) -> f64 {
        let phase = self.points[index].phase;
        ((time * 1.5 + phase).sin() * 0.5 + 0.5) * 0.4 + 0.6
    }
}

/// Projects a scene point onto a width × height canvas, returning
/// (x, y, depth) with depth normalized into [0, 1] (1 = nearest).
pub fn projected(point: &DriftPoint, width: f64, height: f64) -> (f64, f64, f64) {
    let x = width / 2.0 + (point.x / WRAP_EXTENT) * (width / 2.0);
    let y = height / 2.0 + (point.y / WRAP_EXTENT) * (height / 2.0);
    let depth = ((point.z + WRAP_EXTENT) / (2.0 * WRAP_EXTENT)).clamp(0.0, 1.0);
    (x, y, depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_stay_inside_the_wrap_box() {
        let mut rng = Rng::with_seed(11);
        let mut field = DriftField::new(STAR_COUNT, &mut rng);

        for step in 0..2_000 {
            field.step(step as f64 / 60.0);
            for point in &field.points {
                assert!(point.x.abs() <= WRAP_EXTENT);
                assert!(point.y.abs() <= WRAP_EXTENT);
                assert!(point.z.abs() <= WRAP_EXTENT);
            }
        }
    }

    #[test]
    fn twinkle_stays_in_range() {
        let mut rng = Rng::with_seed(3);
        let field = DriftField::new(STAR_COUNT_LOW, &mut rng);

        for index in 0..field.points.len() {
            for tick in 0..200 {
                let factor = field.twinkle(index, tick as f64 * 0.17);
                assert!((0.6..=1.0).contains(&factor));
            }
        }
    }

    #[test]
    fn projection_lands_on_the_canvas() {
        let mut rng = Rng::with_seed(5);
        let mut field = DriftField::new(STAR_COUNT, &mut rng);
        field.step(1.0);

        for point in &field.points {
            let (x, y, depth) = projected(point, 1280.0, 720.0);
            assert!(x.is_finite() && (0.0..=1280.0).contains(&x));
            assert!(y.is_finite() && (0.0..=720.0).contains(&y));
            assert!((0.0..=1.0).contains(&depth));
        }
    }
}
