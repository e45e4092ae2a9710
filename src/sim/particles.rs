use fastrand::Rng;

pub const PALETTE: [&str; 6] = [
    "#3b82f6", "#8b5cf6", "#06b6d4", "#f59e0b", "#ef4444", "#10b981",
];

pub const SCATTER_RADIUS: f64 = 100.0;
pub const MAX_OPACITY: f64 = 0.5;

const SCATTER_FORCE: f64 = 0.8;
const DAMPING: f64 = 0.98;
const DRIFT_LIMIT: f64 = 0.3;
const JITTER_SPAN: f64 = 0.01;
const EDGE_FADE_ZONE: f64 = 50.0;
const WRAP_MARGIN: f64 = 10.0;
const RETURN_EPSILON: f64 = 1.0;
const AREA_PER_PARTICLE: f64 = 15_000.0;
const MIN_PARTICLES: usize = 50;
const MAX_PARTICLES: usize = 100;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    /// Sentinel used while the pointer is outside the canvas; far enough that
    /// no particle can ever be within the scatter radius.
    pub fn off_canvas() -> Self {
        Self {
            x: -1000.0,
            y: -1000.0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParticleState {
    Idle,
    Scattering,
    Returning,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub origin_x: f64,
    pub origin_y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
    pub color: &'static str,
    pub state: ParticleState,
    base_opacity: f64,
    return_speed: f64,
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: Rng,
}

pub fn particle_count(width: f64, height: f64) -> usize {
    (((width * height) / AREA_PER_PARTICLE) as usize).clamp(MIN_PARTICLES, MAX_PARTICLES)
}

/// Linear fade toward 0 within [`EDGE_FADE_ZONE`] px of any canvas edge; the
/// minimum factor across all four edges wins.
pub fn edge_fade(x: f64, y: f64, width: f64, height: f64) -> f64 {
    let fade_x = (x / EDGE_FADE_ZONE).min((width - x) / EDGE_FADE_ZONE);
    let fade_y = (y / EDGE_FADE_ZONE).min((height - y) / EDGE_FADE_ZONE);
    fade_x.min(fade_y).clamp(0.0, 1.0)
}

impl ParticleField {
    pub fn new(width: f64, height: f64, mut rng: Rng) -> Self {
        let count = particle_count(width, height);
        let particles = (0..count)
            .map(|_| {
                let x = rng.f64() * width;
                let y = rng.f64() * height;
                let base_opacity = 0.3 + rng.f64() * 0.2;
                Particle {
                    x,
                    y,
                    origin_x: x,
                    origin_y: y,
                    vx: (rng.f64() - 0.5) * 0.2,
                    vy: (rng.f64() - 0.5) * 0.2,
                    size: 2.0 + rng.f64() * 3.0,
                    opacity: base_opacity,
                    color: PALETTE[rng.usize(..PALETTE.len())],
                    state: ParticleState::Idle,
                    base_opacity,
                    return_speed: 0.005 + rng.f64() * 0.01,
                }
            })
            .collect();

        Self {
            particles,
            width,
            height,
            rng,
        }
    }

    pub fn step(&mut self, pointer: Pointer) {
        let width = self.width;
        let height = self.height;

        for particle in &mut self.particles {
            let dx = particle.x - pointer.x;
            let dy = particle.y - pointer.y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance > 0.0 && distance < SCATTER_RADIUS {
                let force = (SCATTER_RADIUS - distance) / SCATTER_RADIUS * SCATTER_FORCE;
                particle.vx += dx / distance * force;
                particle.vy += dy / distance * force;
                particle.state = ParticleState::Scattering;
            }

            particle.x += particle.vx;
            particle.y += particle.vy;

            if particle.state == ParticleState::Scattering && distance > SCATTER_RADIUS {
                particle.state = ParticleState::Returning;
            }

            if particle.state == ParticleState::Returning {
                let home_dx = particle.origin_x - particle.x;
                let home_dy = particle.origin_y - particle.y;
                let home_distance = (home_dx * home_dx + home_dy * home_dy).sqrt();

                if home_distance > RETURN_EPSILON {
                    particle.vx += home_dx * particle.return_speed;
                    particle.vy += home_dy * particle.return_speed;
                } else {
                    particle.state = ParticleState::Idle;
                }
            }

            particle.vx *= DAMPING;
            particle.vy *= DAMPING;

            if particle.state == ParticleState::Idle {
                particle.vx += (self.rng.f64() - 0.5) * JITTER_SPAN;
                particle.vy += (self.rng.f64() - 0.5) * JITTER_SPAN;
                particle.vx = particle.vx.clamp(-DRIFT_LIMIT, DRIFT_LIMIT);
                particle.vy = particle.vy.clamp(-DRIFT_LIMIT, DRIFT_LIMIT);
            }

            if particle.x < -WRAP_MARGIN {
                particle.x = width + WRAP_MARGIN;
                particle.origin_x = self.rng.f64() * width;
            } else if particle.x > width + WRAP_MARGIN {
                particle.x = -WRAP_MARGIN;
                particle.origin_x = self.rng.f64() * width;
            }

            if particle.y < -WRAP_MARGIN {
                particle.y = height + WRAP_MARGIN;
                particle.origin_y = self.rng.f64() * height;
            } else if particle.y > height + WRAP_MARGIN {
                particle.y = -WRAP_MARGIN;
                particle.origin_y = self.rng.f64() * height;
            }

            particle.opacity = (particle.base_opacity
                * edge_fade(particle.x, particle.y, width, height))
            .clamp(0.0, MAX_OPACITY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_field(width: f64, height: f64) -> ParticleField {
        ParticleField::new(width, height, Rng::with_seed(7))
    }

    fn centered_particle(field: &mut ParticleField, x: f64, y: f64) {
        let particle = &mut field.particles[0];
        particle.x = x;
        particle.y = y;
        particle.origin_x = x;
        particle.origin_y = y;
        particle.vx = 0.0;
        particle.vy = 0.0;
        particle.state = ParticleState::Idle;
    }

    #[test]
    fn count_is_clamped_to_bounds() {
        assert_eq!(particle_count(100.0, 100.0), MIN_PARTICLES);
        assert_eq!(particle_count(1280.0, 720.0), 61);
        assert_eq!(particle_count(4000.0, 4000.0), MAX_PARTICLES);
    }

    #[test]
    fn opacity_stays_bounded_and_size_is_invariant() {
        let mut field = test_field(1280.0, 720.0);
        let sizes: Vec<f64> = field.particles.iter().map(|p| p.size).collect();

        for step in 0..1_000 {
            let pointer = if step % 3 == 0 {
                Pointer::off_canvas()
            } else {
                Pointer {
                    x: (step % 1280) as f64,
                    y: (step % 720) as f64,
                }
            };
            field.step(pointer);

            for particle in &field.particles {
                assert!(particle.opacity >= 0.0 && particle.opacity <= MAX_OPACITY);
            }
        }

        let after: Vec<f64> = field.particles.iter().map(|p| p.size).collect();
        assert_eq!(sizes, after);
    }

    #[test]
    fn pointer_proximity_scatters_outward() {
        let mut field = test_field(1280.0, 720.0);
        centered_particle(&mut field, 400.0, 300.0);

        let pointer = Pointer { x: 350.0, y: 300.0 };
        field.step(pointer);

        let particle = &field.particles[0];
        // Outward along +x from the pointer; radial velocity must grow.
        assert!(particle.vx > 0.0);
        assert_eq!(particle.state, ParticleState::Scattering);
    }

    #[test]
    fn radial_velocity_is_monotonic_under_scatter() {
        let mut field = test_field(1280.0, 720.0);
        centered_particle(&mut field, 400.0, 300.0);
        field.particles[0].vx = 0.05;

        let pointer = Pointer { x: 340.0, y: 300.0 };
        let before = field.particles[0].vx;
        field.step(pointer);
        assert!(field.particles[0].vx >= before);
    }

    #[test]
    fn scattered_particle_returns_home_and_clears() {
        let mut field = test_field(1280.0, 720.0);
        centered_particle(&mut field, 400.0, 300.0);
        {
            let particle = &mut field.particles[0];
            particle.x = 560.0;
            particle.y = 300.0;
            particle.state = ParticleState::Scattering;
        }

        let pointer = Pointer::off_canvas();
        let mut settled = false;

        for _ in 0..5_000 {
            field.step(pointer);
            if field.particles[0].state == ParticleState::Idle {
                settled = true;
                break;
            }
        }

        assert!(settled, "particle never converged back to its origin");
        let particle = &field.particles[0];
        let home = ((particle.x - particle.origin_x).powi(2)
            + (particle.y - particle.origin_y).powi(2))
        .sqrt();
        assert!(home <= RETURN_EPSILON + DRIFT_LIMIT * 2.0);
    }

    #[test]
    fn left_edge_wrap_repositions_and_rerolls_origin() {
        let mut field = test_field(1280.0, 720.0);
        centered_particle(&mut field, 300.0, 300.0);
        {
            let particle = &mut field.particles[0];
            particle.x = -8.0;
            particle.vx = -6.0;
            particle.state = ParticleState::Scattering;
        }

        field.step(Pointer::off_canvas());

        let particle = &field.particles[0];
        assert_eq!(particle.x, 1280.0 + WRAP_MARGIN);
        assert!(particle.origin_x >= 0.0 && particle.origin_x < 1280.0);
        // The y origin is untouched by an x wrap.
        assert_eq!(particle.origin_y, 300.0);
    }

    #[test]
    fn edge_fade_is_zero_outside_and_one_inside() {
        assert_eq!(edge_fade(-10.0, 300.0, 1280.0, 720.0), 0.0);
        assert_eq!(edge_fade(640.0, 360.0, 1280.0, 720.0), 1.0);
        let halfway = edge_fade(25.0, 360.0, 1280.0, 720.0);
        assert!((halfway - 0.5).abs() < 1e-9);
        // The smallest of the four edges wins.
        let corner = edge_fade(25.0, 10.0, 1280.0, 720.0);
        assert!((corner - 0.2).abs() < 1e-9);
    }
}
