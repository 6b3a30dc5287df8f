// Simple particle struct to keep track of individual position, velocity,
// radius, and color. Radius and color are fixed at creation; the frame loop
// only ever touches position and velocity.

use crate::color::Color;
use rand::Rng;

#[derive(Copy, Clone)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub const MIN_RADIUS: f64 = 1.0;
    pub const MAX_RADIUS: f64 = 4.0;
    // Velocity components are in pixels per frame.
    pub const MAX_SPEED: f64 = 1.0;
    pub const MAX_ALPHA: f64 = 0.5;

    pub fn new(
        pos_x: f64,
        pos_y: f64,
        vel_x: f64,
        vel_y: f64,
        radius: f64,
        color: Color,
    ) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // A fresh particle somewhere inside a width x height viewport.
    pub fn random<R: Rng>(width: f64, height: f64, rng: &mut R) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = rng.gen::<f64>() * (Self::MAX_SPEED * 2.0) - Self::MAX_SPEED;
        let vel_y = rng.gen::<f64>() * (Self::MAX_SPEED * 2.0) - Self::MAX_SPEED;
        let radius = rng.gen::<f64>() * (Self::MAX_RADIUS - Self::MIN_RADIUS) + Self::MIN_RADIUS;
        let color = Color::accent(rng.gen::<f64>() * Self::MAX_ALPHA);
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_particles_stay_inside_their_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = Particle::random(800.0, 600.0, &mut rng);
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 600.0);
            assert!(p.vel[0] >= -Particle::MAX_SPEED && p.vel[0] <= Particle::MAX_SPEED);
            assert!(p.vel[1] >= -Particle::MAX_SPEED && p.vel[1] <= Particle::MAX_SPEED);
            assert!(p.radius >= Particle::MIN_RADIUS && p.radius <= Particle::MAX_RADIUS);
            assert!(p.color.a >= 0.0 && p.color.a <= Particle::MAX_ALPHA);
            assert_eq!((p.color.r, p.color.g, p.color.b), (108, 99, 255));
        }
    }
}
