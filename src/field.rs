// Simulation state for the backdrop: the particle set plus the viewport
// bounds it bounces around in. No DOM types here, so the whole module runs
// under the native test harness.

use crate::particle::Particle;
use rand::Rng;

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

// Derived per frame by pair enumeration, never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub alpha: f64,
}

impl ParticleField {
    pub const DEFAULT_PARTICLE_COUNT: u32 = 100;
    // Pairs closer than this get a connecting line.
    pub const LINK_DISTANCE: f64 = 150.0;
    pub const LINK_BASE_ALPHA: f64 = 0.2;
    pub const LINK_ALPHA_FALLOFF: f64 = 750.0;

    pub fn new(width: f64, height: f64) -> ParticleField {
        ParticleField {
            width,
            height,
            particles: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    // Discards any existing set and seeds num_particles fresh ones inside
    // the current bounds.
    pub fn initialize_particles<R: Rng>(&mut self, num_particles: u32, rng: &mut R) {
        self.particles.clear();
        self.particles.reserve(num_particles as usize);
        for _ in 0..num_particles {
            self.particles
                .push(Particle::random(self.width, self.height, rng));
        }
    }

    // One frame step: every particle advances by its velocity, then an axis
    // whose coordinate left [0, bound] gets its velocity sign flipped. The
    // flip lands after the move, so a particle can sit one frame slightly
    // outside the bounds and travels back in on the next update.
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.pos = vecmath::vec2_add(particle.pos, particle.vel);
            if particle.pos[0] < 0.0 || particle.pos[0] > self.width {
                particle.vel[0] = -particle.vel[0];
            }
            if particle.pos[1] < 0.0 || particle.pos[1] > self.height {
                particle.vel[1] = -particle.vel[1];
            }
        }
    }

    // A resize throws the old set away and reseeds into the new bounds; no
    // particle carries its old position across.
    pub fn resize<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        let num_particles = self.particles.len() as u32;
        self.width = width;
        self.height = height;
        self.initialize_particles(num_particles, rng);
    }

    // Full pairwise enumeration, no spatial index: 4950 distance checks per
    // frame at the default count.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let distance = vecmath::vec2_len(vecmath::vec2_sub(a.pos, b.pos));
                if distance < Self::LINK_DISTANCE {
                    let alpha =
                        (Self::LINK_BASE_ALPHA - distance / Self::LINK_ALPHA_FALLOFF).max(0.0);
                    links.push(Link {
                        from: a.pos,
                        to: b.pos,
                        alpha,
                    });
                }
            }
        }
        links
    }
}
