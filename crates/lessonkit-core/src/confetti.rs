//! Confetti particle simulation for the celebration effect.
//!
//! Rendering is left to the platform; this module only spawns particles and
//! advances them one animation frame at a time.

/// Particles spawned by one celebration.
pub const DEFAULT_PARTICLES: usize = 300;

const MIN_SIZE: f64 = 2.0;
const SIZE_RANGE: f64 = 5.0;
const MIN_SPEED: f64 = 1.0;
const SPEED_RANGE: f64 = 3.0;

/// Small deterministic generator (splitmix64).
#[derive(Debug, Clone)]
struct SplitMix(u64);

impl SplitMix {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// A single falling square.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Side length in pixels.
    pub size: f64,
    /// Fall distance per frame in pixels.
    pub speed: f64,
}

impl Particle {
    /// CSS fill color.
    pub fn color(&self) -> String {
        format!("hsl({:.1}, 100%, 50%)", self.hue)
    }
}

/// All live particles plus the area they fall through.
#[derive(Debug, Clone)]
pub struct Confetti {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: SplitMix,
}

impl Confetti {
    /// Create an empty simulation.
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng: SplitMix(seed),
        }
    }

    /// Set the area particles spawn in and fall through.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
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

    /// Whether any particle is still on screen.
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Spawn `count` particles at random positions in the current area.
    pub fn burst(&mut self, count: usize) {
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = Particle {
                x: self.rng.next_f64() * self.width,
                y: self.rng.next_f64() * self.height,
                hue: self.rng.next_f64() * 360.0,
                size: self.rng.next_f64() * SIZE_RANGE + MIN_SIZE,
                speed: self.rng.next_f64() * SPEED_RANGE + MIN_SPEED,
            };
            self.particles.push(particle);
        }
    }

    /// Advance one frame and drop particles that fell past the bottom edge.
    /// Returns whether the animation should continue.
    pub fn step(&mut self) -> bool {
        let height = self.height;
        self.particles.retain_mut(|p| {
            p.y += p.speed;
            p.y <= height
        });
        self.is_active()
    }
}
