//! Damped spring used to ease card geometry toward controller targets.

// Integrating in small fixed steps keeps stiff springs stable when a frame
// arrives late.
const MAX_STEP: f64 = 1.0 / 240.0;
const REST_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, Copy)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    /// Velocity kick on retarget, relative to the distance to travel.
    initial_velocity: f64,
}

impl Spring {
    pub fn new(value: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            stiffness,
            damping,
            initial_velocity: 0.0,
        }
    }

    pub fn with_initial_velocity(mut self, initial_velocity: f64) -> Self {
        self.initial_velocity = initial_velocity;
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        if target == self.target {
            return;
        }
        self.velocity += self.initial_velocity * (target - self.value);
        self.target = target;
    }

    /// Jumps to `value` with no motion left.
    pub fn reset(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advances by `dt` seconds. Returns whether the value changed.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_settled() {
            return false;
        }

        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let force = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += force * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON {
            self.reset(self.target);
        }
        true
    }
}
