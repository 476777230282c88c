//! Health pool with clamped mutation and death detection.

/// Current/maximum health of an entity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthPool {
    current: f32,
    max: f32,
}

impl HealthPool {
    /// Creates a pool at full health.
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    /// Restores health, clamped at the maximum.
    pub fn heal(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.max);
    }

    /// Applies damage, clamped at zero.
    ///
    /// Returns true if this call dropped the pool to zero (the death
    /// edge); repeated damage against an already-dead pool returns false.
    pub fn damage(&mut self, amount: f32) -> bool {
        if self.is_dead() {
            return false;
        }
        self.current = (self.current - amount).max(0.0);
        self.is_dead()
    }

    /// Refills to full (respawn).
    pub fn reset(&mut self) {
        self.current = self.max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heal_and_damage_clamp() {
        let mut pool = HealthPool::new(100.0);
        pool.heal(50.0);
        assert_eq!(pool.current(), 100.0);

        assert!(!pool.damage(30.0));
        assert_eq!(pool.current(), 70.0);

        pool.heal(10.0);
        assert_eq!(pool.current(), 80.0);
    }

    #[test]
    fn death_edge_fires_once() {
        let mut pool = HealthPool::new(50.0);
        assert!(pool.damage(200.0));
        assert_eq!(pool.current(), 0.0);
        assert!(pool.is_dead());
        assert!(!pool.damage(10.0), "already dead, no second death edge");

        pool.reset();
        assert!(!pool.is_dead());
        assert_eq!(pool.current(), 50.0);
    }
}
