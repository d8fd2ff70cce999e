//! World map storage.
//!
//! A fixed-size square grid with three independent counter channels per
//! cell, one per terrain class. Counters are monotonically incremented by
//! the accumulator and never decremented or reset; the map persists for
//! the whole mission. SoA layout: each channel is its own flat array.

/// Persistent world occupancy map with per-class hit counters.
///
/// Cell (x, y) is indexed in world grid coordinates as produced by
/// [`crate::transform::rover_to_world`]. Owned exclusively by the
/// accumulator; the decision stage reads it.
#[derive(Clone, Debug)]
pub struct WorldMap {
    size: usize,
    obstacle: Vec<u32>,
    target: Vec<u32>,
    navigable: Vec<u32>,
}

impl WorldMap {
    /// Create an empty map of `size` × `size` cells.
    pub fn new(size: usize) -> Self {
        let cells = size * size;
        Self {
            size,
            obstacle: vec![0; cells],
            target: vec![0; cells],
            navigable: vec![0; cells],
        }
    }

    /// Side length in cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size);
        y * self.size + x
    }

    /// Obstacle-hit count at (x, y).
    #[inline]
    pub fn obstacle_at(&self, x: usize, y: usize) -> u32 {
        self.obstacle[self.index(x, y)]
    }

    /// Target-hit count at (x, y).
    #[inline]
    pub fn target_at(&self, x: usize, y: usize) -> u32 {
        self.target[self.index(x, y)]
    }

    /// Navigable-hit count at (x, y).
    #[inline]
    pub fn navigable_at(&self, x: usize, y: usize) -> u32 {
        self.navigable[self.index(x, y)]
    }

    /// Increment the obstacle counter at (x, y).
    #[inline]
    pub fn hit_obstacle(&mut self, x: usize, y: usize) {
        let i = self.index(x, y);
        self.obstacle[i] = self.obstacle[i].saturating_add(1);
    }

    /// Increment the target counter at (x, y).
    #[inline]
    pub fn hit_target(&mut self, x: usize, y: usize) {
        let i = self.index(x, y);
        self.target[i] = self.target[i].saturating_add(1);
    }

    /// Increment the navigable counter at (x, y).
    #[inline]
    pub fn hit_navigable(&mut self, x: usize, y: usize) {
        let i = self.index(x, y);
        self.navigable[i] = self.navigable[i].saturating_add(1);
    }

    /// Mean of the navigable channel over all cells.
    pub fn navigable_mean(&self) -> f32 {
        let sum: u64 = self.navigable.iter().map(|&c| c as u64).sum();
        sum as f32 / self.cell_count() as f32
    }

    /// Whether cell (x, y) counts as heavily re-visited terrain: its
    /// navigable-hit count exceeds the channel mean by `margin`.
    #[inline]
    pub fn is_overdriven(&self, x: usize, y: usize, mean: f32, margin: f32) -> bool {
        self.navigable_at(x, y) as f32 > mean + margin
    }

    /// Raw navigable channel (row-major, for display/telemetry).
    #[inline]
    pub fn navigable_cells(&self) -> &[u32] {
        &self.navigable
    }

    /// Raw obstacle channel.
    #[inline]
    pub fn obstacle_cells(&self) -> &[u32] {
        &self.obstacle
    }

    /// Raw target channel.
    #[inline]
    pub fn target_cells(&self) -> &[u32] {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_zeroed() {
        let map = WorldMap::new(10);
        assert_eq!(map.size(), 10);
        assert_eq!(map.cell_count(), 100);
        assert_eq!(map.navigable_at(5, 5), 0);
        assert_eq!(map.navigable_mean(), 0.0);
    }

    #[test]
    fn test_counters_are_independent() {
        let mut map = WorldMap::new(10);
        map.hit_obstacle(2, 3);
        map.hit_target(2, 3);
        map.hit_navigable(2, 3);
        map.hit_navigable(2, 3);
        assert_eq!(map.obstacle_at(2, 3), 1);
        assert_eq!(map.target_at(2, 3), 1);
        assert_eq!(map.navigable_at(2, 3), 2);
        // Neighboring cell untouched
        assert_eq!(map.navigable_at(3, 3), 0);
    }

    #[test]
    fn test_overdriven() {
        let mut map = WorldMap::new(2);
        for _ in 0..100 {
            map.hit_navigable(0, 0);
        }
        let mean = map.navigable_mean();
        assert_eq!(mean, 25.0);
        assert!(map.is_overdriven(0, 0, mean, 50.0));
        assert!(!map.is_overdriven(1, 1, mean, 50.0));
    }
}
