use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Bounded Conway field with hard edges: coordinates outside the grid
/// read as dead and never count as neighbors.
pub struct GameField {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl GameField {
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1);
        Self {
            cells: vec![false; width * height],
            width,
            height,
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Out-of-range coordinates read as dead.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.cells[x as usize + y as usize * self.width]
    }

    /// `(x, y)` must be inside the grid; callers clamp first.
    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        self.cells[x + y * self.width] = state;
    }

    /// Flips a cell and returns its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let state = !self.cells[x + y * self.width];
        self.cells[x + y * self.width] = state;
        state
    }

    fn count_neibs(&self, x: i32, y: i32) -> usize {
        self.get(x - 1, y - 1) as usize
            + self.get(x, y - 1) as usize
            + self.get(x + 1, y - 1) as usize
            + self.get(x - 1, y) as usize
            + self.get(x + 1, y) as usize
            + self.get(x - 1, y + 1) as usize
            + self.get(x, y + 1) as usize
            + self.get(x + 1, y + 1) as usize
    }

    /// Computes the next generation (B3/S23) into a fresh field, so one
    /// generation never reads its own writes.
    pub fn step(&self) -> Self {
        let mut next = Self::blank(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let neibs = self.count_neibs(x as i32, y as i32);
                let alive = self.cells[x + y * self.width];
                next.cells[x + y * self.width] = if alive {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
            }
        }
        next
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        let mut rng = match seed {
            Some(x) => ChaCha8Rng::seed_from_u64(x),
            None => ChaCha8Rng::from_entropy(),
        };
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_edges_keep_corners_alive() {
        let mut field = GameField::blank(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                field.set(x, y, true);
            }
        }
        // full 3x3: corners see 3 neighbors, edges 5, center 8
        let next = field.step();
        assert!(next.get(0, 0));
        assert!(next.get(2, 2));
        assert!(!next.get(1, 0));
        assert!(!next.get(1, 1));
    }

    #[test]
    fn birth_needs_exactly_three() {
        let mut field = GameField::blank(3, 3);
        field.set(0, 0, true);
        field.set(1, 0, true);
        field.set(2, 0, true);
        let next = field.step();
        assert!(next.get(1, 1));
        assert!(!next.get(0, 1));
        assert!(!next.get(2, 1));
    }
}
