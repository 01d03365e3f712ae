//! Dense 3-D field storage.
//!
//! [`DenseField3`] is the concentration-array type the engine operates
//! on: a flat `f64` buffer indexed by `(k, j, i)` = (vertical,
//! north-south, east-west), with the element-wise operations the
//! integration loop needs (add, scaled copy, whole-array max and sum).

/// A dense 3-D array of `f64` values indexed by `(k, j, i)`.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseField3 {
    nz: usize,
    ny: usize,
    nx: usize,
    data: Vec<f64>,
}

impl DenseField3 {
    /// Create a zero-filled field with the given dimensions.
    pub fn zeros(nz: usize, ny: usize, nx: usize) -> Self {
        Self {
            nz,
            ny,
            nx,
            data: vec![0.0; nz * ny * nx],
        }
    }

    /// Create a field with every cell set to `value`.
    pub fn splat(nz: usize, ny: usize, nx: usize, value: f64) -> Self {
        Self {
            nz,
            ny,
            nx,
            data: vec![value; nz * ny * nx],
        }
    }

    /// Dimensions as `(nz, ny, nx)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.nz, self.ny, self.nx)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the field has zero cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn offset(&self, k: usize, j: usize, i: usize) -> usize {
        debug_assert!(k < self.nz && j < self.ny && i < self.nx);
        (k * self.ny + j) * self.nx + i
    }

    /// Value at `(k, j, i)`.
    #[inline]
    pub fn get(&self, k: usize, j: usize, i: usize) -> f64 {
        self.data[self.offset(k, j, i)]
    }

    /// Set the value at `(k, j, i)`.
    #[inline]
    pub fn set(&mut self, k: usize, j: usize, i: usize, value: f64) {
        let offset = self.offset(k, j, i);
        self.data[offset] = value;
    }

    /// Element-wise add `other` into `self`.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ. Shapes are validated against the
    /// grid before the integration loop starts, so a mismatch here is a
    /// programming error.
    pub fn add_assign(&mut self, other: &DenseField3) {
        assert_eq!(
            self.shape(),
            other.shape(),
            "field shape mismatch in add_assign"
        );
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
    }

    /// Return a copy of the field with every value multiplied by `scale`.
    pub fn scale_copy(&self, scale: f64) -> DenseField3 {
        let mut out = self.clone();
        for value in &mut out.data {
            *value *= scale;
        }
        out
    }

    /// Maximum value over the whole field.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Sum over the whole field.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Reset every cell to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zeros_shape_and_sum() {
        let field = DenseField3::zeros(2, 3, 4);
        assert_eq!(field.shape(), (2, 3, 4));
        assert_eq!(field.len(), 24);
        assert_eq!(field.sum(), 0.0);
    }

    #[test]
    fn get_set_round_trip() {
        let mut field = DenseField3::zeros(3, 3, 3);
        field.set(2, 1, 0, 7.5);
        assert_eq!(field.get(2, 1, 0), 7.5);
        assert_eq!(field.get(0, 1, 2), 0.0);
    }

    #[test]
    fn indexing_is_k_major() {
        // Distinct values along each axis must land in distinct cells.
        let mut field = DenseField3::zeros(2, 2, 2);
        let mut next = 1.0;
        for k in 0..2 {
            for j in 0..2 {
                for i in 0..2 {
                    field.set(k, j, i, next);
                    next += 1.0;
                }
            }
        }
        assert_eq!(field.sum(), (1..=8).sum::<i32>() as f64);
        assert_eq!(field.get(1, 0, 0), 5.0);
        assert_eq!(field.get(0, 1, 0), 3.0);
        assert_eq!(field.get(0, 0, 1), 2.0);
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn add_assign_shape_mismatch_panics() {
        let mut a = DenseField3::zeros(2, 2, 2);
        let b = DenseField3::zeros(2, 2, 3);
        a.add_assign(&b);
    }

    #[test]
    fn fill_resets() {
        let mut field = DenseField3::splat(2, 2, 2, 3.0);
        assert_eq!(field.sum(), 24.0);
        field.fill(0.0);
        assert_eq!(field.sum(), 0.0);
        assert_eq!(field.max(), 0.0);
    }

    fn arb_field() -> impl Strategy<Value = DenseField3> {
        (1usize..4, 1usize..4, 1usize..4).prop_flat_map(|(nz, ny, nx)| {
            prop::collection::vec(-1e6f64..1e6, nz * ny * nx).prop_map(move |values| {
                let mut field = DenseField3::zeros(nz, ny, nx);
                let mut cursor = values.into_iter();
                for k in 0..nz {
                    for j in 0..ny {
                        for i in 0..nx {
                            field.set(k, j, i, cursor.next().unwrap());
                        }
                    }
                }
                field
            })
        })
    }

    proptest! {
        #[test]
        fn scale_copy_scales_sum(field in arb_field(), scale in -10.0f64..10.0) {
            let scaled = field.scale_copy(scale);
            prop_assert!((scaled.sum() - field.sum() * scale).abs() < 1e-6);
        }

        #[test]
        fn add_assign_adds_sums(field in arb_field()) {
            let mut doubled = field.clone();
            doubled.add_assign(&field);
            prop_assert!((doubled.sum() - 2.0 * field.sum()).abs() < 1e-6);
        }

        #[test]
        fn max_bounds_every_cell(field in arb_field()) {
            let max = field.max();
            let (nz, ny, nx) = field.shape();
            for k in 0..nz {
                for j in 0..ny {
                    for i in 0..nx {
                        prop_assert!(field.get(k, j, i) <= max);
                    }
                }
            }
        }
    }
}
