use std::cmp::Ordering;

/// Numeric element accepted by the trimmed-mean engine.
///
/// Implementors provide their natural ascending order and an explicit
/// widening step to `f64`, applied per element at the summation boundary.
pub trait Sample: Copy {
    /// Whether the value can be ordered and averaged. Always true for integers.
    fn is_valid(&self) -> bool;

    fn order(&self, other: &Self) -> Ordering;

    fn widen(self) -> f64;
}

macro_rules! integral_sample {
    ($($ty:ty),*) => {
        $(
            impl Sample for $ty {
                fn is_valid(&self) -> bool {
                    true
                }

                fn order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn widen(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! floating_sample {
    ($($ty:ty),*) => {
        $(
            impl Sample for $ty {
                fn is_valid(&self) -> bool {
                    self.is_finite()
                }

                // Only finite values reach the sort, so total order matches numeric order.
                fn order(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                fn widen(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

integral_sample!(i32, i64);
floating_sample!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_always_valid_and_widen_exactly() {
        assert!(i64::MIN.is_valid());
        assert_eq!(42i64.widen(), 42.0);
        assert_eq!((-7i32).widen(), -7.0);
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(!f64::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
        assert!(!f32::NEG_INFINITY.is_valid());
        assert!(1.5f64.is_valid());
    }

    #[test]
    fn ordering_is_ascending() {
        assert_eq!(1i64.order(&2), Ordering::Less);
        assert_eq!(2.5f64.order(&-1.0), Ordering::Greater);
        assert_eq!(3.0f32.order(&3.0), Ordering::Equal);
    }
}
