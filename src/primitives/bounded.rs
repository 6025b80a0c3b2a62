//! Bounded - macro for creating range-constrained numeric types
//!
//! Generates types with compile-time validation for const contexts.
//! Brought into sibling modules by `#[macro_use]` on this module.

/// Creates a bounded f32 type with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f32!(Scale, 1.0, 4.0);
/// const ZOOM: Scale = Scale::new(2.0);
/// assert_eq!(ZOOM.value(), 2.0);
/// ```
macro_rules! bounded_f32 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            #[track_caller]
            pub const fn new(value: f32) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }

            pub const fn value(&self) -> f32 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MIN)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    bounded_f32!(TestZoom, 1.0, 4.0);

    const TRIPLE: TestZoom = TestZoom::new(3.0);

    #[test]
    fn bounded_const_valid() {
        assert_eq!(TRIPLE.value(), 3.0);
        assert_eq!(TestZoom::default().value(), 1.0);
    }

    #[test]
    fn bounded_accepts_endpoints() {
        assert_eq!(TestZoom::new(TestZoom::MIN).value(), 1.0);
        assert_eq!(TestZoom::new(TestZoom::MAX).value(), 4.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn bounded_rejects_invalid() {
        let _ = TestZoom::new(4.5);
    }
}
