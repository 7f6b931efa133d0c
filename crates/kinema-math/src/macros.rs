// approx comparisons over the flat component storage of a value type.
//
// The type must expose `as_slice(&self) -> &[T]`. Extra state that is not
// part of the value (a matrix tolerance) is not compared.
macro_rules! impl_approx_eq {
    ($ty:ident) => {
        impl<T> approx::AbsDiffEq for $ty<T>
        where
            T: kinema_core::Scalar + approx::AbsDiffEq<Epsilon = T>,
        {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                self.as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<T> approx::RelativeEq for $ty<T>
        where
            T: kinema_core::Scalar + approx::RelativeEq<Epsilon = T>,
        {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                self.as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl<T> approx::UlpsEq for $ty<T>
        where
            T: kinema_core::Scalar + approx::UlpsEq<Epsilon = T>,
        {
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
                self.as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    };
}
