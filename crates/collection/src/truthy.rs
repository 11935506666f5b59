/// Truthiness used by `compact`: zero, `false`, empty strings, `NaN` and
/// `None` are falsy, everything else is truthy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;

    #[inline]
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

macro_rules! truthy_int {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

truthy_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

// Unlike scalars, a present container is truthy even when empty.
impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_truthiness() {
        assert!(!0_i32.is_truthy());
        assert!((-1_i32).is_truthy());
        assert!(!false.is_truthy());
        assert!(!"".is_truthy());
        assert!("0".is_truthy());
        assert!(!f64::NAN.is_truthy());
        assert!(!(-0.0_f64).is_truthy());
        assert!(0.5_f32.is_truthy());
    }

    #[test]
    fn option_and_containers() {
        assert!(!None::<i32>.is_truthy());
        assert!(!Some(0).is_truthy());
        assert!(Some(3).is_truthy());
        assert!(Vec::<u8>::new().is_truthy());
        assert!(Box::new(String::from("x")).is_truthy());
    }
}
