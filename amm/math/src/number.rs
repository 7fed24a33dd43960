use {
    crate::{MathError, MathResult},
    bnum::types::{U256, U512},
    paste::paste,
};

/// Describes a number type that has a zero, a one, and a maximum value.
pub trait NumberConst {
    const MAX: Self;
    const ONE: Self;
    const ZERO: Self;
}

pub trait IsZero {
    fn is_zero(&self) -> bool;

    #[inline]
    fn is_non_zero(&self) -> bool {
        !self.is_zero()
    }
}

/// Describes basic operations that all unsigned number types in this crate
/// must implement.
pub trait Number: Sized + Copy {
    fn checked_add(self, other: Self) -> MathResult<Self>;

    fn checked_sub(self, other: Self) -> MathResult<Self>;

    fn checked_mul(self, other: Self) -> MathResult<Self>;

    fn checked_div(self, other: Self) -> MathResult<Self>;

    fn checked_rem(self, other: Self) -> MathResult<Self>;

    /// Compute the _floored_ square root.
    fn checked_sqrt(self) -> MathResult<Self>;

    fn saturating_add(self, other: Self) -> Self;

    fn saturating_sub(self, other: Self) -> Self;

    #[inline]
    fn checked_add_assign(&mut self, other: Self) -> MathResult<()> {
        *self = self.checked_add(other)?;
        Ok(())
    }

    #[inline]
    fn checked_sub_assign(&mut self, other: Self) -> MathResult<()> {
        *self = self.checked_sub(other)?;
        Ok(())
    }

    #[inline]
    fn checked_mul_assign(&mut self, other: Self) -> MathResult<()> {
        *self = self.checked_mul(other)?;
        Ok(())
    }

    #[inline]
    fn checked_div_assign(&mut self, other: Self) -> MathResult<()> {
        *self = self.checked_div(other)?;
        Ok(())
    }
}

// ------------------------------ primitive types ------------------------------

macro_rules! impl_number {
    (@overflow $t:ty, $($op:ident),+) => {
        paste! {
            $(
                fn [<checked_ $op>](self, other: Self) -> MathResult<Self> {
                    <$t>::[<checked_ $op>](self, other)
                        .ok_or_else(|| MathError::[<overflow_ $op>](self, other))
                }
            )+
        }
    };
    ($t:ty) => {
        impl NumberConst for $t {
            const MAX: Self = <$t>::MAX;
            const ONE: Self = <$t>::ONE;
            const ZERO: Self = <$t>::ZERO;
        }

        impl IsZero for $t {
            #[inline]
            fn is_zero(&self) -> bool {
                *self == <$t>::ZERO
            }
        }

        impl Number for $t {
            impl_number!(@overflow $t, add, sub, mul);

            fn checked_div(self, other: Self) -> MathResult<Self> {
                <$t>::checked_div(self, other).ok_or_else(|| MathError::division_by_zero(self))
            }

            fn checked_rem(self, other: Self) -> MathResult<Self> {
                <$t>::checked_rem(self, other).ok_or_else(|| MathError::remainder_by_zero(self))
            }

            /// Compute a _positive_ integer's _floored_ square root using the
            /// [Babylonian method](https://en.wikipedia.org/wiki/Methods_of_computing_square_roots#Heron's_method).
            fn checked_sqrt(self) -> MathResult<Self> {
                if self.is_zero() {
                    return Ok(<$t>::ZERO);
                }

                let log2 = <$t>::checked_ilog2(self).ok_or_else(MathError::zero_log)?;
                let mut x0 = <$t>::ONE << (log2 / 2 + 1);

                if x0 > <$t>::ZERO {
                    let mut x1 = (x0 + self / x0) >> 1;

                    while x1 < x0 {
                        x0 = x1;
                        x1 = (x0 + self / x0) >> 1;
                    }

                    return Ok(x0);
                }

                Ok(self)
            }

            fn saturating_add(self, other: Self) -> Self {
                <$t>::saturating_add(self, other)
            }

            fn saturating_sub(self, other: Self) -> Self {
                <$t>::saturating_sub(self, other)
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_number!($t);
        )+
    };
}

impl_number!(U256, U512);
