use {
    crate::{Int, MathError, MathResult, Number, Uint256, Uint512},
    bnum::{
        cast::CastFrom,
        types::{U256, U512},
    },
};

/// Describes a number that can be converted into a wider type without loss.
pub trait NextNumber {
    type Next;

    fn into_next(self) -> Self::Next;
}

/// Describes a number that can be converted into a narrower type, if the value
/// fits.
pub trait PrevNumber {
    type Prev;

    fn checked_into_prev(self) -> MathResult<Self::Prev>;
}

impl NextNumber for Uint256 {
    type Next = Uint512;

    fn into_next(self) -> Self::Next {
        Int::new(U512::cast_from(self.0))
    }
}

impl PrevNumber for Uint512 {
    type Prev = Uint256;

    fn checked_into_prev(self) -> MathResult<Self::Prev> {
        if self.0 > U512::cast_from(U256::MAX) {
            return Err(MathError::overflow_conversion::<_, Uint256>(self));
        }

        Ok(Int::new(U256::cast_from(self.0)))
    }
}

impl Uint256 {
    /// Multiply two numbers into the wider type, which never overflows.
    pub fn checked_full_mul(self, rhs: Self) -> MathResult<Uint512> {
        self.into_next().checked_mul(rhs.into_next())
    }
}

/// Describes the `self * numerator / denominator` operation, computed through
/// a wider intermediate so that the product doesn't overflow.
pub trait MultiplyRatio: Sized {
    fn checked_multiply_ratio_floor(self, numerator: Self, denominator: Self)
        -> MathResult<Self>;
}

impl MultiplyRatio for Uint256 {
    fn checked_multiply_ratio_floor(
        self,
        numerator: Self,
        denominator: Self,
    ) -> MathResult<Self> {
        self.checked_full_mul(numerator)?
            .checked_div(denominator.into_next())?
            .checked_into_prev()
    }
}

// ----------------------------------- tests -----------------------------------
