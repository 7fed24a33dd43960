use {
    crate::{IsZero, MathError, MathResult, Number, NumberConst},
    bnum::types::{U256, U512},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    std::{
        fmt::{self, Display},
        iter::Sum,
        marker::PhantomData,
        ops::{Add, AddAssign, Div, Mul, Rem, Sub, SubAssign},
        str::FromStr,
    },
};

// ------------------------------- generic type --------------------------------

#[derive(
    BorshSerialize,
    BorshDeserialize,
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub struct Int<U>(pub(crate) U);

impl<U> Int<U> {
    pub const fn new(value: U) -> Self {
        Self(value)
    }
}

impl<U> NumberConst for Int<U>
where
    U: NumberConst,
{
    const MAX: Self = Self(U::MAX);
    const ONE: Self = Self(U::ONE);
    const ZERO: Self = Self(U::ZERO);
}

impl<U> IsZero for Int<U>
where
    U: IsZero,
{
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<U> Number for Int<U>
where
    U: Number,
{
    fn checked_add(self, other: Self) -> MathResult<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    fn checked_sub(self, other: Self) -> MathResult<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    fn checked_mul(self, other: Self) -> MathResult<Self> {
        self.0.checked_mul(other.0).map(Self)
    }

    fn checked_div(self, other: Self) -> MathResult<Self> {
        self.0.checked_div(other.0).map(Self)
    }

    fn checked_rem(self, other: Self) -> MathResult<Self> {
        self.0.checked_rem(other.0).map(Self)
    }

    fn checked_sqrt(self) -> MathResult<Self> {
        self.0.checked_sqrt().map(Self)
    }

    fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl<U> FromStr for Int<U>
where
    U: FromStr,
    <U as FromStr>::Err: ToString,
{
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U::from_str(s)
            .map(Self)
            .map_err(|err| MathError::parse_number::<Self, _, _>(s, err))
    }
}

impl<U> Display for Int<U>
where
    U: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<U> ser::Serialize for Int<U>
where
    Int<U>: Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, U> de::Deserialize<'de> for Int<U>
where
    Int<U>: FromStr,
    <Int<U> as FromStr>::Err: Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(IntVisitor::<U>::new())
    }
}

struct IntVisitor<U> {
    _marker: PhantomData<U>,
}

impl<U> IntVisitor<U> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<U> de::Visitor<'_> for IntVisitor<U>
where
    Int<U>: FromStr,
    <Int<U> as FromStr>::Err: Display,
{
    type Value = Int<U>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string-encoded unsigned integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Int::<U>::from_str(v).map_err(E::custom)
    }
}

// The operator impls panic on overflow. Reserve math always goes through the
// `checked_*` methods; these are for tests and constants.

impl<U> Add for Int<U>
where
    U: Number,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Sub for Int<U>
where
    U: Number,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Mul for Int<U>
where
    U: Number,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Div for Int<U>
where
    U: Number,
{
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Rem for Int<U>
where
    U: Number,
{
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> AddAssign for Int<U>
where
    U: Number,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<U> SubAssign for Int<U>
where
    U: Number,
{
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<U> Sum for Int<U>
where
    U: Number + NumberConst,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

// ------------------------------ concrete types -------------------------------

macro_rules! generate_int {
    (
        name       = $name:ident,
        inner_type = $inner:ty,
        digits     = $digits:literal,
        doc        = $doc:literal,
    ) => {
        #[doc = $doc]
        pub type $name = Int<$inner>;

        impl $name {
            pub const fn new_from_u64(value: u64) -> Self {
                let mut digits = [0u64; $digits];
                digits[0] = value;
                Self(<$inner>::from_digits(digits))
            }

            pub fn new_from_u128(value: u128) -> Self {
                Self(<$inner>::from(value))
            }
        }

        impl From<u128> for $name {
            fn from(value: u128) -> Self {
                Self::new_from_u128(value)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self::new_from_u64(value)
            }
        }
    };
}

generate_int! {
    name       = Uint256,
    inner_type = U256,
    digits     = 4,
    doc        = "256-bit unsigned integer.",
}

generate_int! {
    name       = Uint512,
    inner_type = U512,
    digits     = 8,
    doc        = "512-bit unsigned integer.",
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case("0", Uint256::ZERO; "zero")]
    #[test_case("1000", Uint256::new_from_u64(1000); "thousand")]
    #[test_case(
        "1000000000000000000999",
        Uint256::new_from_u128(1_000_000_000_000_000_000_999);
        "first mint supply"
    )]
    fn parsing_works(input: &str, expect: Uint256) {
        assert_eq!(input.parse::<Uint256>().unwrap(), expect);
        assert_eq!(expect.to_string(), input);
    }

    #[test]
    fn parsing_rejects_garbage() {
        assert!(matches!(
            "12a".parse::<Uint256>(),
            Err(MathError::ParseNumber { .. })
        ));
        assert!("-1".parse::<Uint256>().is_err());
    }

    #[test]
    fn serde_uses_strings() {
        let value = Uint256::new_from_u128(4504094631483166516);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"4504094631483166516\"");
        assert_eq!(serde_json::from_str::<Uint256>(&json).unwrap(), value);
    }

    #[test]
    fn checked_ops_report_overflow() {
        assert!(matches!(
            Uint256::MAX.checked_add(Uint256::ONE),
            Err(MathError::OverflowAdd { .. })
        ));
        assert!(matches!(
            Uint256::ZERO.checked_sub(Uint256::ONE),
            Err(MathError::OverflowSub { .. })
        ));
        assert!(matches!(
            Uint256::MAX.checked_mul(Uint256::new_from_u64(2)),
            Err(MathError::OverflowMul { .. })
        ));
        assert!(matches!(
            Uint256::ONE.checked_div(Uint256::ZERO),
            Err(MathError::DivisionByZero { .. })
        ));
        assert_eq!(
            Uint256::new_from_u64(5).saturating_sub(Uint256::new_from_u64(7)),
            Uint256::ZERO
        );
    }

    #[test_case(0, 0)]
    #[test_case(1, 1)]
    #[test_case(3, 1)]
    #[test_case(4, 2)]
    #[test_case(1_000_000, 1000)]
    #[test_case(1_000_001, 1000)]
    #[test_case(u64::MAX, 4294967295)]
    fn sqrt_works(square: u64, root: u64) {
        assert_eq!(
            Uint256::new_from_u64(square).checked_sqrt().unwrap(),
            Uint256::new_from_u64(root)
        );
    }

    #[test]
    fn sqrt_of_max_fits() {
        let root = Uint256::MAX.checked_sqrt().unwrap();
        assert!(root.checked_mul(root).is_ok());
        assert!((root + Uint256::ONE).checked_mul(root + Uint256::ONE).is_err());
    }
}
