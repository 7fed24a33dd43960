use {
    crate::{MathError, MathResult, Number, NumberConst, Uint256},
    std::str::FromStr,
};

/// Number of decimal places of both assets and of the share token.
pub const DECIMALS: u32 = 18;

impl Uint256 {
    /// Return `10 ^ decimals`.
    pub fn checked_ten_pow(decimals: u32) -> MathResult<Self> {
        let ten = Self::new_from_u64(10);
        (0..decimals).try_fold(Self::ONE, |acc, _| acc.checked_mul(ten))
    }

    /// Parse a human-readable decimal string, e.g. `"1.5"`, into base units
    /// with the given number of decimal places.
    ///
    /// Fails if the string has more fractional digits than `decimals`; no
    /// rounding is ever performed.
    pub fn checked_from_units(s: &str, decimals: u32) -> MathResult<Self> {
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(MathError::parse_number::<Self, _, _>(s, "empty number"));
        }

        if fraction.len() > decimals as usize {
            return Err(MathError::parse_number::<Self, _, _>(
                s,
                format!("more than {decimals} fractional digits"),
            ));
        }

        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(MathError::parse_number::<Self, _, _>(s, "invalid digit"));
        }

        let whole = if whole.is_empty() {
            Self::ZERO
        } else {
            Self::from_str(whole)?
        };

        let fraction = if fraction.is_empty() {
            Self::ZERO
        } else {
            let padding = decimals - fraction.len() as u32;
            Self::from_str(fraction)?.checked_mul(Self::checked_ten_pow(padding)?)?
        };

        whole
            .checked_mul(Self::checked_ten_pow(decimals)?)?
            .checked_add(fraction)
    }

    /// Format base units as a human-readable decimal string, trimming trailing
    /// zeros of the fractional part.
    pub fn to_units_string(self, decimals: u32) -> MathResult<String> {
        let unit = Self::checked_ten_pow(decimals)?;
        let whole = self.checked_div(unit)?;
        let fraction = self.checked_rem(unit)?;

        if fraction == Self::ZERO {
            return Ok(whole.to_string());
        }

        let fraction = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);

        Ok(format!("{whole}.{}", fraction.trim_end_matches('0')))
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case("1000", "1000000000000000000000"; "whole")]
    #[test_case("1.5", "1500000000000000000"; "fraction")]
    #[test_case("0.001", "1000000000000000"; "small fraction")]
    #[test_case(".25", "250000000000000000"; "no whole part")]
    #[test_case("7.", "7000000000000000000"; "trailing dot")]
    #[test_case("0.000000000000000001", "1"; "one unit")]
    fn parsing_units_works(input: &str, expect: &str) {
        assert_eq!(
            Uint256::checked_from_units(input, DECIMALS).unwrap(),
            expect.parse::<Uint256>().unwrap()
        );
    }

    #[test_case(""; "empty")]
    #[test_case("."; "only dot")]
    #[test_case("1.0000000000000000001"; "too precise")]
    #[test_case("1,5"; "comma")]
    #[test_case("-1"; "negative")]
    fn parsing_units_fails(input: &str) {
        assert!(matches!(
            Uint256::checked_from_units(input, DECIMALS),
            Err(MathError::ParseNumber { .. })
        ));
    }

    #[test_case("1000000000000000000000", "1000"; "whole")]
    #[test_case("4504094631483166516", "4.504094631483166516"; "swap output")]
    #[test_case("1500000000000000000", "1.5"; "trimmed")]
    #[test_case("1", "0.000000000000000001"; "one unit")]
    #[test_case("0", "0"; "zero")]
    fn formatting_units_works(input: &str, expect: &str) {
        let value = input.parse::<Uint256>().unwrap();
        assert_eq!(value.to_units_string(DECIMALS).unwrap(), expect);
    }
}
