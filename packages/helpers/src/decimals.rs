use cosmwasm_std::{StdError, StdResult, Uint128};

/// Decimals every internal value is normalized to.
pub const NORMALIZED_DECIMALS: u8 = 18;

/// Re-expresses `amount` given in `from` decimals in `to` decimals,
/// truncating when precision is lost.
pub fn scale_by(amount: Uint128, to: u8, from: u8) -> StdResult<Uint128> {
    if to == from {
        return Ok(amount);
    }
    if to > from {
        let factor = pow10(to - from)?;
        Ok(amount.checked_mul(factor)?)
    } else {
        let factor = pow10(from - to)?;
        Ok(amount.checked_div(factor)?)
    }
}

pub fn normalize(amount: Uint128, decimals: u8) -> StdResult<Uint128> {
    scale_by(amount, NORMALIZED_DECIMALS, decimals)
}

pub fn denormalize(amount: Uint128, decimals: u8) -> StdResult<Uint128> {
    scale_by(amount, decimals, NORMALIZED_DECIMALS)
}

fn pow10(exp: u8) -> StdResult<Uint128> {
    Uint128::from(10u128)
        .checked_pow(exp as u32)
        .map_err(|_| StdError::generic_err(format!("Decimals difference too large: {exp}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_up_and_down() {
        assert_eq!(
            scale_by(Uint128::new(30_000_000_000), 18, 6).unwrap(),
            Uint128::new(30_000_000_000_000_000_000_000)
        );
        assert_eq!(
            scale_by(Uint128::new(1_234_567_890_123_456_789), 6, 18).unwrap(),
            Uint128::new(1_234_567)
        );
        assert_eq!(
            scale_by(Uint128::new(42), 8, 8).unwrap(),
            Uint128::new(42)
        );
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(scale_by(Uint128::MAX, 18, 6).is_err());
        assert!(scale_by(Uint128::one(), 200, 0).is_err());
    }
}
