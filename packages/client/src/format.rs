use std::str::FromStr;

use cosmwasm_std::{Decimal256, Uint128};
use ovault_helpers::decimals::{scale_by, NORMALIZED_DECIMALS};

use crate::error::{ClientError, ClientResult};

fn parse_decimal(value: &str) -> ClientResult<Decimal256> {
    Decimal256::from_str(value).map_err(|_| ClientError::InvalidNumber {
        value: value.to_string(),
    })
}

/// Renders a base-unit amount with `decimals` places, keeping at least one
/// fractional digit: `1500000` with 6 decimals is `"1.5"`, `1000000` is `"1.0"`.
pub fn format_units(amount: Uint128, decimals: u8) -> ClientResult<String> {
    let value = Decimal256::from_atomics(amount, decimals.into())?.to_string();
    if value.contains('.') {
        Ok(value)
    } else {
        Ok(format!("{value}.0"))
    }
}

/// Parses a human amount such as `"12.5"` into base units.
pub fn parse_units(value: &str, decimals: u8) -> ClientResult<Uint128> {
    let trimmed = value.trim();
    let normalized = Uint128::try_from(parse_decimal(trimmed)?.atomics()).map_err(|_| {
        ClientError::InvalidNumber {
            value: trimmed.to_string(),
        }
    })?;
    let units = scale_by(normalized, decimals, NORMALIZED_DECIMALS)?;
    if scale_by(units, NORMALIZED_DECIMALS, decimals)? != normalized {
        return Err(ClientError::TooManyDecimals {
            value: trimmed.to_string(),
            decimals,
        });
    }
    Ok(units)
}

/// Thousands separators and exactly `decimals` fractional digits, truncating
/// anything beyond.
pub fn format_currency(value: &str, decimals: u8) -> ClientResult<String> {
    let value = parse_decimal(value.trim())?.to_string();
    let (whole, fraction) = value.split_once('.').unwrap_or((value.as_str(), ""));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if decimals == 0 {
        return Ok(grouped);
    }
    let decimals = decimals as usize;
    let fraction: String = fraction.chars().take(decimals).collect();
    Ok(format!("{grouped}.{fraction:0<decimals$}"))
}
