use anchor_lang::prelude::*;

use crate::{constants::MAX_BPS, errors::SalePoolError};

/// Quote cost of `sale_units` sale base units at `price` quote base units
/// per whole sale token. The division by `10^sale_decimals` truncates
/// toward zero, so the buyer never pays a fraction of a quote unit more
/// than the exact price.
pub fn quote_cost(sale_units: u64, price: u64, sale_decimals: u8) -> Result<u64> {
    let scale = 10u128
        .checked_pow(sale_decimals as u32)
        .ok_or(SalePoolError::MathOverflow)?;

    let cost = (sale_units as u128)
        .checked_mul(price as u128)
        .ok_or(SalePoolError::MathOverflow)?
        .checked_div(scale)
        .ok_or(SalePoolError::MathOverflow)?;

    u64::try_from(cost).map_err(|_| error!(SalePoolError::MathOverflow))
}

/// Share of `amount` at `rate_bps` basis points, truncated.
pub fn bps_share(amount: u64, rate_bps: u16) -> Result<u64> {
    require!(rate_bps <= MAX_BPS, SalePoolError::InvalidRewardRate);

    let share = (amount as u128)
        .checked_mul(rate_bps as u128)
        .ok_or(SalePoolError::MathOverflow)?
        .checked_div(MAX_BPS as u128)
        .ok_or(SalePoolError::MathOverflow)?;

    // rate_bps <= MAX_BPS keeps the share at or below `amount`
    Ok(share as u64)
}
