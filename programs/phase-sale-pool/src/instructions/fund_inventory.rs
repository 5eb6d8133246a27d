use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::*,
    errors::SalePoolError,
    events::InventoryFunded,
    ledger,
    state::SalePool,
};

#[derive(Accounts)]
#[instruction(pool_id: [u8; 32])]
pub struct FundInventory<'info> {
    #[account(
        seeds = [POOL_SEED, pool_id.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, SalePool>>,

    #[account(
        mut,
        constraint = sale_vault.key() == pool.sale_vault
    )]
    pub sale_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = funder_sale_account.mint == pool.sale_mint @ SalePoolError::InvalidMint
    )]
    pub funder_sale_account: Box<Account<'info, TokenAccount>>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn fund_inventory(ctx: Context<FundInventory>, pool_id: [u8; 32], amount: u64) -> Result<()> {
    require!(amount > 0, SalePoolError::InvalidAmount);

    ledger::transfer_from_holder(
        &ctx.accounts.token_program,
        &ctx.accounts.funder_sale_account,
        &ctx.accounts.sale_vault,
        &ctx.accounts.funder,
        amount,
    )?;

    ctx.accounts.sale_vault.reload()?;

    emit!(InventoryFunded {
        pool_id,
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance_after: ctx.accounts.sale_vault.amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
