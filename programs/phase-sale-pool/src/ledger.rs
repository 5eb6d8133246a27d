use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::SalePoolError;

/// Why the token program would refuse a transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferRejection {
    InsufficientBalance,
    Unauthorized,
    Frozen,
}

impl TransferRejection {
    pub fn code(&self) -> u8 {
        match self {
            TransferRejection::InsufficientBalance => 1,
            TransferRejection::Unauthorized => 2,
            TransferRejection::Frozen => 3,
        }
    }
}

/// The parts of a source token account that decide whether a transfer
/// can go through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferSource {
    pub owner: Pubkey,
    pub amount: u64,
    pub delegate: Option<Pubkey>,
    pub delegated_amount: u64,
    pub is_frozen: bool,
}

impl TransferSource {
    pub fn from_spl(account: &spl_token::state::Account) -> Self {
        Self {
            owner: account.owner,
            amount: account.amount,
            delegate: account.delegate.into(),
            delegated_amount: account.delegated_amount,
            is_frozen: account.is_frozen(),
        }
    }

    /// Mirror of the token program's own transfer checks, run before the
    /// CPI so the caller gets a typed failure instead of a raw program error.
    pub fn check(&self, authority: &Pubkey, amount: u64) -> std::result::Result<(), TransferRejection> {
        if self.is_frozen {
            return Err(TransferRejection::Frozen);
        }
        if self.amount < amount {
            return Err(TransferRejection::InsufficientBalance);
        }
        if self.owner == *authority {
            return Ok(());
        }
        match self.delegate {
            Some(delegate) if delegate == *authority => {
                if self.delegated_amount < amount {
                    Err(TransferRejection::InsufficientBalance)
                } else {
                    Ok(())
                }
            }
            _ => Err(TransferRejection::Unauthorized),
        }
    }
}

impl From<&TokenAccount> for TransferSource {
    fn from(account: &TokenAccount) -> Self {
        Self::from_spl(account)
    }
}

/// Validate a pending transfer, logging the rejection reason.
pub fn authorize(from: &Account<TokenAccount>, authority: &Pubkey, amount: u64) -> Result<()> {
    TransferSource::from(&**from)
        .check(authority, amount)
        .map_err(|rejection| {
            msg!(
                "transfer of {} from {} rejected: {:?} (code {})",
                amount,
                from.key(),
                rejection,
                rejection.code()
            );
            error!(SalePoolError::PaymentFailed)
        })
}

/// Source and destination must be different token accounts.
pub fn require_distinct(from: &Pubkey, to: &Pubkey) -> Result<()> {
    require!(from != to, SalePoolError::InvalidDestination);
    Ok(())
}

/// Move `amount` out of a wallet-owned token account signed by its holder.
pub fn transfer_from_holder<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    authority: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    require_distinct(&from.key(), &to.key())?;
    authorize(from, &authority.key(), amount)?;

    token::transfer(
        CpiContext::new(
            token_program.to_account_info(),
            Transfer {
                from: from.to_account_info(),
                to: to.to_account_info(),
                authority: authority.to_account_info(),
            },
        ),
        amount,
    )
}

/// Move `amount` out of a pool-held token account, signed by the pool
/// authority PDA.
pub fn transfer_from_pool<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    pool_authority: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    require_distinct(&from.key(), &to.key())?;
    authorize(from, &pool_authority.key(), amount)?;

    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: from.to_account_info(),
                to: to.to_account_info(),
                authority: pool_authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}
