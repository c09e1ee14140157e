use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke_signed, system_instruction};
use solana_sha256_hasher::hashv;

use crate::{
    constants::{MAX_QUERY_DATA_LEN, MAX_QUERY_ID_LEN, QUERY_SEED_TAG},
    errors::OracleError,
};

// -------------------------
// Query ids
// -------------------------

/// Query ids can exceed the 32-byte seed limit, so feeds are keyed by hash.
pub fn query_seed(query_id: &[u8]) -> [u8; 32] {
    hashv(&[QUERY_SEED_TAG, query_id]).to_bytes()
}

pub fn validate_query(query_id: &[u8], query_data: &[u8]) -> Result<()> {
    require!(
        !query_id.is_empty() && query_id.len() <= MAX_QUERY_ID_LEN,
        OracleError::InvalidQueryId
    );
    require!(query_data.len() <= MAX_QUERY_DATA_LEN, OracleError::InvalidQueryData);
    Ok(())
}

// -------------------------
// Vault payouts
// -------------------------

/// Vault balance above the rent-exempt reserve. This is what stakes add to
/// and what a close-out hands back, leaving the vault alive for the next stake.
pub fn releasable_lamports(vault_balance: u64, rent_reserve: u64) -> u64 {
    vault_balance.saturating_sub(rent_reserve)
}

/// Signed system transfer out of a system-owned vault PDA.
pub fn pay_from_vault<'info>(
    vault: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    vault_seeds: &[&[u8]],
    lamports: u64,
) -> Result<()> {
    if lamports == 0 {
        return Ok(());
    }

    let ix = system_instruction::transfer(vault.key, recipient.key, lamports);
    invoke_signed(
        &ix,
        &[vault.clone(), recipient.clone(), system_program.clone()],
        &[vault_seeds],
    )?;

    msg!("vault payout: {} lamports to {}", lamports, recipient.key);
    Ok(())
}
