use anchor_lang::prelude::*;

use crate::{
    escrow::require_preceding_transfer,
    events::{ReporterStaked, StakeWithdrawn},
    utils::{pay_from_vault, releasable_lamports},
    Stake, Withdraw, STAKE_VAULT_SEED,
};

// Tx layout must be: [ system_transfer(reporter -> vault, stake_amount), stake ]
pub fn stake(ctx: Context<Stake>) -> Result<()> {
    let reporter = ctx.accounts.reporter.key();
    let vault = ctx.accounts.vault.key();
    let feed_key = ctx.accounts.feed.key();

    let feed = &mut ctx.accounts.feed;

    // exclusivity first: a staked feed rejects whatever the bundle carries
    feed.ensure_stakeable()?;

    let ix_sys = ctx.accounts.instructions.to_account_info();
    require_preceding_transfer(&ix_sys, &reporter, &vault, feed.stake_amount)?;

    feed.begin_stake(reporter)?;

    emit!(ReporterStaked {
        feed: feed_key,
        reporter,
        amount: feed.stake_amount,
        slot: Clock::get()?.slot,
    });

    Ok(())
}

pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let reporter = ctx.accounts.reporter.key();
    let feed_key = ctx.accounts.feed.key();

    ctx.accounts.feed.end_stake(&reporter)?;

    // close-out: everything above the vault's rent reserve goes back
    let vault_ai = ctx.accounts.vault.to_account_info();
    let rent_reserve = Rent::get()?.minimum_balance(0);
    let amount = releasable_lamports(vault_ai.lamports(), rent_reserve);

    let vault_bump = ctx.accounts.feed.vault_bump;
    let signer_seeds: &[&[u8]] = &[STAKE_VAULT_SEED, feed_key.as_ref(), &[vault_bump]];

    pay_from_vault(
        &vault_ai,
        &ctx.accounts.reporter.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        signer_seeds,
        amount,
    )?;

    emit!(StakeWithdrawn {
        feed: feed_key,
        reporter,
        amount,
    });

    Ok(())
}
