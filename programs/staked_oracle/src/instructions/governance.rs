use anchor_lang::prelude::*;

use crate::{
    events::{ReportAccepted, ReporterSlashed},
    utils::{pay_from_vault, releasable_lamports},
    Vote, STAKE_VAULT_SEED,
};

/// decision: 1 = accept the current report, 0 = reject and slash.
pub fn vote(ctx: Context<Vote>, decision: u8) -> Result<()> {
    let governance = ctx.accounts.governance.key();
    let feed_key = ctx.accounts.feed.key();

    let Some(slashed) = ctx.accounts.feed.apply_vote(&governance, decision)? else {
        emit!(ReportAccepted {
            feed: feed_key,
            num_reports: ctx.accounts.feed.num_reports,
        });
        return Ok(());
    };

    // slash: stake is closed out to governance
    let vault_ai = ctx.accounts.vault.to_account_info();
    let rent_reserve = Rent::get()?.minimum_balance(0);
    let amount = releasable_lamports(vault_ai.lamports(), rent_reserve);

    let vault_bump = ctx.accounts.feed.vault_bump;
    let signer_seeds: &[&[u8]] = &[STAKE_VAULT_SEED, feed_key.as_ref(), &[vault_bump]];

    pay_from_vault(
        &vault_ai,
        &ctx.accounts.governance.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        signer_seeds,
        amount,
    )?;

    emit!(ReporterSlashed {
        feed: feed_key,
        reporter: slashed,
        governance,
        amount,
    });

    Ok(())
}
