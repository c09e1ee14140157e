use anchor_lang::prelude::*;

use crate::{
    constants::INITIAL_VERSION,
    errors::OracleError,
    events::FeedCreated,
    state::StakingStatus,
    utils::validate_query,
    CreateFeed,
};

pub fn create_feed(
    ctx: Context<CreateFeed>,
    governance: Pubkey,
    query_id: Vec<u8>,
    query_data: Vec<u8>,
    stake_amount: u64,
) -> Result<()> {
    validate_query(&query_id, &query_data)?;
    require!(stake_amount > 0, OracleError::InvalidStakeAmount);
    require!(governance != Pubkey::default(), OracleError::InvalidGovernance);

    let feed_key = ctx.accounts.feed.key();
    let feed = &mut ctx.accounts.feed;

    feed.creator = ctx.accounts.creator.key();
    feed.governance = governance;
    feed.query_id = query_id;
    feed.query_data = query_data;

    feed.reporter = Pubkey::default();
    feed.staking_status = StakingStatus::Unstaked;
    feed.stake_amount = stake_amount;

    feed.num_reports = 0;
    feed.value = Vec::new();
    feed.reported_slot = 0;

    feed.bump = ctx.bumps.feed;
    feed.vault_bump = ctx.bumps.vault;
    feed.version = INITIAL_VERSION;

    feed.check_invariants()?;

    emit!(FeedCreated {
        feed: feed_key,
        governance,
        stake_amount,
    });

    Ok(())
}
