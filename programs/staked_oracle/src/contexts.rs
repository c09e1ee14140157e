// programs/staked_oracle/src/contexts.rs

use anchor_lang::prelude::*;

use crate::state::{Auction, Feed};
use crate::utils::query_seed;

// ----------------------------
// Feed (stake / report / vote)
// ----------------------------

#[derive(Accounts)]
#[instruction(governance: Pubkey, query_id: Vec<u8>)]
pub struct CreateFeed<'info> {
    #[account(
        init,
        payer = creator,
        space = 8 + Feed::INIT_SPACE,
        seeds = [crate::FEED_SEED, creator.key().as_ref(), query_seed(&query_id).as_ref()],
        bump
    )]
    pub feed: Account<'info, Feed>,

    /// CHECK: system-owned vault PDA, holds the reporter stake, no data
    #[account(
        init,
        payer = creator,
        space = 0,
        owner = anchor_lang::solana_program::system_program::ID,
        seeds = [crate::STAKE_VAULT_SEED, feed.key().as_ref()],
        bump
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(
        mut,
        seeds = [crate::FEED_SEED, feed.creator.as_ref(), query_seed(&feed.query_id).as_ref()],
        bump = feed.bump
    )]
    pub feed: Account<'info, Feed>,

    /// CHECK: System-owned PDA vault. Address enforced by seeds/bump.
    #[account(
        seeds = [crate::STAKE_VAULT_SEED, feed.key().as_ref()],
        bump = feed.vault_bump
    )]
    pub vault: UncheckedAccount<'info>,

    pub reporter: Signer<'info>,

    /// CHECK: instruction sysvar (for escrow introspection). Address enforced.
    #[account(address = anchor_lang::solana_program::sysvar::instructions::ID)]
    pub instructions: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct Report<'info> {
    #[account(
        mut,
        seeds = [crate::FEED_SEED, feed.creator.as_ref(), query_seed(&feed.query_id).as_ref()],
        bump = feed.bump
    )]
    pub feed: Account<'info, Feed>,

    pub reporter: Signer<'info>,
}

#[derive(Accounts)]
pub struct Vote<'info> {
    #[account(
        mut,
        seeds = [crate::FEED_SEED, feed.creator.as_ref(), query_seed(&feed.query_id).as_ref()],
        bump = feed.bump
    )]
    pub feed: Account<'info, Feed>,

    /// CHECK: System-owned PDA vault. Address enforced by seeds/bump.
    #[account(
        mut,
        seeds = [crate::STAKE_VAULT_SEED, feed.key().as_ref()],
        bump = feed.vault_bump
    )]
    pub vault: UncheckedAccount<'info>,

    /// Receives the slashed stake on rejection.
    #[account(mut)]
    pub governance: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [crate::FEED_SEED, feed.creator.as_ref(), query_seed(&feed.query_id).as_ref()],
        bump = feed.bump
    )]
    pub feed: Account<'info, Feed>,

    /// CHECK: System-owned PDA vault. Address enforced by seeds/bump.
    #[account(
        mut,
        seeds = [crate::STAKE_VAULT_SEED, feed.key().as_ref()],
        bump = feed.vault_bump
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub reporter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

// ----------------------------
// Auction (bid / settle)
// ----------------------------

#[derive(Accounts)]
pub struct CreateAuction<'info> {
    pub oracle_feed: Account<'info, Feed>,

    #[account(
        init,
        payer = creator,
        space = 8 + Auction::INIT_SPACE,
        seeds = [crate::AUCTION_SEED, creator.key().as_ref(), oracle_feed.key().as_ref()],
        bump
    )]
    pub auction: Account<'info, Auction>,

    /// CHECK: system-owned vault PDA, holds the pooled bids, no data
    #[account(
        init,
        payer = creator,
        space = 0,
        owner = anchor_lang::solana_program::system_program::ID,
        seeds = [crate::BID_VAULT_SEED, auction.key().as_ref()],
        bump
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Bid<'info> {
    #[account(
        mut,
        seeds = [crate::AUCTION_SEED, auction.creator.as_ref(), auction.oracle_feed.as_ref()],
        bump = auction.bump
    )]
    pub auction: Account<'info, Auction>,

    /// CHECK: System-owned PDA vault. Address enforced by seeds/bump.
    #[account(
        seeds = [crate::BID_VAULT_SEED, auction.key().as_ref()],
        bump = auction.vault_bump
    )]
    pub vault: UncheckedAccount<'info>,

    pub bidder: Signer<'info>,

    /// CHECK: instruction sysvar (for escrow introspection). Address enforced.
    #[account(address = anchor_lang::solana_program::sysvar::instructions::ID)]
    pub instructions: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct Settle<'info> {
    #[account(
        mut,
        close = creator,
        has_one = creator,
        has_one = oracle_feed,
        seeds = [crate::AUCTION_SEED, auction.creator.as_ref(), auction.oracle_feed.as_ref()],
        bump = auction.bump
    )]
    pub auction: Account<'info, Auction>,

    pub oracle_feed: Account<'info, Feed>,

    /// CHECK: System-owned PDA vault. Address enforced by seeds/bump.
    #[account(
        mut,
        seeds = [crate::BID_VAULT_SEED, auction.key().as_ref()],
        bump = auction.vault_bump
    )]
    pub vault: UncheckedAccount<'info>,

    /// CHECK: must equal the closest bidder; checked in the handler.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    /// Receives the auction account rent.
    #[account(mut)]
    pub creator: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
