use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod escrow;
pub mod events;
pub mod instructions;
pub mod settlement;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("4S7uT6voKBzBQDLU16R9jWbGoj5upqpzAdeLStKLz7gn");

#[program]
pub mod staked_oracle {
    use super::*;
    use crate::instructions::{auction, feed, governance, report, staking};

    // ----------------------------
    // Feed: one staked reporter, one governance
    // ----------------------------
    pub fn create_feed(
        ctx: Context<CreateFeed>,
        governance: Pubkey,
        query_id: Vec<u8>,
        query_data: Vec<u8>,
        stake_amount: u64,
    ) -> Result<()> {
        feed::create_feed(ctx, governance, query_id, query_data, stake_amount)
    }

    pub fn stake(ctx: Context<Stake>) -> Result<()> {
        staking::stake(ctx)
    }

    pub fn report(ctx: Context<Report>, query_id: Vec<u8>, value: Vec<u8>) -> Result<()> {
        report::report(ctx, query_id, value)
    }

    pub fn vote(ctx: Context<Vote>, decision: u8) -> Result<()> {
        governance::vote(ctx, decision)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        staking::withdraw(ctx)
    }

    // ----------------------------
    // Prediction auction against a feed
    // ----------------------------
    pub fn create_auction(ctx: Context<CreateAuction>, oracle_query_id: Vec<u8>) -> Result<()> {
        auction::create_auction(ctx, oracle_query_id)
    }

    pub fn bid(ctx: Context<Bid>, prediction: u64) -> Result<()> {
        auction::bid(ctx, prediction)
    }

    pub fn settle(ctx: Context<Settle>) -> Result<()> {
        auction::settle(ctx)
    }
}
