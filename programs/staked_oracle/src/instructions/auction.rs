use anchor_lang::prelude::*;

use crate::{
    constants::{BID_AMOUNT_LAMPORTS, INITIAL_VERSION, MIN_SETTLEMENT_BIDDERS},
    errors::OracleError,
    escrow::require_preceding_transfer,
    events::{AuctionCreated, AuctionSettled, BidPlaced},
    settlement::{closest_bid, decode_price},
    utils::{pay_from_vault, validate_query},
    Bid, CreateAuction, Settle, BID_VAULT_SEED,
};

pub fn create_auction(ctx: Context<CreateAuction>, oracle_query_id: Vec<u8>) -> Result<()> {
    validate_query(&oracle_query_id, &[])?;
    require!(
        oracle_query_id == ctx.accounts.oracle_feed.query_id,
        OracleError::OracleQueryMismatch
    );

    let auction_key = ctx.accounts.auction.key();
    let oracle_feed = ctx.accounts.oracle_feed.key();

    let auction = &mut ctx.accounts.auction;
    auction.creator = ctx.accounts.creator.key();
    auction.oracle_feed = oracle_feed;
    auction.oracle_query_id = oracle_query_id;
    auction.bid_amount = BID_AMOUNT_LAMPORTS;
    auction.bidders = Vec::new();
    auction.bump = ctx.bumps.auction;
    auction.vault_bump = ctx.bumps.vault;
    auction.version = INITIAL_VERSION;

    emit!(AuctionCreated {
        auction: auction_key,
        oracle_feed,
        bid_amount: BID_AMOUNT_LAMPORTS,
    });

    Ok(())
}

// Tx layout must be: [ system_transfer(bidder -> vault, bid_amount), bid ]
pub fn bid(ctx: Context<Bid>, prediction: u64) -> Result<()> {
    let bidder = ctx.accounts.bidder.key();
    let vault = ctx.accounts.vault.key();
    let auction_key = ctx.accounts.auction.key();

    let auction = &mut ctx.accounts.auction;

    let ix_sys = ctx.accounts.instructions.to_account_info();
    require_preceding_transfer(&ix_sys, &bidder, &vault, auction.bid_amount)?;

    let position = auction.register_bid(bidder, prediction)?;

    emit!(BidPlaced {
        auction: auction_key,
        bidder,
        prediction,
        position: position as u32,
    });

    Ok(())
}

/// Pays the whole pool to the closest prediction and closes the auction.
pub fn settle(ctx: Context<Settle>) -> Result<()> {
    let auction = &ctx.accounts.auction;
    require!(
        auction.bidders.len() >= MIN_SETTLEMENT_BIDDERS,
        OracleError::NotEnoughBidders
    );

    let feed = &ctx.accounts.oracle_feed;
    require!(
        feed.query_id == auction.oracle_query_id,
        OracleError::OracleQueryMismatch
    );
    let actual = decode_price(&feed.value)?;

    let winner_idx = closest_bid(&auction.bidders, actual)?;
    let entry = auction.bidders[winner_idx];
    require_keys_eq!(
        ctx.accounts.winner.key(),
        entry.bidder,
        OracleError::WinnerMismatch
    );

    // close-out: the vault dies with the auction, so nothing is held back
    let vault_ai = ctx.accounts.vault.to_account_info();
    let payout = vault_ai.lamports();

    let auction_key = auction.key();
    let vault_bump = auction.vault_bump;
    let signer_seeds: &[&[u8]] = &[BID_VAULT_SEED, auction_key.as_ref(), &[vault_bump]];

    pay_from_vault(
        &vault_ai,
        &ctx.accounts.winner.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        signer_seeds,
        payout,
    )?;

    emit!(AuctionSettled {
        auction: auction_key,
        winner: entry.bidder,
        prediction: entry.prediction,
        actual,
        payout,
    });

    // auction account is closed to `creator` by the context constraint
    Ok(())
}
