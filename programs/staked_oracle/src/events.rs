use anchor_lang::prelude::*;

#[event]
pub struct FeedCreated {
    pub feed: Pubkey,
    pub governance: Pubkey,
    pub stake_amount: u64,
}

#[event]
pub struct ReporterStaked {
    pub feed: Pubkey,
    pub reporter: Pubkey,
    pub amount: u64,
    pub slot: u64,
}

#[event]
pub struct StakeWithdrawn {
    pub feed: Pubkey,
    pub reporter: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ValueReported {
    pub feed: Pubkey,
    pub reporter: Pubkey,
    pub value: Vec<u8>,
    pub slot: u64,
}

#[event]
pub struct ReportAccepted {
    pub feed: Pubkey,
    pub num_reports: u64,
}

#[event]
pub struct ReporterSlashed {
    pub feed: Pubkey,
    pub reporter: Pubkey,
    pub governance: Pubkey,
    pub amount: u64,
}

#[event]
pub struct AuctionCreated {
    pub auction: Pubkey,
    pub oracle_feed: Pubkey,
    pub bid_amount: u64,
}

#[event]
pub struct BidPlaced {
    pub auction: Pubkey,
    pub bidder: Pubkey,
    pub prediction: u64,
    pub position: u32,
}

#[event]
pub struct AuctionSettled {
    pub auction: Pubkey,
    pub winner: Pubkey,
    pub prediction: u64,
    pub actual: u64,
    pub payout: u64,
}
