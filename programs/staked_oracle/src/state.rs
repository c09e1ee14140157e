use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_BIDDERS, MAX_VALUE_LEN},
    errors::OracleError,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum StakingStatus {
    Unstaked,
    Staked,
}

/// Governance verdict on the current report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Reject,
    Accept,
}

impl TryFrom<u8> for Decision {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self> {
        match raw {
            0 => Ok(Decision::Reject),
            1 => Ok(Decision::Accept),
            _ => err!(OracleError::InvalidDecision),
        }
    }
}

#[account]
#[derive(InitSpace)]
pub struct Feed {
    pub creator: Pubkey,
    pub governance: Pubkey,

    // NOTE: max_len values must track the limits in constants.rs
    // (guarded by account_space_tracks_limits).
    #[max_len(64)]
    pub query_id: Vec<u8>,
    #[max_len(256)]
    pub query_data: Vec<u8>,

    // Pubkey::default() while nobody is staked
    pub reporter: Pubkey,
    pub staking_status: StakingStatus,
    pub stake_amount: u64,

    pub num_reports: u64,
    #[max_len(128)]
    pub value: Vec<u8>,
    pub reported_slot: u64,

    pub bump: u8,
    // System-owned PDA vault (holds lamports, no data)
    pub vault_bump: u8,
    pub version: u16,
}

impl Feed {
    pub fn has_reporter(&self) -> bool {
        self.reporter != Pubkey::default()
    }

    pub fn check_invariants(&self) -> Result<()> {
        let staked = self.staking_status == StakingStatus::Staked;
        require!(self.has_reporter() == staked, OracleError::StakeInvariantViolated);
        require!(self.value.len() <= MAX_VALUE_LEN, OracleError::InvalidValue);
        Ok(())
    }

    /// Only one reporter at a time. Runs before escrow inspection.
    pub fn ensure_stakeable(&self) -> Result<()> {
        require!(!self.has_reporter(), OracleError::AlreadyStaked);
        Ok(())
    }

    pub fn begin_stake(&mut self, reporter: Pubkey) -> Result<()> {
        self.ensure_stakeable()?;
        require!(reporter != Pubkey::default(), OracleError::Unauthorized);

        self.staking_status = StakingStatus::Staked;
        self.reporter = reporter;
        self.check_invariants()
    }

    /// Caller must be the active reporter.
    pub fn ensure_reporter(&self, caller: &Pubkey) -> Result<()> {
        require!(self.has_reporter(), OracleError::NotStaked);
        require_keys_eq!(self.reporter, *caller, OracleError::Unauthorized);
        require!(
            self.staking_status == StakingStatus::Staked,
            OracleError::NotStaked
        );
        Ok(())
    }

    pub fn end_stake(&mut self, caller: &Pubkey) -> Result<()> {
        self.ensure_reporter(caller)?;
        self.release_reporter();
        self.check_invariants()
    }

    pub fn record_report(
        &mut self,
        caller: &Pubkey,
        query_id: &[u8],
        value: Vec<u8>,
        slot: u64,
    ) -> Result<()> {
        self.ensure_reporter(caller)?;
        require!(query_id == self.query_id.as_slice(), OracleError::QueryIdMismatch);
        require!(value.len() <= MAX_VALUE_LEN, OracleError::InvalidValue);

        self.value = value;
        self.reported_slot = slot;
        Ok(())
    }

    /// Applies a governance vote. Returns the slashed reporter on rejection.
    ///
    /// A rejection needs an active stake: rejecting while nobody is staked
    /// fails with `NotStaked` instead of being a no-op.
    pub fn apply_vote(&mut self, caller: &Pubkey, decision: u8) -> Result<Option<Pubkey>> {
        require_keys_eq!(self.governance, *caller, OracleError::Unauthorized);

        match Decision::try_from(decision)? {
            Decision::Accept => {
                self.num_reports = self
                    .num_reports
                    .checked_add(1)
                    .ok_or(OracleError::MathOverflow)?;
                Ok(None)
            }
            Decision::Reject => {
                require!(
                    self.staking_status == StakingStatus::Staked,
                    OracleError::NotStaked
                );
                let slashed = self.reporter;
                self.release_reporter();
                self.check_invariants()?;
                Ok(Some(slashed))
            }
        }
    }

    fn release_reporter(&mut self) {
        self.staking_status = StakingStatus::Unstaked;
        self.reporter = Pubkey::default();
    }
}

/// One fixed-width registry record.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct BidEntry {
    pub bidder: Pubkey,
    pub prediction: u64,
}

#[account]
#[derive(InitSpace)]
pub struct Auction {
    pub creator: Pubkey,

    pub oracle_feed: Pubkey,
    #[max_len(64)]
    pub oracle_query_id: Vec<u8>,

    pub bid_amount: u64,

    /// Append-only, in bid order.
    /// NOTE: max_len values must track the limits in constants.rs.
    #[max_len(64)]
    pub bidders: Vec<BidEntry>,

    pub bump: u8,
    pub vault_bump: u8,
    pub version: u16,
}

impl Auction {
    pub fn prediction_of(&self, bidder: &Pubkey) -> Option<u64> {
        self.bidders
            .iter()
            .find(|e| e.bidder == *bidder)
            .map(|e| e.prediction)
    }

    pub fn register_bid(&mut self, bidder: Pubkey, prediction: u64) -> Result<usize> {
        require!(self.prediction_of(&bidder).is_none(), OracleError::DuplicateBid);
        require!(self.bidders.len() < MAX_BIDDERS, OracleError::RegistryFull);

        self.bidders.push(BidEntry { bidder, prediction });
        Ok(self.bidders.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_QUERY_DATA_LEN, MAX_QUERY_ID_LEN};
    use crate::test_support::assert_rejected;
    use crate::utils::releasable_lamports;

    fn new_feed(governance: Pubkey) -> Feed {
        Feed {
            creator: Pubkey::new_unique(),
            governance,
            query_id: b"eth-usd".to_vec(),
            query_data: b"SpotPrice(eth,usd)".to_vec(),
            reporter: Pubkey::default(),
            staking_status: StakingStatus::Unstaked,
            stake_amount: 200_000,
            num_reports: 0,
            value: Vec::new(),
            reported_slot: 0,
            bump: 255,
            vault_bump: 254,
            version: 1,
        }
    }

    fn staked_feed(governance: Pubkey, reporter: Pubkey) -> Feed {
        let mut feed = new_feed(governance);
        feed.begin_stake(reporter).expect("stake");
        feed
    }

    #[test]
    fn account_space_tracks_limits() {
        let feed = Feed::INIT_SPACE;
        let fixed = 32 * 3 + 1 + 8 * 3 + 1 + 1 + 2;
        assert_eq!(feed, fixed + 3 * 4 + MAX_QUERY_ID_LEN + MAX_QUERY_DATA_LEN + MAX_VALUE_LEN);

        let auction = Auction::INIT_SPACE;
        assert_eq!(auction, 32 * 2 + 8 + 1 + 1 + 2 + 2 * 4 + MAX_QUERY_ID_LEN + MAX_BIDDERS * 40);
    }

    #[test]
    fn initial_feed_satisfies_invariants() {
        assert!(new_feed(Pubkey::new_unique()).check_invariants().is_ok());
    }

    #[test]
    fn invariant_catches_status_without_reporter() {
        let mut feed = new_feed(Pubkey::new_unique());
        feed.staking_status = StakingStatus::Staked;
        assert_rejected(feed.check_invariants(), OracleError::StakeInvariantViolated);
    }

    #[test]
    fn stake_sets_reporter_and_status() {
        let reporter = Pubkey::new_unique();
        let feed = staked_feed(Pubkey::new_unique(), reporter);

        assert_eq!(feed.reporter, reporter);
        assert_eq!(feed.staking_status, StakingStatus::Staked);
    }

    #[test]
    fn second_stake_is_rejected_for_anyone() {
        let reporter = Pubkey::new_unique();
        let mut feed = staked_feed(Pubkey::new_unique(), reporter);

        assert_rejected(feed.begin_stake(Pubkey::new_unique()), OracleError::AlreadyStaked);
        assert_rejected(feed.begin_stake(reporter), OracleError::AlreadyStaked);
        assert_eq!(feed.reporter, reporter);
    }

    #[test]
    fn withdraw_clears_reporter() {
        let reporter = Pubkey::new_unique();
        let mut feed = staked_feed(Pubkey::new_unique(), reporter);

        feed.end_stake(&reporter).expect("withdraw");
        assert_eq!(feed.staking_status, StakingStatus::Unstaked);
        assert_eq!(feed.reporter, Pubkey::default());

        // slot is free again
        feed.begin_stake(Pubkey::new_unique()).expect("restake");
    }

    #[test]
    fn withdraw_requires_reporter_and_stake() {
        let reporter = Pubkey::new_unique();
        let mut feed = staked_feed(Pubkey::new_unique(), reporter);
        assert_rejected(feed.end_stake(&Pubkey::new_unique()), OracleError::Unauthorized);

        let mut idle = new_feed(Pubkey::new_unique());
        assert_rejected(idle.end_stake(&reporter), OracleError::NotStaked);
    }

    #[test]
    fn withdraw_roundtrip_returns_full_stake() {
        let reserve = 890_880;
        let reporter = Pubkey::new_unique();
        let mut feed = new_feed(Pubkey::new_unique());

        // vault starts rent-exempt, the escrowed transfer lands the stake
        let mut vault = reserve;
        feed.begin_stake(reporter).expect("stake");
        vault += feed.stake_amount;

        feed.end_stake(&reporter).expect("withdraw");
        let payout = releasable_lamports(vault, reserve);
        vault -= payout;

        assert_eq!(payout, 200_000);
        assert_eq!(vault, reserve);
        assert_eq!(feed.staking_status, StakingStatus::Unstaked);
        assert_eq!(feed.reporter, Pubkey::default());

        // a new reporter can stake into the same vault
        let next = Pubkey::new_unique();
        feed.begin_stake(next).expect("restake");
        vault += feed.stake_amount;
        assert_eq!(releasable_lamports(vault, reserve), feed.stake_amount);
        assert_eq!(feed.reporter, next);
    }

    #[test]
    fn report_overwrites_value() {
        let reporter = Pubkey::new_unique();
        let mut feed = staked_feed(Pubkey::new_unique(), reporter);

        feed.record_report(&reporter, b"eth-usd", vec![1, 2], 10).unwrap();
        feed.record_report(&reporter, b"eth-usd", vec![3], 11).unwrap();

        assert_eq!(feed.value, vec![3]);
        assert_eq!(feed.reported_slot, 11);
        assert_eq!(feed.staking_status, StakingStatus::Staked);
    }

    #[test]
    fn report_gate_rejects_bad_callers_and_ids() {
        let reporter = Pubkey::new_unique();
        let mut feed = staked_feed(Pubkey::new_unique(), reporter);

        assert_rejected(
            feed.record_report(&Pubkey::new_unique(), b"eth-usd", vec![1], 1),
            OracleError::Unauthorized,
        );
        assert_rejected(
            feed.record_report(&reporter, b"btc-usd", vec![1], 1),
            OracleError::QueryIdMismatch,
        );
        assert_rejected(
            feed.record_report(&reporter, b"eth-usd", vec![0; MAX_VALUE_LEN + 1], 1),
            OracleError::InvalidValue,
        );
        assert!(feed.value.is_empty());
    }

    #[test]
    fn repeated_accept_votes_count_reports() {
        let governance = Pubkey::new_unique();
        let mut feed = staked_feed(governance, Pubkey::new_unique());

        for expected in 1..=3u64 {
            assert_eq!(feed.apply_vote(&governance, 1).unwrap(), None);
            assert_eq!(feed.num_reports, expected);
            assert_eq!(feed.staking_status, StakingStatus::Staked);
        }
    }

    #[test]
    fn reject_vote_slashes_and_blocks_reporting() {
        let governance = Pubkey::new_unique();
        let reporter = Pubkey::new_unique();
        let mut feed = staked_feed(governance, reporter);

        let slashed = feed.apply_vote(&governance, 0).unwrap();
        assert_eq!(slashed, Some(reporter));
        assert_eq!(feed.staking_status, StakingStatus::Unstaked);

        assert_rejected(
            feed.record_report(&reporter, b"eth-usd", vec![9], 5),
            OracleError::NotStaked,
        );
    }

    #[test]
    fn out_of_domain_vote_leaves_state_untouched() {
        let governance = Pubkey::new_unique();
        let reporter = Pubkey::new_unique();
        let mut feed = staked_feed(governance, reporter);
        feed.apply_vote(&governance, 1).unwrap();

        for decision in [2u8, 7, u8::MAX] {
            assert_rejected(feed.apply_vote(&governance, decision), OracleError::InvalidDecision);
        }
        assert_eq!(feed.num_reports, 1);
        assert_eq!(feed.reporter, reporter);
        assert_eq!(feed.staking_status, StakingStatus::Staked);
    }

    #[test]
    fn only_governance_votes() {
        let reporter = Pubkey::new_unique();
        let mut feed = staked_feed(Pubkey::new_unique(), reporter);

        assert_rejected(feed.apply_vote(&reporter, 1), OracleError::Unauthorized);
        assert_eq!(feed.num_reports, 0);
    }

    #[test]
    fn reject_vote_needs_a_stake() {
        let governance = Pubkey::new_unique();
        let mut feed = new_feed(governance);
        assert_rejected(feed.apply_vote(&governance, 0), OracleError::NotStaked);
    }

    fn new_auction() -> Auction {
        Auction {
            creator: Pubkey::new_unique(),
            oracle_feed: Pubkey::new_unique(),
            oracle_query_id: b"eth-usd".to_vec(),
            bid_amount: 1_000_000,
            bidders: Vec::new(),
            bump: 255,
            vault_bump: 254,
            version: 1,
        }
    }

    #[test]
    fn registry_keeps_bid_order_and_keyed_lookup() {
        let mut auction = new_auction();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        assert_eq!(auction.register_bid(a, 10).unwrap(), 0);
        assert_eq!(auction.register_bid(b, 50).unwrap(), 1);

        assert_eq!(auction.bidders[1], BidEntry { bidder: b, prediction: 50 });
        assert_eq!(auction.prediction_of(&a), Some(10));
        assert_eq!(auction.prediction_of(&Pubkey::new_unique()), None);
    }

    #[test]
    fn duplicate_bidder_is_rejected() {
        let mut auction = new_auction();
        let a = Pubkey::new_unique();

        auction.register_bid(a, 10).unwrap();
        assert_rejected(auction.register_bid(a, 99), OracleError::DuplicateBid);
        assert_eq!(auction.prediction_of(&a), Some(10));
        assert_eq!(auction.bidders.len(), 1);
    }

    #[test]
    fn registry_is_bounded() {
        let mut auction = new_auction();
        for i in 0..MAX_BIDDERS {
            auction.register_bid(Pubkey::new_unique(), i as u64).unwrap();
        }
        assert_rejected(
            auction.register_bid(Pubkey::new_unique(), 0),
            OracleError::RegistryFull,
        );
    }
}
