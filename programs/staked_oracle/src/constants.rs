// Centralized Program Constants

// PDA seeds
// =========

pub const FEED_SEED: &[u8] = b"feed_v1";
pub const STAKE_VAULT_SEED: &[u8] = b"stake_vault_v1";

pub const AUCTION_SEED: &[u8] = b"auction_v1";
pub const BID_VAULT_SEED: &[u8] = b"bid_vault_v1";

/// Domain tag for hashing a query id into a fixed-size seed.
pub const QUERY_SEED_TAG: &[u8] = b"query";

// Feed limits
// ===========

/// Query ids are typically 32-byte hashes; leave room for readable ids.
pub const MAX_QUERY_ID_LEN: usize = 64;

/// Upper bound on the query specification stored alongside the id.
pub const MAX_QUERY_DATA_LEN: usize = 256;

/// Upper bound on a single reported value.
pub const MAX_VALUE_LEN: usize = 128;

// Auction
// =======

/// Fixed stake every bidder locks with a prediction (lamports).
pub const BID_AMOUNT_LAMPORTS: u64 = 1_000_000;

/// Registry capacity. Keeps the auction account size deterministic.
pub const MAX_BIDDERS: usize = 64;

/// Settlement needs at least two predictions to compare.
pub const MIN_SETTLEMENT_BIDDERS: usize = 2;

/// Widest oracle value accepted as a settlement price (big-endian u64).
pub const MAX_PRICE_BYTES: usize = 8;

/// Initial version for account structures.
pub const INITIAL_VERSION: u16 = 1;
