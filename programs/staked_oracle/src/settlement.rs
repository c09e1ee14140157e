use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_PRICE_BYTES, MIN_SETTLEMENT_BIDDERS},
    errors::OracleError,
    state::BidEntry,
};

/// Index of the entry whose prediction is closest to `actual`.
///
/// Single left-to-right pass. The running minimum only moves on a strictly
/// smaller distance, so the earliest entry wins ties.
pub fn closest_bid(entries: &[BidEntry], actual: u64) -> Result<usize> {
    require!(
        entries.len() >= MIN_SETTLEMENT_BIDDERS,
        OracleError::NotEnoughBidders
    );

    let mut winner = 0usize;
    let mut closeness = entries[0].prediction.abs_diff(actual);

    for (i, entry) in entries.iter().enumerate().skip(1) {
        let distance = entry.prediction.abs_diff(actual);
        if distance < closeness {
            closeness = distance;
            winner = i;
        }
    }

    Ok(winner)
}

/// Reads a feed value as a big-endian unsigned price of 1..=8 bytes.
pub fn decode_price(value: &[u8]) -> Result<u64> {
    require!(
        !value.is_empty() && value.len() <= MAX_PRICE_BYTES,
        OracleError::OracleValueUnavailable
    );

    let mut buf = [0u8; MAX_PRICE_BYTES];
    buf[MAX_PRICE_BYTES - value.len()..].copy_from_slice(value);
    Ok(u64::from_be_bytes(buf))
}
