use anchor_lang::prelude::*;

use crate::{events::ValueReported, Report};

pub fn report(ctx: Context<Report>, query_id: Vec<u8>, value: Vec<u8>) -> Result<()> {
    let reporter = ctx.accounts.reporter.key();
    let feed_key = ctx.accounts.feed.key();
    let slot = Clock::get()?.slot;

    let feed = &mut ctx.accounts.feed;
    feed.record_report(&reporter, &query_id, value, slot)?;

    emit!(ValueReported {
        feed: feed_key,
        reporter,
        value: feed.value.clone(),
        slot,
    });

    Ok(())
}
