pub mod auction;
pub mod feed;
pub mod governance;
pub mod report;
pub mod staking;
