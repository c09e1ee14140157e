use anchor_lang::prelude::*;

#[error_code]
pub enum OracleError {
    // -----------------
    // Permission
    // -----------------
    #[msg("Unauthorized")]
    Unauthorized,

    // -----------------
    // Staking state
    // -----------------
    #[msg("A reporter is already staked")]
    AlreadyStaked,
    #[msg("No reporter is staked")]
    NotStaked,
    #[msg("Feed state violates the reporter/status invariant")]
    StakeInvariantViolated,

    // -----------------
    // Escrow transfer
    // -----------------
    #[msg("Missing transfer immediately before this instruction")]
    EscrowTransferMissing,
    #[msg("Preceding instruction is not a plain system transfer")]
    EscrowNotSystemTransfer,
    #[msg("Transfer sender does not match caller")]
    EscrowSenderMismatch,
    #[msg("Transfer receiver is not the custodial vault")]
    EscrowReceiverMismatch,
    #[msg("Transfer amount does not match required stake")]
    EscrowAmountMismatch,

    // -----------------
    // Arguments
    // -----------------
    #[msg("Invalid decision (must be 0/1)")]
    InvalidDecision,
    #[msg("Invalid query id")]
    InvalidQueryId,
    #[msg("Query data too long")]
    InvalidQueryData,
    #[msg("Reported value too long")]
    InvalidValue,
    #[msg("Query id does not match feed")]
    QueryIdMismatch,
    #[msg("Invalid stake amount")]
    InvalidStakeAmount,
    #[msg("Invalid governance address")]
    InvalidGovernance,

    // -----------------
    // Auction / settlement
    // -----------------
    #[msg("Bidder already registered")]
    DuplicateBid,
    #[msg("Bidder registry is full")]
    RegistryFull,
    #[msg("Not enough bidders to settle")]
    NotEnoughBidders,
    #[msg("Oracle feed does not match auction query")]
    OracleQueryMismatch,
    #[msg("Oracle value missing or not a price")]
    OracleValueUnavailable,
    #[msg("Winner account does not match closest bid")]
    WinnerMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}
