use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::system_program;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked,
};

use crate::errors::OracleError;

/// bincode tag of `SystemInstruction::Transfer`.
const SYSTEM_TRANSFER_TAG: u32 = 2;
/// u32 tag + u64 lamports.
const SYSTEM_TRANSFER_LEN: usize = 4 + 8;

/// Decodes a plain system transfer into `(from, to, lamports)`.
/// Any other system instruction (with-seed transfers, account creation, ...)
/// is rejected.
pub fn parse_system_transfer(ix: &Instruction) -> Result<(Pubkey, Pubkey, u64)> {
    require_keys_eq!(
        ix.program_id,
        system_program::ID,
        OracleError::EscrowNotSystemTransfer
    );

    let data = &ix.data;
    require!(data.len() == SYSTEM_TRANSFER_LEN, OracleError::EscrowNotSystemTransfer);

    let tag = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    require!(tag == SYSTEM_TRANSFER_TAG, OracleError::EscrowNotSystemTransfer);

    let lamports: [u8; 8] = data[4..12]
        .try_into()
        .map_err(|_| error!(OracleError::EscrowNotSystemTransfer))?;

    require!(ix.accounts.len() >= 2, OracleError::EscrowNotSystemTransfer);

    Ok((
        ix.accounts[0].pubkey,
        ix.accounts[1].pubkey,
        u64::from_le_bytes(lamports),
    ))
}

/// The transfer must move exactly `amount` from `caller` into `custodian`.
pub fn verify_escrow_transfer(
    ix: &Instruction,
    caller: &Pubkey,
    custodian: &Pubkey,
    amount: u64,
) -> Result<()> {
    let (from, to, lamports) = parse_system_transfer(ix)?;

    require_keys_eq!(from, *caller, OracleError::EscrowSenderMismatch);
    require_keys_eq!(to, *custodian, OracleError::EscrowReceiverMismatch);
    require!(lamports == amount, OracleError::EscrowAmountMismatch);

    Ok(())
}

// Tx layout must be: [ ..., system_transfer(caller -> custodian, amount), <this ix> ]
pub fn require_preceding_transfer(
    instructions: &AccountInfo,
    caller: &Pubkey,
    custodian: &Pubkey,
    amount: u64,
) -> Result<()> {
    let current_ix = load_current_index_checked(instructions)? as usize;
    require!(current_ix >= 1, OracleError::EscrowTransferMissing);

    let transfer_ix = load_instruction_at_checked(current_ix - 1, instructions)
        .map_err(|_| error!(OracleError::EscrowTransferMissing))?;

    verify_escrow_transfer(&transfer_ix, caller, custodian, amount)
}
