use anchor_lang::prelude::*;

use crate::errors::OracleError;

pub fn code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        Error::ProgramError(e) => panic!("unexpected program error: {e:?}"),
    }
}

pub fn assert_rejected<T: std::fmt::Debug>(res: Result<T>, expected: OracleError) {
    let err = res.expect_err("operation should be rejected");
    assert_eq!(code(err), u32::from(expected));
}
