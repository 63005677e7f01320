use anchor_lang::prelude::*;
use anchor_spl::token_interface;
use spl_math::uint::U256;

/// Shared fixed-point multiply-divide with floor rounding.
/// Returns `None` on overflow or a zero denominator; callers map that to
/// `ErrorCode::MathOverflow` so no scaled arithmetic silently wraps.
pub fn mul_div_floor(amount: u64, numerator: u64, denominator: u64) -> Option<u64> {
    if denominator == 0 {
        return None;
    }
    let result = U256::from(amount)
        .checked_mul(U256::from(numerator))?
        .checked_div(U256::from(denominator))?;
    if result > U256::from(u64::MAX) {
        None
    } else {
        Some(result.as_u64())
    }
}

/// Transfer tokens out of a program-owned vault, signed by the program
/// authority PDA.
#[allow(clippy::too_many_arguments)]
pub fn transfer_from_vault_to_user<'info>(
    authority: AccountInfo<'info>,
    from_vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    mint_decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            token_program,
            token_interface::TransferChecked {
                from: from_vault,
                mint,
                to,
                authority,
            },
            signer_seeds,
        ),
        amount,
        mint_decimals,
    )
}

/// Transfer tokens from a user-owned account into a program vault. The
/// user is the transaction signer, so no PDA seeds are involved.
pub fn transfer_from_user_to_vault<'info>(
    owner: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to_vault: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    mint_decimals: u8,
) -> Result<()> {
    token_interface::transfer_checked(
        CpiContext::new(
            token_program,
            token_interface::TransferChecked {
                from,
                mint,
                to: to_vault,
                authority: owner,
            },
        ),
        amount,
        mint_decimals,
    )
}

/// Mint new supply to a recipient. The program authority PDA is the mint
/// authority of both platform mints.
pub fn mint_to_account<'info>(
    authority: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    to: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token_interface::mint_to(
        CpiContext::new_with_signer(
            token_program,
            token_interface::MintTo {
                mint,
                to,
                authority,
            },
            signer_seeds,
        ),
        amount,
    )
}

/// Burn supply with the program authority PDA as the signing authority.
/// Works on program-owned custody accounts and, because the authority PDA
/// is the waste mint's permanent delegate, on submitter accounts when a
/// submission is rejected.
pub fn burn_with_authority<'info>(
    authority: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    from: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token_interface::burn(
        CpiContext::new_with_signer(
            token_program,
            token_interface::Burn {
                mint,
                from,
                authority,
            },
            signer_seeds,
        ),
        amount,
    )
}

/// Burn supply from a user-owned account with the user as signer.
pub fn burn_from_user<'info>(
    owner: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    from: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    token_interface::burn(
        CpiContext::new(
            token_program,
            token_interface::Burn {
                mint,
                from,
                authority: owner,
            },
        ),
        amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_div_floors() {
        assert_eq!(mul_div_floor(10, 1, 3), Some(3));
        assert_eq!(mul_div_floor(7, 7, 10), Some(4));
    }

    #[test]
    fn mul_div_rejects_zero_denominator() {
        assert_eq!(mul_div_floor(1, 1, 0), None);
    }

    #[test]
    fn mul_div_rejects_u64_overflow() {
        assert_eq!(mul_div_floor(u64::MAX, u64::MAX, 1), None);
        // Large intermediates are fine as long as the quotient fits.
        assert_eq!(mul_div_floor(u64::MAX, u64::MAX, u64::MAX), Some(u64::MAX));
    }
}
