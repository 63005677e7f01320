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

/// Transfer tokens out of a pool custody vault, signed by the program
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

/// Transfer tokens from a user-owned account into a pool custody vault.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_div_floors() {
        assert_eq!(mul_div_floor(1_000, 100, 10_000), Some(10));
        assert_eq!(mul_div_floor(999, 100, 10_000), Some(9));
    }

    #[test]
    fn mul_div_rejects_zero_denominator() {
        assert_eq!(mul_div_floor(1, 1, 0), None);
    }

    quickcheck::quickcheck! {
        fn mul_div_same_numerator_denominator_is_identity(amount: u32, denom: u32) -> bool {
            let denom = u64::from(denom) + 1;
            mul_div_floor(u64::from(amount), denom, denom) == Some(u64::from(amount))
        }
    }
}
