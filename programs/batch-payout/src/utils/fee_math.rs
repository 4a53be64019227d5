use anchor_lang::prelude::*;
use crate::constants::BPS_DENOMINATOR;
use crate::errors::PayoutError;

/// Funding required for a batch at a given fee rate
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PayoutQuote {
    /// Sum of all recipient amounts
    pub total: u64,
    /// Fee routed to the fee wallet
    pub fee: u64,
    /// Exact funding the sender must supply (total + fee)
    pub required: u64,
    /// Fee rate the quote was computed with
    pub fee_bps: u16,
}

pub fn sum_amounts(amounts: &[u64]) -> Result<u64> {
    amounts.iter().try_fold(0u64, |acc, amount| {
        acc.checked_add(*amount)
            .ok_or_else(|| error!(PayoutError::ArithmeticOverflow))
    })
}

/// fee = total * fee_bps / 10000, truncated
pub fn calculate_fee(total: u64, fee_bps: u16) -> Result<u64> {
    let fee = (total as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(PayoutError::ArithmeticOverflow)?
        .checked_div(BPS_DENOMINATOR)
        .ok_or(PayoutError::ArithmeticOverflow)?;

    u64::try_from(fee).map_err(|_| error!(PayoutError::ArithmeticOverflow))
}

pub fn quote_amounts(amounts: &[u64], fee_bps: u16) -> Result<PayoutQuote> {
    let total = sum_amounts(amounts)?;
    let fee = calculate_fee(total, fee_bps)?;
    let required = total
        .checked_add(fee)
        .ok_or(PayoutError::ArithmeticOverflow)?;

    Ok(PayoutQuote {
        total,
        fee,
        required,
        fee_bps,
    })
}

/// Checks the request shape and funding before anything is staged.
pub fn validate_payout_request(
    recipients_len: usize,
    amounts: &[u64],
    fee_bps: u16,
    supplied_funds: u64,
) -> Result<PayoutQuote> {
    require!(
        recipients_len == amounts.len(),
        PayoutError::LengthMismatch
    );

    let quote = quote_amounts(amounts, fee_bps)?;

    require!(
        supplied_funds == quote.required,
        PayoutError::InsufficientOrExcessFunds
    );

    Ok(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

    #[test]
    fn quote_matches_reference_scenario() {
        // 0.01 + 0.02 SOL at 0.1%
        let amounts = [LAMPORTS_PER_SOL / 100, LAMPORTS_PER_SOL / 50];
        let quote = quote_amounts(&amounts, 10).unwrap();

        assert_eq!(quote.total, 30_000_000);
        assert_eq!(quote.fee, 30_000);
        assert_eq!(quote.required, 30_030_000);
        assert_eq!(quote.fee_bps, 10);
    }

    #[test]
    fn fee_truncates_toward_zero() {
        assert_eq!(calculate_fee(999, 10).unwrap(), 0);
        assert_eq!(calculate_fee(1_000, 10).unwrap(), 1);
        assert_eq!(calculate_fee(1_999, 10).unwrap(), 1);
        assert_eq!(calculate_fee(u64::MAX, 0).unwrap(), 0);
    }

    #[test]
    fn full_rate_fee_does_not_overflow_intermediate() {
        assert_eq!(calculate_fee(u64::MAX, 10_000).unwrap(), u64::MAX);
    }

    #[test]
    fn empty_batch_costs_nothing() {
        let quote = validate_payout_request(0, &[], 10, 0).unwrap();
        assert_eq!(quote, PayoutQuote { fee_bps: 10, ..Default::default() });
    }

    #[test]
    fn length_mismatch_is_checked_first() {
        let err = validate_payout_request(2, &[10_000_000], 10, 10_000_000).unwrap_err();
        assert_eq!(err, PayoutError::LengthMismatch.into());

        // even when the amounts would overflow
        let err = validate_payout_request(1, &[u64::MAX, 1], 10, 0).unwrap_err();
        assert_eq!(err, PayoutError::LengthMismatch.into());
    }

    #[test]
    fn overflowing_sum_is_rejected() {
        let err = validate_payout_request(2, &[u64::MAX, 1], 10, 0).unwrap_err();
        assert_eq!(err, PayoutError::ArithmeticOverflow.into());
    }

    #[test]
    fn overflowing_required_is_rejected() {
        let err = quote_amounts(&[u64::MAX - 1], 10).unwrap_err();
        assert_eq!(err, PayoutError::ArithmeticOverflow.into());
    }

    #[test]
    fn over_and_under_funding_are_rejected() {
        let amounts = [10_000_000, 20_000_000];
        for supplied in [0, 30_000_000, 30_029_999, 30_030_001, u64::MAX] {
            let err = validate_payout_request(2, &amounts, 10, supplied).unwrap_err();
            assert_eq!(err, PayoutError::InsufficientOrExcessFunds.into());
        }
        assert!(validate_payout_request(2, &amounts, 10, 30_030_000).is_ok());
    }

    proptest! {
        #[test]
        fn succeeds_iff_supplied_equals_total_plus_fee(
            amounts in prop::collection::vec(0u64..1_000_000_000_000, 0..32),
            fee_bps in 0u16..=10_000,
            offset in -1_000i64..1_000,
        ) {
            let total: u64 = amounts.iter().sum();
            let required = total + total * fee_bps as u64 / 10_000;
            let supplied = (required as i64 + offset).max(0) as u64;

            let result = validate_payout_request(amounts.len(), &amounts, fee_bps, supplied);
            prop_assert_eq!(result.is_ok(), supplied == required);
        }

        #[test]
        fn fee_never_exceeds_exact_share(total in any::<u64>(), fee_bps in 0u16..=10_000) {
            let fee = calculate_fee(total, fee_bps).unwrap() as u128;
            let exact_numerator = total as u128 * fee_bps as u128;
            prop_assert!(fee * 10_000 <= exact_numerator);
            prop_assert!(exact_numerator < (fee + 1) * 10_000);
        }
    }
}
