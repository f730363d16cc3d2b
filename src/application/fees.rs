//! Fee arithmetic: the forward fee on a charged amount, and the inverse
//! problem of finding the charge that nets a target amount.
//!
//! All math is `Decimal`; the forward fee is piecewise linear in the charged
//! amount (percentage term, a step where the fixed fee kicks in, flat above
//! the cap), which is what lets the inversion work by branch elimination
//! instead of a numeric solver.

use crate::domain::profile::CurrencyFeeProfile;
use crate::error::{PaymentError, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Provider fee for charging `amount`, rounded half-up to the profile scale.
///
/// Monotone non-decreasing in `amount`; the inversion below relies on that.
pub fn fee_for(amount: Decimal, profile: &CurrencyFeeProfile) -> Decimal {
    let raw = amount * profile.rate;
    let fixed = match profile.waiver_threshold {
        Some(threshold) if amount < threshold => Decimal::ZERO,
        _ => profile.fixed_fee,
    };
    let uncapped = raw + fixed;
    let fee = match profile.cap {
        Some(cap) => uncapped.min(cap),
        None => uncapped,
    };
    fee.round_dp_with_strategy(profile.scale, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO)
}

/// Finds the charge `c` with `c - fee_for(c) = net`, rounded to the profile
/// scale so the merchant nets at least `net` wherever the fee structure
/// allows it, and never more than one minor unit extra.
///
/// Each linear branch of the fee function is solved in turn and validated
/// against the forward calculator; for a well-formed profile exactly one
/// branch holds.
pub fn gross_up(net: Decimal, profile: &CurrencyFeeProfile) -> Result<Decimal> {
    let margin = Decimal::ONE - profile.rate;
    if margin <= Decimal::ZERO {
        return Err(PaymentError::InvariantViolation(format!(
            "rate {} leaves no margin to gross up against",
            profile.rate
        )));
    }

    // Fixed fee applies and the cap is not binding.
    let charge = (net + profile.fixed_fee) / margin;
    let above_waiver = profile.waiver_threshold.is_none_or(|t| charge >= t);
    if above_waiver && !cap_binds(charge, profile) {
        return Ok(round_charge(charge, net, profile));
    }

    // Below the waiver threshold the fixed fee drops out of the equation.
    if let Some(threshold) = profile.waiver_threshold {
        let charge = net / margin;
        if charge < threshold && !cap_binds(charge, profile) {
            return Ok(round_charge(charge, net, profile));
        }
    }

    // Fee pinned at the cap.
    if let Some(cap) = profile.cap {
        let charge = net + cap;
        if fee_for(charge, profile) == cap {
            return Ok(round_charge(charge, net, profile));
        }
    }

    Err(PaymentError::InvariantViolation(format!(
        "no fee branch yields a net of {net}"
    )))
}

fn cap_binds(charge: Decimal, profile: &CurrencyFeeProfile) -> bool {
    profile
        .cap
        .is_some_and(|cap| fee_for(charge, profile) >= cap)
}

/// Rounds an exact charge to the profile scale.
///
/// Starts from the truncated charge and adds minor units while the
/// recomputed forward fee still leaves the merchant short. Two bumps suffice:
/// the exact solution sits within one minor unit of the truncation, and
/// half-up rounding of the fee can consume at most one more. A bump that
/// lands on the fixed-fee step makes the net worse and is not taken.
fn round_charge(charge: Decimal, net: Decimal, profile: &CurrencyFeeProfile) -> Decimal {
    let mut candidate = charge.round_dp_with_strategy(profile.scale, RoundingStrategy::ToZero);
    let mut best = candidate;
    let mut best_net = best - fee_for(best, profile);
    for _ in 0..2 {
        if best_net >= net {
            break;
        }
        candidate += profile.minor_unit();
        let candidate_net = candidate - fee_for(candidate, profile);
        if candidate_net > best_net {
            best = candidate;
            best_net = candidate_net;
        }
    }
    best
}
