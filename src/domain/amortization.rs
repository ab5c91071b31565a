use crate::domain::loan::{LoanParameters, LoanResult};
use crate::error::{LoanError, Result};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Computes the fixed monthly installment that fully amortizes `principal`
/// over `term_months` at `annual_rate_percent`.
///
/// A zero rate degenerates to equal slices of the principal. Negative inputs
/// and a zero term are rejected instead of producing a meaningless result.
pub fn compute_amortization(
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> Result<LoanResult> {
    if principal < Decimal::ZERO {
        return Err(LoanError::InvalidInput(format!(
            "principal must not be negative, got {principal}"
        )));
    }
    if annual_rate_percent < Decimal::ZERO {
        return Err(LoanError::InvalidInput(format!(
            "interest rate must not be negative, got {annual_rate_percent}"
        )));
    }
    if term_months == 0 {
        return Err(LoanError::InvalidInput(
            "term must be at least one month".to_string(),
        ));
    }

    let term = Decimal::from(term_months);
    let monthly_rate = annual_rate_percent / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR;

    if monthly_rate.is_zero() {
        return Ok(LoanResult {
            monthly_payment: principal / term,
            total_payable: principal,
            total_interest: Decimal::ZERO,
        });
    }

    // (1 + r)^n
    let growth = (Decimal::ONE + monthly_rate)
        .checked_powu(u64::from(term_months))
        .ok_or(LoanError::Overflow("compound growth factor"))?;

    let monthly_payment = principal
        .checked_mul(monthly_rate)
        .and_then(|v| v.checked_mul(growth))
        .and_then(|v| v.checked_div(growth - Decimal::ONE))
        .ok_or(LoanError::Overflow("monthly payment"))?;

    let total_payable = monthly_payment
        .checked_mul(term)
        .ok_or(LoanError::Overflow("total payable"))?;

    // Rounding in the last digit may leave a dust-sized negative value.
    let total_interest = (total_payable - principal).max(Decimal::ZERO);

    Ok(LoanResult {
        monthly_payment,
        total_payable,
        total_interest,
    })
}

/// Amortizes the principal described by a full parameter set.
pub fn compute_for(parameters: &LoanParameters) -> Result<LoanResult> {
    compute_amortization(
        parameters.principal(),
        parameters.interest_rate,
        parameters.tenure_months,
    )
}
