use crate::domain::bounds::{BoundTable, DOWN_PAYMENT_RATIO};
use crate::domain::loan::{LoanCategory, LoanField, LoanParameters, LoanResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{self, Write};

/// `$` followed by the amount rounded to whole units, with thousands
/// separators: `16413.22` becomes `$16,413`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let whole = rounded.to_i128().unwrap_or_default();
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn format_months(months: u32) -> String {
    if months == 1 {
        "1 Month".to_string()
    } else {
        format!("{months} Months")
    }
}

/// Always one decimal place: `8.5%`, `12.0%`.
pub fn format_percentage(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    format!("{rounded}%")
}

/// A rate at its full precision, never fewer than one decimal place:
/// `0.25%`, `25.0%`.
fn format_exact_percentage(value: Decimal) -> String {
    let mut exact = value.normalize();
    if exact.scale() < 1 {
        exact.rescale(1);
    }
    format!("{exact}%")
}

/// A bound limit or step, shown without the rounding applied to quotes.
fn format_bound_value(field: LoanField, value: Decimal) -> String {
    match field {
        LoanField::TenureMonths => value.normalize().to_string(),
        LoanField::InterestRate => format_exact_percentage(value),
        _ => format_field_value(field, value),
    }
}

/// Formats a raw field value in the unit that field is edited in.
pub fn format_field_value(field: LoanField, value: Decimal) -> String {
    match field {
        LoanField::AnnualIncome | LoanField::LoanAmount | LoanField::DownPayment => {
            format_currency(value)
        }
        LoanField::TenureMonths => format_months(value.trunc().to_u32().unwrap_or_default()),
        LoanField::InterestRate => format_percentage(value),
    }
}

/// Writes the inputs and payment breakdown of one category.
pub fn write_quote<W: Write>(
    out: &mut W,
    category: LoanCategory,
    parameters: &LoanParameters,
    result: &LoanResult,
) -> io::Result<()> {
    let breakdown = result.breakdown();

    writeln!(out, "{} Loan ({})", category.label(), category.description())?;
    for field in LoanField::ALL {
        writeln!(
            out,
            "  {:<16}{}",
            field.label(),
            format_field_value(field, parameters.get(field))
        )?;
    }
    writeln!(out, "  {:<16}{}", "Monthly EMI", format_currency(result.monthly_payment))?;
    writeln!(out, "  {:<16}{}", "Principal", format_currency(parameters.principal()))?;
    writeln!(out, "  {:<16}{}", "Total interest", format_currency(result.total_interest))?;
    writeln!(out, "  {:<16}{}", "Total payable", format_currency(result.total_payable))?;
    writeln!(
        out,
        "  {:<16}Principal {} | Interest {}",
        "Breakdown",
        format_percentage(breakdown.principal_percent),
        format_percentage(breakdown.interest_percent)
    )?;
    Ok(())
}

/// Writes the slider ranges of `categories`.
pub fn write_bounds<W: Write>(
    out: &mut W,
    table: &BoundTable,
    categories: &[LoanCategory],
) -> io::Result<()> {
    for (category, field, bound) in table.entries() {
        if !categories.contains(&category) {
            continue;
        }

        let max = match field {
            LoanField::DownPayment => {
                let ratio = format!(
                    "{} of loan amount",
                    format_percentage(DOWN_PAYMENT_RATIO * Decimal::ONE_HUNDRED)
                );
                let loan_max = table.get(category, LoanField::LoanAmount).max;
                if bound.max < loan_max * DOWN_PAYMENT_RATIO {
                    format!("{} (at most {ratio})", format_currency(bound.max))
                } else {
                    ratio
                }
            }
            LoanField::InterestRate => format_bound_value(field, bound.max),
            _ => format_field_value(field, bound.max),
        };
        let min = match field {
            LoanField::InterestRate => format_bound_value(field, bound.min),
            _ => format_field_value(field, bound.min),
        };

        writeln!(
            out,
            "{:<10}{:<16}{} - {} (step {})",
            category.label(),
            field.label(),
            min,
            max,
            format_bound_value(field, bound.step)
        )?;
    }
    Ok(())
}
