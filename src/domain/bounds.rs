use crate::domain::amortization::compute_amortization;
use crate::domain::loan::{LoanCategory, LoanField, LoanParameters};
use crate::error::{LoanError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;

/// Largest share of the loan amount that may be paid up front.
pub const DOWN_PAYMENT_RATIO: Decimal = dec!(0.8);

/// Longest tenure an override table may allow.
pub const MAX_TENURE_MONTHS: Decimal = dec!(1200);

/// Slider range for one `(category, field)` pair.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct Bound {
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
}

impl Bound {
    pub fn new(min: Decimal, max: Decimal, step: Decimal) -> Self {
        Self { min, max, step }
    }
}

/// A replacement entry for the standard table, usually read from JSON.
///
/// `category: None` applies the bound to every category.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct BoundOverride {
    #[serde(default)]
    pub category: Option<LoanCategory>,
    pub field: LoanField,
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
}

/// Parameter adjustments made on top of the edited field itself.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SideEffect {
    DownPaymentReclamped { from: Decimal, to: Decimal },
}

/// Result of bounding a single edit.
#[derive(Debug, PartialEq, Clone)]
pub struct ClampOutcome {
    /// The value actually stored for the edited field.
    pub value: Decimal,
    /// The full parameter set after the edit and its side effects.
    pub parameters: LoanParameters,
    pub side_effects: Vec<SideEffect>,
}

/// Static per-category bounds for every editable field.
///
/// The down payment ceiling is additionally capped at
/// [`DOWN_PAYMENT_RATIO`] of the current loan amount when clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundTable {
    bounds: HashMap<(LoanCategory, LoanField), Bound>,
}

impl Default for BoundTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoundTable {
    pub fn standard() -> Self {
        let mut bounds = HashMap::new();

        for category in LoanCategory::ALL {
            let loan_max = match category {
                LoanCategory::Home => dec!(20000000),
                _ => dec!(10000000),
            };
            let tenure_max = match category {
                LoanCategory::Home => dec!(360),
                LoanCategory::Personal => dec!(60),
                LoanCategory::Vehicle | LoanCategory::Business => dec!(120),
            };

            bounds.insert(
                (category, LoanField::AnnualIncome),
                Bound::new(dec!(100000), dec!(10000000), dec!(10000)),
            );
            bounds.insert(
                (category, LoanField::LoanAmount),
                Bound::new(dec!(50000), loan_max, dec!(10000)),
            );
            bounds.insert(
                (category, LoanField::DownPayment),
                Bound::new(Decimal::ZERO, loan_max * DOWN_PAYMENT_RATIO, dec!(5000)),
            );
            bounds.insert(
                (category, LoanField::TenureMonths),
                Bound::new(dec!(6), tenure_max, Decimal::ONE),
            );
            bounds.insert(
                (category, LoanField::InterestRate),
                Bound::new(dec!(1.0), dec!(25.0), dec!(0.1)),
            );
        }

        Self { bounds }
    }

    /// Builds the standard table with `overrides` applied in order.
    pub fn with_overrides(overrides: Vec<BoundOverride>) -> Result<Self> {
        let mut table = Self::standard();

        for entry in overrides {
            let bound = Bound::new(entry.min, entry.max, entry.step);
            validate(entry.field, &bound)?;

            let categories = match entry.category {
                Some(category) => vec![category],
                None => LoanCategory::ALL.to_vec(),
            };
            for category in categories {
                table.bounds.insert((category, entry.field), bound);
            }
        }

        for category in LoanCategory::ALL {
            table.check_computable(category)?;
        }

        Ok(table)
    }

    /// Every in-range edit must stay computable, so the largest loan at the
    /// highest rate over the longest tenure has to amortize without overflow.
    fn check_computable(&self, category: LoanCategory) -> Result<()> {
        let loan = self.get(category, LoanField::LoanAmount);
        let rate = self.get(category, LoanField::InterestRate);
        let tenure = self.get(category, LoanField::TenureMonths);
        let months = tenure.max.to_u32().unwrap_or(u32::MAX);

        compute_amortization(loan.max, rate.max, months).map_err(|e| {
            LoanError::ConfigError(format!(
                "{category} bounds cannot be amortized at their limits: {e}"
            ))
        })?;
        Ok(())
    }

    /// Reads a JSON array of [`BoundOverride`] entries.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let overrides: Vec<BoundOverride> = serde_json::from_reader(reader)?;
        Self::with_overrides(overrides)
    }

    pub fn get(&self, category: LoanCategory, field: LoanField) -> Bound {
        // Every (category, field) pair is populated by `standard`.
        self.bounds[&(category, field)]
    }

    /// The largest value `field` may take given the rest of `current`.
    pub fn effective_max(
        &self,
        category: LoanCategory,
        field: LoanField,
        current: &LoanParameters,
    ) -> Decimal {
        let bound = self.get(category, field);
        match field {
            LoanField::DownPayment => bound.max.min(current.loan_amount * DOWN_PAYMENT_RATIO),
            _ => bound.max,
        }
    }

    /// Bounds `proposed` for `field` and returns the resulting parameter set.
    ///
    /// Out-of-range values are never rejected, only pulled into range. Raising
    /// or lowering the loan amount re-clamps the down payment against the new
    /// ceiling in the same outcome.
    pub fn clamp_parameter(
        &self,
        category: LoanCategory,
        field: LoanField,
        proposed: Decimal,
        current: &LoanParameters,
    ) -> ClampOutcome {
        let ceiling = self.effective_max(category, field, current);
        let floor = self.get(category, field).min.min(ceiling);

        let mut value = proposed.clamp(floor, ceiling);
        if field == LoanField::TenureMonths {
            value = value
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .clamp(floor, ceiling);
        }

        if value != proposed {
            debug!(%category, %field, %proposed, %value, "clamped parameter edit");
        }

        let mut parameters = current.clone();
        parameters.set(field, value);

        let mut side_effects = Vec::new();
        if field == LoanField::LoanAmount {
            let dp_ceiling =
                self.effective_max(category, LoanField::DownPayment, &parameters);
            if parameters.down_payment > dp_ceiling {
                debug!(
                    %category,
                    from = %parameters.down_payment,
                    to = %dp_ceiling,
                    "down payment re-clamped after loan amount change"
                );
                side_effects.push(SideEffect::DownPaymentReclamped {
                    from: parameters.down_payment,
                    to: dp_ceiling,
                });
                parameters.down_payment = dp_ceiling;
            }
        }

        ClampOutcome {
            value,
            parameters,
            side_effects,
        }
    }

    /// Table rows in carousel and field order.
    pub fn entries(&self) -> impl Iterator<Item = (LoanCategory, LoanField, Bound)> + '_ {
        LoanCategory::ALL.into_iter().flat_map(move |category| {
            LoanField::ALL
                .into_iter()
                .map(move |field| (category, field, self.get(category, field)))
        })
    }
}

fn validate(field: LoanField, bound: &Bound) -> Result<()> {
    if bound.min < Decimal::ZERO {
        return Err(LoanError::ConfigError(format!(
            "{field} minimum must not be negative"
        )));
    }
    if bound.min > bound.max {
        return Err(LoanError::ConfigError(format!(
            "{field} minimum {} exceeds maximum {}",
            bound.min, bound.max
        )));
    }
    if bound.step <= Decimal::ZERO {
        return Err(LoanError::ConfigError(format!("{field} step must be positive")));
    }
    if field == LoanField::TenureMonths {
        let whole = bound.min.fract().is_zero() && bound.max.fract().is_zero();
        if bound.min < Decimal::ONE || !whole {
            return Err(LoanError::ConfigError(
                "tenure bounds must be whole months of at least one".to_string(),
            ));
        }
        if bound.max > MAX_TENURE_MONTHS {
            return Err(LoanError::ConfigError(format!(
                "tenure maximum {} exceeds {MAX_TENURE_MONTHS} months",
                bound.max
            )));
        }
    }
    Ok(())
}
