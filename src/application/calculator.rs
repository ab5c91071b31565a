use crate::domain::amortization::compute_for;
use crate::domain::bounds::BoundTable;
use crate::domain::loan::{LoanCategory, LoanField, LoanParameters, LoanResult};
use crate::error::{LoanError, Result};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

/// Direction of a single +/- nudge on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Increase,
    Decrease,
}

#[derive(Debug, Clone)]
struct LoanState {
    parameters: LoanParameters,
    result: LoanResult,
}

/// Holds one independent parameter set and result per loan category.
///
/// Every edit goes through [`LoanCalculator::update_parameter`], which
/// bounds the value, recomputes the result and only then stores both, so a
/// stored result always matches its stored parameters.
pub struct LoanCalculator {
    bounds: BoundTable,
    loans: HashMap<LoanCategory, LoanState>,
    active: LoanCategory,
}

impl LoanCalculator {
    /// Seeds every category and computes its initial result.
    ///
    /// Seed values are passed through `bounds`, so a tightened table never
    /// leaves a category starting out of range.
    pub fn new(bounds: BoundTable) -> Result<Self> {
        let mut loans = HashMap::new();

        for category in LoanCategory::ALL {
            let mut parameters = LoanParameters::seed(category);
            for field in LoanField::ALL {
                let proposed = parameters.get(field);
                parameters = bounds
                    .clamp_parameter(category, field, proposed, &parameters)
                    .parameters;
            }
            let result = compute_for(&parameters)?;
            loans.insert(category, LoanState { parameters, result });
        }

        Ok(Self {
            bounds,
            loans,
            active: LoanCategory::default(),
        })
    }

    pub fn bounds(&self) -> &BoundTable {
        &self.bounds
    }

    pub fn get_parameters(&self, category: LoanCategory) -> &LoanParameters {
        &self.loans[&category].parameters
    }

    pub fn get_result(&self, category: LoanCategory) -> LoanResult {
        self.loans[&category].result
    }

    /// Applies one edit to `category` and recomputes its result.
    ///
    /// Out-of-range values are clamped, never rejected. Other categories are
    /// left untouched.
    pub fn update_parameter(
        &mut self,
        category: LoanCategory,
        field: LoanField,
        value: Decimal,
    ) -> Result<&LoanParameters> {
        let Some(state) = self.loans.get_mut(&category) else {
            return Err(LoanError::InvalidInput(format!(
                "no loan state for category {category}"
            )));
        };

        let outcome = self
            .bounds
            .clamp_parameter(category, field, value, &state.parameters);
        let result = compute_for(&outcome.parameters)?;

        debug!(
            %category,
            %field,
            value = %outcome.value,
            monthly_payment = %result.monthly_payment,
            "recomputed loan"
        );

        state.parameters = outcome.parameters;
        state.result = result;
        Ok(&state.parameters)
    }

    /// Moves `field` by one bound step, as the +/- buttons do.
    pub fn step_parameter(
        &mut self,
        category: LoanCategory,
        field: LoanField,
        direction: StepDirection,
    ) -> Result<&LoanParameters> {
        let step = self.bounds.get(category, field).step;
        let current = self.get_parameters(category).get(field);
        let proposed = match direction {
            StepDirection::Increase => current + step,
            StepDirection::Decrease => current - step,
        };
        self.update_parameter(category, field, proposed)
    }

    pub fn active(&self) -> LoanCategory {
        self.active
    }

    pub fn select(&mut self, category: LoanCategory) -> LoanCategory {
        self.active = category;
        self.active
    }

    /// Advances the carousel; stays put on the last category.
    pub fn select_next(&mut self) -> LoanCategory {
        if let Some(next) = self.active.next() {
            self.active = next;
        }
        self.active
    }

    /// Moves the carousel back; stays put on the first category.
    pub fn select_previous(&mut self) -> LoanCategory {
        if let Some(previous) = self.active.previous() {
            self.active = previous;
        }
        self.active
    }

    /// Every category with its parameters and result, in carousel order.
    pub fn quotes(&self) -> impl Iterator<Item = (LoanCategory, &LoanParameters, LoanResult)> + '_ {
        LoanCategory::ALL.into_iter().map(move |category| {
            let state = &self.loans[&category];
            (category, &state.parameters, state.result)
        })
    }
}
