use crate::error::LoanError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of loan products, in carousel order.
#[derive(
    Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum LoanCategory {
    Personal,
    #[default]
    Vehicle,
    Home,
    Business,
}

impl LoanCategory {
    pub const ALL: [LoanCategory; 4] = [
        LoanCategory::Personal,
        LoanCategory::Vehicle,
        LoanCategory::Home,
        LoanCategory::Business,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LoanCategory::Personal => "Personal",
            LoanCategory::Vehicle => "Vehicle",
            LoanCategory::Home => "Home",
            LoanCategory::Business => "Business",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LoanCategory::Personal => "For personal expenses",
            LoanCategory::Vehicle => "For cars & bikes",
            LoanCategory::Home => "For house purchase",
            LoanCategory::Business => "For business needs",
        }
    }

    /// Position in [`LoanCategory::ALL`].
    pub fn index(&self) -> usize {
        match self {
            LoanCategory::Personal => 0,
            LoanCategory::Vehicle => 1,
            LoanCategory::Home => 2,
            LoanCategory::Business => 3,
        }
    }

    /// The category to the right, or `None` at the end of the carousel.
    pub fn next(&self) -> Option<LoanCategory> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The category to the left, or `None` at the start of the carousel.
    pub fn previous(&self) -> Option<LoanCategory> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for LoanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LoanCategory {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(LoanCategory::Personal),
            "vehicle" => Ok(LoanCategory::Vehicle),
            "home" => Ok(LoanCategory::Home),
            "business" => Ok(LoanCategory::Business),
            other => Err(LoanError::InvalidInput(format!(
                "unknown loan category '{other}'"
            ))),
        }
    }
}

/// An editable input of a loan.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum LoanField {
    AnnualIncome,
    LoanAmount,
    DownPayment,
    TenureMonths,
    InterestRate,
}

impl LoanField {
    pub const ALL: [LoanField; 5] = [
        LoanField::AnnualIncome,
        LoanField::LoanAmount,
        LoanField::DownPayment,
        LoanField::TenureMonths,
        LoanField::InterestRate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LoanField::AnnualIncome => "Annual Income",
            LoanField::LoanAmount => "Loan Amount",
            LoanField::DownPayment => "Down payment",
            LoanField::TenureMonths => "Tenure",
            LoanField::InterestRate => "Interest rate",
        }
    }
}

impl fmt::Display for LoanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LoanField {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "annual_income" | "income" => Ok(LoanField::AnnualIncome),
            "loan_amount" | "amount" => Ok(LoanField::LoanAmount),
            "down_payment" => Ok(LoanField::DownPayment),
            "tenure_months" | "tenure" => Ok(LoanField::TenureMonths),
            "interest_rate" | "rate" => Ok(LoanField::InterestRate),
            other => Err(LoanError::InvalidInput(format!(
                "unknown loan field '{other}'"
            ))),
        }
    }
}

/// The inputs of one loan category.
///
/// Only ever mutated through bound-checked updates, so
/// `down_payment <= 0.8 * loan_amount` holds for every stored instance.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct LoanParameters {
    pub annual_income: Decimal,
    pub loan_amount: Decimal,
    pub down_payment: Decimal,
    pub tenure_months: u32,
    /// Annual interest rate in percent.
    pub interest_rate: Decimal,
}

impl LoanParameters {
    /// Seed values a category starts the session with.
    pub fn seed(category: LoanCategory) -> Self {
        match category {
            LoanCategory::Personal => Self {
                annual_income: dec!(600000),
                loan_amount: dec!(500000),
                down_payment: dec!(50000),
                tenure_months: 24,
                interest_rate: dec!(12.0),
            },
            LoanCategory::Vehicle => Self {
                annual_income: dec!(950000),
                loan_amount: dec!(950000),
                down_payment: dec!(150000),
                tenure_months: 60,
                interest_rate: dec!(8.5),
            },
            LoanCategory::Home => Self {
                annual_income: dec!(1200000),
                loan_amount: dec!(5000000),
                down_payment: dec!(1000000),
                tenure_months: 240,
                interest_rate: dec!(7.5),
            },
            LoanCategory::Business => Self {
                annual_income: dec!(2000000),
                loan_amount: dec!(2000000),
                down_payment: dec!(200000),
                tenure_months: 84,
                interest_rate: dec!(10.0),
            },
        }
    }

    /// The amount actually borrowed and amortized.
    pub fn principal(&self) -> Decimal {
        self.loan_amount - self.down_payment
    }

    pub fn get(&self, field: LoanField) -> Decimal {
        match field {
            LoanField::AnnualIncome => self.annual_income,
            LoanField::LoanAmount => self.loan_amount,
            LoanField::DownPayment => self.down_payment,
            LoanField::TenureMonths => Decimal::from(self.tenure_months),
            LoanField::InterestRate => self.interest_rate,
        }
    }

    /// Writes an already clamped value. Tenure is truncated to whole months.
    pub(crate) fn set(&mut self, field: LoanField, value: Decimal) {
        match field {
            LoanField::AnnualIncome => self.annual_income = value,
            LoanField::LoanAmount => self.loan_amount = value,
            LoanField::DownPayment => self.down_payment = value,
            LoanField::TenureMonths => {
                let fallback = if value.is_sign_negative() { 0 } else { u32::MAX };
                self.tenure_months = value.trunc().to_u32().unwrap_or(fallback);
            }
            LoanField::InterestRate => self.interest_rate = value,
        }
    }
}

/// Derived payment figures for one category.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct LoanResult {
    pub monthly_payment: Decimal,
    pub total_payable: Decimal,
    pub total_interest: Decimal,
}

impl LoanResult {
    pub const ZERO: Self = Self {
        monthly_payment: Decimal::ZERO,
        total_payable: Decimal::ZERO,
        total_interest: Decimal::ZERO,
    };

    /// Share of principal and interest in the total payable, in percent.
    pub fn breakdown(&self) -> PaymentBreakdown {
        if self.total_payable <= Decimal::ZERO {
            return PaymentBreakdown {
                principal_percent: Decimal::ZERO,
                interest_percent: Decimal::ZERO,
            };
        }

        let principal = self.total_payable - self.total_interest;
        let share = |part: Decimal| {
            (part / self.total_payable * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        };

        PaymentBreakdown {
            principal_percent: share(principal),
            interest_percent: share(self.total_interest),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct PaymentBreakdown {
    pub principal_percent: Decimal,
    pub interest_percent: Decimal,
}
