// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{ProfileType, ProjectionPoint};

pub const PROJECTION_MONTHS: u32 = 12;

pub fn tips_for(profile_type: ProfileType) -> [&'static str; 4] {
    match profile_type {
        ProfileType::Salary => [
            "Save at least 20% of your monthly income for emergencies",
            "Take advantage of tax-saving investments like PPF, ELSS, and NPS",
            "Create separate funds for long-term goals like home purchase",
            "Track and reduce everyday expenses to increase monthly savings",
        ],
        ProfileType::Student => [
            "Create a monthly budget based on your allowance or part-time income",
            "Use student discounts whenever possible (transport, food, entertainment)",
            "Choose affordable living options and split utilities with roommates",
            "Avoid unnecessary education loans and credit card debt",
        ],
        ProfileType::Business => [
            "Separate personal and business finances with different accounts",
            "Track all business expenses meticulously for tax deductions",
            "Maintain an emergency fund for 3-6 months of business expenses",
            "Reinvest profits strategically in the business for growth",
        ],
        ProfileType::Housewife => [
            "Build a household budget with clear expense categories",
            "Plan meals in advance to avoid food waste and unnecessary purchases",
            "Consider small home-based business opportunities",
            "Start a family emergency fund with at least 6 months of expenses",
        ],
        ProfileType::Default => [
            "Track all your expenses to identify spending patterns",
            "Create a budget with clear categories for better financial control",
            "Build an emergency fund with 3-6 months of expenses",
            "Review and cut unnecessary subscriptions and services",
        ],
    }
}

pub fn growth_rate(profile_type: ProfileType) -> Decimal {
    match profile_type {
        ProfileType::Business => Decimal::new(5, 2),
        ProfileType::Salary => Decimal::new(25, 3),
        ProfileType::Housewife => Decimal::new(2, 2),
        ProfileType::Student => Decimal::new(15, 3),
        ProfileType::Default => Decimal::new(2, 2),
    }
}

/// Savings curve for the next twelve months, starting the month after `from`.
///
/// Month `m` (1-based) is `current + monthly * m * (1 + rate * (m - 1))`,
/// rounded to whole units. Points saturate at the `Decimal` bounds.
pub fn project_savings(
    current_savings: Decimal,
    monthly_savings: Decimal,
    profile_type: ProfileType,
    from: NaiveDate,
) -> Vec<ProjectionPoint> {
    let rate = growth_rate(profile_type);
    (1..=PROJECTION_MONTHS)
        .map(|m| {
            let idx = Decimal::from(m);
            let growth = Decimal::ONE + rate * (idx - Decimal::ONE);
            let projected =
                current_savings.saturating_add(monthly_savings.saturating_mul(idx * growth));
            let name = from
                .checked_add_months(Months::new(m))
                .map(|d| d.format("%b").to_string())
                .unwrap_or_default();
            ProjectionPoint {
                name,
                savings: projected.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outlook {
    Low,
    Moderate,
    Healthy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsInsight {
    pub outlook: Outlook,
    pub ratio: Decimal,
    pub text: &'static str,
}

/// Classifies the share of income kept. Zero income counts as a zero ratio.
pub fn savings_insight(income: Decimal, expenses: Decimal) -> SavingsInsight {
    let ratio = if income.is_zero() {
        Decimal::ZERO
    } else {
        (income - expenses) / income
    };
    let (outlook, text) = if ratio < Decimal::new(10, 2) {
        (
            Outlook::Low,
            "Your current saving rate is low. Consider reducing non-essential expenses.",
        )
    } else if ratio < Decimal::new(20, 2) {
        (
            Outlook::Moderate,
            "You're saving, but aim to increase your rate to at least 20% of income.",
        )
    } else {
        (
            Outlook::Healthy,
            "Great saving habits! You're on track to build substantial wealth.",
        )
    };
    SavingsInsight {
        outlook,
        ratio: ratio.round_dp(4),
        text,
    }
}
