//! Combo offer: the basics and advanced programs sold together.

use serde::{Deserialize, Serialize};

use super::{calculate, Plan, PriceBreakdown, PricingError, ProgramPricing};

/// Both programs of a combo with their price lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboOffer {
    pub basics: ProgramPricing,
    pub advanced: ProgramPricing,
}

/// Plans of both programs covering the same duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanPair<'a> {
    pub basics: &'a Plan,
    pub advanced: &'a Plan,
}

impl ComboOffer {
    pub fn new(basics: ProgramPricing, advanced: ProgramPricing) -> Self {
        Self { basics, advanced }
    }

    /// Matches the two programs' plans on `duration_months`.
    pub fn match_plans(&self, duration_months: u32) -> Result<PlanPair<'_>, PricingError> {
        let basics = self.basics.plan_for(duration_months)?;
        let advanced = self.advanced.plan_for(duration_months)?;
        match (basics, advanced) {
            (Some(basics), Some(advanced)) => Ok(PlanPair { basics, advanced }),
            _ => Err(PricingError::NoMatchingPlans { duration_months }),
        }
    }

    /// Quotes the combo for a duration and workbook choice.
    pub fn quote(
        &self,
        duration_months: u32,
        include_workbooks: bool,
    ) -> Result<PriceBreakdown, PricingError> {
        let pair = self.match_plans(duration_months)?;
        calculate(pair.basics, pair.advanced, include_workbooks)
    }

    /// Duration choices, taken from the basics program's plans.
    pub fn durations(&self) -> Vec<u32> {
        self.basics.durations()
    }

    /// Checkout description, e.g. "Basics + Advanced - 3 Months".
    pub fn description(&self, duration_months: u32) -> String {
        format!(
            "{} + {} - {} Months",
            self.basics.class_name, self.advanced.class_name, duration_months
        )
    }
}
