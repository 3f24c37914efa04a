//! Purchasable plans and per-program price lists.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Paise, Percentage, ProgramId, ValidationError};

use super::PricingError;

/// One purchasable duration tier of a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    /// Display name, e.g. "3 Months".
    pub name: String,
    pub duration_months: u32,
    pub price: Paise,
    #[serde(default)]
    pub workbook_price: Option<Paise>,
    #[serde(default)]
    pub workbook_note: Option<String>,
    /// Only meaningful when paired with the sibling program's plan.
    #[serde(default)]
    pub combo_discount: Percentage,
}

impl Plan {
    /// Workbook add-on price, zero when the plan has none.
    pub fn workbook_price(&self) -> Paise {
        self.workbook_price.unwrap_or(Paise::ZERO)
    }

    /// Checks the invariants the backend is expected to uphold.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.duration_months == 0 {
            return Err(ValidationError::out_of_range(
                "duration_months",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(())
    }
}

/// Price list of one program, as served by the pricing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramPricing {
    pub class_id: ProgramId,
    pub class_name: String,
    #[serde(default)]
    pub plans: Vec<Plan>,
}

impl ProgramPricing {
    /// The single plan covering `duration_months`, if any.
    ///
    /// Plans are matched by duration, never by identifier. Two plans with the
    /// same duration make the lookup ambiguous.
    pub fn plan_for(&self, duration_months: u32) -> Result<Option<&Plan>, PricingError> {
        let mut matching = self
            .plans
            .iter()
            .filter(|p| p.duration_months == duration_months);

        let first = matching.next();
        if matching.next().is_some() {
            return Err(PricingError::AmbiguousPlan {
                program: self.class_id,
                duration_months,
            });
        }
        Ok(first)
    }

    /// Durations offered, in the order the backend lists them.
    pub fn durations(&self) -> Vec<u32> {
        let mut seen = Vec::new();
        for plan in &self.plans {
            if !seen.contains(&plan.duration_months) {
                seen.push(plan.duration_months);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(id: &str, months: u32, price: u64) -> Plan {
        Plan {
            id: id.to_string(),
            name: format!("{} Months", months),
            duration_months: months,
            price: Paise::new(price),
            workbook_price: None,
            workbook_note: None,
            combo_discount: Percentage::new(10),
        }
    }

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"{
            "classId": 3,
            "className": "CareBridge Basics",
            "plans": [
                {"id": "p1", "name": "3 Months", "durationMonths": 3, "price": 39900,
                 "workbookPrice": 24900, "workbookNote": "Printing + Shipping", "comboDiscount": 10}
            ]
        }"#;
        let pricing: ProgramPricing = serde_json::from_str(json).unwrap();
        assert_eq!(pricing.class_id, ProgramId::new(3));
        assert_eq!(pricing.plans[0].workbook_price(), Paise::new(24900));
        assert_eq!(pricing.plans[0].combo_discount, Percentage::new(10));
    }

    #[test]
    fn missing_workbook_price_reads_as_zero() {
        let json = r#"{"id": "p1", "name": "6 Months", "durationMonths": 6, "price": 59900}"#;
        let plan: Plan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.workbook_price(), Paise::ZERO);
        assert_eq!(plan.combo_discount, Percentage::ZERO);
    }

    #[test]
    fn plan_for_matches_by_duration() {
        let pricing = ProgramPricing {
            class_id: ProgramId::new(1),
            class_name: "Basics".into(),
            plans: vec![plan("a", 3, 100), plan("b", 6, 200)],
        };
        assert_eq!(pricing.plan_for(6).unwrap().map(|p| p.id.as_str()), Some("b"));
        assert_eq!(pricing.plan_for(12).unwrap(), None);
    }

    #[test]
    fn plan_for_rejects_duplicate_durations() {
        let pricing = ProgramPricing {
            class_id: ProgramId::new(1),
            class_name: "Basics".into(),
            plans: vec![plan("a", 3, 100), plan("b", 3, 200)],
        };
        assert_eq!(
            pricing.plan_for(3),
            Err(PricingError::AmbiguousPlan {
                program: ProgramId::new(1),
                duration_months: 3
            })
        );
    }

    #[test]
    fn durations_are_deduplicated_in_order() {
        let pricing = ProgramPricing {
            class_id: ProgramId::new(1),
            class_name: "Basics".into(),
            plans: vec![plan("a", 6, 1), plan("b", 3, 1), plan("c", 6, 1)],
        };
        assert_eq!(pricing.durations(), vec![6, 3]);
    }

    #[test]
    fn validate_rejects_zero_duration() {
        assert!(plan("a", 0, 100).validate().is_err());
        assert!(plan("a", 3, 100).validate().is_ok());
    }
}
