//! Combo price calculator.
//!
//! Pure derivation from a matched plan pair to an itemized breakdown. The
//! discount applies to the combined total (subscriptions plus any workbooks),
//! not to each program on its own.

use serde::Serialize;

use crate::domain::foundation::{Paise, Percentage};

use super::{Plan, PricingError};

/// Fallback label for the workbook add-on.
pub const DEFAULT_WORKBOOK_NOTE: &str = "Printing + Shipping";

/// Itemized combo price. Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub duration_months: u32,
    pub include_workbooks: bool,
    pub basics_subscription: Paise,
    pub advanced_subscription: Paise,
    pub subscription_total: Paise,
    pub basics_workbook: Paise,
    pub advanced_workbook: Paise,
    pub workbook_total: Paise,
    pub original_total: Paise,
    pub discount_percent: Percentage,
    pub discount_amount: Paise,
    pub final_total: Paise,
    /// Whether either plan sells a workbook at all.
    pub workbooks_offered: bool,
    /// Price of both workbooks, shown on the toggle whether or not included.
    pub workbook_bundle_price: Paise,
    pub workbook_note: String,
}

impl PriceBreakdown {
    /// Whether the discount line should be shown.
    pub fn has_discount(&self) -> bool {
        self.discount_percent > Percentage::ZERO
    }
}

/// Computes the combo breakdown for a matched plan pair.
///
/// Both plans must cover the same duration and carry the same combo
/// discount; anything else is reported as unavailable.
pub fn calculate(
    basics: &Plan,
    advanced: &Plan,
    include_workbooks: bool,
) -> Result<PriceBreakdown, PricingError> {
    if basics.duration_months != advanced.duration_months {
        return Err(PricingError::DurationMismatch {
            basics: basics.duration_months,
            advanced: advanced.duration_months,
        });
    }
    if basics.combo_discount != advanced.combo_discount {
        return Err(PricingError::DiscountMismatch {
            basics: basics.combo_discount,
            advanced: advanced.combo_discount,
        });
    }

    let (basics_workbook, advanced_workbook) = if include_workbooks {
        (basics.workbook_price(), advanced.workbook_price())
    } else {
        (Paise::ZERO, Paise::ZERO)
    };

    let subscription_total = add(basics.price, advanced.price)?;
    let workbook_total = add(basics_workbook, advanced_workbook)?;
    let original_total = add(subscription_total, workbook_total)?;
    let discount_percent = basics.combo_discount;
    let discount_amount = discount_percent.of(original_total);
    let final_total = original_total.saturating_sub(discount_amount);

    let workbook_bundle_price = add(basics.workbook_price(), advanced.workbook_price())?;

    Ok(PriceBreakdown {
        duration_months: basics.duration_months,
        include_workbooks,
        basics_subscription: basics.price,
        advanced_subscription: advanced.price,
        subscription_total,
        basics_workbook,
        advanced_workbook,
        workbook_total,
        original_total,
        discount_percent,
        discount_amount,
        final_total,
        workbooks_offered: !workbook_bundle_price.is_zero(),
        workbook_bundle_price,
        workbook_note: basics
            .workbook_note
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_WORKBOOK_NOTE.to_string()),
    })
}

fn add(a: Paise, b: Paise) -> Result<Paise, PricingError> {
    a.checked_add(b).ok_or(PricingError::AmountOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn plan(months: u32, price: u64, workbook: Option<u64>, discount: u8) -> Plan {
        Plan {
            id: format!("plan-{}-{}", months, price),
            name: format!("{} Months", months),
            duration_months: months,
            price: Paise::new(price),
            workbook_price: workbook.map(Paise::new),
            workbook_note: None,
            combo_discount: Percentage::new(discount),
        }
    }

    #[test]
    fn subscriptions_only() {
        let basics = plan(3, 39900, Some(24900), 10);
        let advanced = plan(3, 49900, Some(25000), 10);

        let b = calculate(&basics, &advanced, false).unwrap();

        assert_eq!(b.subscription_total, Paise::new(89800));
        assert_eq!(b.workbook_total, Paise::ZERO);
        assert_eq!(b.original_total, Paise::new(89800));
        assert_eq!(b.discount_amount, Paise::new(8980));
        assert_eq!(b.final_total, Paise::new(80820));
        assert!(b.workbooks_offered);
        assert_eq!(b.workbook_bundle_price, Paise::new(49900));
    }

    #[test]
    fn with_workbooks() {
        let basics = plan(3, 39900, Some(24900), 10);
        let advanced = plan(3, 49900, Some(25000), 10);

        let b = calculate(&basics, &advanced, true).unwrap();

        assert_eq!(b.workbook_total, Paise::new(49900));
        assert_eq!(b.original_total, Paise::new(139700));
        assert_eq!(b.discount_amount, Paise::new(13970));
        assert_eq!(b.final_total, Paise::new(125730));
    }

    #[test]
    fn missing_workbook_prices_count_as_zero() {
        let basics = plan(6, 59900, None, 0);
        let advanced = plan(6, 69900, None, 0);

        let b = calculate(&basics, &advanced, true).unwrap();

        assert_eq!(b.workbook_total, Paise::ZERO);
        assert!(!b.workbooks_offered);
        assert!(!b.has_discount());
        assert_eq!(b.final_total, Paise::new(129800));
    }

    #[test]
    fn rejects_mismatched_durations() {
        let err = calculate(&plan(3, 1, None, 0), &plan(6, 1, None, 0), false).unwrap_err();
        assert_eq!(err, PricingError::DurationMismatch { basics: 3, advanced: 6 });
    }

    #[test]
    fn rejects_mismatched_discounts() {
        let err = calculate(&plan(3, 1, None, 10), &plan(3, 1, None, 15), false).unwrap_err();
        assert!(matches!(err, PricingError::DiscountMismatch { .. }));
    }

    #[test]
    fn oversized_prices_are_unavailable() {
        let basics = plan(3, u64::MAX, Some(1), 10);
        let advanced = plan(3, 1, Some(1), 10);
        assert_eq!(
            calculate(&basics, &advanced, false),
            Err(PricingError::AmountOverflow)
        );

        let basics = plan(3, u64::MAX - 1, Some(u64::MAX), 10);
        let advanced = plan(3, 1, Some(0), 10);
        assert_eq!(
            calculate(&basics, &advanced, true),
            Err(PricingError::AmountOverflow)
        );
    }

    #[test]
    fn workbook_note_falls_back_to_default() {
        let mut basics = plan(3, 1, Some(1), 0);
        let advanced = plan(3, 1, Some(1), 0);
        assert_eq!(
            calculate(&basics, &advanced, false).unwrap().workbook_note,
            DEFAULT_WORKBOOK_NOTE
        );

        basics.workbook_note = Some("Ships in 7 days".to_string());
        assert_eq!(
            calculate(&basics, &advanced, false).unwrap().workbook_note,
            "Ships in 7 days"
        );
    }

    proptest! {
        #[test]
        fn final_total_matches_formula(
            basics_price in 0u64..10_000_000,
            advanced_price in 0u64..10_000_000,
            basics_wb in 0u64..1_000_000,
            advanced_wb in 0u64..1_000_000,
            discount in 0u8..=100,
            include in any::<bool>(),
        ) {
            let basics = plan(3, basics_price, Some(basics_wb), discount);
            let advanced = plan(3, advanced_price, Some(advanced_wb), discount);

            let b = calculate(&basics, &advanced, include).unwrap();

            let subs = basics_price + advanced_price;
            let wb = if include { basics_wb + advanced_wb } else { 0 };
            let original = subs + wb;
            let expected_discount = (original * u64::from(discount) + 50) / 100;

            prop_assert_eq!(b.subscription_total.value(), subs);
            prop_assert_eq!(b.discount_amount.value(), expected_discount);
            prop_assert_eq!(b.final_total.value(), original - expected_discount);
            prop_assert!(b.final_total <= b.original_total);
        }

        #[test]
        fn toggling_workbooks_round_trips(
            price in 0u64..10_000_000,
            wb in 0u64..1_000_000,
            discount in 0u8..=100,
        ) {
            let basics = plan(6, price, Some(wb), discount);
            let advanced = plan(6, price + 1, Some(wb + 1), discount);

            let before = calculate(&basics, &advanced, false).unwrap();
            let _on = calculate(&basics, &advanced, true).unwrap();
            let after = calculate(&basics, &advanced, false).unwrap();

            prop_assert_eq!(before, after);
        }
    }
}
