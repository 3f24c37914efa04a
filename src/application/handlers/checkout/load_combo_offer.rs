//! LoadComboOfferHandler - Query handler fetching both programs of a combo.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::pricing::ComboOffer;
use crate::ports::{ApiError, PricingCatalog};

/// Query naming the two programs by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadComboOfferQuery {
    pub basics_slug: String,
    pub advanced_slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadComboOfferResult {
    pub offer: ComboOffer,
    /// Duration buttons to show, from the basics program's plans.
    pub durations: Vec<u32>,
}

pub struct LoadComboOfferHandler {
    catalog: Arc<dyn PricingCatalog>,
}

impl LoadComboOfferHandler {
    pub fn new(catalog: Arc<dyn PricingCatalog>) -> Self {
        Self { catalog }
    }

    /// Fetches both price lists concurrently; either failing fails the load.
    pub async fn handle(&self, query: LoadComboOfferQuery) -> Result<LoadComboOfferResult, ApiError> {
        let (basics, advanced) = tokio::try_join!(
            self.catalog.program_pricing(&query.basics_slug),
            self.catalog.program_pricing(&query.advanced_slug),
        )
        .map_err(|e| {
            warn!(
                error = %e,
                basics = %query.basics_slug,
                advanced = %query.advanced_slug,
                "Failed to load combo pricing"
            );
            e
        })?;

        for plan in basics.plans.iter().chain(advanced.plans.iter()) {
            if let Err(e) = plan.validate() {
                warn!(plan_id = %plan.id, error = %e, "Backend returned an invalid plan");
            }
        }

        let offer = ComboOffer::new(basics, advanced);
        let durations = offer.durations();
        debug!(?durations, "Combo offer loaded");

        Ok(LoadComboOfferResult { offer, durations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::backend::MockBackend;
    use crate::domain::foundation::{Paise, Percentage, ProgramId};
    use crate::domain::pricing::{Plan, ProgramPricing};

    fn pricing(id: i64, name: &str, months: &[u32]) -> ProgramPricing {
        ProgramPricing {
            class_id: ProgramId::new(id),
            class_name: name.into(),
            plans: months
                .iter()
                .map(|m| Plan {
                    id: format!("{}-{}", id, m),
                    name: format!("{} Months", m),
                    duration_months: *m,
                    price: Paise::new(10000),
                    workbook_price: None,
                    workbook_note: None,
                    combo_discount: Percentage::new(10),
                })
                .collect(),
        }
    }

    fn query() -> LoadComboOfferQuery {
        LoadComboOfferQuery {
            basics_slug: "carebridge-basics".into(),
            advanced_slug: "carebridge-advanced".into(),
        }
    }

    #[tokio::test]
    async fn loads_both_programs() {
        let backend = Arc::new(MockBackend::new());
        backend.set_pricing("carebridge-basics", pricing(1, "Basics", &[3, 6, 12]));
        backend.set_pricing("carebridge-advanced", pricing(2, "Advanced", &[3, 6]));
        let handler = LoadComboOfferHandler::new(backend.clone());

        let result = handler.handle(query()).await.unwrap();

        assert_eq!(result.durations, vec![3, 6, 12]);
        assert_eq!(result.offer.advanced.class_id, ProgramId::new(2));
        assert_eq!(backend.call_count("program_pricing"), 2);
    }

    #[tokio::test]
    async fn missing_program_fails_the_load() {
        let backend = Arc::new(MockBackend::new());
        backend.set_pricing("carebridge-basics", pricing(1, "Basics", &[3]));
        let handler = LoadComboOfferHandler::new(backend);

        let err = handler.handle(query()).await.unwrap_err();

        assert!(matches!(err, ApiError::Rejected { status: 404, .. }));
    }
}
