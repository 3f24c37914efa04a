//! Pricing catalog port.

use async_trait::async_trait;

use crate::domain::pricing::ProgramPricing;

use super::ApiError;

/// Read access to per-program price lists.
#[async_trait]
pub trait PricingCatalog: Send + Sync {
    /// `GET /api/programs/pricing?slug=<slug>`
    async fn program_pricing(&self, slug: &str) -> Result<ProgramPricing, ApiError>;
}
