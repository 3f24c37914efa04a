//! PostgreSQL implementation of LeadRepository.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::domain::leads::{FormResponseRecord, LeadError};
use crate::ports::LeadRepository;

pub struct PostgresLeadRepository {
    pool: PgPool,
}

impl PostgresLeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `form_responses` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), LeadError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS form_responses (
                id UUID PRIMARY KEY,
                form_type TEXT NOT NULL,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT,
                subject TEXT NOT NULL,
                message TEXT NOT NULL,
                metadata JSONB NOT NULL DEFAULT '{}'::jsonb,
                status TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| LeadError::storage(format!("Failed to create form_responses: {}", e)))?;

        info!("form_responses table ready");
        Ok(())
    }
}

#[async_trait]
impl LeadRepository for PostgresLeadRepository {
    async fn save(&self, record: &FormResponseRecord) -> Result<(), LeadError> {
        sqlx::query(
            r#"
            INSERT INTO form_responses (
                id, form_type, name, email, phone, subject, message, metadata, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(record.id)
        .bind(record.form_type.as_str())
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.subject)
        .bind(&record.message)
        .bind(&record.metadata)
        .bind(record.status.as_str())
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| LeadError::storage(format!("Failed to save form response: {}", e)))?;

        Ok(())
    }
}
