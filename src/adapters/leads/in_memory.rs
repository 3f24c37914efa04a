//! In-memory lead adapters.
//!
//! `InMemoryLeadRepository` backs the server when no database is configured
//! and doubles as a test fake. `MockLeadRelay` answers with a fixed result.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::leads::{FormResponseRecord, LeadError, LeadSubmission};
use crate::ports::{LeadRelay, LeadRepository};

#[derive(Default, Clone)]
pub struct InMemoryLeadRepository {
    records: Arc<Mutex<Vec<FormResponseRecord>>>,
    failure: Option<String>,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every save fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    fn guard(&self) -> MutexGuard<'_, Vec<FormResponseRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn records(&self) -> Vec<FormResponseRecord> {
        self.guard().clone()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn save(&self, record: &FormResponseRecord) -> Result<(), LeadError> {
        if let Some(message) = &self.failure {
            return Err(LeadError::storage(message.clone()));
        }
        self.guard().push(record.clone());
        Ok(())
    }
}

#[derive(Clone)]
pub struct MockLeadRelay {
    result: Result<Value, LeadError>,
    forwarded: Arc<Mutex<Vec<LeadSubmission>>>,
}

impl MockLeadRelay {
    pub fn responding(response: Value) -> Self {
        Self {
            result: Ok(response),
            forwarded: Arc::default(),
        }
    }

    pub fn failing(error: LeadError) -> Self {
        Self {
            result: Err(error),
            forwarded: Arc::default(),
        }
    }

    /// Every payload received, in order.
    pub fn forwarded(&self) -> Vec<LeadSubmission> {
        self.forwarded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl LeadRelay for MockLeadRelay {
    async fn forward(&self, submission: &LeadSubmission) -> Result<Value, LeadError> {
        self.forwarded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(submission.clone());
        self.result.clone()
    }
}
