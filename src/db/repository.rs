//! Gate-pass operations over the injected store.
//!
//! Each operation performs one full load, at most one mutation and, when
//! something changed, one full save.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::GatePassStore;
use crate::errors::AppError;
use crate::models::{
    CreateGatePassRequest, Datastore, GatePassRequest, GatePassStatus, UpdateStatusRequest,
};

/// Repository for all gate-pass operations.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn GatePassStore>,
}

impl Repository {
    pub fn new(store: Arc<dyn GatePassStore>) -> Self {
        Self { store }
    }

    /// List all requests in insertion order.
    pub async fn list_requests(&self) -> Result<Vec<GatePassRequest>, AppError> {
        Ok(self.store.load().await?.requests)
    }

    /// Validate and append a new pending request.
    pub async fn create_request(
        &self,
        request: CreateGatePassRequest,
    ) -> Result<GatePassRequest, AppError> {
        let input = request.validate()?;

        let mut datastore = self.store.load().await?;

        let record = GatePassRequest::new(next_id(&datastore), input, Utc::now());
        datastore.requests.push(record.clone());
        self.store.save(&datastore).await?;

        tracing::info!(id = %record.id, roll_number = %record.roll_number, "Gate pass request created");
        Ok(record)
    }

    /// Record an approver decision.
    ///
    /// Overwrites any earlier decision; `approved_at` is stamped for
    /// rejections as well.
    pub async fn update_status(
        &self,
        id: &str,
        request: UpdateStatusRequest,
    ) -> Result<GatePassRequest, AppError> {
        let status = request.decision()?;

        let mut datastore = self.store.load().await?;
        let record = datastore
            .find_mut(id)
            .ok_or_else(|| AppError::NotFound("Request not found".to_string()))?;

        record.status = status;
        record.remarks = request.remarks.unwrap_or_default();
        record.approved_at = Some(Utc::now());
        let updated = record.clone();

        self.store.save(&datastore).await?;

        tracing::info!(id = %updated.id, status = %updated.status, "Gate pass request updated");
        Ok(updated)
    }

    /// Mark an approved pass as presented at the gate.
    ///
    /// Repeated scans refresh `scanned_at`.
    pub async fn scan(&self, id: &str) -> Result<GatePassRequest, AppError> {
        let mut datastore = self.store.load().await?;
        let record = datastore
            .find_mut(id)
            .ok_or_else(|| AppError::NotFound("Gate pass not found".to_string()))?;

        if record.status != GatePassStatus::Approved {
            return Err(AppError::InvalidState("Gate pass is not approved".to_string()));
        }

        record.scanned_at = Some(Utc::now());
        let scanned = record.clone();

        self.store.save(&datastore).await?;

        tracing::info!(id = %scanned.id, "Gate pass scanned");
        Ok(scanned)
    }
}

/// Time-ordered id not yet present in the collection.
fn next_id(datastore: &Datastore) -> String {
    loop {
        let id = Uuid::now_v7().to_string();
        if !datastore.contains(&id) {
            return id;
        }
    }
}
