//! Document service
//!
//! Uploads enter the collection as `Processing` and a background task moves
//! them to a terminal state once the processing delay has elapsed. Removing
//! a document aborts its pending task.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::error::{FinbuddyError, FinbuddyResult};
use crate::models::{DocumentId, DocumentRecord};
use crate::storage::{Collection, Store};

use super::extractor::Extractor;

pub struct DocumentService {
    documents: Collection<DocumentRecord>,
    extractor: Arc<Extractor>,
    delay: Duration,
    pending: Mutex<HashMap<DocumentId, JoinHandle<()>>>,
}

impl DocumentService {
    pub fn new(store: &Store, extractor: Extractor, delay: Duration) -> Self {
        Self {
            documents: store.documents.clone(),
            extractor: Arc::new(extractor),
            delay,
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Add a document in `Processing` and schedule its completion.
    ///
    /// Returns `None` without touching the collection if the name is blank.
    /// Must be called from within a Tokio runtime.
    pub fn upload(&self, name: &str, size_bytes: u64) -> FinbuddyResult<Option<DocumentRecord>> {
        self.add(DocumentRecord::new(name.trim(), size_bytes))
    }

    /// Insert a caller-built document; one still `Processing` gets scheduled
    pub fn add(&self, record: DocumentRecord) -> FinbuddyResult<Option<DocumentRecord>> {
        if let Err(reason) = record.validate() {
            tracing::debug!(%reason, "Ignoring invalid document");
            return Ok(None);
        }

        self.documents.insert(record.clone())?;
        if !record.status.is_terminal() {
            self.schedule(&record)?;
        }

        tracing::info!(id = %record.id, name = %record.name, "Document uploaded");
        Ok(Some(record))
    }

    fn schedule(&self, record: &DocumentRecord) -> FinbuddyResult<()> {
        let documents = self.documents.clone();
        let extractor = Arc::clone(&self.extractor);
        let delay = self.delay;
        let id = record.id;
        let name = record.name.clone();
        let uploaded_at = record.uploaded_at;
        let empty = record.size_bytes == 0;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let outcome = if empty {
                documents.update(id, |doc| doc.fail())
            } else {
                let extracted = extractor.extract(&name, uploaded_at);
                documents.update(id, |doc| doc.complete(extracted))
            };

            match outcome {
                Ok(Some(true)) => tracing::info!(%id, "Document processed"),
                Ok(_) => tracing::debug!(%id, "Document already finished or removed"),
                Err(e) => tracing::warn!(%id, error = %e, "Failed to record processing result"),
            }
        });

        let mut pending = self.lock_pending()?;
        pending.retain(|_, h| !h.is_finished());
        if let Some(previous) = pending.insert(id, handle) {
            previous.abort();
        }
        Ok(())
    }

    /// Remove a document, cancelling its processing if still pending
    pub fn remove(&self, id: DocumentId) -> FinbuddyResult<Option<DocumentRecord>> {
        if let Some(handle) = self.lock_pending()?.remove(&id) {
            handle.abort();
            tracing::debug!(%id, "Cancelled document processing");
        }
        self.documents.remove(id)
    }

    /// Wait until every scheduled transition has run or been cancelled
    pub async fn settle(&self) -> FinbuddyResult<()> {
        let handles: Vec<_> = self.lock_pending()?.drain().map(|(_, h)| h).collect();
        for handle in handles {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    return Err(FinbuddyError::Storage(format!(
                        "Document processing task failed: {}",
                        e
                    )));
                }
            }
        }
        Ok(())
    }

    /// Number of documents still waiting to be processed
    pub fn pending_count(&self) -> FinbuddyResult<usize> {
        Ok(self
            .lock_pending()?
            .values()
            .filter(|h| !h.is_finished())
            .count())
    }

    pub fn get(&self, id: DocumentId) -> FinbuddyResult<Option<DocumentRecord>> {
        self.documents.get(id)
    }

    /// Find a document by id reference such as `doc-1a2b3c4d`
    pub fn find(&self, reference: &str) -> FinbuddyResult<Option<DocumentRecord>> {
        self.documents.find(reference)
    }

    /// All documents, most recently uploaded first
    pub fn list(&self) -> FinbuddyResult<Vec<DocumentRecord>> {
        let mut documents = self.documents.list()?;
        documents.reverse();
        Ok(documents)
    }

    fn lock_pending(
        &self,
    ) -> FinbuddyResult<std::sync::MutexGuard<'_, HashMap<DocumentId, JoinHandle<()>>>> {
        self.pending
            .lock()
            .map_err(|e| FinbuddyError::Storage(format!("Failed to acquire task lock: {}", e)))
    }
}
