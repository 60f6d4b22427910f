//! Document attachment, viewing, and removal.
//!
//! This is the one service where the database and the filesystem must
//! move together: attaching copies the file into the client-keyed store
//! and inserts the row in a single transaction, removing deletes the row
//! first and the stored file after commit.

use std::path::Path;

use causa_core::types::DbId;
use causa_db::models::document::{CreateDocument, Document, UpdateDocument};
use causa_db::repositories::{ClientRepo, DocumentRepo, ProcessRepo};
use causa_docview::{DocumentKind, DocumentView, NoopRecognizer, TextRecognizer};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub struct DocumentService<'a> {
    state: &'a AppState,
}

impl<'a> DocumentService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Attach a file to a process: copy it into the owning client's
    /// directory in the store, then insert the row. If the insert fails
    /// the stored copy is removed again.
    pub async fn attach(
        &self,
        process_id: DbId,
        source: &Path,
        title: Option<String>,
    ) -> AppResult<Document> {
        let process = ProcessRepo::find_by_id(&self.state.pool, process_id)
            .await?
            .ok_or_else(|| AppError::not_found("Process", process_id))?;
        let client = ClientRepo::find_by_id(&self.state.pool, process.client_id)
            .await?
            .ok_or_else(|| AppError::not_found("Client", process.client_id))?;

        let original_filename = source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();
        let title = title.unwrap_or_else(|| {
            source
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("document")
                .to_string()
        });

        let stored = self.state.store.store(&client.identification, source)?;

        let input = CreateDocument {
            process_id,
            title,
            original_filename,
            stored_path: stored.relative_path.clone(),
            content_hash: stored.content_hash,
            size_bytes: stored.size_bytes,
        };

        let mut tx = self.state.pool.begin().await?;
        let document = match DocumentRepo::create_in_tx(&mut tx, &input).await {
            Ok(document) => document,
            Err(e) => {
                // Roll back happens on drop; take the orphaned file with it.
                if let Err(cleanup) = self.state.store.remove(&stored.relative_path) {
                    tracing::warn!(error = %cleanup, "Orphaned stored file cleanup failed");
                }
                return Err(e.into());
            }
        };
        tx.commit().await?;

        tracing::info!(document_id = document.id, process_id, "Document attached");
        Ok(document)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Document> {
        DocumentRepo::find_by_id(&self.state.pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Document", id))
    }

    pub async fn list_for_process(&self, process_id: DbId) -> AppResult<Vec<Document>> {
        Ok(DocumentRepo::list_for_process(&self.state.pool, process_id).await?)
    }

    pub async fn rename(&self, id: DbId, title: String) -> AppResult<Document> {
        DocumentRepo::update(&self.state.pool, id, &UpdateDocument { title: Some(title) })
            .await?
            .ok_or_else(|| AppError::not_found("Document", id))
    }

    /// Open a document in the viewer. Office formats are dispatched to
    /// the platform's default application instead and return `None`.
    pub async fn open(&self, id: DbId) -> AppResult<Option<DocumentView>> {
        let document = self.get(id).await?;
        let absolute = self.state.store.resolve(&document.stored_path)?;

        if DocumentKind::detect(&absolute)? == DocumentKind::External {
            open_with_default_app(&absolute)?;
            return Ok(None);
        }

        let view = DocumentView::open(&absolute, self.build_recognizer())?;
        Ok(Some(view))
    }

    /// Move a document to the trash. The stored file stays until purge.
    pub async fn detach(&self, id: DbId) -> AppResult<()> {
        if !DocumentRepo::soft_delete(&self.state.pool, id).await? {
            return Err(AppError::not_found("Document", id));
        }
        Ok(())
    }

    pub async fn restore(&self, id: DbId) -> AppResult<()> {
        if !DocumentRepo::restore(&self.state.pool, id).await? {
            return Err(AppError::not_found("Document", id));
        }
        Ok(())
    }

    /// Permanently delete a document row and its stored file.
    pub async fn purge(&self, id: DbId) -> AppResult<()> {
        let document = DocumentRepo::find_by_id_any(&self.state.pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Document", id))?;

        let mut tx = self.state.pool.begin().await?;
        DocumentRepo::hard_delete_in_tx(&mut tx, id).await?;
        tx.commit().await?;

        if let Err(e) = self.state.store.remove(&document.stored_path) {
            tracing::warn!(document_id = id, error = %e, "Stored file cleanup failed");
        }
        tracing::info!(document_id = id, "Document purged");
        Ok(())
    }

    /// The OCR engine the viewer falls back to. With the `ocr` feature
    /// off, or no models configured, scanned content extracts as empty.
    fn build_recognizer(&self) -> Box<dyn TextRecognizer> {
        #[cfg(feature = "ocr")]
        if let Some(ocr) = &self.state.config.ocr {
            use causa_docview::ocr::OarRecognizer;
            let paths = causa_docview::ocr::OcrModelPaths {
                detection_model: ocr.detection_model.clone(),
                recognition_model: ocr.recognition_model.clone(),
                character_keys: ocr.character_keys.clone(),
            };
            match OarRecognizer::new(&paths) {
                Ok(engine) => return Box::new(engine),
                Err(e) => {
                    tracing::warn!(error = %e, "OCR engine unavailable; falling back to no-op")
                }
            }
        }
        Box::new(NoopRecognizer)
    }
}

/// Hand a file to the platform's default application.
pub fn open_with_default_app(path: &Path) -> AppResult<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = std::process::Command::new("open");
        c.arg(path);
        c
    };
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    };
    #[cfg(all(unix, not(target_os = "macos")))]
    let mut command = {
        let mut c = std::process::Command::new("xdg-open");
        c.arg(path);
        c
    };

    command.spawn()?;
    tracing::debug!(path = %path.display(), "Dispatched to default application");
    Ok(())
}
