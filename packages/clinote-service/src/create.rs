use time::OffsetDateTime;
use uuid::Uuid;

use clinote_storage::{models::NoteRow, queries};

use crate::{Error, NoteService, NoteView, Result};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateRequest {
	pub title: String,
	pub content: String,
}

impl NoteService {
	pub async fn create(&self, req: CreateRequest) -> Result<NoteView> {
		if req.title.trim().is_empty() {
			return Err(Error::Validation { message: "title must be non-empty.".to_string() });
		}
		if req.content.trim().is_empty() {
			return Err(Error::Validation { message: "content must be non-empty.".to_string() });
		}

		let row = NoteRow {
			note_id: Uuid::new_v4(),
			title: req.title,
			content: req.content,
			created_at: OffsetDateTime::now_utc(),
			updated_at: None,
		};

		queries::insert_note(&self.db, &row).await?;

		// Read the row back so the response reflects exactly what the store persisted.
		let stored = queries::fetch_note(&self.db, row.note_id).await?.ok_or_else(|| {
			Error::Storage { message: "Inserted note could not be read back.".to_string() }
		})?;

		Ok(stored.into())
	}
}
