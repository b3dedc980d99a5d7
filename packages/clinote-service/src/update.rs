use time::OffsetDateTime;
use uuid::Uuid;

use clinote_storage::queries;

use crate::{Error, NoteService, NoteView, Result};

/// Field-level patch for a note. Absent fields are left untouched.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct NotePatch {
	pub title: Option<String>,
	pub content: Option<String>,
}

impl NotePatch {
	fn validate(&self) -> Result<()> {
		if self.title.is_none() && self.content.is_none() {
			return Err(Error::Validation { message: "No updates provided.".to_string() });
		}
		if let Some(title) = self.title.as_ref()
			&& title.trim().is_empty()
		{
			return Err(Error::Validation {
				message: "title must be non-empty when provided.".to_string(),
			});
		}
		if let Some(content) = self.content.as_ref()
			&& content.trim().is_empty()
		{
			return Err(Error::Validation {
				message: "content must be non-empty when provided.".to_string(),
			});
		}

		Ok(())
	}
}

impl NoteService {
	/// Merges the present patch fields into the note and stamps `updated_at`.
	///
	/// A patch whose values equal the current ones still succeeds and bumps `updated_at`;
	/// only an unknown id is not-found.
	pub async fn update(&self, note_id: Uuid, patch: NotePatch) -> Result<NoteView> {
		patch.validate()?;

		let now = OffsetDateTime::now_utc();
		let matched = queries::apply_patch(
			&self.db,
			note_id,
			patch.title.as_deref(),
			patch.content.as_deref(),
			now,
		)
		.await?;

		if matched == 0 {
			return Err(Error::NotFound { message: "Note not found.".to_string() });
		}

		let stored = queries::fetch_note(&self.db, note_id)
			.await?
			.ok_or_else(|| Error::NotFound { message: "Note not found.".to_string() })?;

		Ok(stored.into())
	}
}
