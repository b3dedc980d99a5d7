use time::OffsetDateTime;
use uuid::Uuid;

use clinote_storage::{models::NoteRow, queries};

use crate::{NoteService, Result};

const SEED_NOTES: [(&str, &str); 2] = [
	("Note 1", "This is the first note."),
	("Note 2", "This is the second note."),
];

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PopulateResponse {
	pub inserted_ids: Vec<Uuid>,
}

impl NoteService {
	/// Inserts the fixed seed notes with server timestamps and returns their ids.
	pub async fn populate(&self) -> Result<PopulateResponse> {
		let mut inserted_ids = Vec::with_capacity(SEED_NOTES.len());

		for (title, content) in SEED_NOTES {
			let row = NoteRow {
				note_id: Uuid::new_v4(),
				title: title.to_string(),
				content: content.to_string(),
				created_at: OffsetDateTime::now_utc(),
				updated_at: None,
			};

			queries::insert_note(&self.db, &row).await?;
			inserted_ids.push(row.note_id);
		}

		Ok(PopulateResponse { inserted_ids })
	}
}
