use uuid::Uuid;

use clinote_storage::queries;

use crate::{Error, NoteService, Result};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DeleteResponse {
	pub message: String,
}

impl NoteService {
	pub async fn delete(&self, note_id: Uuid) -> Result<DeleteResponse> {
		let removed = queries::delete_note(&self.db, note_id).await?;

		if removed == 0 {
			return Err(Error::NotFound { message: "Note not found.".to_string() });
		}

		Ok(DeleteResponse { message: "Note deleted successfully".to_string() })
	}
}
