use time::OffsetDateTime;
use uuid::Uuid;

use clinote_storage::queries;

use crate::{Error, NoteService, Result};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EnhanceResponse {
	pub message: String,
	pub enhanced_content: String,
}

impl NoteService {
	/// Rewrites the note's content via the enhancement provider and persists the result.
	///
	/// Enhancement is best-effort: a provider failure keeps the note's original content, and the
	/// operation still succeeds. Only an unknown id or a persist failure fails the request.
	pub async fn enhance(&self, note_id: Uuid) -> Result<EnhanceResponse> {
		let note = queries::fetch_note(&self.db, note_id)
			.await?
			.ok_or_else(|| Error::NotFound { message: "Note not found.".to_string() })?;
		let enhanced = match self
			.providers
			.enhancer
			.enhance(&self.cfg.providers.enhancer, &note.content)
			.await
		{
			Ok(text) => text,
			Err(err) => {
				tracing::warn!(%note_id, error = %err, "Enhancement failed; keeping original content.");

				note.content.clone()
			},
		};
		let matched =
			queries::set_content(&self.db, note_id, &enhanced, OffsetDateTime::now_utc()).await?;

		// The note can disappear between the fetch and the write.
		if matched == 0 {
			return Err(Error::NotFound { message: "Note not found.".to_string() });
		}

		Ok(EnhanceResponse {
			message: "Note enhanced successfully".to_string(),
			enhanced_content: enhanced,
		})
	}
}
