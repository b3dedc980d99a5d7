use clinote_storage::queries;

use crate::{NoteService, NoteView, Result};

impl NoteService {
	/// Returns every note, oldest first. An empty store yields an empty list, not an error.
	pub async fn list(&self) -> Result<Vec<NoteView>> {
		let rows = queries::fetch_all_notes(&self.db).await?;

		Ok(rows.into_iter().map(NoteView::from).collect())
	}
}
