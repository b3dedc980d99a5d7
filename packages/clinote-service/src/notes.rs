use time::OffsetDateTime;
use uuid::Uuid;

use clinote_storage::models::NoteRow;

/// Wire form of a note. `id` is the canonical hyphenated UUID text; timestamps are RFC 3339;
/// `updated_at` stays null until the first update or enhance.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NoteView {
	pub id: Uuid,
	pub title: String,
	pub content: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde::option")]
	pub updated_at: Option<OffsetDateTime>,
}

impl From<NoteRow> for NoteView {
	fn from(row: NoteRow) -> Self {
		Self {
			id: row.note_id,
			title: row.title,
			content: row.content,
			created_at: row.created_at,
			updated_at: row.updated_at,
		}
	}
}
