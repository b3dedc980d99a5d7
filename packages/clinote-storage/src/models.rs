use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct NoteRow {
	pub note_id: Uuid,
	pub title: String,
	pub content: String,
	pub created_at: OffsetDateTime,
	pub updated_at: Option<OffsetDateTime>,
}
