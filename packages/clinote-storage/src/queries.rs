use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Result, db::Db, models::NoteRow};

pub async fn insert_note(db: &Db, note: &NoteRow) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO notes (note_id, title, content, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5)",
	)
	.bind(note.note_id)
	.bind(note.title.as_str())
	.bind(note.content.as_str())
	.bind(note.created_at)
	.bind(note.updated_at)
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn fetch_note(db: &Db, note_id: Uuid) -> Result<Option<NoteRow>> {
	let row = sqlx::query_as(
		"\
SELECT note_id, title, content, created_at, updated_at
FROM notes
WHERE note_id = $1",
	)
	.bind(note_id)
	.fetch_optional(&db.pool)
	.await?;

	Ok(row)
}

pub async fn fetch_all_notes(db: &Db) -> Result<Vec<NoteRow>> {
	let rows = sqlx::query_as(
		"\
SELECT note_id, title, content, created_at, updated_at
FROM notes
ORDER BY created_at",
	)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

/// Applies the present fields to the row and stamps `updated_at`. Returns the number of rows
/// matched, which is zero exactly when `note_id` does not exist.
pub async fn apply_patch(
	db: &Db,
	note_id: Uuid,
	title: Option<&str>,
	content: Option<&str>,
	updated_at: OffsetDateTime,
) -> Result<u64> {
	if title.is_none() && content.is_none() {
		return Err(crate::Error::InvalidArgument("Patch contains no fields.".to_string()));
	}

	let mut builder = sqlx::QueryBuilder::new("UPDATE notes SET updated_at = ");

	builder.push_bind(updated_at);

	if let Some(title) = title {
		builder.push(", title = ");
		builder.push_bind(title);
	}
	if let Some(content) = content {
		builder.push(", content = ");
		builder.push_bind(content);
	}

	builder.push(" WHERE note_id = ");
	builder.push_bind(note_id);

	let result = builder.build().execute(&db.pool).await?;

	Ok(result.rows_affected())
}

pub async fn set_content(
	db: &Db,
	note_id: Uuid,
	content: &str,
	updated_at: OffsetDateTime,
) -> Result<u64> {
	let result = sqlx::query("UPDATE notes SET content = $1, updated_at = $2 WHERE note_id = $3")
		.bind(content)
		.bind(updated_at)
		.bind(note_id)
		.execute(&db.pool)
		.await?;

	Ok(result.rows_affected())
}

pub async fn delete_note(db: &Db, note_id: Uuid) -> Result<u64> {
	let result =
		sqlx::query("DELETE FROM notes WHERE note_id = $1").bind(note_id).execute(&db.pool).await?;

	Ok(result.rows_affected())
}
