use std::sync::Arc;

use axum::http::HeaderValue;
use color_eyre::eyre;

use clinote_service::NoteService;
use clinote_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<NoteService>,
	pub frontend_origin: HeaderValue,
}
impl AppState {
	pub async fn new(config: clinote_config::Config) -> color_eyre::Result<Self> {
		let frontend_origin = config
			.service
			.frontend_origin
			.parse::<HeaderValue>()
			.map_err(|_| eyre::eyre!("service.frontend_origin is not a valid header value."))?;
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = NoteService::new(config, db);

		Ok(Self { service: Arc::new(service), frontend_origin })
	}
}
