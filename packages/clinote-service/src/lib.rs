pub mod create;
pub mod delete;
pub mod enhance;
pub mod list;
pub mod notes;
pub mod populate;
pub mod time_serde;
pub mod update;

mod error;

pub use error::{Error, Result};

use std::{future::Future, pin::Pin, sync::Arc};

pub use create::CreateRequest;
pub use delete::DeleteResponse;
pub use enhance::EnhanceResponse;
pub use notes::NoteView;
pub use populate::PopulateResponse;
pub use update::NotePatch;

use clinote_config::{Config, EnhancerProviderConfig};
use clinote_providers::enhancer;
use clinote_storage::db::Db;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Seam for the external text-generation call so tests can substitute the provider.
pub trait EnhancerProvider
where
	Self: Send + Sync,
{
	fn enhance<'a>(
		&'a self,
		cfg: &'a EnhancerProviderConfig,
		content: &'a str,
	) -> BoxFuture<'a, clinote_providers::Result<String>>;
}

#[derive(Clone)]
pub struct Providers {
	pub enhancer: Arc<dyn EnhancerProvider>,
}

struct DefaultProviders;

impl EnhancerProvider for DefaultProviders {
	fn enhance<'a>(
		&'a self,
		cfg: &'a EnhancerProviderConfig,
		content: &'a str,
	) -> BoxFuture<'a, clinote_providers::Result<String>> {
		Box::pin(enhancer::enhance(cfg, content))
	}
}

impl Providers {
	pub fn new(enhancer: Arc<dyn EnhancerProvider>) -> Self {
		Self { enhancer }
	}
}

impl Default for Providers {
	fn default() -> Self {
		Self { enhancer: Arc::new(DefaultProviders) }
	}
}

pub struct NoteService {
	pub cfg: Config,
	pub db: Db,
	pub providers: Providers,
}
impl NoteService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db, providers: Providers::default() }
	}

	pub fn with_providers(cfg: Config, db: Db, providers: Providers) -> Self {
		Self { cfg, db, providers }
	}
}
