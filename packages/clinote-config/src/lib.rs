mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, EnhancerProviderConfig, Postgres, Providers, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.frontend_origin.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.frontend_origin must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}

	let enhancer = &cfg.providers.enhancer;

	for (label, value) in [
		("providers.enhancer.api_base", &enhancer.api_base),
		("providers.enhancer.api_key", &enhancer.api_key),
		("providers.enhancer.model", &enhancer.model),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}
	if enhancer.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "providers.enhancer.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if !enhancer.temperature.is_finite() {
		return Err(Error::Validation {
			message: "providers.enhancer.temperature must be a finite number.".to_string(),
		});
	}
	if enhancer.temperature < 0.0 {
		return Err(Error::Validation {
			message: "providers.enhancer.temperature must be zero or greater.".to_string(),
		});
	}

	Ok(())
}
