//! RFC 3339 (de)serialization for note timestamps, including the nullable `updated_at`.

use serde::{Deserialize, Deserializer, Serializer, de, ser};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

fn to_rfc3339<E>(value: &OffsetDateTime) -> Result<String, E>
where
	E: ser::Error,
{
	value.format(&Rfc3339).map_err(ser::Error::custom)
}

fn from_rfc3339<E>(raw: &str) -> Result<OffsetDateTime, E>
where
	E: de::Error,
{
	OffsetDateTime::parse(raw, &Rfc3339).map_err(de::Error::custom)
}

pub fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	serializer.serialize_str(&to_rfc3339(value)?)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
	D: Deserializer<'de>,
{
	from_rfc3339(&String::deserialize(deserializer)?)
}

pub mod option {
	use super::*;

	pub fn serialize<S>(value: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match value {
			Some(inner) => serializer.serialize_some(&to_rfc3339(inner)?),
			None => serializer.serialize_none(),
		}
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
	where
		D: Deserializer<'de>,
	{
		Option::<String>::deserialize(deserializer)?
			.map(|raw| from_rfc3339(&raw))
			.transpose()
	}
}
