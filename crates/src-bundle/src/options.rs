use crate::{Encoding, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use simple_fs::{load_json, load_toml};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Per-collection options.
///
/// Only `encoding` and `read_timeout_ms` are interpreted by this crate.
/// Any other key is kept in `extra` so that the layer constructing the
/// collection can read it back through `SrcCollection::get_options`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Options {
	#[serde(default)]
	pub encoding: Option<Encoding>,
	#[serde(default)]
	pub read_timeout_ms: Option<u64>,
	#[serde(flatten)]
	pub extra: BTreeMap<String, Value>,
}

impl Options {
	pub fn encoding(&self) -> Encoding {
		self.encoding.unwrap_or_default()
	}

	pub fn read_timeout(&self) -> Option<Duration> {
		self.read_timeout_ms.map(Duration::from_millis)
	}
}

/// Construction input of a `SrcCollection`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CollectionData {
	pub files: Vec<PathBuf>,
	#[serde(default)]
	pub options: Options,
}

/// Constructors
impl CollectionData {
	pub fn new(files: impl IntoIterator<Item = impl Into<PathBuf>>, options: Options) -> Self {
		Self {
			files: files.into_iter().map(Into::into).collect(),
			options,
		}
	}

	pub fn load_toml(file: impl AsRef<Path>) -> Result<Self> {
		Ok(load_toml(file.as_ref())?)
	}

	pub fn load_json(file: impl AsRef<Path>) -> Result<Self> {
		Ok(load_json(file.as_ref())?)
	}

	pub fn from_toml_str(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Error = Box<dyn std::error::Error>;
	type Result<T> = core::result::Result<T, Error>; // For tests.

	use super::*;

	#[test]
	fn test_collection_data_from_toml_str() -> Result<()> {
		// -- Setup & Fixtures
		let fx_toml = r#"
files = ["src/a.js", "src/b.js"]

[options]
encoding = "latin1"
read_timeout_ms = 250
banner = "/* built */"
"#;

		// -- Exec
		let data = CollectionData::from_toml_str(fx_toml)?;

		// -- Check
		assert_eq!(data.files, vec![PathBuf::from("src/a.js"), PathBuf::from("src/b.js")]);
		assert_eq!(data.options.encoding(), Encoding::Latin1);
		assert_eq!(data.options.read_timeout(), Some(Duration::from_millis(250)));
		assert_eq!(
			data.options.extra.get("banner"),
			Some(&Value::String("/* built */".to_string()))
		);

		Ok(())
	}

	#[test]
	fn test_collection_data_defaults() -> Result<()> {
		let data = CollectionData::from_toml_str(r#"files = []"#)?;

		assert!(data.files.is_empty());
		assert_eq!(data.options.encoding, None);
		assert_eq!(data.options.encoding(), Encoding::Utf8);
		assert_eq!(data.options.read_timeout(), None);

		Ok(())
	}

	#[test]
	fn test_collection_data_unknown_encoding() -> Result<()> {
		let res = CollectionData::from_toml_str(
			r#"
files = ["a.txt"]
options = { encoding = "klingon" }
"#,
		);

		assert!(res.is_err());

		Ok(())
	}

	#[test]
	fn test_collection_data_load_json() -> Result<()> {
		// -- Setup & Fixtures
		let dir = tempfile::tempdir()?;
		let file = dir.path().join("bundle.json");
		let fx_json = r#"{"files": ["x.txt", "y.txt"], "options": {"encoding": "utf-8"}}"#;
		std::fs::write(&file, fx_json)?;

		// -- Exec
		let data = CollectionData::load_json(&file)?;

		// -- Check
		assert_eq!(data.files.len(), 2);
		assert_eq!(data.options.encoding, Some(Encoding::Utf8));

		Ok(())
	}
}

// endregion: --- Tests
