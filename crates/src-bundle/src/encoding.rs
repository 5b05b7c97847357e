//! Text encodings used when reading source files and writing the destination.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Encoding {
	#[default]
	Utf8,
	Ascii,
	Latin1,
}

impl Encoding {
	pub fn as_str(&self) -> &'static str {
		match self {
			Encoding::Utf8 => "utf8",
			Encoding::Ascii => "ascii",
			Encoding::Latin1 => "latin1",
		}
	}

	/// Decodes raw file bytes into text. `path` is only used for error reporting.
	pub fn decode(&self, bytes: Vec<u8>, path: &Path) -> Result<String> {
		let decode_err = || Error::ContentDecode {
			path: path.to_path_buf(),
			encoding: *self,
		};

		match self {
			Encoding::Utf8 => String::from_utf8(bytes).map_err(|_| decode_err()),
			Encoding::Ascii => {
				if bytes.is_ascii() {
					String::from_utf8(bytes).map_err(|_| decode_err())
				} else {
					Err(decode_err())
				}
			}
			Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
		}
	}

	pub fn encode(&self, content: &str) -> Result<Vec<u8>> {
		match self {
			Encoding::Utf8 => Ok(content.as_bytes().to_vec()),
			Encoding::Ascii => match content.chars().find(|c| !c.is_ascii()) {
				Some(ch) => Err(Error::ContentEncode { encoding: *self, ch }),
				None => Ok(content.as_bytes().to_vec()),
			},
			Encoding::Latin1 => content
				.chars()
				.map(|ch| {
					u8::try_from(ch)
						.map_err(|_| Error::ContentEncode { encoding: *self, ch })
				})
				.collect(),
		}
	}
}

// region:    --- Froms

impl FromStr for Encoding {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_ascii_lowercase().as_str() {
			"utf8" | "utf-8" => Ok(Encoding::Utf8),
			"ascii" => Ok(Encoding::Ascii),
			"latin1" | "binary" | "iso-8859-1" => Ok(Encoding::Latin1),
			_ => Err(Error::UnknownEncoding(s.to_string())),
		}
	}
}

impl TryFrom<String> for Encoding {
	type Error = Error;

	fn try_from(val: String) -> Result<Self> {
		val.parse()
	}
}

impl From<Encoding> for String {
	fn from(val: Encoding) -> Self {
		val.as_str().to_string()
	}
}

impl core::fmt::Display for Encoding {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.as_str())
	}
}

// endregion: --- Froms

// region:    --- Tests


// endregion: --- Tests
