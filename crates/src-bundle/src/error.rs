use crate::event;
use crate::Encoding;
use derive_more::From;
use std::io;
use std::path::PathBuf;
use tokio::sync::broadcast;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
	// -- collection
	NoFirstFile,
	ForEachSeries {
		index: usize,
		cause: Box<Error>,
	},
	FillContent {
		index: usize,
		cause: Box<Error>,
	},
	TransformToOneToOne {
		index: usize,
		cause: Box<Error>,
	},
	WriteContentToFile {
		cause: Box<Error>,
	},

	// -- src_file
	SrcFileNoSource,
	FileRead {
		path: PathBuf,
		cause: io::Error,
	},
	FileWrite {
		path: PathBuf,
		cause: io::Error,
	},
	ReadTimeout {
		path: PathBuf,
		timeout_ms: u64,
	},

	// -- encoding
	UnknownEncoding(String),
	ContentDecode {
		path: PathBuf,
		encoding: Encoding,
	},
	ContentEncode {
		encoding: Encoding,
		ch: char,
	},

	// -- Event
	#[from]
	BroadcastSend(broadcast::error::SendError<event::Event>),

	// -- Externals
	#[from]
	SimpleFs(simple_fs::Error),
	#[from]
	TomlDe(toml::de::Error),
}

impl Error {
	pub(crate) fn boxed(self) -> Box<Error> {
		Box::new(self)
	}

	/// Returns the innermost error of a chain of context wrappers.
	pub fn root_cause(&self) -> &Error {
		match self {
			Error::ForEachSeries { cause, .. }
			| Error::FillContent { cause, .. }
			| Error::TransformToOneToOne { cause, .. }
			| Error::WriteContentToFile { cause } => cause.root_cause(),
			other => other,
		}
	}
}

// region:    --- Error Boilerplate
impl core::fmt::Display for Error {
	fn fmt(
		&self,
		fmt: &mut core::fmt::Formatter,
	) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::ForEachSeries { cause, .. }
			| Error::FillContent { cause, .. }
			| Error::TransformToOneToOne { cause, .. }
			| Error::WriteContentToFile { cause } => Some(cause.as_ref()),
			Error::FileRead { cause, .. } | Error::FileWrite { cause, .. } => Some(cause),
			Error::TomlDe(cause) => Some(cause),
			_ => None,
		}
	}
}
// endregion: --- Error Boilerplate
