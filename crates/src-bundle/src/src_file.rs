//! A single source file handle: either backed by a path on disk, or by literal
//! content held in memory (the result of a merge or an override).

use crate::{Encoding, Error, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SrcFile {
	src: Option<PathBuf>,
	content: Option<String>,
	dest: PathBuf,
	encoding: Encoding,
}

/// Constructors
impl SrcFile {
	pub fn from_path(
		src: impl Into<PathBuf>,
		dest: impl Into<PathBuf>,
		encoding: Encoding,
	) -> Self {
		Self {
			src: Some(src.into()),
			content: None,
			dest: dest.into(),
			encoding,
		}
	}

	pub fn from_content(
		content: impl Into<String>,
		dest: impl Into<PathBuf>,
		encoding: Encoding,
	) -> Self {
		Self {
			src: None,
			content: Some(content.into()),
			dest: dest.into(),
			encoding,
		}
	}
}

/// Public functions
impl SrcFile {
	/// `None` for literal content files.
	pub fn src(&self) -> Option<&Path> {
		self.src.as_deref()
	}

	pub fn dest(&self) -> &Path {
		&self.dest
	}

	pub fn encoding(&self) -> Encoding {
		self.encoding
	}

	/// `None` until `fill_content` succeeded (always `Some` for literal content files).
	pub fn content(&self) -> Option<&str> {
		self.content.as_deref()
	}

	pub fn is_loaded(&self) -> bool {
		self.content.is_some()
	}

	/// Loads the content from `src` if not loaded yet.
	pub async fn fill_content(&mut self) -> Result<()> {
		if self.content.is_some() {
			return Ok(());
		}

		let Some(src) = self.src.as_ref() else {
			return Err(Error::SrcFileNoSource);
		};

		let bytes = fs::read(src).await.map_err(|cause| Error::FileRead {
			path: src.clone(),
			cause,
		})?;
		debug!(path = %src.display(), bytes = bytes.len(), "src file read");

		self.content = Some(self.encoding.decode(bytes, src)?);

		Ok(())
	}

	/// Writes the content to `dest`, creating the parent directories if needed.
	pub async fn write_content_to_file(&mut self) -> Result<()> {
		self.fill_content().await?;
		let content = self.content.as_deref().unwrap_or_default();
		let bytes = self.encoding.encode(content)?;

		let write_err = |cause: std::io::Error| Error::FileWrite {
			path: self.dest.clone(),
			cause,
		};

		if let Some(parent) = self.dest.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent).await.map_err(write_err)?;
		}
		fs::write(&self.dest, &bytes).await.map_err(write_err)?;
		debug!(path = %self.dest.display(), bytes = bytes.len(), "src file written");

		Ok(())
	}
}

// region:    --- Tests


// endregion: --- Tests
