//! The `collection` module holds `SrcCollection`, an ordered list of source files
//! that all end up in one destination.
//!
//! All the I/O of a collection is sequential. `for_each_series` and the merge loop
//! await each file before touching the next one, so the merged content always
//! follows construction order.
//!
//! Merging is a one-way state transition (`Files::Unmerged` -> `Files::Merged`).
//! Once merged, a collection always holds exactly one literal content file.

// region:    --- Modules

mod files;

use self::files::Files;
use crate::event::{Event, EventBus};
use crate::{CollectionData, Error, Options, Result, SrcFile};
use futures::future::BoxFuture;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};

// endregion: --- Modules

#[cfg(windows)]
pub const LINE_SEP: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEP: &str = "\n";

#[derive(Debug)]
pub struct SrcCollection {
	dest: PathBuf,
	options: Options,
	files: Files,
	event_bus: Option<EventBus>,
}

/// Constructors
impl SrcCollection {
	pub fn new(data: CollectionData, dest: impl Into<PathBuf>) -> Self {
		let dest = dest.into();
		let CollectionData { files, options } = data;
		let encoding = options.encoding();

		let files = files
			.into_iter()
			.map(|src| SrcFile::from_path(src, &dest, encoding))
			.collect();

		Self {
			dest,
			options,
			files: Files::Unmerged(files),
			event_bus: None,
		}
	}

	pub fn with_event_bus(mut self, event_bus: EventBus) -> Self {
		self.event_bus = Some(event_bus);
		self
	}
}

/// Accessors
impl SrcCollection {
	pub fn get_dest(&self) -> &Path {
		&self.dest
	}

	pub fn get_options(&self) -> &Options {
		&self.options
	}

	pub fn get_count(&self) -> usize {
		self.files.as_slice().len()
	}

	pub fn get_file_by_index(&self, index: usize) -> Option<&SrcFile> {
		self.files.as_slice().get(index)
	}

	pub fn has_file_by_index(&self, index: usize) -> bool {
		self.get_file_by_index(index).is_some()
	}

	pub fn get_first_file(&self) -> Option<&SrcFile> {
		self.files.as_slice().first()
	}

	pub fn is_merged(&self) -> bool {
		matches!(self.files, Files::Merged(_))
	}
}

/// Iteration
impl SrcCollection {
	pub fn for_each<F>(&self, mut visit: F)
	where
		F: FnMut(&SrcFile, usize),
	{
		for (index, file) in self.files.as_slice().iter().enumerate() {
			visit(file, index);
		}
	}

	/// Visits each file in order, one at a time.
	///
	/// The future returned by `visit` for index `n` is awaited to completion before
	/// `visit` is called for `n + 1`. The first error stops the traversal and is
	/// returned wrapped in `Error::ForEachSeries`.
	pub async fn for_each_series<F>(&mut self, mut visit: F) -> Result<()>
	where
		F: for<'a> FnMut(&'a mut SrcFile, usize) -> BoxFuture<'a, Result<()>>,
	{
		for (index, file) in self.files.as_mut_slice().iter_mut().enumerate() {
			visit(file, index).await.map_err(|cause| Error::ForEachSeries {
				index,
				cause: cause.boxed(),
			})?;
		}

		Ok(())
	}

	/// Loads the content of every file, in order.
	pub async fn fill_content(&mut self) -> Result<()> {
		let read_timeout = self.options.read_timeout();
		let event_bus = self.event_bus.clone();

		self.for_each_series(|file, index| {
			let event_bus = event_bus.clone();
			Box::pin(async move {
				fill_file(file, read_timeout).await.map_err(|cause| {
					Error::FillContent {
						index,
						cause: cause.boxed(),
					}
				})?;
				if let (Some(event_bus), Some(path)) = (event_bus, file.src()) {
					event_bus.send(Event::FileLoaded {
						index,
						path: path.to_path_buf(),
					})?;
				}
				Ok::<(), Error>(())
			})
		})
		.await
	}
}

/// Transforms
impl SrcCollection {
	/// Collapses the collection into a single file whose content is the content of
	/// every file, in order, joined by `LINE_SEP`.
	///
	/// With zero or one file, only makes sure that file (if any) is loaded.
	pub async fn transform_to_one_to_one(&mut self) -> Result<()> {
		let read_timeout = self.options.read_timeout();

		let files = match &mut self.files {
			Files::Merged(file) => {
				return fill_file(file, read_timeout).await.map_err(transform_err(0));
			}
			Files::Unmerged(files) if files.len() <= 1 => {
				if let Some(file) = files.first_mut() {
					fill_file(file, read_timeout).await.map_err(transform_err(0))?;
				}
				return Ok(());
			}
			Files::Unmerged(files) => files,
		};

		let file_count = files.len();
		let last = file_count - 1;
		let mut content = String::new();

		for (index, file) in files.iter_mut().enumerate() {
			fill_file(file, read_timeout).await.map_err(transform_err(index))?;
			content.push_str(file.content().unwrap_or_default());
			if index != last {
				content.push_str(LINE_SEP);
			}
		}

		self.files = Files::Merged(self.new_content_file(content));
		info!(file_count, dest = %self.dest.display(), "collection merged");
		self.send_event(Event::Merged { file_count })?;

		Ok(())
	}

	/// Replaces all the files with a single file holding `content`. Nothing is read.
	pub fn transform_to_one_to_one_with_content(
		&mut self,
		content: impl Into<String>,
	) -> Result<()> {
		self.files = Files::Merged(self.new_content_file(content));
		debug!(dest = %self.dest.display(), "collection content replaced");
		self.send_event(Event::ContentReplaced)?;

		Ok(())
	}

	/// Merges (see `transform_to_one_to_one`) and returns the resulting content.
	pub async fn get_content(&mut self) -> Result<&str> {
		self.transform_to_one_to_one().await?;

		self.get_first_file()
			.and_then(SrcFile::content)
			.ok_or(Error::NoFirstFile)
	}

	pub fn set_content(&mut self, content: impl Into<String>) -> Result<()> {
		self.transform_to_one_to_one_with_content(content)
	}
}

/// Write
impl SrcCollection {
	/// Merges, then writes the single resulting file to the destination.
	/// An empty collection writes nothing.
	pub async fn write_content_to_file(&mut self) -> Result<()> {
		self.merge_and_write().await.map_err(|cause| Error::WriteContentToFile {
			cause: cause.boxed(),
		})
	}

	async fn merge_and_write(&mut self) -> Result<()> {
		self.transform_to_one_to_one().await?;

		let Some(file) = self.files.as_mut_slice().first_mut() else {
			return Ok(());
		};
		file.write_content_to_file().await?;

		info!(dest = %self.dest.display(), "collection written");
		self.send_event(Event::Written {
			dest: self.dest.clone(),
		})?;

		Ok(())
	}
}

/// Private functions
impl SrcCollection {
	fn new_content_file(&self, content: impl Into<String>) -> SrcFile {
		SrcFile::from_content(content, &self.dest, self.options.encoding())
	}

	fn send_event(&self, evt: Event) -> Result<()> {
		if let Some(event_bus) = self.event_bus.as_ref() {
			event_bus.send(evt)?;
		}
		Ok(())
	}
}

fn transform_err(index: usize) -> impl FnOnce(Error) -> Error {
	move |cause| Error::TransformToOneToOne {
		index,
		cause: cause.boxed(),
	}
}

async fn fill_file(file: &mut SrcFile, read_timeout: Option<Duration>) -> Result<()> {
	let Some(read_timeout) = read_timeout else {
		return file.fill_content().await;
	};

	let path = file.src().map(Path::to_path_buf).unwrap_or_default();
	match timeout(read_timeout, file.fill_content()).await {
		Ok(res) => res,
		Err(_) => Err(Error::ReadTimeout {
			path,
			timeout_ms: read_timeout.as_millis() as u64,
		}),
	}
}

// region:    --- Tests


// endregion: --- Tests
