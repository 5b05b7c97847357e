use crate::SrcFile;

/// The file state of a collection.
///
/// `Merged` is terminal: once a collection has been collapsed, nothing turns it back
/// into an `Unmerged` list.
#[derive(Debug)]
pub(super) enum Files {
	Unmerged(Vec<SrcFile>),
	Merged(SrcFile),
}

impl Files {
	pub fn as_slice(&self) -> &[SrcFile] {
		match self {
			Files::Unmerged(files) => files,
			Files::Merged(file) => std::slice::from_ref(file),
		}
	}

	pub fn as_mut_slice(&mut self) -> &mut [SrcFile] {
		match self {
			Files::Unmerged(files) => files,
			Files::Merged(file) => std::slice::from_mut(file),
		}
	}
}
