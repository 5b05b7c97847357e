// region:    --- Modules

mod collection;
mod encoding;
mod error;
pub mod event;
mod options;
mod src_file;

pub use self::error::{Error, Result};

pub use crate::collection::{SrcCollection, LINE_SEP};
pub use crate::encoding::Encoding;
pub use crate::options::{CollectionData, Options};
pub use crate::src_file::SrcFile;

// endregion: --- Modules
