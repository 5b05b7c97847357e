use crate::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast::{self, Receiver, Sender};

#[derive(Debug, Clone)]
pub enum Event {
	// -- Load Events
	FileLoaded { index: usize, path: PathBuf },

	// -- Transform Events
	Merged { file_count: usize },
	ContentReplaced,

	// -- Write Events
	Written { dest: PathBuf },
}

/// EventBus lets a collection report its progress so that a CLI or app can
/// subscribe and display it.
///
/// Notes:
/// - This is a clone-efficient structure, so it's okay to be cloned and owned.
/// - `_rx` is kept in an Arc so the channel stays open (and `send` succeeds)
///   even without subscribers.
#[derive(Debug, Clone)]
pub struct EventBus {
	tx: Sender<Event>,
	_rx: Arc<Receiver<Event>>,
}

impl EventBus {
	#[allow(clippy::new_without_default)]
	pub fn new() -> EventBus {
		let (tx, rx) = broadcast::channel::<Event>(64);
		EventBus {
			tx,
			_rx: Arc::new(rx),
		}
	}

	pub(crate) fn send(&self, evt: impl Into<Event>) -> Result<()> {
		let evt = evt.into();
		self.tx.send(evt)?;
		Ok(())
	}

	pub fn subscribe(&self) -> Result<Receiver<Event>> {
		Ok(self.tx.subscribe())
	}
}
