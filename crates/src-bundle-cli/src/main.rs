// region:    --- Modules

mod error;
mod utils;

pub use self::error::{Error, Result};
use crate::utils::cli::{confirm, ico_check, ico_err, ico_loaded, ico_skipped, ico_written};
use clap::Parser;
use console::Term;
use src_bundle::event::{Event, EventBus};
use src_bundle::{CollectionData, Encoding, SrcCollection};
use std::path::{Path, PathBuf};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// endregion: --- Modules

#[tokio::main]
async fn main() {
	init_tracing();

	let args = Args::parse();

	match start(args).await {
		Ok(_) => (),
		Err(e) => {
			eprintln!("{} Error: {}", ico_err(), e);
			std::process::exit(1);
		}
	}
}

// region:    --- Types

/// Merge source files, in order, into a single destination file.
#[derive(Debug, Parser)]
#[command(name = "srcb", version)]
struct Args {
	/// Destination file.
	#[arg(short, long)]
	dest: PathBuf,

	/// Collection file (.toml or .json) with `files` and `options`.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Text encoding (utf8, ascii, latin1). Overrides the config.
	#[arg(short, long)]
	encoding: Option<String>,

	/// Per-file read deadline in milliseconds. Overrides the config.
	#[arg(long)]
	read_timeout_ms: Option<u64>,

	/// Overwrite the destination without asking.
	#[arg(short, long)]
	force: bool,

	/// Source files, appended after the config files.
	files: Vec<PathBuf>,
}

// endregion: --- Types

async fn start(args: Args) -> Result<()> {
	let data = load_data(&args)?;
	if data.files.is_empty() {
		return Err(Error::NoSourceFiles);
	}

	let dest = args.dest;
	if dest.is_dir() {
		return Err(Error::DestIsDir(dest));
	}
	if dest.exists() && !args.force && !confirm(&format!("Overwrite {}?", dest.display()))? {
		println!("{} Skipped {}", ico_skipped(), dest.display());
		return Ok(());
	}

	debug!(files = data.files.len(), dest = %dest.display(), "bundle start");

	let event_bus = EventBus::new();
	let printer = event_printer(&event_bus)?;

	let coll = SrcCollection::new(data, &dest).with_event_bus(event_bus);

	run_and_drain(coll, printer).await
}

/// Runs the bundle, then waits for the printer to drain, on success and on error.
async fn run_and_drain(mut coll: SrcCollection, printer: JoinHandle<()>) -> Result<()> {
	let res = bundle(&mut coll).await;

	// Dropping the collection drops the last sender, so the printer drains and stops.
	drop(coll);
	let printed = printer.await;

	res?;
	printed?;

	Ok(())
}

async fn bundle(coll: &mut SrcCollection) -> src_bundle::Result<()> {
	coll.fill_content().await?;
	coll.write_content_to_file().await
}

fn load_data(args: &Args) -> Result<CollectionData> {
	let mut data = match args.config.as_deref() {
		Some(config) if is_json(config) => CollectionData::load_json(config)?,
		Some(config) => CollectionData::load_toml(config)?,
		None => CollectionData::default(),
	};

	data.files.extend(args.files.iter().cloned());

	if let Some(encoding) = args.encoding.as_deref() {
		data.options.encoding = Some(encoding.parse::<Encoding>()?);
	}
	if let Some(read_timeout_ms) = args.read_timeout_ms {
		data.options.read_timeout_ms = Some(read_timeout_ms);
	}

	Ok(data)
}

fn is_json(file: &Path) -> bool {
	file.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn event_printer(event_bus: &EventBus) -> Result<JoinHandle<()>> {
	let mut rx = event_bus.subscribe()?;

	let handle = tokio::spawn(async move {
		let term = Term::stdout();

		loop {
			let evt = match rx.recv().await {
				Ok(evt) => evt,
				Err(RecvError::Lagged(_)) => continue,
				Err(RecvError::Closed) => break,
			};

			let line = match evt {
				Event::FileLoaded { index, path } => {
					format!("{} Loaded  #{index} {}", ico_loaded(), path.display())
				}
				Event::Merged { file_count } => {
					format!("{} Merged  {file_count} files", ico_check())
				}
				Event::ContentReplaced => {
					format!("{} Content replaced", ico_check())
				}
				Event::Written { dest } => {
					format!("{} Written {}", ico_written(), dest.display())
				}
			};
			let _ = term.write_line(&line);
		}

		let _ = term.flush();
	});

	Ok(handle)
}

// region:    --- Tests


// endregion: --- Tests
