use crate::Result;
use console::{style, StyledObject, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

// region:    --- Prompts

pub fn confirm(text: &str) -> Result<bool> {
	Term::stdout().write_line("")?;
	let res = Confirm::with_theme(&ColorfulTheme::default())
		.with_prompt(text)
		.default(false)
		.interact()?;

	Ok(res)
}

// endregion: --- Prompts

// region:    --- Icons

pub fn ico_check() -> StyledObject<&'static str> {
	style("✔").green()
}

pub fn ico_loaded() -> StyledObject<&'static str> {
	style("↧").color256(45)
}

pub fn ico_written() -> StyledObject<&'static str> {
	style("↥").green()
}

pub fn ico_skipped() -> StyledObject<&'static str> {
	style("⤼").yellow()
}

pub fn ico_err() -> StyledObject<&'static str> {
	style("✗").red()
}

// endregion: --- Icons
