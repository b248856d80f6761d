//! Link generation command implementation

use crate::cli::Cli;
use crate::config::{ConfigFile, Settings};
use crate::core::AccessMode;
use crate::mail::read_message_id;
use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

/// Execute the command and print the link
pub fn execute(cli: &Cli) -> Result<()> {
    let file = ConfigFile::load(cli.config.as_deref())?;
    let settings = Settings::resolve(file, cli.overrides())?;

    let output = render(&settings, &cli.mail, cli.mode, cli.json)?;
    println!("{}", output);
    Ok(())
}

/// Produce the output line for one mail file
pub fn render(
    settings: &Settings,
    mail: &Path,
    mode: Option<AccessMode>,
    json: bool,
) -> Result<String> {
    let message_id = read_message_id(mail)?;
    let link = settings.link_builder().link(&message_id, mode);

    match mode {
        Some(mode) => info!(path = %mail.display(), %mode, "generated link"),
        None => info!(path = %mail.display(), "generated link"),
    }

    if json {
        debug!("rendering link as JSON");
        let output = serde_json::json!({
            "url": link.url(),
            "link": link,
        });
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(link.url())
    }
}
