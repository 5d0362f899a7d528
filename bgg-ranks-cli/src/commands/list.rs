use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bgg_ranks_lib::{Settings, load_collections};

use crate::error::CliError;

/// Run the `list` command.
pub(crate) fn run_list(settings: &Settings) -> Result<(), CliError> {
    let collections = load_collections(&settings.in_dir)?;

    log::info!(
        "Collections in {}:",
        settings
            .in_dir
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("");

    for collection in &collections {
        log::info!(
            "  {} {}",
            collection.name.if_supports_color(Stdout, |t| t.bold()),
            format!(
                "({} id{})",
                collection.ids.len(),
                if collection.ids.len() == 1 { "" } else { "s" }
            )
            .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
