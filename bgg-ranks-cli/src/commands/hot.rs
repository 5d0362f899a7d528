use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bgg_ranks_api::XmlApiClient;
use bgg_ranks_lib::{Settings, save_collection};

use crate::commands::runtime;
use crate::error::CliError;
use crate::spinner;

/// Run the `hot` command.
pub(crate) fn run_hot(
    settings: &Settings,
    save: Option<String>,
    limit: Option<usize>,
    quiet: bool,
) -> Result<(), CliError> {
    let client = XmlApiClient::new(settings.base_url.as_str(), settings.timeout)?;

    let rt = runtime()?;
    let pb = spinner::start("Fetching hot list...", quiet);
    let result = rt.block_on(client.fetch_hot());
    pb.finish_and_clear();
    let mut hot = result?;

    if let Some(n) = limit {
        hot.truncate(n);
    }

    log::info!("{}", "Hot board games".if_supports_color(Stdout, |t| t.bold()));
    log::info!("");
    for item in &hot {
        let year = if item.year.is_empty() {
            String::new()
        } else {
            format!(" ({})", item.year)
        };
        log::info!(
            "  {:>3}. {}{} {}",
            item.rank,
            item.name,
            year,
            format!("[{}]", item.id).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if let Some(name) = save {
        let ids: Vec<u64> = hot.iter().map(|item| item.id).collect();
        let path = save_collection(&settings.in_dir, &name, &ids)?;
        log::info!("");
        log::info!(
            "{} Saved {} ids to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            ids.len(),
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    Ok(())
}
