use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bgg_ranks_api::XmlApiClient;
use bgg_ranks_core::{Item, Ranking};
use bgg_ranks_lib::{
    Collection, PipelineOptions, Settings, load_collections, run_collections, today,
};

use crate::commands::runtime;
use crate::error::CliError;
use crate::spinner;

/// Run the `run` command.
pub(crate) fn run_rank(
    settings: &Settings,
    only: Option<Vec<String>>,
    dry_run: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let collections = select(load_collections(&settings.in_dir)?, only)?;
    let client = XmlApiClient::new(settings.base_url.as_str(), settings.timeout)?;
    let options = PipelineOptions {
        out_dir: settings.out_dir.clone(),
        date: today(),
        concurrency: settings.concurrency,
        dry_run,
    };

    let rt = runtime()?;
    let pb = spinner::start(
        format!("Fetching {} collection(s)...", collections.len()),
        quiet,
    );
    let outcomes = rt.block_on(run_collections(&client, &collections, &options));
    pb.finish_and_clear();

    let mut failed = 0;
    for outcome in &outcomes {
        let report = match &outcome.result {
            Ok(report) => report,
            Err(e) => {
                failed += 1;
                log::error!(
                    "{} {}: {}",
                    "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                    outcome.name,
                    e,
                );
                continue;
            }
        };

        let summary = format!(
            "{} boardgames, {} expansions",
            report.ranking.boardgames.len(),
            report.ranking.expansions.len()
        );
        match &report.written {
            Some(path) => log::info!(
                "{} {} results written to {} ({})",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                outcome.name.if_supports_color(Stdout, |t| t.bold()),
                path.display().if_supports_color(Stdout, |t| t.cyan()),
                summary,
            ),
            None => {
                log::info!(
                    "{} ({})",
                    outcome.name.if_supports_color(Stdout, |t| t.bold()),
                    summary,
                );
                print_ranking(&report.ranking);
                log::info!("");
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Failed {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}

/// Restrict to the named collections. Every name must exist.
fn select(
    collections: Vec<Collection>,
    only: Option<Vec<String>>,
) -> Result<Vec<Collection>, CliError> {
    let Some(only) = only else {
        return Ok(collections);
    };
    if let Some(missing) = only
        .iter()
        .find(|name| !collections.iter().any(|c| &c.name == *name))
    {
        return Err(CliError::unknown_collection(missing.clone()));
    }
    Ok(collections
        .into_iter()
        .filter(|c| only.contains(&c.name))
        .collect())
}

fn print_ranking(ranking: &Ranking) {
    print_group("Board games", &ranking.boardgames);
    print_group("Expansions", &ranking.expansions);
}

fn print_group(title: &str, items: &[Item]) {
    log::info!("  {}", title.if_supports_color(Stdout, |t| t.underline()));
    if items.is_empty() {
        log::info!("    {}", "(none)".if_supports_color(Stdout, |t| t.dimmed()));
        return;
    }
    log::info!(
        "    {:>10}  {:>6}  {:>6}  {:>7}  {:>8}  Name",
        "Rank",
        "Rating",
        "Weight",
        "Players",
        "Time"
    );
    for item in items {
        log::info!(
            "    {:>10}  {:>6.2}  {:>6.2}  {:>7}  {:>8}  {} {}",
            item.rank,
            item.rating,
            item.weight,
            item.players,
            item.time,
            item.name,
            format!("({})", item.year).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn collections() -> Vec<Collection> {
        ["shelf", "watchlist", "wishlist"]
            .iter()
            .map(|name| Collection {
                name: name.to_string(),
                path: PathBuf::from(format!("in/{name}.yaml")),
                ids: vec![1],
            })
            .collect()
    }

    #[test]
    fn select_all_by_default() {
        assert_eq!(select(collections(), None).unwrap().len(), 3);
    }

    #[test]
    fn select_named_subset() {
        let picked = select(
            collections(),
            Some(vec!["wishlist".to_string(), "shelf".to_string()]),
        )
        .unwrap();
        let names: Vec<_> = picked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["shelf", "wishlist"]);
    }

    #[test]
    fn select_unknown_name_fails() {
        let err = select(collections(), Some(vec!["attic".to_string()])).unwrap_err();
        assert!(matches!(err, CliError::UnknownCollection(name) if name == "attic"));
    }
}
