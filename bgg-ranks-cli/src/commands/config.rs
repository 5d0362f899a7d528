use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bgg_ranks_lib::{SettingSource, SettingSources, Settings, settings_path};

/// Show effective settings and their sources.
pub(crate) fn run_config_show(settings: &Settings, sources: &SettingSources) {
    let path = settings_path();

    log::info!("{}", "bgg-ranks Configuration".if_supports_color(Stdout, |t| t.bold()));
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let fields: [(&str, String, SettingSource); 5] = [
        ("base_url", settings.base_url.clone(), sources.base_url),
        (
            "in_dir",
            settings.in_dir.display().to_string(),
            sources.in_dir,
        ),
        (
            "out_dir",
            settings.out_dir.display().to_string(),
            sources.out_dir,
        ),
        (
            "timeout_secs",
            settings.timeout.as_secs().to_string(),
            sources.timeout,
        ),
        (
            "concurrency",
            settings.concurrency.to_string(),
            sources.concurrency,
        ),
    ];

    for (name, value, source) in fields {
        log::info!(
            "  {:<13} {} {}",
            name,
            value,
            format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}
