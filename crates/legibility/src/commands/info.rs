//! Info command implementation

use clap::Args;
use legibility_core::config::{Config, ConfigSources, Settings};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    config_file: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    /// Effective limit; `None` when disabled.
    max_input_bytes: Option<usize>,
    word_list: String,
    settings: Settings,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(ToString::to_string),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(ToString::to_string),
            max_input_bytes: config.input_limit(),
            word_list: config
                .word_list
                .as_ref()
                .map_or_else(|| "built-in (Dale-Chall)".to_string(), ToString::to_string),
            settings: config.settings,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    let pkg = &info.package;
    println!(
        "{} {}",
        pkg.name.if_supports_color(Stream::Stdout, |t| t.bold()),
        pkg.version.if_supports_color(Stream::Stdout, |t| t.green())
    );
    if !pkg.description.is_empty() {
        println!("{}", pkg.description);
    }
    print_field("License", pkg.license);
    print_field("Repository", pkg.repository);

    let cfg = &info.config;
    println!();
    println!(
        "{}",
        "Configuration".if_supports_color(Stream::Stdout, |t| t.bold())
    );
    print_field(
        "Config file",
        cfg.config_file.as_deref().unwrap_or("none loaded"),
    );
    print_field("Log level", cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        print_field("Log directory", dir);
    }
    match cfg.max_input_bytes {
        Some(max) => print_field("Max input", &format!("{max} bytes")),
        None => print_field("Max input", "unlimited"),
    }
    print_field("Word list", &cfg.word_list);

    let s = &cfg.settings;
    println!();
    println!("{}", "Settings".if_supports_color(Stream::Stdout, |t| t.bold()));
    print_field("Export format", s.export_format.as_str());
    print_field("Include statistics", &s.include_statistics.to_string());
    print_field("Include timestamp", &s.include_timestamp.to_string());
    print_field("Advanced metrics", &s.show_advanced_metrics.to_string());
    print_field("Word cloud max words", &s.word_cloud_max_words.to_string());
    print_field("Word cloud min frequency", &s.word_cloud_min_freq.to_string());
    print_field("Exclude stop words", &s.exclude_stop_words.to_string());

    Ok(())
}

fn print_field(label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    println!(
        "{}: {value}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}
