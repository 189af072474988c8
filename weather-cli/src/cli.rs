use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use std::path::PathBuf;
use tracing::info;
use weather_core::{
    Config, SearchOutcome, SearchSession, ZoneSetting, provider::provider_from_config,
};

use crate::{effects::TerminalEffects, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the OpenWeather API key, time zone and default city.
    Configure,

    /// Show current weather and the forecast for a city.
    Show {
        /// City name; defaults to the configured default city.
        city: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the default city, then search repeatedly until `q`.
    Interactive {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Clone, clap::Args)]
pub struct OutputArgs {
    /// IANA time zone for day boundaries, e.g. "Asia/Kolkata".
    /// Defaults to the configured zone, then to the city's own offset.
    #[arg(long)]
    tz: Option<String>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Write the weekly temperature chart as SVG.
    #[arg(long, value_name = "PATH")]
    svg: Option<PathBuf>,

    /// Skip the decorative weather effects.
    #[arg(long)]
    no_effects: bool,
}

impl OutputArgs {
    fn zone(&self, config: &Config) -> anyhow::Result<ZoneSetting> {
        match &self.tz {
            Some(name) => ZoneSetting::parse(name),
            None => config.zone(),
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, output } => {
                let config = Config::load()?;
                let session = open_session(&config, &output)?;
                let city = city.unwrap_or_else(|| config.default_city.clone());

                match session.search(&city).await? {
                    SearchOutcome::Applied(report) => present(&report, &output),
                    SearchOutcome::Stale => Ok(()),
                }
            }
            Command::Interactive { output } => {
                let config = Config::load()?;
                let session = open_session(&config, &output)?;
                let mut city = config.default_city.clone();

                loop {
                    match session.search(&city).await {
                        Ok(SearchOutcome::Applied(report)) => present(&report, &output)?,
                        Ok(SearchOutcome::Stale) => {}
                        Err(err) => eprintln!("Error: {err}"),
                    }

                    city = Text::new("City:")
                        .with_help_message("Type `q` to quit")
                        .prompt()?;
                    if city.trim().eq_ignore_ascii_case("q") {
                        break;
                    }
                }
                Ok(())
            }
        }
    }
}

fn open_session(config: &Config, output: &OutputArgs) -> anyhow::Result<SearchSession> {
    let provider = provider_from_config(config)?;
    Ok(SearchSession::new(provider, output.zone(config)?))
}

fn present(report: &weather_core::WeatherReport, output: &OutputArgs) -> anyhow::Result<()> {
    if let Some(path) = &output.svg {
        std::fs::write(path, render::chart_svg(report))
            .with_context(|| format!("Failed to write chart: {}", path.display()))?;
        info!(path = %path.display(), "Chart written");
    }

    if output.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    if !output.no_effects {
        let mut effects = TerminalEffects::new(render::LINE_WIDTH);
        weather_core::EffectRenderer::render_all(&mut effects, &report.effects);
        print!("{effects}");
    }
    print!("{}", render::report_text(report));
    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    config.set_api_key(api_key);
    config.api_key()?;

    let timezone = Text::new("Time zone (blank = city's own):")
        .with_default(config.timezone.as_deref().unwrap_or(""))
        .prompt()?;
    config.timezone = match timezone.trim() {
        "" => None,
        name => {
            ZoneSetting::parse(name)?;
            Some(name.to_string())
        }
    };

    let default_city = Text::new("Default city:")
        .with_default(&config.default_city)
        .prompt()?;
    config.default_city = default_city;

    config.save()?;
    println!(
        "Configuration saved to {}",
        Config::config_file_path()?.display()
    );
    Ok(())
}
