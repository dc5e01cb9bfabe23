use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use objection_coach::coach::{Coach, CoachError, FallbackSettings, Response, Selection};
use objection_coach::config::{self, CoachConfig};
use objection_coach::models::{FallbackRequest, ObjectionCategory, Tone, ViewFormat};
use objection_coach::render;

#[derive(Parser)]
#[command(name = "coach")]
#[command(about = "Instant answers for franchise sales objections")]
struct Cli {
    /// Config file (default: <config dir>/objection-coach/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the objection categories with locked scripts
    Plays,
    /// Show the locked script for a category
    Play {
        /// Category slug or label, e.g. `cost` or "Risk / Fear"
        category: ObjectionCategory,

        /// Which part to show: full, sms, or phone
        #[arg(short, long, default_value = "full")]
        view: ViewFormat,

        /// Print the play as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a response for an objection not covered by the catalog
    Ask {
        /// The objection, as the prospect said it
        #[arg(required = true)]
        objection: Vec<String>,

        /// straight-talking, supportive, or assertive
        #[arg(short, long)]
        tone: Option<Tone>,

        /// Model identifier (default from config)
        #[arg(short, long)]
        model: Option<String>,

        /// Heading style: full, sms, or phone
        #[arg(short, long, default_value = "full")]
        view: ViewFormat,

        /// Turn the AI fallback off for this run
        #[arg(long)]
        no_ai: bool,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that the configured API key is accepted
    CheckKey,
    /// Write a config file with default values
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Logs go to stderr so stdout only carries rendered responses.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "objection_coach=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Print a coach notice and map it to a failing exit code.
fn notice(error: &CoachError) -> ExitCode {
    eprintln!("{}", render::render_notice(error));
    ExitCode::FAILURE
}

/// Print what the coach answered, or the notice explaining why it didn't.
fn print_response(
    result: Result<Response, CoachError>,
    view: ViewFormat,
    json: bool,
) -> anyhow::Result<ExitCode> {
    match result {
        Ok(Response::Locked(play)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(play)?);
            } else {
                println!("{}\n", play.category.label());
                print!("{}", render::render_play(play, view));
            }
        }
        Ok(Response::Generated(text)) => {
            if json {
                let body = serde_json::json!({ "response": text });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                print!("{}", render::render_generated(&text, view));
            }
        }
        Err(e) => return Ok(notice(&e)),
    }
    Ok(ExitCode::SUCCESS)
}

/// Write a default config to `path` (or the default location).
fn init_config(path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path,
        None => config::get_config_path()?,
    };
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    CoachConfig::default().save(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let load_config = || -> anyhow::Result<CoachConfig> {
        let config = CoachConfig::load(cli.config.as_deref())?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    };

    match cli.command {
        None => {
            print!("{}", render::render_menu());
        }
        Some(Commands::Plays) => {
            print!("{}", render::render_categories());
        }
        Some(Commands::Play {
            category,
            view,
            json,
        }) => {
            let config = load_config()?;
            let coach = Coach::from_config(&config);
            let settings = FallbackSettings {
                enabled: config.ai_fallback_enabled,
            };
            let result = coach
                .respond(&Selection::Locked(category), settings)
                .await;
            return print_response(result, view, json);
        }
        Some(Commands::Ask {
            objection,
            tone,
            model,
            view,
            no_ai,
            json,
        }) => {
            let config = load_config()?;
            let coach = Coach::from_config(&config);
            let settings = FallbackSettings {
                enabled: config.ai_fallback_enabled && !no_ai,
            };
            let request = FallbackRequest::new(
                objection.join(" "),
                tone.unwrap_or(config.tone),
                model.unwrap_or_else(|| config.model.clone()),
            );

            if let Err(e) = coach.check_fallback(settings, &request) {
                return Ok(notice(&e));
            }

            eprintln!("Generating response...");
            let result = coach
                .respond(&Selection::Fallback(request), settings)
                .await;
            return print_response(result, view, json);
        }
        Some(Commands::CheckKey) => {
            let config = load_config()?;
            let coach = Coach::from_config(&config);
            match coach.test_credential().await {
                Ok(()) => println!("API key OK ({})", coach.service().base_url()),
                Err(e) => return Ok(notice(&e)),
            }
        }
        Some(Commands::InitConfig { force }) => {
            init_config(cli.config.clone(), force)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
