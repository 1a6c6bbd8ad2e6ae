// file: src/main.rs
// description: commandline dashboard entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use threat_dashboard::utils::logging::{format_error, format_info, format_success, format_warning};
use threat_dashboard::{
    AssistantReply, Config, DashboardSession, DatasetLoader, FilterCriteria, JsonExporter,
    OllamaClient, Validator, render,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "threat_dashboard")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Cyber threat intelligence dashboard powered by a local Ollama model", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Dataset path or http(s) URL, overriding the config file
    #[arg(short, long, value_name = "SOURCE")]
    data: Option<String>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Exact country, or "all"
    #[arg(long)]
    country: Option<String>,

    /// Exact year, or "all"
    #[arg(long)]
    year: Option<String>,

    /// Exact attack type, or "all"
    #[arg(long)]
    attack_type: Option<String>,

    /// Exact target industry, or "all"
    #[arg(long)]
    industry: Option<String>,
}

impl FilterArgs {
    fn criteria(&self) -> threat_dashboard::Result<FilterCriteria> {
        FilterCriteria::from_selections(
            self.country.as_deref(),
            self.year.as_deref(),
            self.attack_type.as_deref(),
            self.industry.as_deref(),
        )
    }
}

#[derive(Args, Debug, Default)]
struct ModelArgs {
    /// Ollama base URL, overriding the config file
    #[arg(long)]
    endpoint: Option<String>,

    #[arg(long)]
    model: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the metric cards for the filtered view
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show the four dashboard charts for the filtered view
    Charts {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the values available to each filter
    Options,

    /// Ask one question about the filtered view
    Ask {
        question: String,

        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Interactive research assistant
    Chat {
        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Write a JSON snapshot of the filtered dashboard
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    threat_dashboard::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    if let Some(data) = cli.data {
        Validator::validate_source(&data)?;
        config.data.source = data;
    }

    match cli.command {
        Commands::Summary { filters } => {
            let session = open_session(&config, &filters).await?;
            println!("{}", render::metrics(&session.metrics()));
        }
        Commands::Charts { filters } => {
            let session = open_session(&config, &filters).await?;
            println!("{}", render::charts(&session.charts()));
        }
        Commands::Options => {
            let session = open_session(&config, &FilterArgs::default()).await?;
            println!("{}", render::options(&session.filter_options()));
        }
        Commands::Ask {
            question,
            filters,
            model,
        } => {
            apply_model_args(&mut config, model)?;
            let mut session = open_session(&config, &filters).await?;
            match ask_with_spinner(&mut session, &question).await {
                Ok(reply) => println!("{}", render::reply(&reply)),
                Err(e) => {
                    eprintln!("{}", format_error(&e.to_string()));
                    std::process::exit(1);
                }
            }
        }
        Commands::Chat { filters, model } => {
            apply_model_args(&mut config, model)?;
            let session = open_session(&config, &filters).await?;
            cmd_chat(session).await?;
        }
        Commands::Export {
            output,
            pretty,
            filters,
        } => {
            let session = open_session(&config, &filters).await?;
            let output = output.unwrap_or_else(|| config.export.output_dir.clone());
            let path = JsonExporter::new(output)?.export(&session, pretty)?;
            println!(
                "{}",
                format_success(&format!("Snapshot written to {}", path.display()))
            );
        }
    }

    Ok(())
}

fn apply_model_args(config: &mut Config, args: ModelArgs) -> Result<()> {
    if let Some(endpoint) = args.endpoint {
        Validator::validate_url(&endpoint)?;
        config.inference.endpoint = endpoint;
    }
    if let Some(model) = args.model {
        config.inference.model = model;
    }
    Ok(())
}

/// Loads the dataset and applies the initial filters. A failed load is
/// reported and leaves the dashboard empty rather than aborting.
async fn open_session(config: &Config, filters: &FilterArgs) -> Result<DashboardSession> {
    let client = OllamaClient::new(&config.inference.endpoint, &config.inference.model)
        .with_sample_size(config.inference.sample_size);
    let mut session = DashboardSession::new(client);

    match session.load(&DatasetLoader::new(), &config.data.source).await {
        Ok(count) => {
            eprintln!(
                "{}",
                format_success(&format!("Loaded {} cyber threat records", count))
            );
            if let Some(source) = session.source()
                && source.report.skipped() > 0
            {
                eprintln!(
                    "{}",
                    format_warning(&format!(
                        "Skipped {} malformed rows",
                        source.report.skipped()
                    ))
                );
            }
        }
        Err(e) => eprintln!("{}", format_error(&e.to_string())),
    }

    let criteria = filters.criteria()?;
    if !criteria.is_empty() {
        session.set_filters(criteria);
    }

    Ok(session)
}

async fn ask_with_spinner(
    session: &mut DashboardSession,
    question: &str,
) -> threat_dashboard::Result<AssistantReply> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Analyzing...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = session.ask(question).await;
    spinner.finish_and_clear();
    result
}

async fn cmd_chat(mut session: DashboardSession) -> Result<()> {
    println!("{}", format_info("AI Research Assistant"));
    println!("Ask questions about the cyber threat data!");
    println!(
        "Examples: \"What country has the most attacks?\", \"Analyze financial losses by industry\""
    );
    println!(
        "Commands: /filter key=value ..., /reset, /endpoint <url>, /summary, /history, /quit\n"
    );
    println!(
        "{}",
        format_info(&format!(
            "Endpoint {} | {} | {} records in view",
            session.endpoint(),
            session.criteria().describe(),
            session.filtered().len()
        ))
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("> ");
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix('/') {
            let (name, rest) = command.split_once(' ').unwrap_or((command, ""));
            match name {
                "quit" | "exit" => break,
                "reset" => {
                    let matched = session.reset_filters();
                    println!("{}", format_info(&format!("{} records in view", matched)));
                }
                "filter" => {
                    match FilterCriteria::parse_assignments(rest) {
                        Ok(criteria) => {
                            let matched = session.set_filters(criteria);
                            println!(
                                "{}",
                                format_info(&format!(
                                    "{} | {} records in view",
                                    session.criteria().describe(),
                                    matched
                                ))
                            );
                        }
                        Err(e) => println!("{}", format_error(&e.to_string())),
                    }
                }
                "endpoint" => match Validator::validate_url(rest.trim()) {
                    Ok(()) => {
                        session.set_endpoint(rest.trim());
                        println!(
                            "{}",
                            format_info(&format!("Endpoint set to {}", session.endpoint()))
                        );
                    }
                    Err(e) => println!("{}", format_error(&e.to_string())),
                },
                "summary" => println!("{}", render::metrics(&session.metrics())),
                "history" => println!("{}", render::transcript(session.transcript())),
                other => println!("{}", format_warning(&format!("Unknown command /{}", other))),
            }
            continue;
        }

        match ask_with_spinner(&mut session, line).await {
            Ok(reply) => println!("{}\n", render::reply(&reply)),
            Err(e) => println!("{}\n", format_error(&e.to_string())),
        }
    }

    Ok(())
}
