use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use uisketch::backend::BackendServer;
use uisketch::config::Config;
use uisketch::logging::init_tracing;
use uisketch::pipeline::GenerationPipeline;
use uisketch::render::{export_document, render, OutputMode, EXPORT_FILE_NAME};
use uisketch::server::EditorServer;

#[derive(Debug, Parser)]
#[command(name = "uisketch", version, about = "Describe a UI in plain English, see a rendered mock-up")]
struct Cli {
    /// Config file (default: <config dir>/uisketch/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive editor in the browser
    Serve {
        /// Address to bind (host:port)
        #[arg(long)]
        bind: Option<String>,
        /// Never call the remote generation service
        #[arg(long)]
        local: bool,
    },
    /// Generate once and print the result
    Generate {
        prompt: String,
        #[arg(long, value_enum, default_value_t = PrintMode::Preview)]
        mode: PrintMode,
        #[arg(long)]
        local: bool,
    },
    /// Generate once and write a standalone HTML file
    Export {
        prompt: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        local: bool,
    },
    /// Run the bundled generation service
    Backend {
        #[arg(long)]
        bind: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PrintMode {
    Preview,
    Html,
    Jsx,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Serve { bind, local } => {
            if let Some(bind) = bind {
                config.server.bind_addr = bind;
            }
            if local {
                config.remote.enabled = false;
            }
            let pipeline = GenerationPipeline::new(&config.remote)?;
            let mut server = EditorServer::new(&config, pipeline);
            let addr = server.try_bind(&config.server.bind_addr).await?;
            eprintln!("uisketch editor running at http://{}", addr);
            server.run().await?;
        }
        Command::Generate {
            prompt,
            mode,
            local,
        } => {
            if local {
                config.remote.enabled = false;
            }
            let pipeline = GenerationPipeline::new(&config.remote)?;
            let generation = pipeline.generate(&prompt).await?;
            tracing::info!("{}", generation.status());

            let output = match mode {
                PrintMode::Preview => render(&generation.document, OutputMode::Preview),
                PrintMode::Html => render(&generation.document, OutputMode::Html),
                PrintMode::Jsx => render(&generation.document, OutputMode::Jsx),
                PrintMode::Json => serde_json::to_string_pretty(&generation.document)?,
            };
            println!("{}", output);
        }
        Command::Export {
            prompt,
            output,
            local,
        } => {
            if local {
                config.remote.enabled = false;
            }
            let pipeline = GenerationPipeline::new(&config.remote)?;
            let generation = pipeline.generate(&prompt).await?;

            let path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
            std::fs::write(&path, export_document(&generation.document))
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            println!("Wrote {}", path.display());
        }
        Command::Backend { bind } => {
            let bind_addr = bind.unwrap_or(config.backend.bind_addr);
            let mut server = BackendServer::new();
            server.try_bind(&bind_addr).await?;
            server.run().await?;
        }
    }

    Ok(())
}
