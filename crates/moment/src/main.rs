use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use moment_common::{logger, AppConfig};
use moment_llm::{LlmGenerator, OllamaClient, TextGenerator};
use std::path::PathBuf;
use std::sync::Arc;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "moment")]
#[command(about = "Moment - tag, mention and highlight suggestions for diary entries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

#[derive(Args, Default)]
struct ServeArgs {
    /// Host to bind to (overrides SERVER_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides SERVER_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Try the Ollama text generator (overrides LLM_ENABLED)
    #[arg(long, conflicts_with = "no_llm")]
    llm: bool,

    /// Rule-based suggestions only
    #[arg(long)]
    no_llm: bool,

    /// Log to the console only, skipping the log file
    #[arg(long)]
    console_log: bool,
}

impl ServeArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server_host = host.clone();
        }
        if let Some(port) = self.port {
            config.server_port = port;
        }
        if self.llm {
            config.llm_enabled = true;
        }
        if self.no_llm {
            config.llm_enabled = false;
        }
    }
}

/// Build the generator if enabled and reachable; otherwise the service runs rule-based.
async fn build_generator(config: &AppConfig) -> Option<Arc<dyn TextGenerator>> {
    if !config.llm_enabled {
        tracing::info!("Text generator disabled, using rule-based suggestions");
        return None;
    }

    let client = match OllamaClient::new(&config.ollama_base_url, config.llm_timeout()) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(
                "Could not create Ollama client ({}), falling back to rule-based suggestions",
                e
            );
            return None;
        }
    };
    let generator = LlmGenerator::new(client, &config.llm_model, config.llm_timeout());

    if generator.is_available().await {
        tracing::info!("Text generator ready: {} @ {}", config.llm_model, config.ollama_base_url);
        let generator: Arc<dyn TextGenerator> = Arc::new(generator);
        Some(generator)
    } else {
        tracing::warn!(
            "Ollama not reachable at {}, falling back to rule-based suggestions",
            config.ollama_base_url
        );
        None
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    let args = match cli.command {
        Some(Commands::Serve(args)) => args,
        None => ServeArgs::default(),
    };

    let mut config = AppConfig::from_env()?;
    args.apply(&mut config);
    config.validate()?;

    if args.console_log {
        logger::setup_console_logging(&config.log_level)?;
    } else {
        logger::setup_logging(&config)?;
    }

    tracing::info!("Moment starting...");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  LLM enabled: {}", config.llm_enabled);

    let generator = build_generator(&config).await;

    println!("Server listening on http://{}", config.server_bind_address());

    moment_server::start_server(config, generator).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_args_override_config() {
        let cli = Cli::try_parse_from(["moment", "serve", "--host", "0.0.0.0", "--port", "8080", "--llm"]).unwrap();
        let Some(Commands::Serve(args)) = cli.command else {
            panic!("expected serve command");
        };

        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config.server_bind_address(), "0.0.0.0:8080");
        assert!(config.llm_enabled);
    }

    #[test]
    fn test_llm_flags_conflict() {
        assert!(Cli::try_parse_from(["moment", "serve", "--llm", "--no-llm"]).is_err());
    }

    #[tokio::test]
    async fn test_disabled_generator_is_none() {
        let config = AppConfig::default();
        assert!(build_generator(&config).await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_generator_falls_back() {
        let config = AppConfig {
            llm_enabled: true,
            ollama_base_url: "http://127.0.0.1:1".to_string(),
            llm_timeout_secs: 1,
            ..AppConfig::default()
        };
        assert!(build_generator(&config).await.is_none());
    }
}
