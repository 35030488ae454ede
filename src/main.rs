use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atelier::api;
use atelier::backend::{self, Backend};
use atelier::config::Config;
use atelier::facade::Workbench;
use atelier::gateway::InMemoryGateway;
use atelier::models::Project;

#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "Design documentation workbench for projects, models and class diagrams")]
struct Cli {
    /// Configuration file (defaults to $ATELIER_CONFIG, then ./config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured backend (remote, in_memory)
    #[arg(short, long, global = true)]
    backend: Option<Backend>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve an in-memory modeling service over HTTP
    Serve {
        /// Port for the relay
        #[arg(short, long, default_value = "50051")]
        port: u16,
    },
    /// List active projects
    Projects,
    /// List archived projects
    Archived,
    /// Print the Mermaid class diagram of a project or one of its models
    Diagram {
        /// Project slug
        project: String,

        /// Limit the diagram to this model
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Validate the configuration and report the selected backend
    CheckConfig,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "atelier=debug,tower_http=debug".into()),
    );

    // stdout carries command output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(&path)?;
    if let Some(backend) = cli.backend {
        config.backend = backend.as_str().to_string();
    }
    Ok(config)
}

fn print_projects(projects: &[Project]) {
    if projects.is_empty() {
        println!("No projects.");
        return;
    }
    for project in projects {
        match &project.description {
            Some(description) => println!("{}\t{}\t{}", project.slug, project.name, description),
            None => println!("{}\t{}", project.slug, project.name),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match &cli.command {
        Commands::Serve { port } => {
            let gateway = api::shared(Box::new(InMemoryGateway::new()));
            let app = api::create_router(gateway);

            let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
            tracing::info!("Modeling relay listening on http://127.0.0.1:{}", port);

            axum::serve(listener, app).await?;
        }
        Commands::Projects => {
            let workbench = Workbench::new(backend::connect(&load_config(&cli)?)?);
            print_projects(&workbench.list_projects().await?);
        }
        Commands::Archived => {
            let workbench = Workbench::new(backend::connect(&load_config(&cli)?)?);
            print_projects(&workbench.list_archived_projects().await?);
        }
        Commands::Diagram { project, model } => {
            let workbench = Workbench::new(backend::connect(&load_config(&cli)?)?);
            let diagram = match model {
                Some(model) => workbench.model_class_diagram(project, model).await?,
                None => workbench.project_class_diagram(project).await?,
            };
            println!("{}", diagram.code);
        }
        Commands::CheckConfig => {
            let config = load_config(&cli)?;
            let backend: Backend = config.backend.parse()?;
            println!("backend: {}", backend);
            if backend == Backend::Remote {
                println!("server:  {}", config.server.socket_address());
            }
        }
    }

    Ok(())
}
