pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod report;
pub mod sendgrid;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

pub use error::CliError;

#[derive(Parser)]
#[command(name = "citas")]
#[command(about = "Citas V2 CLI - reportes y mensajes sobre la API de administracion")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Categorias de los servicios")]
    CitCategorias {
        #[command(subcommand)]
        cmd: commands::cit_categorias::CitCategoriasCommands,
    },

    #[command(about = "Citas: consultas, cantidades y mensajes")]
    CitCitas {
        #[command(subcommand)]
        cmd: commands::cit_citas::CitCitasCommands,
    },

    #[command(about = "Dias disponibles para agendar citas")]
    CitDiasDisponibles {
        #[command(subcommand)]
        cmd: commands::cit_dias_disponibles::CitDiasDisponiblesCommands,
    },

    #[command(about = "Distritos")]
    Distritos {
        #[command(subcommand)]
        cmd: commands::distritos::DistritosCommands,
    },

    #[command(about = "Oficinas")]
    Oficinas {
        #[command(subcommand)]
        cmd: commands::oficinas::OficinasCommands,
    },

    #[command(about = "Usuarios")]
    Usuarios {
        #[command(subcommand)]
        cmd: commands::usuarios::UsuariosCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let settings = config::Settings::from_env();

    match cli.command {
        Commands::CitCategorias { cmd } => commands::cit_categorias::handle(cmd, output_format, &settings).await,
        Commands::CitCitas { cmd } => commands::cit_citas::handle(cmd, output_format, &settings).await,
        Commands::CitDiasDisponibles { cmd } => {
            commands::cit_dias_disponibles::handle(cmd, output_format, &settings).await
        }
        Commands::Distritos { cmd } => commands::distritos::handle(cmd, output_format, &settings).await,
        Commands::Oficinas { cmd } => commands::oficinas::handle(cmd, output_format, &settings).await,
        Commands::Usuarios { cmd } => commands::usuarios::handle(cmd, output_format, &settings).await,
    }
}
