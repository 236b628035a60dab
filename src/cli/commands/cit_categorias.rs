use clap::Subcommand;

use crate::cli::api::{push_param, Params};
use crate::cli::commands::{consultar, Consulta};
use crate::cli::config::Settings;
use crate::cli::OutputFormat;
use crate::database::models::CitCategoria;

#[derive(Subcommand)]
pub enum CitCategoriasCommands {
    #[command(about = "Consultar categorias")]
    Consultar {
        #[arg(long, help = "Cantidad maxima de registros")]
        limit: Option<i64>,
    },
}

pub async fn handle(cmd: CitCategoriasCommands, output_format: OutputFormat, settings: &Settings) -> anyhow::Result<()> {
    match cmd {
        CitCategoriasCommands::Consultar { limit } => {
            let mut params = Params::new();
            push_param(&mut params, "limit", Some(limit.unwrap_or(settings.limit)));
            consultar::<CitCategoria>(
                settings,
                &output_format,
                Consulta {
                    path: "cit_categorias",
                    params,
                    headers: &["id", "nombre"],
                    row: |c: &CitCategoria| vec![c.id.to_string(), c.nombre.clone()],
                    noun: "categorias",
                },
            )
            .await
        }
    }
}
