use clap::Subcommand;

use crate::cli::api::{push_param, Params};
use crate::cli::commands::{consultar, yes_no, Consulta};
use crate::cli::config::Settings;
use crate::cli::OutputFormat;
use crate::database::models::Distrito;

#[derive(Subcommand)]
pub enum DistritosCommands {
    #[command(about = "Consultar distritos")]
    Consultar {
        #[arg(long, help = "Cantidad maxima de registros")]
        limit: Option<i64>,
    },
}

pub async fn handle(cmd: DistritosCommands, output_format: OutputFormat, settings: &Settings) -> anyhow::Result<()> {
    match cmd {
        DistritosCommands::Consultar { limit } => {
            let mut params = Params::new();
            push_param(&mut params, "limit", Some(limit.unwrap_or(settings.limit)));
            consultar::<Distrito>(
                settings,
                &output_format,
                Consulta {
                    path: "distritos",
                    params,
                    headers: &["id", "nombre corto", "nombre", "judicial"],
                    row: |d: &Distrito| {
                        vec![
                            d.id.to_string(),
                            d.nombre_corto.clone(),
                            d.nombre.clone(),
                            yes_no(d.es_distrito_judicial),
                        ]
                    },
                    noun: "distritos",
                },
            )
            .await
        }
    }
}
