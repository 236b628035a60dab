use clap::Subcommand;
use serde_json::json;

use crate::cli::api::{push_param, ApiClient, Params};
use crate::cli::commands::{consultar, Consulta};
use crate::cli::config::Settings;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::services::cit_dias_disponibles::CitDiaDisponible;

#[derive(Subcommand)]
pub enum CitDiasDisponiblesCommands {
    #[command(about = "Consultar los dias disponibles para agendar citas")]
    Consultar {
        #[arg(long, help = "Cantidad maxima de dias")]
        limit: Option<i64>,
    },

    #[command(about = "Mostrar el proximo dia disponible")]
    Proximo,
}

pub async fn handle(cmd: CitDiasDisponiblesCommands, output_format: OutputFormat, settings: &Settings) -> anyhow::Result<()> {
    match cmd {
        CitDiasDisponiblesCommands::Consultar { limit } => {
            let mut params = Params::new();
            push_param(&mut params, "limit", Some(limit.unwrap_or(settings.limit)));
            consultar::<CitDiaDisponible>(
                settings,
                &output_format,
                Consulta {
                    path: "cit_dias_disponibles",
                    params,
                    headers: &["fecha"],
                    row: |d: &CitDiaDisponible| vec![d.fecha.format("%Y-%m-%d").to_string()],
                    noun: "dias disponibles",
                },
            )
            .await
        }
        CitDiasDisponiblesCommands::Proximo => {
            let client = ApiClient::connect(settings).await?;
            let dia: CitDiaDisponible = client.record("cit_dias_disponibles/proximo", "fecha").await?;
            output_success(
                &output_format,
                &format!("Proximo dia disponible: {}", dia.fecha),
                Some(json!({ "fecha": dia.fecha })),
            )
        }
    }
}
