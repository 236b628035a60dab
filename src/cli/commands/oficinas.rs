use clap::Subcommand;

use crate::cli::api::{push_param, Params};
use crate::cli::commands::{consultar, yes_no, Consulta};
use crate::cli::config::Settings;
use crate::cli::OutputFormat;
use crate::database::models::Oficina;

#[derive(Subcommand)]
pub enum OficinasCommands {
    #[command(about = "Consultar oficinas")]
    Consultar {
        #[arg(long, help = "Cantidad maxima de registros")]
        limit: Option<i64>,
        #[arg(long, help = "Solo las oficinas que pueden (true) o no pueden (false) agendar citas")]
        puede_agendar_citas: Option<bool>,
    },
}

pub async fn handle(cmd: OficinasCommands, output_format: OutputFormat, settings: &Settings) -> anyhow::Result<()> {
    match cmd {
        OficinasCommands::Consultar { limit, puede_agendar_citas } => {
            let mut params = Params::new();
            push_param(&mut params, "limit", Some(limit.unwrap_or(settings.limit)));
            push_param(&mut params, "puede_agendar_citas", puede_agendar_citas);
            consultar::<Oficina>(
                settings,
                &output_format,
                Consulta {
                    path: "oficinas",
                    params,
                    headers: &["id", "clave", "distrito", "descripcion corta", "agenda citas"],
                    row: |o: &Oficina| {
                        vec![
                            o.id.to_string(),
                            o.clave.clone(),
                            o.distrito_nombre_corto.clone(),
                            o.descripcion_corta.clone(),
                            yes_no(o.puede_agendar_citas),
                        ]
                    },
                    noun: "oficinas",
                },
            )
            .await
        }
    }
}
