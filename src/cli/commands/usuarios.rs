use clap::Subcommand;

use crate::cli::api::{push_param, Params};
use crate::cli::commands::{consultar, Consulta};
use crate::cli::config::Settings;
use crate::cli::OutputFormat;
use crate::database::models::Usuario;

#[derive(Subcommand)]
pub enum UsuariosCommands {
    #[command(about = "Consultar usuarios")]
    Consultar {
        #[arg(long, help = "Cantidad maxima de registros")]
        limit: Option<i64>,
        #[arg(long, help = "Clave de la oficina")]
        oficina_clave: Option<String>,
    },
}

pub async fn handle(cmd: UsuariosCommands, output_format: OutputFormat, settings: &Settings) -> anyhow::Result<()> {
    match cmd {
        UsuariosCommands::Consultar { limit, oficina_clave } => {
            let mut params = Params::new();
            push_param(&mut params, "limit", Some(limit.unwrap_or(settings.limit)));
            push_param(&mut params, "oficina_clave", oficina_clave);
            consultar::<Usuario>(
                settings,
                &output_format,
                Consulta {
                    path: "usuarios",
                    params,
                    headers: &["id", "email", "nombre", "oficina", "puesto"],
                    row: |u: &Usuario| {
                        vec![
                            u.id.to_string(),
                            u.email.clone(),
                            format!("{} {} {}", u.nombres, u.apellido_paterno, u.apellido_materno)
                                .trim()
                                .to_string(),
                            u.oficina_clave.clone(),
                            u.puesto.clone(),
                        ]
                    },
                    noun: "usuarios",
                },
            )
            .await
        }
    }
}
