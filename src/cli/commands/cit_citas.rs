use chrono::{Duration, Local, NaiveDate};
use clap::{ArgAction, Subcommand};
use serde_json::json;

use crate::cli::api::{push_param, ApiClient, Listing, Params};
use crate::cli::config::Settings;
use crate::cli::report::{elaboracion_now, html_table, Message, Pivot};
use crate::cli::sendgrid::Mailer;
use crate::cli::utils::{output_notice, output_progress, output_success, output_table};
use crate::cli::OutputFormat;
use crate::database::models::{CantidadAgendada, CantidadCreada, CitCita, Oficina, Usuario};
use crate::services::cit_dias_disponibles::CitDiaDisponible;

const CREADOS_POR_DIA: &str = "cit_citas/calcular_cantidades_creados_por_dia";
const AGENDADAS_POR_OFICINA_SERVICIO: &str = "cit_citas/calcular_cantidades_agendadas_por_oficina_servicio";

#[derive(Subcommand)]
pub enum CitCitasCommands {
    #[command(about = "Consultar citas")]
    Consultar {
        #[arg(long, help = "Cantidad maxima de registros")]
        limit: Option<i64>,
        #[arg(long, help = "Fecha de las citas (AAAA-MM-DD)")]
        fecha: Option<NaiveDate>,
        #[arg(long, help = "E-mail del cliente")]
        email: Option<String>,
        #[arg(long, help = "Clave de la oficina")]
        oficina_clave: Option<String>,
        #[arg(long, help = "Estado: ASISTIO, CANCELO o PENDIENTE")]
        estado: Option<String>,
    },

    #[command(about = "Enviar mensaje con las citas de una oficina en una fecha")]
    Enviar {
        #[arg(help = "Destinatario")]
        email: String,
        #[arg(help = "Fecha de las citas (AAAA-MM-DD)")]
        fecha: NaiveDate,
        #[arg(help = "Clave de la oficina")]
        oficina_clave: String,
        #[arg(long, default_value = "PENDIENTE")]
        estado: String,
        #[arg(long, default_value_t = 400)]
        limit: i64,
    },

    #[command(about = "Mostrar cantidades de citas creadas por dia")]
    MostrarCantidadesCreadosPorDia {
        #[arg(long)]
        creado: Option<NaiveDate>,
        #[arg(long)]
        creado_desde: Option<NaiveDate>,
        #[arg(long)]
        creado_hasta: Option<NaiveDate>,
    },

    #[command(about = "Mostrar cantidades de citas agendadas por oficina y servicio")]
    MostrarCantidadesAgendadasPorOficinaServicio {
        #[arg(long)]
        inicio: Option<NaiveDate>,
        #[arg(long)]
        inicio_desde: Option<NaiveDate>,
        #[arg(long)]
        inicio_hasta: Option<NaiveDate>,
    },

    #[command(about = "Enviar informe diario")]
    EnviarInformeDiario {
        #[arg(help = "Destinatario")]
        email: String,
    },

    #[command(about = "Enviar la agenda de las citas a los usuarios de cada oficina")]
    EnviarAgendaAUsuarios {
        #[arg(long, default_value_t = 200)]
        limit: i64,
        #[arg(long, default_value_t = true, action = ArgAction::Set, help = "Con true solo muestra, no envia")]
        test: bool,
    },
}

pub async fn handle(cmd: CitCitasCommands, output_format: OutputFormat, settings: &Settings) -> anyhow::Result<()> {
    match cmd {
        CitCitasCommands::Consultar {
            limit,
            fecha,
            email,
            oficina_clave,
            estado,
        } => {
            let client = ApiClient::connect(settings).await?;
            let citas = CitasQuery {
                limit: limit.unwrap_or(settings.limit),
                fecha,
                email,
                oficina_clave,
                estado,
            }
            .fetch(&client)
            .await?;
            let rows: Vec<Vec<String>> = citas
                .items
                .iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        c.creado.format("%Y-%m-%d %H:%M:%S").to_string(),
                        c.oficina_clave.clone(),
                        c.inicio.format("%Y-%m-%d %H:%M:%S").to_string(),
                        c.cit_cliente_nombre.clone(),
                        c.cit_servicio_clave.clone(),
                        c.estado.clone(),
                    ]
                })
                .collect();
            output_table(
                &output_format,
                &["id", "creado", "oficina", "inicio", "nombre", "servicio", "estado"],
                &rows,
                serde_json::to_value(&citas)?,
                &format!("Total: {} citas", citas.total),
            )
        }

        CitCitasCommands::Enviar {
            email,
            fecha,
            oficina_clave,
            estado,
            limit,
        } => {
            let mailer = Mailer::new(settings.sendgrid()?);
            let client = ApiClient::connect(settings).await?;
            let citas = CitasQuery {
                limit,
                fecha: Some(fecha),
                email: None,
                oficina_clave: Some(oficina_clave.clone()),
                estado: Some(estado),
            }
            .fetch(&client)
            .await?;
            if citas.total == 0 {
                return output_notice(&output_format, "No hay citas para enviar");
            }

            let rows: Vec<Vec<String>> = citas
                .items
                .iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        c.inicio.format("%H:%M").to_string(),
                        c.cit_cliente_nombre.clone(),
                        c.cit_servicio_clave.clone(),
                        c.notas.clone(),
                    ]
                })
                .collect();
            let subject = format!("Citas de la oficina {} para la fecha {}", oficina_clave, fecha);
            let html = Message::new()
                .heading(&subject)
                .html(html_table(&["ID", "Hora", "Nombre", "Servicio", "Notas"], &rows))
                .finish(&elaboracion_now());
            mailer.send(&[email.clone()], &subject, &html).await?;

            output_success(
                &output_format,
                &format!("Mensaje enviado a {} con {}", email, subject),
                Some(json!({ "email": email, "subject": subject, "total": citas.total })),
            )
        }

        CitCitasCommands::MostrarCantidadesCreadosPorDia {
            creado,
            creado_desde,
            creado_hasta,
        } => {
            let client = ApiClient::connect(settings).await?;
            let mut params = Params::new();
            push_param(&mut params, "creado", creado);
            push_param(&mut params, "creado_desde", creado_desde);
            push_param(&mut params, "creado_hasta", creado_hasta);
            let cantidades: Listing<CantidadCreada> = client.listing(CREADOS_POR_DIA, &params).await?;
            let rows = creados_rows(&cantidades.items);
            output_table(
                &output_format,
                &["creado", "cantidad"],
                &rows,
                serde_json::to_value(&cantidades)?,
                &format!("Total: {} citas", cantidades.total),
            )
        }

        CitCitasCommands::MostrarCantidadesAgendadasPorOficinaServicio {
            inicio,
            inicio_desde,
            inicio_hasta,
        } => {
            let client = ApiClient::connect(settings).await?;
            let mut params = Params::new();
            push_param(&mut params, "inicio", inicio);
            push_param(&mut params, "inicio_desde", inicio_desde);
            push_param(&mut params, "inicio_hasta", inicio_hasta);
            let cantidades: Listing<CantidadAgendada> = client.listing(AGENDADAS_POR_OFICINA_SERVICIO, &params).await?;
            let pivot = Pivot::from_items(&cantidades.items);
            output_table(
                &output_format,
                &pivot.headers(),
                &pivot.rows(),
                serde_json::to_value(&cantidades)?,
                &format!("Total: {} citas", cantidades.total),
            )
        }

        CitCitasCommands::EnviarInformeDiario { email } => enviar_informe_diario(settings, &output_format, email).await,

        CitCitasCommands::EnviarAgendaAUsuarios { limit, test } => {
            enviar_agenda_a_usuarios(settings, &output_format, limit, test).await
        }
    }
}

/// Filters accepted by the appointments listing
struct CitasQuery {
    limit: i64,
    fecha: Option<NaiveDate>,
    email: Option<String>,
    oficina_clave: Option<String>,
    estado: Option<String>,
}

impl CitasQuery {
    async fn fetch(self, client: &ApiClient) -> anyhow::Result<Listing<CitCita>> {
        let mut params = Params::new();
        push_param(&mut params, "limit", Some(self.limit));
        push_param(&mut params, "fecha", self.fecha);
        push_param(&mut params, "cit_cliente_email", self.email);
        push_param(&mut params, "oficina_clave", self.oficina_clave);
        push_param(&mut params, "estado", self.estado);
        Ok(client.listing("cit_citas", &params).await?)
    }
}

fn creados_rows(items: &[CantidadCreada]) -> Vec<Vec<String>> {
    let mut items: Vec<&CantidadCreada> = items.iter().collect();
    items.sort_by_key(|c| c.creado);
    items
        .iter()
        .map(|c| vec![c.creado.format("%Y-%m-%d").to_string(), c.cantidad.to_string()])
        .collect()
}

async fn enviar_informe_diario(settings: &Settings, output_format: &OutputFormat, email: String) -> anyhow::Result<()> {
    let mailer = Mailer::new(settings.sendgrid()?);
    let client = ApiClient::connect(settings).await?;

    let today = Local::now().date_naive();
    let yesterday = today - Duration::days(1);

    let mut params = Params::new();
    push_param(&mut params, "inicio", Some(today));
    let agendadas: Listing<CantidadAgendada> = client.listing(AGENDADAS_POR_OFICINA_SERVICIO, &params).await?;
    if agendadas.total == 0 {
        return output_notice(output_format, "No hay datos para hoy");
    }
    let pivot = Pivot::from_items(&agendadas.items);
    let agendadas_title = format!("{} citas agendadas por oficina y servicio en {}", agendadas.total, today);

    let mut params = Params::new();
    push_param(&mut params, "creado_hasta", Some(yesterday));
    let creados: Listing<CantidadCreada> = client.listing(CREADOS_POR_DIA, &params).await?;
    let creados_title = format!("{} citas creadas por los clientes en los siguientes dias", creados.total);

    let subject = format!("Citas Informe del {}", today);
    let html = Message::new()
        .heading(&agendadas_title)
        .html(html_table(&pivot.headers(), &pivot.rows()))
        .heading(&creados_title)
        .html(html_table(&["creado", "cantidad"], &creados_rows(&creados.items)))
        .finish(&elaboracion_now());
    mailer.send(&[email.clone()], &subject, &html).await?;

    output_success(
        output_format,
        &format!("Mensaje enviado a {} con {}", email, subject),
        Some(json!({ "email": email, "subject": subject })),
    )
}

async fn enviar_agenda_a_usuarios(
    settings: &Settings,
    output_format: &OutputFormat,
    limit: i64,
    test: bool,
) -> anyhow::Result<()> {
    let mailer = Mailer::new(settings.sendgrid()?);
    let elaboracion = elaboracion_now();
    let client = ApiClient::connect(settings).await?;

    let dia: CitDiaDisponible = client.record("cit_dias_disponibles/proximo", "fecha").await?;
    let fecha = dia.fecha;

    let mut params = Params::new();
    push_param(&mut params, "limit", Some(limit));
    push_param(&mut params, "puede_agendar_citas", Some(true));
    let oficinas: Listing<Oficina> = client.listing("oficinas", &params).await?;

    let mut summary: Vec<Vec<String>> = Vec::new();
    for oficina in &oficinas.items {
        let mut params = Params::new();
        push_param(&mut params, "limit", Some(limit));
        push_param(&mut params, "oficina_clave", Some(&oficina.clave));
        let usuarios: Listing<Usuario> = client.listing("usuarios", &params).await?;
        if usuarios.total == 0 {
            tracing::warn!("no recipients for office {}", oficina.clave);
            output_progress(output_format, &format!("NO HAY DESTINATARIOS para la oficina {}", oficina.clave));
            continue;
        }
        let destinatarios: Vec<String> = usuarios.items.iter().map(|u| u.email.clone()).collect();
        let destinatarios_str = destinatarios.join(", ");

        let citas = CitasQuery {
            limit,
            fecha: Some(fecha),
            email: None,
            oficina_clave: Some(oficina.clave.clone()),
            estado: None,
        }
        .fetch(&client)
        .await?;
        let citas_str = if citas.total == 0 {
            "SIN CITAS".to_string()
        } else {
            citas.total.to_string()
        };
        summary.push(vec![
            fecha.to_string(),
            oficina.clave.clone(),
            citas_str.clone(),
            destinatarios_str.clone(),
        ]);

        let subject = format!("Citas de la oficina {} para la fecha {}", oficina.descripcion_corta, fecha);
        let message = Message::new().heading(&subject);
        let message = if citas.total == 0 {
            message.paragraph("SIN CITAS AGENDADAS")
        } else {
            let rows: Vec<Vec<String>> = citas
                .items
                .iter()
                .map(|c| {
                    vec![
                        c.inicio.format("%H:%M").to_string(),
                        c.cit_cliente_nombre.clone(),
                        c.cit_servicio_clave.clone(),
                        c.notas.clone(),
                    ]
                })
                .collect();
            message.html(html_table(&["Hora", "Nombre", "Servicio", "Notas"], &rows))
        };
        let html = message.finish(&elaboracion);

        output_progress(
            output_format,
            &format!(
                "Enviando mensaje {} {} con {} citas a {}",
                fecha, oficina.clave, citas_str, destinatarios_str
            ),
        );
        if !test {
            mailer.send(&destinatarios, &subject, &html).await?;
        }
    }

    let data: Vec<serde_json::Value> = summary
        .iter()
        .map(|row| json!({ "fecha": row[0], "oficina": row[1], "citas": row[2], "destinatarios": row[3] }))
        .collect();
    output_table(
        output_format,
        &["Fecha", "Oficina", "Citas", "Destinatarios"],
        &summary,
        json!({ "items": data, "test": test }),
        "",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(subcommand)]
        cmd: CitCitasCommands,
    }

    #[test]
    fn creados_are_sorted_by_date() {
        let day = |d: u32| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
        let rows = creados_rows(&[
            CantidadCreada { creado: day(3), cantidad: 7 },
            CantidadCreada { creado: day(1), cantidad: 2 },
        ]);
        assert_eq!(rows[0], vec!["2024-05-01".to_string(), "2".to_string()]);
        assert_eq!(rows[1][0], "2024-05-03");
    }

    #[test]
    fn agenda_defaults_to_test_mode() {
        let parsed = Harness::parse_from(["citas", "enviar-agenda-a-usuarios"]);
        assert!(matches!(parsed.cmd, CitCitasCommands::EnviarAgendaAUsuarios { limit: 200, test: true }));

        let parsed = Harness::parse_from(["citas", "enviar-agenda-a-usuarios", "--test", "false"]);
        assert!(matches!(parsed.cmd, CitCitasCommands::EnviarAgendaAUsuarios { test: false, .. }));
    }

    #[test]
    fn enviar_takes_positional_arguments() {
        let parsed = Harness::parse_from(["citas", "enviar", "a@example.com", "2024-05-06", "OF1"]);
        match parsed.cmd {
            CitCitasCommands::Enviar { email, fecha, oficina_clave, estado, limit } => {
                assert_eq!(email, "a@example.com");
                assert_eq!(fecha, NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());
                assert_eq!(oficina_clave, "OF1");
                assert_eq!(estado, "PENDIENTE");
                assert_eq!(limit, 400);
            }
            _ => panic!("expected enviar"),
        }
    }
}
