pub mod cit_categorias;
pub mod cit_citas;
pub mod cit_dias_disponibles;
pub mod distritos;
pub mod oficinas;
pub mod usuarios;

use serde::{de::DeserializeOwned, Serialize};

use crate::cli::api::{ApiClient, Params};
use crate::cli::config::Settings;
use crate::cli::utils::output_table;
use crate::cli::OutputFormat;

/// Shape of a plain `consultar` command: one listing shown as a table
pub(crate) struct Consulta<'a, T> {
    pub path: &'a str,
    pub params: Params,
    pub headers: &'a [&'a str],
    pub row: fn(&T) -> Vec<String>,
    /// Plural noun for the total line
    pub noun: &'a str,
}

pub(crate) async fn consultar<T>(settings: &Settings, output_format: &OutputFormat, consulta: Consulta<'_, T>) -> anyhow::Result<()>
where
    T: DeserializeOwned + Serialize,
{
    let client = ApiClient::connect(settings).await?;
    let listing = client.listing::<T>(consulta.path, &consulta.params).await?;
    let rows: Vec<Vec<String>> = listing.items.iter().map(consulta.row).collect();
    output_table(
        output_format,
        consulta.headers,
        &rows,
        serde_json::to_value(&listing)?,
        &format!("Total: {} {}", listing.total, consulta.noun),
    )
}

pub(crate) fn yes_no(value: bool) -> String {
    if value { "SI" } else { "NO" }.to_string()
}
