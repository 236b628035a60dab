use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::cli::config::Settings;
use crate::cli::error::CliError;

/// Query string pairs for one request
pub type Params = Vec<(&'static str, String)>;

/// Add `key=value` when the value is present
pub fn push_param<V: ToString>(params: &mut Params, key: &'static str, value: Option<V>) {
    if let Some(value) = value {
        params.push((key, value.to_string()));
    }
}

/// Listing and aggregation bodies share `items` and `total`
#[derive(Debug, Serialize, Deserialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Authenticated client for the `/v2` resources
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl ApiClient {
    /// Log in with the configured credentials and keep the bearer token
    pub async fn connect(settings: &Settings) -> Result<Self, CliError> {
        let base_url = settings.base_url()?;
        if settings.username.is_empty() {
            return Err(CliError::Configuration("No se ha definido el usuario".to_string()));
        }
        if settings.password.is_empty() {
            return Err(CliError::Configuration("No se ha definido la contraseña".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| CliError::Connection(format!("No se pudo preparar el cliente HTTP: {}", e)))?;

        let response = http
            .post(format!("{}/token", settings.host.trim_end_matches('/')))
            .form(&[("username", settings.username.as_str()), ("password", settings.password.as_str())])
            .send()
            .await
            .map_err(|_| CliError::Connection("No hay respuesta al tratar de autentificar".to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(CliError::StatusCode(format!(
                "No es lo esperado el status code: {}",
                response.status().as_u16()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|_| CliError::Response("La respuesta al autentificar no es JSON".to_string()))?;
        let access_token = body
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| CliError::Authentication("No se recibio el access_token en la respuesta".to_string()))?
            .to_string();

        tracing::debug!("authenticated against {}", base_url);
        Ok(Self { http, base_url, access_token })
    }

    /// GET `{base}/{path}` and return the JSON body of a 200 response
    pub async fn get(&self, path: &str, params: &Params) -> Result<Value, CliError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("GET {} {:?}", url, params);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(params)
            .send()
            .await
            .map_err(|_| CliError::Connection(format!("No hay respuesta al solicitar {}", path)))?;

        let status = response.status();
        if status != StatusCode::OK {
            let text = response.text().await.unwrap_or_default();
            return Err(CliError::StatusCode(format!(
                "No es lo esperado el status code: {} al solicitar {}\nmensaje: {}",
                status.as_u16(),
                path,
                text
            )));
        }

        response
            .json()
            .await
            .map_err(|_| CliError::Response(format!("La respuesta al solicitar {} no es JSON", path)))
    }

    pub async fn listing<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<Listing<T>, CliError> {
        let body = self.get(path, params).await?;
        parse_listing(body, path)
    }

    /// A single object that must carry `field`
    pub async fn record<T: DeserializeOwned>(&self, path: &str, field: &str) -> Result<T, CliError> {
        let body = self.get(path, &Params::new()).await?;
        if body.get(field).is_none() {
            return Err(CliError::Response(format!(
                "No se recibio {} en la respuesta al solicitar {}",
                field, path
            )));
        }
        serde_json::from_value(body)
            .map_err(|e| CliError::Response(format!("Respuesta inesperada al solicitar {}: {}", path, e)))
    }
}

fn parse_listing<T: DeserializeOwned>(body: Value, path: &str) -> Result<Listing<T>, CliError> {
    if body.get("items").is_none() || body.get("total").is_none() {
        return Err(CliError::Response(format!(
            "No se recibio items o total en la respuesta al solicitar {}",
            path
        )));
    }
    serde_json::from_value(body).map_err(|e| CliError::Response(format!("Respuesta inesperada al solicitar {}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Row {
        clave: String,
    }

    #[test]
    fn listing_requires_items_and_total() {
        let err = parse_listing::<Row>(json!({"items": []}), "distritos").unwrap_err();
        assert!(matches!(err, CliError::Response(_)));
        assert!(err.to_string().contains("distritos"));
    }

    #[test]
    fn listing_decodes_rows() {
        let listing: Listing<Row> =
            parse_listing(json!({"items": [{"clave": "OF1"}], "total": 1, "limit": 40, "offset": 0}), "oficinas").unwrap();
        assert_eq!(listing.total, 1);
        assert_eq!(listing.items[0].clave, "OF1");
    }

    #[test]
    fn absent_params_are_skipped() {
        let mut params = Params::new();
        push_param(&mut params, "limit", Some(40));
        push_param::<String>(&mut params, "fecha", None);
        assert_eq!(params, vec![("limit", "40".to_string())]);
    }
}
