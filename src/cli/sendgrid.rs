use serde_json::{json, Value};

use crate::cli::config::SendgridSettings;
use crate::cli::error::CliError;

const SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// Minimal SendGrid v3 client for HTML messages
pub struct Mailer {
    http: reqwest::Client,
    settings: SendgridSettings,
}

impl Mailer {
    pub fn new(settings: SendgridSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }

    pub async fn send(&self, to: &[String], subject: &str, html: &str) -> Result<(), CliError> {
        let body = mail_body(&self.settings.from_email, to, subject, html);
        let response = self
            .http
            .post(SEND_URL)
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|_| CliError::Connection("No hay respuesta de SendGrid".to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(CliError::StatusCode(format!(
                "SendGrid respondio con status code: {}\nmensaje: {}",
                status.as_u16(),
                text
            )));
        }
        tracing::info!("sent \"{}\" to {}", subject, to.join(", "));
        Ok(())
    }
}

fn mail_body(from: &str, to: &[String], subject: &str, html: &str) -> Value {
    let recipients: Vec<Value> = to.iter().map(|email| json!({ "email": email })).collect();
    json!({
        "personalizations": [{ "to": recipients }],
        "from": { "email": from },
        "subject": subject,
        "content": [{ "type": "text/html", "value": html }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_recipients_share_one_personalization() {
        let to = vec!["a@example.com".to_string(), "b@example.com".to_string()];
        let body = mail_body("citas@example.com", &to, "Asunto", "<p>hola</p>");
        assert_eq!(body["personalizations"][0]["to"][1]["email"], "b@example.com");
        assert_eq!(body["from"]["email"], "citas@example.com");
        assert_eq!(body["content"][0]["type"], "text/html");
    }
}
