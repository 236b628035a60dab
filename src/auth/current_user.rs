use serde::Serialize;

use super::permissions::{Nivel, Permissions};
use crate::database::models::{Usuario, UsuarioInDb};
use crate::error::ApiError;
use crate::filter::filter_where::ESTATUS_ACTIVE;

/// The authenticated caller, resolved from the token subject
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    #[serde(flatten)]
    pub usuario: Usuario,
    pub username: String,
    pub permissions: Permissions,
    pub disabled: bool,
    #[serde(skip)]
    hashed_password: String,
}

impl CurrentUser {
    pub fn new(record: UsuarioInDb, permissions: Permissions) -> Self {
        Self {
            username: record.usuario.email.clone(),
            disabled: record.estatus != ESTATUS_ACTIVE,
            usuario: record.usuario,
            permissions,
            hashed_password: record.contrasena,
        }
    }

    pub fn password_hash(&self) -> &str {
        &self.hashed_password
    }

    /// Fail with 403 unless the caller holds `nivel` on `module`
    pub fn require(&self, module: &str, nivel: Nivel) -> Result<(), ApiError> {
        if self.permissions.allows(module, nivel) {
            Ok(())
        } else {
            tracing::warn!(
                "Permission denied: '{}' has level {} on '{}'",
                self.username,
                self.permissions.level(module),
                module
            );
            Err(ApiError::forbidden())
        }
    }

    pub fn can_view(&self, module: &str) -> Result<(), ApiError> {
        self.require(module, Nivel::Ver)
    }
}
