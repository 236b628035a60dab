use serde::Serialize;
use std::collections::BTreeMap;

/// Access levels granted per module, ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Nivel {
    Ver = 1,
    Modificar = 2,
    Crear = 3,
    Administrar = 4,
}

/// Module name to highest granted level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Permissions(BTreeMap<String, i32>);

impl Permissions {
    /// Merge grants keeping the highest level per module
    pub fn from_grants<I, S>(grants: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        let mut levels = BTreeMap::new();
        for (module, nivel) in grants {
            let entry = levels.entry(module.into()).or_insert(nivel);
            if nivel > *entry {
                *entry = nivel;
            }
        }
        Self(levels)
    }

    pub fn level(&self, module: &str) -> i32 {
        self.0.get(module).copied().unwrap_or(0)
    }

    pub fn allows(&self, module: &str, nivel: Nivel) -> bool {
        self.level(module) >= nivel as i32
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_highest_level_per_module() {
        let permissions = Permissions::from_grants([
            ("CIT CITAS", 1),
            ("CIT CITAS", 3),
            ("OFICINAS", 2),
            ("CIT CITAS", 2),
        ]);
        assert_eq!(permissions.level("CIT CITAS"), 3);
        assert_eq!(permissions.level("OFICINAS"), 2);
        assert_eq!(permissions.len(), 2);
    }

    #[test]
    fn missing_module_is_level_zero() {
        let permissions = Permissions::from_grants([("DISTRITOS", 1)]);
        assert_eq!(permissions.level("USUARIOS"), 0);
        assert!(!permissions.allows("USUARIOS", Nivel::Ver));
        assert!(permissions.allows("DISTRITOS", Nivel::Ver));
        assert!(!permissions.allows("DISTRITOS", Nivel::Modificar));
    }

    #[test]
    fn serializes_as_plain_map() {
        let permissions = Permissions::from_grants([("ROLES", 4)]);
        assert_eq!(serde_json::to_value(&permissions).unwrap(), serde_json::json!({"ROLES": 4}));
    }
}
