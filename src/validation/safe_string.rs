use once_cell::sync::Lazy;
use regex::Regex;

use crate::database::DatabaseError;

const MAX_LEN: usize = 250;

static CLAVE_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9-]{1,16}$").expect("valid regex"));
static CURP_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{4}\d{6}[A-Z]{6}[A-Z0-9]{2}$").expect("valid regex"));
static CURP_FRAGMENT_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]{1,18}$").expect("valid regex"));
static EMAIL_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.%+-]+@[\w-]+(\.[\w-]+)+$").expect("valid regex"));
static EMAIL_FRAGMENT_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w.@%+-]+$").expect("valid regex"));
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

fn strip_accent(c: char) -> char {
    match c {
        'Á' | 'À' | 'Ä' | 'Â' => 'A',
        'É' | 'È' | 'Ë' | 'Ê' => 'E',
        'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
        'Ó' | 'Ò' | 'Ö' | 'Ô' => 'O',
        'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
        other => other,
    }
}

/// Uppercase free text, drop accents and anything that is not a letter,
/// digit, space or hyphen, collapse spaces. May return an empty string.
pub fn safe_string(input: &str) -> String {
    let cleaned: String = input
        .to_uppercase()
        .chars()
        .map(strip_accent)
        .filter(|c| c.is_ascii_alphanumeric() || *c == 'Ñ' || *c == '-' || c.is_whitespace())
        .collect();
    let collapsed = SPACES.replace_all(cleaned.trim(), " ");
    collapsed.chars().take(MAX_LEN).collect()
}

pub fn safe_clave(input: &str) -> Result<String, DatabaseError> {
    let clave = input.trim().to_uppercase();
    if CLAVE_REGEXP.is_match(&clave) {
        Ok(clave)
    } else {
        Err(DatabaseError::NotValidParam("La clave es incorrecta".to_string()))
    }
}

/// Lowercased email; a search fragment only needs allowed characters
pub fn safe_email(input: &str, search_fragment: bool) -> Result<String, DatabaseError> {
    let email = input.trim().to_lowercase();
    let valid = if search_fragment {
        EMAIL_FRAGMENT_REGEXP.is_match(&email)
    } else {
        EMAIL_REGEXP.is_match(&email)
    };
    if valid {
        Ok(email)
    } else {
        Err(DatabaseError::NotValidParam("El e-mail es incorrecto".to_string()))
    }
}

pub fn safe_curp(input: &str, search_fragment: bool) -> Result<String, DatabaseError> {
    let curp: String = input
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    let valid = if search_fragment {
        CURP_FRAGMENT_REGEXP.is_match(&curp)
    } else {
        CURP_REGEXP.is_match(&curp)
    };
    if valid {
        Ok(curp)
    } else {
        Err(DatabaseError::NotValidParam("La CURP es incorrecta".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_is_normalized() {
        assert_eq!(safe_string("  maría   josé  "), "MARIA JOSE");
        assert_eq!(safe_string("Peña-Núñez; DROP"), "PEÑA-NUÑEZ DROP");
        assert_eq!(safe_string("pendiente"), "PENDIENTE");
        assert_eq!(safe_string("%%"), "");
    }

    #[test]
    fn clave_accepts_codes_only() {
        assert_eq!(safe_clave(" slt-j1-civ ").unwrap(), "SLT-J1-CIV");
        assert!(safe_clave("").is_err());
        assert!(safe_clave("DEMASIADO-LARGA-CLAVE").is_err());
        assert!(safe_clave("OF 1").is_err());
    }

    #[test]
    fn email_fragments_and_full_addresses() {
        assert_eq!(safe_email(" Persona@Correo.MX ", false).unwrap(), "persona@correo.mx");
        assert!(safe_email("persona@", false).is_err());
        assert_eq!(safe_email("persona@", true).unwrap(), "persona@");
        assert!(safe_email("per sona", true).is_err());
    }

    #[test]
    fn curp_is_uppercased_alphanumeric() {
        assert_eq!(safe_curp("gohm800101hcllrr09", false).unwrap(), "GOHM800101HCLLRR09");
        assert!(safe_curp("GOHM8001", false).is_err());
        assert_eq!(safe_curp("gohm-80", true).unwrap(), "GOHM80");
    }
}
