//! Standardized user-facing message catalog.
//!
//! Services select failure messages from this closed set instead of
//! formatting ad hoc strings, so the UI shows a consistent vocabulary across
//! screens. The one exception is the unknown-auth-code fallback, which embeds
//! the raw code for diagnosis.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod generic {
    pub const UNEXPECTED: &str = "Ocurrió un error inesperado. Intenta de nuevo";
    pub const NETWORK: &str = "Error de conexión. Revisa tu internet";
}

pub mod auth {
    pub const PROFILE_MISSING: &str = "No se encontró el perfil del usuario";
    pub const PROFILE_INVALID: &str = "El perfil del usuario está dañado";
    pub const PROFILE_SAVE_FAILED: &str = "No se pudo guardar el perfil del usuario";
}

pub mod group {
    pub const NOT_FOUND: &str = "El grupo no existe";
    pub const LOAD_FAILED: &str = "No se pudo cargar el grupo";
    pub const SAVE_FAILED: &str = "No se pudo guardar el grupo";
    pub const ALREADY_MEMBER: &str = "Ya eres miembro de este grupo";
}

pub mod transaction {
    pub const LOG_FAILED: &str = "No se pudo registrar la transacción";
    pub const LOAD_FAILED: &str = "No se pudieron cargar las transacciones";
}

pub mod loan {
    pub const NOT_FOUND: &str = "La solicitud de préstamo no existe";
    pub const REQUEST_FAILED: &str = "No se pudo enviar la solicitud de préstamo";
    pub const VOTE_FAILED: &str = "No se pudo registrar tu voto";
    pub const LOAD_FAILED: &str = "No se pudieron cargar los préstamos";
}

pub mod meeting {
    pub const SCHEDULE_FAILED: &str = "No se pudo agendar la reunión";
    pub const LOAD_FAILED: &str = "No se pudieron cargar las reuniones";
}

/// Fixed translation table from auth provider fault codes to user-facing
/// messages. Not editable at runtime.
static AUTH_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("user-not-found", "No existe una cuenta con ese correo"),
        ("wrong-password", "Email o contraseña incorrectos"),
        ("invalid-credential", "Email o contraseña incorrectos"),
        ("email-already-in-use", "Ya existe una cuenta con ese correo"),
        (
            "weak-password",
            "La contraseña debe tener al menos 6 caracteres",
        ),
        ("invalid-email", "El formato del correo no es válido"),
        ("user-disabled", "Esta cuenta está deshabilitada"),
        (
            "too-many-requests",
            "Demasiados intentos. Intenta de nuevo más tarde",
        ),
        ("network-request-failed", "Error de conexión. Revisa tu internet"),
    ])
});

/// Translates an auth provider fault code to its catalog message. Unknown
/// codes fall back to a generic message that includes the raw code.
pub fn auth_message(code: &str) -> String {
    match AUTH_CODES.get(code) {
        Some(message) => (*message).to_string(),
        None => format!("Error de autenticación ({})", code),
    }
}
