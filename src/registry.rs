//! Closed vocabulary of collection and field names.
//!
//! Readers and writers address store documents only through these constants;
//! nothing in the crate builds a collection or field name dynamically, so the
//! decode and encode paths cannot drift apart.

/// Collection names in the document store.
pub mod collections {
    pub const USERS: &str = "usuarios";
    pub const GROUPS: &str = "grupos";
    pub const TRANSACTIONS: &str = "transacciones";
    pub const LOANS: &str = "prestamos";
    pub const MEETINGS: &str = "reuniones";
}

/// Wire field names, matching the documents the original clients wrote.
pub mod fields {
    // usuarios
    pub const UID: &str = "uid";
    pub const NAME: &str = "nombre";
    pub const EMAIL: &str = "email";
    pub const REGISTERED_AT: &str = "fechaRegistro";
    pub const ACTIVE: &str = "esActivo";
    pub const GROUP_IDS: &str = "gruposIds";

    // grupos
    pub const ADMIN_UID: &str = "adminUid";
    pub const MEMBER_IDS: &str = "miembrosIds";
    pub const CREATED_AT: &str = "fechaCreacion";
    pub const SAVINGS_GOAL: &str = "metaAhorro";
    pub const BALANCE: &str = "saldo";

    // transacciones
    pub const GROUP_ID: &str = "grupoId";
    pub const USER_ID: &str = "usuarioId";
    pub const AMOUNT: &str = "monto";
    pub const KIND: &str = "tipo";
    pub const NOTE: &str = "nota";
    pub const DATE: &str = "fecha";

    // prestamos
    pub const BORROWER_UID: &str = "solicitanteUid";
    pub const INTEREST_RATE: &str = "tasaInteres";
    pub const STATUS: &str = "estado";
    pub const VOTES: &str = "votos";
    pub const REQUESTED_AT: &str = "fechaSolicitud";
    pub const DUE_DATE: &str = "fechaVencimiento";

    // reuniones
    pub const TITLE: &str = "titulo";
    pub const LOCATION: &str = "lugar";
    pub const SCHEDULED_AT: &str = "fechaProgramada";
    pub const ATTENDEE_IDS: &str = "asistentesIds";
}
