use serde::Serialize;

/// Closed role enumeration shared with the issuing server.
///
/// The wire literals come from the server's own enum and are matched
/// exact-case. `Assigne` in particular is the server's spelling and must not
/// be "corrected".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Role {
    Admin,
    Assigne,
    Observateur,
    /// Plain user; also the fallback for absent or unrecognized role claims.
    #[default]
    Utilisateur,
}

impl Role {
    /// Single mapping table from the role claim to the closed enumeration.
    pub fn from_claim(value: Option<&str>) -> Self {
        match value {
            Some("Admin") => Role::Admin,
            Some("Assigne") => Role::Assigne,
            Some("Observateur") => Role::Observateur,
            _ => Role::Utilisateur,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Assigne => "Assigne",
            Role::Observateur => "Observateur",
            Role::Utilisateur => "Utilisateur",
        }
    }

    /// Admins and assigned reviewers may moderate and reassign complaints.
    pub fn has_admin_rights(self) -> bool {
        matches!(self, Role::Admin | Role::Assigne)
    }

    /// Everyone except plain users sees the full complaint list.
    pub fn can_view_all_complaints(self) -> bool {
        matches!(self, Role::Admin | Role::Assigne | Role::Observateur)
    }
}
