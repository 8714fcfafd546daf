//! Wire types for the complaint API. Field names follow the server's
//! camelCase JSON contract; dates stay ISO-8601 strings because the API
//! emits unzoned local times.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auteur {
    pub id: i64,
    pub nom: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reclamation {
    pub id: i64,
    pub objet: String,
    #[serde(default)]
    pub message: Option<String>,
    pub date_soumission: String,
    pub statut: String,
    #[serde(default)]
    pub auteur: Option<Auteur>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categorie {
    pub id: i64,
    pub nom: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SousCategorie {
    pub id: i64,
    pub nom: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commentaire {
    pub id: i64,
    pub contenu: String,
    pub date_creation: String,
    pub est_prive: bool,
    pub auteur: String,
    pub auteur_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statut {
    pub id: i64,
    pub nom: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreerReclamation {
    pub objet: String,
    pub message: String,
    pub sous_categorie_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreerCommentaire {
    pub contenu: String,
    pub est_prive: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangerStatut {
    pub statut_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NouvelUtilisateur {
    pub nom: String,
    pub email: String,
    pub mot_de_passe: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub mot_de_passe: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginReponse {
    pub token: String,
}
