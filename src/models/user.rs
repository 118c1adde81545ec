use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Usuário armazenado (o `id` é gerado pelo servidor e nunca muda)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

/// Corpo de POST/PUT. Não tem `id`: qualquer `id` enviado pelo cliente é ignorado.
/// Campos ausentes ou `null` viram string vazia e caem na validação.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct UserPayload {
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub biography: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl UserPayload {
    /// Decodes a request body. A bare `null` body is an empty payload.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(serde_json::from_slice::<Option<UserPayload>>(body)?.unwrap_or_default())
    }
}

impl User {
    pub fn from_payload(id: Uuid, payload: UserPayload) -> Self {
        User {
            id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            biography: payload.biography,
        }
    }

    /// Substitui todos os campos editáveis, preservando o `id`
    pub fn apply(&mut self, payload: UserPayload) {
        self.first_name = payload.first_name;
        self.last_name = payload.last_name;
        self.biography = payload.biography;
    }
}
