//! Wire-facing representations of the entities.
//!
//! Views are the flat shapes returned to API callers: they never carry
//! relationship collections or the user's password, and absent text is
//! rendered as an empty string. Inputs are the shapes accepted on create and
//! update; they mirror the full entity and turn into active models that the
//! repositories persist.

use chrono::NaiveDateTime;
use sea_orm::ActiveValue::{self, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::entities::{evento, localidade, ocorrencia, postagem, usuario};

fn optional<V>(value: Option<V>) -> ActiveValue<V>
where
    V: Into<sea_orm::Value>,
{
    match value {
        Some(value) => Set(value),
        None => NotSet,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsuarioView {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub endereco: String,
    pub tipo_usuario: String,
    pub data_cadastro: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalidadeView {
    pub id: i32,
    pub bairro: String,
    pub zona: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventoView {
    pub id: i32,
    pub tipo: String,
    pub descricao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostagemView {
    pub id: i32,
    pub usuario_id: i32,
    pub evento_id: i32,
    pub localidade_id: i32,
    pub titulo: String,
    pub descricao: String,
    pub imagem_url: String,
    pub data_criacao: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcorrenciaView {
    pub id: i32,
    pub postagem_id: i32,
    pub status: String,
    pub data_ocorrencia: NaiveDateTime,
}

impl From<usuario::Model> for UsuarioView {
    fn from(model: usuario::Model) -> Self {
        Self {
            id: model.id,
            nome: model.nome,
            email: model.email,
            endereco: model.endereco,
            tipo_usuario: model.tipo_usuario,
            data_cadastro: model.data_cadastro,
        }
    }
}

impl From<localidade::Model> for LocalidadeView {
    fn from(model: localidade::Model) -> Self {
        Self {
            id: model.id,
            bairro: model.bairro,
            zona: model.zona,
        }
    }
}

impl From<evento::Model> for EventoView {
    fn from(model: evento::Model) -> Self {
        Self {
            id: model.id,
            tipo: model.tipo.unwrap_or_default(),
            descricao: model.descricao.unwrap_or_default(),
        }
    }
}

impl From<postagem::Model> for PostagemView {
    fn from(model: postagem::Model) -> Self {
        Self {
            id: model.id,
            usuario_id: model.usuario_id,
            evento_id: model.evento_id,
            localidade_id: model.localidade_id,
            titulo: model.titulo,
            descricao: model.descricao,
            imagem_url: model.imagem_url,
            data_criacao: model.data_criacao,
        }
    }
}

impl From<ocorrencia::Model> for OcorrenciaView {
    fn from(model: ocorrencia::Model) -> Self {
        Self {
            id: model.id,
            postagem_id: model.postagem_id,
            status: model.status,
            data_ocorrencia: model.data_ocorrencia,
        }
    }
}

/// Body of `POST /usuarios` and `PUT /usuarios/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct UsuarioInput {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub endereco: String,
    pub tipo_usuario: String,
    #[serde(default)]
    pub data_cadastro: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalidadeInput {
    pub bairro: String,
    pub zona: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventoInput {
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostagemInput {
    pub usuario_id: i32,
    pub evento_id: i32,
    pub localidade_id: i32,
    pub titulo: String,
    pub descricao: String,
    pub imagem_url: String,
    #[serde(default)]
    pub data_criacao: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcorrenciaInput {
    pub postagem_id: i32,
    pub status: String,
    #[serde(default)]
    pub data_ocorrencia: Option<NaiveDateTime>,
}

impl UsuarioInput {
    pub fn into_active_model(self) -> usuario::ActiveModel {
        usuario::ActiveModel {
            id: NotSet,
            nome: Set(self.nome),
            email: Set(self.email),
            senha: Set(self.senha),
            endereco: Set(self.endereco),
            tipo_usuario: Set(self.tipo_usuario),
            data_cadastro: optional(self.data_cadastro),
        }
    }
}

impl LocalidadeInput {
    pub fn into_active_model(self) -> localidade::ActiveModel {
        localidade::ActiveModel {
            id: NotSet,
            bairro: Set(self.bairro),
            zona: Set(self.zona),
        }
    }
}

impl EventoInput {
    /// Both columns are always written so an update can clear them.
    pub fn into_active_model(self) -> evento::ActiveModel {
        evento::ActiveModel {
            id: NotSet,
            tipo: Set(self.tipo),
            descricao: Set(self.descricao),
        }
    }
}

impl PostagemInput {
    pub fn into_active_model(self) -> postagem::ActiveModel {
        postagem::ActiveModel {
            id: NotSet,
            usuario_id: Set(self.usuario_id),
            evento_id: Set(self.evento_id),
            localidade_id: Set(self.localidade_id),
            titulo: Set(self.titulo),
            descricao: Set(self.descricao),
            imagem_url: Set(self.imagem_url),
            data_criacao: optional(self.data_criacao),
        }
    }
}

impl OcorrenciaInput {
    pub fn into_active_model(self) -> ocorrencia::ActiveModel {
        ocorrencia::ActiveModel {
            id: NotSet,
            postagem_id: Set(self.postagem_id),
            status: Set(self.status),
            data_ocorrencia: optional(self.data_ocorrencia),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 31)
            .and_then(|d| d.and_hms_opt(19, 39, 34))
            .unwrap()
    }

    #[test]
    fn test_usuario_view_hides_password() {
        let model = usuario::Model {
            id: 1,
            nome: "Ana".to_string(),
            email: "a@x.com".to_string(),
            senha: "s".to_string(),
            endereco: "Rua 1".to_string(),
            tipo_usuario: "civil".to_string(),
            data_cadastro: timestamp(),
        };

        let json = serde_json::to_value(UsuarioView::from(model)).unwrap();
        assert!(json.get("senha").is_none());
        assert_eq!(json["nome"], "Ana");
        assert_eq!(json["tipo_usuario"], "civil");
    }

    #[test]
    fn test_evento_view_renders_missing_text_as_empty() {
        let model = evento::Model {
            id: 3,
            tipo: Some("enchente".to_string()),
            descricao: None,
        };

        let view = EventoView::from(model);
        assert_eq!(view.tipo, "enchente");
        assert_eq!(view.descricao, "");
    }

    #[test]
    fn test_postagem_view_keeps_references() {
        let model = postagem::Model {
            id: 7,
            usuario_id: 1,
            evento_id: 2,
            localidade_id: 3,
            titulo: "Alerta".to_string(),
            descricao: "Água subindo".to_string(),
            imagem_url: "http://x/1.jpg".to_string(),
            data_criacao: timestamp(),
        };

        let view = PostagemView::from(model);
        assert_eq!((view.usuario_id, view.evento_id, view.localidade_id), (1, 2, 3));
        assert_eq!(view.data_criacao, timestamp());
    }

    #[test]
    fn test_input_without_timestamp_leaves_it_to_the_store() {
        let input: OcorrenciaInput = serde_json::from_str(r#"{"postagem_id": 1, "status": "aberta"}"#).unwrap();
        let active = input.into_active_model();

        assert!(active.id.is_not_set());
        assert!(active.data_ocorrencia.is_not_set());
        assert_eq!(active.status, Set("aberta".to_string()));
    }

    #[test]
    fn test_input_ignores_unknown_fields() {
        let input: LocalidadeInput =
            serde_json::from_str(r#"{"bairro": "Centro", "zona": "Sul", "postagens": []}"#).unwrap();
        assert_eq!(input.bairro, "Centro");
    }

    #[test]
    fn test_input_requires_text_fields() {
        let result = serde_json::from_str::<PostagemInput>(r#"{"usuario_id": 1, "evento_id": 1}"#);
        assert!(result.is_err());
    }
}
