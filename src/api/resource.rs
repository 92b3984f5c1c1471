//! Generic CRUD routes.
//!
//! Each entity kind implements [`Resource`] once, pairing its repository with
//! its view and input shapes; [`routes`] turns any `Resource` into the same
//! five-route set.

use async_trait::async_trait;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::extract::CaseInsensitiveJson;
use super::{ApiError, AppState};
use crate::constants::{EVENTOS_PATH, LOCALIDADES_PATH, OCORRENCIAS_PATH, POSTAGENS_PATH, USUARIOS_PATH};
use crate::dto::{
    EventoInput, EventoView, LocalidadeInput, LocalidadeView, OcorrenciaInput, OcorrenciaView, PostagemInput,
    PostagemView, UsuarioInput, UsuarioView,
};
use crate::repositories::{
    EventoRepository, LocalidadeRepository, OcorrenciaRepository, PostagemRepository, RepositoryError,
    UsuarioRepository,
};

/// Store operations and wire shapes of one entity kind
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Collection path segment, e.g. `usuarios`
    const PATH: &'static str;

    type Input: DeserializeOwned + Send + 'static;
    type View: Serialize + Send + 'static;

    fn id(view: &Self::View) -> i32;

    async fn list(db: &DatabaseConnection) -> Result<Vec<Self::View>, RepositoryError>;
    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Self::View>, RepositoryError>;
    async fn create(db: &DatabaseConnection, input: Self::Input) -> Result<Self::View, RepositoryError>;
    async fn update(db: &DatabaseConnection, id: i32, input: Self::Input) -> Result<(), RepositoryError>;
    async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), RepositoryError>;
}

/// List/get/create/update/delete routes for `R`
pub fn routes<R: Resource>() -> Router<AppState> {
    let collection = format!("/{}", R::PATH);
    let item = format!("/{}/:id", R::PATH);

    Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(&item, get(fetch::<R>).put(update::<R>).delete(remove::<R>))
}

async fn list<R: Resource>(State(state): State<AppState>) -> Result<Json<Vec<R::View>>, ApiError> {
    Ok(Json(R::list(state.db()).await?))
}

async fn fetch<R: Resource>(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<R::View>, ApiError> {
    R::get(state.db(), id).await?.map(Json).ok_or(ApiError::NotFound)
}

async fn create<R: Resource>(
    State(state): State<AppState>,
    CaseInsensitiveJson(input): CaseInsensitiveJson<R::Input>,
) -> Result<impl IntoResponse, ApiError> {
    let view = R::create(state.db(), input).await?;
    let location = format!("/{}/{}", R::PATH, R::id(&view));
    log::info!("Created {}", location);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(view)))
}

async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    CaseInsensitiveJson(input): CaseInsensitiveJson<R::Input>,
) -> Result<StatusCode, ApiError> {
    R::update(state.db(), id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn remove<R: Resource>(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    R::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub struct Usuarios;
pub struct Localidades;
pub struct Eventos;
pub struct Postagens;
pub struct Ocorrencias;

#[async_trait]
impl Resource for Usuarios {
    const PATH: &'static str = USUARIOS_PATH;
    type Input = UsuarioInput;
    type View = UsuarioView;

    fn id(view: &UsuarioView) -> i32 {
        view.id
    }

    async fn list(db: &DatabaseConnection) -> Result<Vec<UsuarioView>, RepositoryError> {
        let models = UsuarioRepository::get_all(db).await?;
        Ok(models.into_iter().map(UsuarioView::from).collect())
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<UsuarioView>, RepositoryError> {
        Ok(UsuarioRepository::get_by_id(db, id).await?.map(UsuarioView::from))
    }

    async fn create(db: &DatabaseConnection, input: UsuarioInput) -> Result<UsuarioView, RepositoryError> {
        let model = UsuarioRepository::create(db, input.into_active_model()).await?;
        Ok(model.into())
    }

    async fn update(db: &DatabaseConnection, id: i32, input: UsuarioInput) -> Result<(), RepositoryError> {
        UsuarioRepository::update(db, id, input.into_active_model()).await?;
        Ok(())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), RepositoryError> {
        UsuarioRepository::delete(db, id).await
    }
}

#[async_trait]
impl Resource for Localidades {
    const PATH: &'static str = LOCALIDADES_PATH;
    type Input = LocalidadeInput;
    type View = LocalidadeView;

    fn id(view: &LocalidadeView) -> i32 {
        view.id
    }

    async fn list(db: &DatabaseConnection) -> Result<Vec<LocalidadeView>, RepositoryError> {
        let models = LocalidadeRepository::get_all(db).await?;
        Ok(models.into_iter().map(LocalidadeView::from).collect())
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<LocalidadeView>, RepositoryError> {
        Ok(LocalidadeRepository::get_by_id(db, id).await?.map(LocalidadeView::from))
    }

    async fn create(db: &DatabaseConnection, input: LocalidadeInput) -> Result<LocalidadeView, RepositoryError> {
        let model = LocalidadeRepository::create(db, input.into_active_model()).await?;
        Ok(model.into())
    }

    async fn update(db: &DatabaseConnection, id: i32, input: LocalidadeInput) -> Result<(), RepositoryError> {
        LocalidadeRepository::update(db, id, input.into_active_model()).await?;
        Ok(())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), RepositoryError> {
        LocalidadeRepository::delete(db, id).await
    }
}

#[async_trait]
impl Resource for Eventos {
    const PATH: &'static str = EVENTOS_PATH;
    type Input = EventoInput;
    type View = EventoView;

    fn id(view: &EventoView) -> i32 {
        view.id
    }

    async fn list(db: &DatabaseConnection) -> Result<Vec<EventoView>, RepositoryError> {
        let models = EventoRepository::get_all(db).await?;
        Ok(models.into_iter().map(EventoView::from).collect())
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<EventoView>, RepositoryError> {
        Ok(EventoRepository::get_by_id(db, id).await?.map(EventoView::from))
    }

    async fn create(db: &DatabaseConnection, input: EventoInput) -> Result<EventoView, RepositoryError> {
        let model = EventoRepository::create(db, input.into_active_model()).await?;
        Ok(model.into())
    }

    async fn update(db: &DatabaseConnection, id: i32, input: EventoInput) -> Result<(), RepositoryError> {
        EventoRepository::update(db, id, input.into_active_model()).await?;
        Ok(())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), RepositoryError> {
        EventoRepository::delete(db, id).await
    }
}

#[async_trait]
impl Resource for Postagens {
    const PATH: &'static str = POSTAGENS_PATH;
    type Input = PostagemInput;
    type View = PostagemView;

    fn id(view: &PostagemView) -> i32 {
        view.id
    }

    async fn list(db: &DatabaseConnection) -> Result<Vec<PostagemView>, RepositoryError> {
        let models = PostagemRepository::get_all(db).await?;
        Ok(models.into_iter().map(PostagemView::from).collect())
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<PostagemView>, RepositoryError> {
        Ok(PostagemRepository::get_by_id(db, id).await?.map(PostagemView::from))
    }

    async fn create(db: &DatabaseConnection, input: PostagemInput) -> Result<PostagemView, RepositoryError> {
        let model = PostagemRepository::create(db, input.into_active_model()).await?;
        Ok(model.into())
    }

    async fn update(db: &DatabaseConnection, id: i32, input: PostagemInput) -> Result<(), RepositoryError> {
        PostagemRepository::update(db, id, input.into_active_model()).await?;
        Ok(())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), RepositoryError> {
        PostagemRepository::delete(db, id).await
    }
}

#[async_trait]
impl Resource for Ocorrencias {
    const PATH: &'static str = OCORRENCIAS_PATH;
    type Input = OcorrenciaInput;
    type View = OcorrenciaView;

    fn id(view: &OcorrenciaView) -> i32 {
        view.id
    }

    async fn list(db: &DatabaseConnection) -> Result<Vec<OcorrenciaView>, RepositoryError> {
        let models = OcorrenciaRepository::get_all(db).await?;
        Ok(models.into_iter().map(OcorrenciaView::from).collect())
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<OcorrenciaView>, RepositoryError> {
        Ok(OcorrenciaRepository::get_by_id(db, id).await?.map(OcorrenciaView::from))
    }

    async fn create(db: &DatabaseConnection, input: OcorrenciaInput) -> Result<OcorrenciaView, RepositoryError> {
        let model = OcorrenciaRepository::create(db, input.into_active_model()).await?;
        Ok(model.into())
    }

    async fn update(db: &DatabaseConnection, id: i32, input: OcorrenciaInput) -> Result<(), RepositoryError> {
        OcorrenciaRepository::update(db, id, input.into_active_model()).await?;
        Ok(())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), RepositoryError> {
        OcorrenciaRepository::delete(db, id).await
    }
}
