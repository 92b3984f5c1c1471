use chrono::NaiveDate;
use safealert::dto::{
    EventoInput, EventoView, LocalidadeInput, LocalidadeView, OcorrenciaInput, OcorrenciaView, PostagemInput,
    PostagemView, UsuarioInput, UsuarioView,
};
use safealert::repositories::{
    EventoRepository, LocalidadeRepository, OcorrenciaRepository, PostagemRepository, RepositoryError,
    UsuarioRepository,
};
use safealert::storage::Storage;

fn ana() -> UsuarioInput {
    UsuarioInput {
        nome: "Ana".to_string(),
        email: "a@x.com".to_string(),
        senha: "s".to_string(),
        endereco: "Rua 1".to_string(),
        tipo_usuario: "civil".to_string(),
        data_cadastro: None,
    }
}

fn enchente() -> EventoInput {
    EventoInput {
        tipo: Some("enchente".to_string()),
        descricao: None,
    }
}

fn centro() -> LocalidadeInput {
    LocalidadeInput {
        bairro: "Centro".to_string(),
        zona: "Sul".to_string(),
    }
}

fn alerta(usuario_id: i32, evento_id: i32, localidade_id: i32) -> PostagemInput {
    PostagemInput {
        usuario_id,
        evento_id,
        localidade_id,
        titulo: "Alerta".to_string(),
        descricao: "Água subindo".to_string(),
        imagem_url: "http://x/1.jpg".to_string(),
        data_criacao: None,
    }
}

fn aberta(postagem_id: i32) -> OcorrenciaInput {
    OcorrenciaInput {
        postagem_id,
        status: "aberta".to_string(),
        data_ocorrencia: None,
    }
}

/// Ana, enchente, Centro, one post and one occurrence, all with id 1
async fn seeded() -> Storage {
    let storage = Storage::in_memory().await.unwrap();
    let db = &storage.conn;

    let usuario = UsuarioRepository::create(db, ana().into_active_model()).await.unwrap();
    let evento = EventoRepository::create(db, enchente().into_active_model()).await.unwrap();
    let localidade = LocalidadeRepository::create(db, centro().into_active_model()).await.unwrap();
    let postagem = PostagemRepository::create(db, alerta(usuario.id, evento.id, localidade.id).into_active_model())
        .await
        .unwrap();
    let ocorrencia = OcorrenciaRepository::create(db, aberta(postagem.id).into_active_model())
        .await
        .unwrap();

    assert_eq!(
        (usuario.id, evento.id, localidade.id, postagem.id, ocorrencia.id),
        (1, 1, 1, 1, 1)
    );
    storage
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let storage = seeded().await;
    let db = &storage.conn;

    let created = UsuarioRepository::create(db, ana().into_active_model()).await.unwrap();
    let fetched = UsuarioRepository::get_by_id(db, created.id).await.unwrap().unwrap();
    assert_eq!(UsuarioView::from(created), UsuarioView::from(fetched));

    let created = LocalidadeRepository::create(db, centro().into_active_model()).await.unwrap();
    let fetched = LocalidadeRepository::get_by_id(db, created.id).await.unwrap().unwrap();
    assert_eq!(LocalidadeView::from(created), LocalidadeView::from(fetched));

    let created = EventoRepository::create(db, enchente().into_active_model()).await.unwrap();
    let fetched = EventoRepository::get_by_id(db, created.id).await.unwrap().unwrap();
    assert_eq!(EventoView::from(created), EventoView::from(fetched));

    let created = PostagemRepository::create(db, alerta(1, 1, 1).into_active_model())
        .await
        .unwrap();
    let fetched = PostagemRepository::get_by_id(db, created.id).await.unwrap().unwrap();
    assert_eq!(PostagemView::from(created), PostagemView::from(fetched));

    let created = OcorrenciaRepository::create(db, aberta(1).into_active_model()).await.unwrap();
    let fetched = OcorrenciaRepository::get_by_id(db, created.id).await.unwrap().unwrap();
    assert_eq!(OcorrenciaView::from(created), OcorrenciaView::from(fetched));
}

#[tokio::test]
async fn test_store_assigns_sequential_ids_and_timestamps() {
    let storage = Storage::in_memory().await.unwrap();
    let db = &storage.conn;

    let first = UsuarioRepository::create(db, ana().into_active_model()).await.unwrap();
    let second = UsuarioRepository::create(db, ana().into_active_model()).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert!(second.data_cadastro >= first.data_cadastro);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let storage = Storage::in_memory().await.unwrap();
    let db = &storage.conn;

    let first = LocalidadeRepository::create(db, centro().into_active_model()).await.unwrap();
    LocalidadeRepository::delete(db, first.id).await.unwrap();
    let second = LocalidadeRepository::create(db, centro().into_active_model()).await.unwrap();

    assert_eq!(second.id, first.id + 1);
}

#[tokio::test]
async fn test_list_grows_and_shrinks_by_one() {
    let storage = Storage::in_memory().await.unwrap();
    let db = &storage.conn;

    assert!(EventoRepository::get_all(db).await.unwrap().is_empty());

    let created = EventoRepository::create(db, enchente().into_active_model()).await.unwrap();
    EventoRepository::create(db, EventoInput::default().into_active_model())
        .await
        .unwrap();
    assert_eq!(EventoRepository::get_all(db).await.unwrap().len(), 2);

    EventoRepository::delete(db, created.id).await.unwrap();
    let remaining = EventoRepository::get_all(db).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(EventoView::from(remaining[0].clone()).tipo, "");
}

/// Creating one more row of a kind and deleting it moves that list by one each way
macro_rules! assert_list_moves_by_one {
    ($db:expr, $repository:ident, $input:expr) => {{
        let before = $repository::get_all($db).await.unwrap().len();
        let created = $repository::create($db, $input.into_active_model()).await.unwrap();
        assert_eq!($repository::get_all($db).await.unwrap().len(), before + 1);

        $repository::delete($db, created.id).await.unwrap();
        assert_eq!($repository::get_all($db).await.unwrap().len(), before);
    }};
}

#[tokio::test]
async fn test_every_list_moves_by_one_on_create_and_delete() {
    let storage = seeded().await;
    let db = &storage.conn;

    assert_list_moves_by_one!(db, UsuarioRepository, ana());
    assert_list_moves_by_one!(db, LocalidadeRepository, centro());
    assert_list_moves_by_one!(db, EventoRepository, enchente());
    assert_list_moves_by_one!(db, PostagemRepository, alerta(1, 1, 1));
    assert_list_moves_by_one!(db, OcorrenciaRepository, aberta(1));

    // The seeded rows are all still there
    assert_eq!(PostagemRepository::get_all(db).await.unwrap().len(), 1);
    assert_eq!(OcorrenciaRepository::get_all(db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_deleting_usuario_cascades_to_postagens_and_ocorrencias() {
    let storage = seeded().await;
    let db = &storage.conn;

    UsuarioRepository::delete(db, 1).await.unwrap();

    assert!(PostagemRepository::get_all(db).await.unwrap().is_empty());
    assert!(OcorrenciaRepository::get_all(db).await.unwrap().is_empty());
    // Other parents are untouched
    assert_eq!(EventoRepository::get_all(db).await.unwrap().len(), 1);
    assert_eq!(LocalidadeRepository::get_all(db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_deleting_evento_cascades() {
    let storage = seeded().await;
    let db = &storage.conn;

    // A second post under another event type must survive
    let other = EventoRepository::create(db, EventoInput::default().into_active_model())
        .await
        .unwrap();
    let survivor = PostagemRepository::create(db, alerta(1, other.id, 1).into_active_model())
        .await
        .unwrap();

    EventoRepository::delete(db, 1).await.unwrap();

    let postagens = PostagemRepository::get_all(db).await.unwrap();
    assert_eq!(postagens.len(), 1);
    assert_eq!(postagens[0].id, survivor.id);
    assert!(OcorrenciaRepository::get_all(db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_deleting_localidade_cascades() {
    let storage = seeded().await;
    let db = &storage.conn;

    LocalidadeRepository::delete(db, 1).await.unwrap();

    assert!(PostagemRepository::get_all(db).await.unwrap().is_empty());
    assert!(OcorrenciaRepository::get_all(db).await.unwrap().is_empty());
    assert_eq!(UsuarioRepository::get_all(db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_deleting_postagem_removes_its_ocorrencias() {
    let storage = seeded().await;
    let db = &storage.conn;

    PostagemRepository::delete(db, 1).await.unwrap();

    assert!(OcorrenciaRepository::get_all(db).await.unwrap().is_empty());
    assert_eq!(UsuarioRepository::get_all(db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_missing_id_is_not_found() {
    let storage = seeded().await;
    let db = &storage.conn;

    let result = UsuarioRepository::delete(db, 42).await;
    assert!(matches!(result, Err(RepositoryError::NotFound { id: 42, .. })));

    let result = OcorrenciaRepository::delete(db, 42).await;
    assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
}

#[tokio::test]
async fn test_update_missing_id_leaves_store_unchanged() {
    let storage = seeded().await;
    let db = &storage.conn;

    let before = UsuarioRepository::get_all(db).await.unwrap();
    let mut changes = ana();
    changes.nome = "Bia".to_string();

    let result = UsuarioRepository::update(db, 42, changes.into_active_model()).await;
    assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    assert_eq!(UsuarioRepository::get_all(db).await.unwrap(), before);
}

#[tokio::test]
async fn test_update_overwrites_fields_but_keeps_registration_time() {
    let storage = seeded().await;
    let db = &storage.conn;

    let original = UsuarioRepository::get_by_id(db, 1).await.unwrap().unwrap();
    let changes = UsuarioInput {
        nome: "Bia".to_string(),
        email: "b@x.com".to_string(),
        senha: "t".to_string(),
        endereco: "Rua 2".to_string(),
        tipo_usuario: "defesa civil".to_string(),
        data_cadastro: Some(original.data_cadastro - chrono::Duration::days(30)),
    };

    let updated = UsuarioRepository::update(db, 1, changes.into_active_model()).await.unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.nome, "Bia");
    assert_eq!(updated.senha, "t");
    assert_eq!(updated.tipo_usuario, "defesa civil");
    assert_eq!(updated.data_cadastro, original.data_cadastro);
}

#[tokio::test]
async fn test_update_evento_clears_missing_text() {
    let storage = seeded().await;
    let db = &storage.conn;

    let changes = EventoInput {
        tipo: None,
        descricao: Some("Chuva forte".to_string()),
    };
    let updated = EventoRepository::update(db, 1, changes.into_active_model()).await.unwrap();

    assert_eq!(updated.tipo, None);
    assert_eq!(updated.descricao.as_deref(), Some("Chuva forte"));
}

#[tokio::test]
async fn test_create_postagem_with_missing_evento_fails_and_persists_nothing() {
    let storage = seeded().await;
    let db = &storage.conn;

    let result = PostagemRepository::create(db, alerta(1, 99, 1).into_active_model()).await;
    match result {
        Err(RepositoryError::ForeignKeyViolation(message)) => assert!(message.contains("99")),
        other => panic!("expected a foreign key violation, got {:?}", other),
    }

    assert_eq!(PostagemRepository::get_all(db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_postagem_revalidates_references() {
    let storage = seeded().await;
    let db = &storage.conn;

    let result = PostagemRepository::update(db, 1, alerta(1, 1, 77).into_active_model()).await;
    assert!(matches!(result, Err(RepositoryError::ForeignKeyViolation(_))));

    let unchanged = PostagemRepository::get_by_id(db, 1).await.unwrap().unwrap();
    assert_eq!(unchanged.localidade_id, 1);
}

#[tokio::test]
async fn test_update_postagem_moves_it_to_another_localidade() {
    let storage = seeded().await;
    let db = &storage.conn;

    let norte = LocalidadeRepository::create(
        db,
        LocalidadeInput {
            bairro: "Santana".to_string(),
            zona: "Norte".to_string(),
        }
        .into_active_model(),
    )
    .await
    .unwrap();

    let original = PostagemRepository::get_by_id(db, 1).await.unwrap().unwrap();
    let updated = PostagemRepository::update(db, 1, alerta(1, 1, norte.id).into_active_model())
        .await
        .unwrap();
    assert_eq!(updated.localidade_id, norte.id);
    assert_eq!(updated.data_criacao, original.data_criacao);

    // The post now follows the new locality
    LocalidadeRepository::delete(db, 1).await.unwrap();
    assert_eq!(PostagemRepository::get_all(db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_ocorrencia_with_missing_postagem_fails() {
    let storage = seeded().await;
    let db = &storage.conn;

    let result = OcorrenciaRepository::create(db, aberta(5).into_active_model()).await;
    assert!(matches!(result, Err(RepositoryError::ForeignKeyViolation(_))));
    assert_eq!(OcorrenciaRepository::get_all(db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_ocorrencia_without_time_resets_it_to_now() {
    let storage = seeded().await;
    let db = &storage.conn;

    let long_ago = NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    let created = OcorrenciaRepository::create(
        db,
        OcorrenciaInput {
            data_ocorrencia: Some(long_ago),
            ..aberta(1)
        }
        .into_active_model(),
    )
    .await
    .unwrap();
    assert_eq!(created.data_ocorrencia, long_ago);

    let changes = OcorrenciaInput {
        status: "resolvida".to_string(),
        ..aberta(1)
    };
    let updated = OcorrenciaRepository::update(db, created.id, changes.into_active_model())
        .await
        .unwrap();

    assert_eq!(updated.status, "resolvida");
    assert!(updated.data_ocorrencia > long_ago);
    let stored = OcorrenciaRepository::get_by_id(db, created.id).await.unwrap().unwrap();
    assert_eq!(stored.data_ocorrencia, updated.data_ocorrencia);
}

#[tokio::test]
async fn test_update_ocorrencia_with_supplied_time_stores_it() {
    let storage = seeded().await;
    let db = &storage.conn;

    let when = NaiveDate::from_ymd_opt(2024, 5, 3)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .unwrap();
    let changes = OcorrenciaInput {
        data_ocorrencia: Some(when),
        ..aberta(1)
    };

    let updated = OcorrenciaRepository::update(db, 1, changes.into_active_model()).await.unwrap();
    assert_eq!(updated.data_ocorrencia, when);
}

#[tokio::test]
async fn test_update_ocorrencia_revalidates_postagem() {
    let storage = seeded().await;
    let db = &storage.conn;

    let original = OcorrenciaRepository::get_by_id(db, 1).await.unwrap().unwrap();
    let changes = OcorrenciaInput {
        status: "resolvida".to_string(),
        ..aberta(99)
    };

    let result = OcorrenciaRepository::update(db, 1, changes.into_active_model()).await;
    match result {
        Err(RepositoryError::ForeignKeyViolation(message)) => assert!(message.contains("99")),
        other => panic!("expected a foreign key violation, got {:?}", other),
    }

    let unchanged = OcorrenciaRepository::get_by_id(db, 1).await.unwrap().unwrap();
    assert_eq!(unchanged, original);
}
