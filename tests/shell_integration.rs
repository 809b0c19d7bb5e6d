use equipamentos::config::ClientOptions;
use equipamentos::draft::Field;
use equipamentos::error::Error;
use equipamentos::notify::{
    ToastLevel, MSG_CREATED, MSG_DELETED, MSG_DELETE_FAILED, MSG_LOAD_FAILED, MSG_REQUIRED_FIELDS,
    MSG_UPDATED,
};
use equipamentos::shell::{Shell, View};
use equipamentos::transport::Status;
use equipamentos::Equipamentos;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COLLECTION: &str = "/api/equipamentos/";

// Helper to build a shell against the mock server
fn setup_shell(server: &MockServer) -> (Equipamentos, Shell) {
    let options = ClientOptions::default()
        .with_api_url(&format!("{}{}", server.uri(), COLLECTION))
        .with_csrf_token(Some("csrf-abc".to_string()));
    let equipamentos = Equipamentos::new_with_options(options).unwrap();
    let shell = equipamentos.shell();
    (equipamentos, shell)
}

fn bomba(id: i64) -> Value {
    json!({
        "id": id,
        "nome": "Bomba",
        "tipo": "Infusão",
        "fabricante": "B. Braun",
        "modelo": "Infusomat",
        "numero_serie": format!("SN-{}", id),
        "status": "Em Uso",
        "data_compra": "2023-04-01",
        "valor_compra": 150.5,
        "descricao": "UTI"
    })
}

async fn mount_list_once(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .up_to_n_times(1)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_mount_renders_rows() {
    let server = MockServer::start().await;
    let (_, mut shell) = setup_shell(&server);
    mount_list_once(&server, json!([bomba(1)])).await;

    shell.mount().await.unwrap();

    assert_eq!(shell.equipamentos().len(), 1);
    assert_eq!(shell.view(), View::List);
    let rendered = shell.render();
    assert!(rendered.contains("Equipamentos Arkmeds"));
    assert!(rendered.contains("Bomba"));
    assert!(rendered.contains("150,50"));
}

#[tokio::test]
async fn test_delete_then_reload_determines_rows() {
    let server = MockServer::start().await;
    let (equipamentos, mut shell) = setup_shell(&server);

    mount_list_once(&server, json!([bomba(1)])).await;
    mount_list_once(&server, json!([])).await;

    Mock::given(method("DELETE"))
        .and(path("/api/equipamentos/1/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    shell.mount().await.unwrap();
    assert_eq!(shell.equipamentos()[0].nome, "Bomba");

    shell.delete(1).await.unwrap();

    assert!(shell.equipamentos().is_empty());
    let toasts = equipamentos.toaster.pending();
    assert_eq!(toasts.last().map(|t| t.message.as_str()), Some(MSG_DELETED));

    let rendered = shell.render();
    assert!(!rendered.contains("Bomba"));
}

#[tokio::test]
async fn test_deleted_id_absent_from_next_snapshot() {
    let server = MockServer::start().await;
    let (_, mut shell) = setup_shell(&server);

    mount_list_once(&server, json!([bomba(5), bomba(7), bomba(9)])).await;
    mount_list_once(&server, json!([bomba(5), bomba(9)])).await;

    Mock::given(method("DELETE"))
        .and(path("/api/equipamentos/7/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    shell.mount().await.unwrap();
    shell.delete(7).await.unwrap();

    let ids: Vec<i64> = shell.equipamentos().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![5, 9]);
}

#[tokio::test]
async fn test_failed_delete_keeps_collection() {
    let server = MockServer::start().await;
    let (equipamentos, mut shell) = setup_shell(&server);

    mount_list_once(&server, json!([bomba(1)])).await;

    Mock::given(method("DELETE"))
        .and(path("/api/equipamentos/1/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    shell.mount().await.unwrap();
    let result = shell.delete(1).await;

    assert!(matches!(result, Err(Error::Transport(_))));
    assert_eq!(shell.equipamentos().len(), 1);
    let toasts = equipamentos.toaster.drain();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Error);
    assert_eq!(toasts[0].message, MSG_DELETE_FAILED);
}

#[tokio::test]
async fn test_create_replaces_collection_with_fresh_list() {
    let server = MockServer::start().await;
    let (equipamentos, mut shell) = setup_shell(&server);

    mount_list_once(&server, json!([])).await;

    // The reload returns something other than what was posted, and wins.
    let mut listed = bomba(10);
    listed["nome"] = json!("Bomba (servidor)");
    mount_list_once(&server, json!([listed])).await;

    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .and(body_json(json!({
            "nome": "Bomba",
            "tipo": "Infusão",
            "fabricante": "B. Braun",
            "modelo": "Infusomat",
            "numero_serie": "SN-10",
            "status": "Em Estoque",
            "data_compra": "2023-04-01",
            "valor_compra": 150.5,
            "data_ultima_manutencao": "2023-04-01",
            "data_proxima_manutencao": "2023-04-01",
            "descricao": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(bomba(10)))
        .expect(1)
        .mount(&server)
        .await;

    shell.mount().await.unwrap();
    shell.navigate(View::Create);

    let draft = shell.form_mut().draft_mut();
    draft.set_text(Field::Nome, "Bomba");
    draft.set_text(Field::Tipo, "Infusão");
    draft.set_text(Field::Fabricante, "B. Braun");
    draft.set_text(Field::Modelo, "Infusomat");
    draft.set_text(Field::NumeroSerie, "SN-10");
    draft.set_valor_compra("150,5");
    let purchase = equipamentos::format::parse_date_input("01/04/2023").unwrap();
    for field in [
        equipamentos::draft::DateField::DataCompra,
        equipamentos::draft::DateField::DataUltimaManutencao,
        equipamentos::draft::DateField::DataProximaManutencao,
    ] {
        draft.set_date(field, purchase);
    }

    let created = shell.submit_create().await.unwrap();
    assert_eq!(created.id, 10);

    assert_eq!(shell.equipamentos().len(), 1);
    assert_eq!(shell.equipamentos()[0].nome, "Bomba (servidor)");
    assert_eq!(shell.form().draft().text(Field::NumeroSerie), "");
    assert_eq!(equipamentos.toaster.drain()[0].message, MSG_CREATED);
}

#[tokio::test]
async fn test_invalid_create_sends_nothing() {
    let server = MockServer::start().await;
    let (equipamentos, mut shell) = setup_shell(&server);

    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(201).set_body_json(bomba(1)))
        .expect(0)
        .mount(&server)
        .await;

    shell.navigate(View::Create);
    shell.form_mut().draft_mut().set_text(Field::Nome, "Bomba");

    let result = shell.submit_create().await;
    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(
        equipamentos.toaster.drain()[0].message,
        MSG_REQUIRED_FIELDS
    );
}

#[tokio::test]
async fn test_edit_status_only_keeps_other_fields() {
    let server = MockServer::start().await;
    let (equipamentos, mut shell) = setup_shell(&server);

    mount_list_once(&server, json!([bomba(3)])).await;
    let mut reloaded = bomba(3);
    reloaded["status"] = json!("Em Estoque");
    mount_list_once(&server, json!([reloaded])).await;

    let mut expected_body = bomba(3);
    expected_body.as_object_mut().unwrap().remove("id");
    expected_body["status"] = json!("Em Estoque");
    expected_body["data_ultima_manutencao"] = Value::Null;
    expected_body["data_proxima_manutencao"] = Value::Null;

    Mock::given(method("PUT"))
        .and(path("/api/equipamentos/3/"))
        .and(header("X-CSRFToken", "csrf-abc"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(&reloaded_response()))
        .expect(1)
        .mount(&server)
        .await;

    shell.mount().await.unwrap();
    shell.edit(3).unwrap();
    shell
        .listing_mut()
        .overlay_mut()
        .unwrap()
        .draft_mut()
        .set_status(Status::EmEstoque);

    let merged = shell.submit_edit().await.unwrap();

    assert_eq!(merged.id, 3);
    assert_eq!(merged.status, Status::EmEstoque);
    assert_eq!(merged.nome, "Bomba");
    assert_eq!(merged.numero_serie, "SN-3");
    assert_eq!(merged.descricao.as_deref(), Some("UTI"));
    assert!(shell.listing().selected().is_none());
    assert_eq!(shell.equipamentos()[0].status, Status::EmEstoque);
    assert_eq!(equipamentos.toaster.drain()[0].message, MSG_UPDATED);
}

fn reloaded_response() -> Value {
    let mut body = bomba(3);
    body["status"] = json!("Em Estoque");
    body
}

#[tokio::test]
async fn test_edit_clearing_optionals_sends_nulls() {
    let server = MockServer::start().await;
    let (_, mut shell) = setup_shell(&server);

    let mut stored = bomba(3);
    stored["data_proxima_manutencao"] = json!("2025-01-15");
    mount_list_once(&server, json!([stored])).await;

    let mut cleared = bomba(3);
    cleared["descricao"] = Value::Null;
    mount_list_once(&server, json!([cleared])).await;

    let mut expected_body = bomba(3);
    expected_body.as_object_mut().unwrap().remove("id");
    expected_body["data_ultima_manutencao"] = Value::Null;
    expected_body["data_proxima_manutencao"] = Value::Null;
    expected_body["descricao"] = Value::Null;

    Mock::given(method("PUT"))
        .and(path("/api/equipamentos/3/"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(&cleared))
        .expect(1)
        .mount(&server)
        .await;

    shell.mount().await.unwrap();
    shell.edit(3).unwrap();
    let draft = shell.listing_mut().overlay_mut().unwrap().draft_mut();
    draft.set_text(Field::Descricao, "");
    draft.set_date(
        equipamentos::draft::DateField::DataProximaManutencao,
        None,
    );

    let merged = shell.submit_edit().await.unwrap();

    assert_eq!(merged.descricao, None);
    assert_eq!(merged.data_proxima_manutencao, None);
    assert_eq!(shell.equipamentos()[0].descricao, None);
    assert_eq!(shell.equipamentos()[0].data_proxima_manutencao, None);
}

#[tokio::test]
async fn test_edit_unknown_id() {
    let server = MockServer::start().await;
    let (_, mut shell) = setup_shell(&server);
    mount_list_once(&server, json!([bomba(1)])).await;

    shell.mount().await.unwrap();
    assert!(matches!(shell.edit(99), Err(Error::NotFound(99))));
    assert!(shell.listing().overlay().is_none());
}

#[tokio::test]
async fn test_failed_mount_keeps_previous_collection() {
    let server = MockServer::start().await;
    let (equipamentos, mut shell) = setup_shell(&server);

    mount_list_once(&server, json!([bomba(1)])).await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    shell.mount().await.unwrap();
    assert!(shell.mount().await.is_err());

    assert_eq!(shell.equipamentos().len(), 1);
    let toasts = equipamentos.toaster.drain();
    assert_eq!(toasts[0].level, ToastLevel::Error);
    assert_eq!(toasts[0].message, MSG_LOAD_FAILED);
}

#[tokio::test]
async fn test_render_drains_toasts() {
    let server = MockServer::start().await;
    let (equipamentos, mut shell) = setup_shell(&server);

    equipamentos.toaster.success(MSG_CREATED);
    let first = shell.render();
    let second = shell.render();

    assert!(first.contains(MSG_CREATED));
    assert!(!second.contains(MSG_CREATED));
}
