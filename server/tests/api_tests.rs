use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use database::{JsonFileStore, MemoryStore, StoreConfig};
use serde_json::{json, Value};
use server::{configure, AppState};
use types::{ActiveRoster, Player};

fn memory_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(Arc::new(MemoryStore::new())))
}

#[actix_web::test]
async fn create_then_patch_match_changes_only_named_field() {
    let app = test::init_service(App::new().app_data(memory_state()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/matches")
        .set_json(json!({"name": "Final", "teamA": "Red", "teamB": "Blue", "quarterLength": 10}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    for period in ["firstHalf1", "firstHalf2", "secondHalf1", "secondHalf2"] {
        assert_eq!(created["scores"][period], json!({"teamA": 0, "teamB": 0}));
    }
    assert_eq!(created["teamFouls"]["teamA"]["firstHalf1"], json!([]));
    assert_eq!(created["teamFouls"]["teamB"]["secondHalf2"], json!([]));
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri(&format!("/matches/{id}"))
        .set_json(json!({"teamA": "Reds"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/matches/{id}"))
        .to_request();
    let mut fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["teamA"], "Reds");

    let mut expected = created.clone();
    expected["teamA"] = json!("Reds");
    for value in [&mut fetched, &mut expected] {
        value.as_object_mut().unwrap().remove("revision");
    }
    assert_eq!(fetched, expected);
}

#[actix_web::test]
async fn unknown_ids_are_404_with_message() {
    let app = test::init_service(App::new().app_data(memory_state()).configure(configure)).await;
    let missing = uuid::Uuid::new_v4();

    for req in [
        test::TestRequest::get().uri(&format!("/matches/{missing}")),
        test::TestRequest::delete().uri(&format!("/matches/{missing}")),
        test::TestRequest::delete().uri(&format!("/matches/{missing}/players/{missing}")),
    ] {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].is_string());
    }

    let req = test::TestRequest::patch()
        .uri(&format!("/matches/{missing}"))
        .set_json(json!({"name": "x"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_bodies_and_ids_answer_with_json_message() {
    let app = test::init_service(App::new().app_data(memory_state()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/matches")
        .set_json(json!({"name": "Final"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("teamA"));

    let req = test::TestRequest::get().uri("/matches/not-a-uuid").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn if_match_guards_against_stale_writes() {
    let app = test::init_service(App::new().app_data(memory_state()).configure(configure)).await;
    let req = test::TestRequest::post()
        .uri("/matches")
        .set_json(json!({"name": "Semi", "teamA": "Red", "teamB": "Blue", "quarterLength": 12}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri(&format!("/matches/{id}"))
        .insert_header(("If-Match", "\"0\""))
        .set_json(json!({"location": "North hall"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::patch()
        .uri(&format!("/matches/{id}"))
        .insert_header(("If-Match", "0"))
        .set_json(json!({"location": "South hall"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CONFLICT
    );

    let req = test::TestRequest::patch()
        .uri(&format!("/matches/{id}"))
        .insert_header(("If-Match", "soon"))
        .set_json(json!({"location": "South hall"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn player_lifecycle_and_starter_roster() {
    let app = test::init_service(App::new().app_data(memory_state()).configure(configure)).await;
    let req = test::TestRequest::post()
        .uri("/matches")
        .set_json(json!({"name": "Final", "teamA": "Red", "teamB": "Blue", "quarterLength": 10}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let match_id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/matches/{match_id}/players"))
        .set_json(json!({"number": "23", "name": "Jordan", "team": "A"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let player: Player = test::read_body_json(resp).await;
    assert!(!player.is_starter);

    let req = test::TestRequest::patch()
        .uri(&format!("/matches/{match_id}/players/{}", player.id))
        .set_json(json!({"isStarter": true}))
        .to_request();
    let patched: Player = test::call_and_read_body_json(&app, req).await;
    assert!(patched.is_starter);
    assert!(patched.updated_at.is_some());

    let req = test::TestRequest::get()
        .uri(&format!("/matches/{match_id}/players"))
        .to_request();
    let players: Vec<Player> = test::call_and_read_body_json(&app, req).await;
    let roster = ActiveRoster::initialize(None, &players);
    assert_eq!(roster.active(types::Team::A), &[player.id]);

    let req = test::TestRequest::delete()
        .uri(&format!("/matches/{match_id}/players/{}", player.id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );
    let req = test::TestRequest::get()
        .uri(&format!("/matches/{match_id}/players"))
        .to_request();
    let players: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(players.is_empty());
}

#[actix_web::test]
async fn file_store_backs_the_api() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(StoreConfig::new(dir.path())).await.unwrap();
    let state = web::Data::new(AppState::new(Arc::new(store)));
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let req = test::TestRequest::get().uri("/matches").to_request();
    let matches: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(matches.is_empty());

    let req = test::TestRequest::post()
        .uri("/matches")
        .set_json(json!({"name": "Cup", "teamA": "Red", "teamB": "Blue", "quarterLength": 8}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/matches/{}", created["id"].as_str().unwrap()))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );
    let on_disk = std::fs::read_to_string(dir.path().join("matches.json")).unwrap();
    assert_eq!(serde_json::from_str::<Value>(&on_disk).unwrap(), json!([]));
}
