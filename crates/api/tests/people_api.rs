//! HTTP-level integration tests for the `/people` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, sorted_ids};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../../db/migrations", fixtures("movies"))]
async fn list_people_returns_all(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/people").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(sorted_ids(&json), vec![1, 2, 3, 4, 5]);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("movies"))]
async fn list_people_honours_limit(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/people?limit=3").await).await;
    assert_eq!(json.as_array().unwrap().len(), 3);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/people?limit=nope").await).await;
    assert_eq!(json.as_array().unwrap().len(), 5);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("movies"))]
async fn list_people_with_repeated_limit_uses_last_value(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/people?limit=1&limit=4").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("movies"))]
async fn get_person_returns_exact_record(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/people/5").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"id": 5, "name": "Henry Fonda", "birth": 1905})
    );
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("movies"))]
async fn get_nonexistent_person_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/people/777").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Person with id 777 not found");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("movies"))]
async fn list_movies_of_person(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/people/4/movies").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(sorted_ids(&json), vec![2, 3]);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/people/2/movies").await).await;
    assert_eq!(
        json,
        serde_json::json!([{"id": 1, "title": "The Shawshank Redemption", "year": 1994}])
    );
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("movies"))]
async fn list_movies_of_person_without_roles_is_empty(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/people/3/movies").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("movies"))]
async fn list_movies_of_missing_person_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/people/9999/movies").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("movies"))]
async fn list_people_on_closed_pool_returns_500(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = get(app, "/api/v1/people").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
