//! Happy paths for every route.

use serde_json::{json, Value};

use movie_catalog::MovieStore;

use crate::support::{start_seeded, start_server};

#[tokio::test]
async fn health_reports_count() {
    let base = start_seeded().await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true, "movies": 2 }));
}

#[tokio::test]
async fn create_returns_201_with_id() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/movies/"))
        .json(&json!({ "title": "Alien", "year": 1979, "rating": 8.5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "id": 3, "title": "Alien", "year": 1979, "rating": 8.5 })
    );
}

#[tokio::test]
async fn create_into_empty_store_starts_at_one() {
    let base = start_server(MovieStore::new()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/movies"))
        .json(&json!({ "title": "Alien", "year": 1979, "rating": 8.5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn get_by_id() {
    let base = start_seeded().await;
    let resp = reqwest::get(format!("{base}/movies/1")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "id": 1, "title": "Matrix", "year": 1999, "rating": 8.7 })
    );
}

#[tokio::test]
async fn list_all_and_filtered() {
    let base = start_seeded().await;

    let all: Vec<Value> = reqwest::get(format!("{base}/movies/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0]["id"], 1);
    assert_eq!(all[1]["id"], 2);

    let inclusive: Vec<Value> = reqwest::get(format!("{base}/movies/?min_rating=8.7"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(inclusive.len(), 2);

    let resp = reqwest::get(format!("{base}/movies/?min_rating=9.0&max_year=2005"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let none: Vec<Value> = resp.json().await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn top_rated() {
    let base = start_seeded().await;

    let one: Vec<Value> = reqwest::get(format!("{base}/movies/top/?limit=1"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0]["title"], "Inception");

    let default: Vec<Value> = reqwest::get(format!("{base}/movies/top"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let titles: Vec<&str> = default.iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["Inception", "Matrix"]);
}

#[tokio::test]
async fn delete_returns_204_then_404() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client.delete(format!("{base}/movies/2")).send().await.unwrap();
    assert_eq!(resp.status(), 204);
    assert!(resp.bytes().await.unwrap().is_empty());

    let resp = client.delete(format!("{base}/movies/2")).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client.get(format!("{base}/movies/2")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn delete_max_then_create_reuses_id() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client.delete(format!("{base}/movies/2")).send().await.unwrap();
    assert_eq!(resp.status(), 204);

    let body: Value = client
        .post(format!("{base}/movies/"))
        .json(&json!({ "title": "Tenet", "year": 2020, "rating": 7.3 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["id"], 2);
}
