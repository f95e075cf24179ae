// SPDX-License-Identifier: MPL-2.0
//! Feed client against a local backend serving the same routes and payload
//! shapes as the production one.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use newsdeck::deck::Deck;
use newsdeck::domain::news::{CommentDraft, ItemId, ReactionCounts, ReactionKind};
use newsdeck::error::{Error, FeedError};
use newsdeck::feed::FeedClient;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

fn item_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Headline {id}"),
        "summary": "Summary",
        "link": format!("https://example.org/{id}"),
        "likes": 2,
        "dislikes": 0,
        "created_at": "2024-06-04T10:15:00.250000"
    })
}

async fn list_news(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let limit = params
        .get("limit")
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(100);
    let items: Vec<Value> = ["n1", "n2", "n3"]
        .iter()
        .take(limit)
        .map(|id| item_json(id))
        .collect();
    Json(json!({ "items": items }))
}

async fn get_news(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if id == "missing" {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({ "item": item_json(&id) })))
}

async fn react(Path(_id): Path<String>, Json(body): Json<Value>) -> Result<Json<Value>, StatusCode> {
    match body.get("action").and_then(Value::as_str) {
        Some("like") => Ok(Json(json!({ "likes": 5, "dislikes": 1 }))),
        Some("dislike") => Ok(Json(json!({ "likes": 4, "dislikes": 2 }))),
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

async fn list_comments(Path(_id): Path<String>) -> Json<Value> {
    Json(json!({
        "items": [
            { "id": "c2", "text": "Second", "created_at": "2024-06-04T11:00:00" },
            { "id": "c1", "text": "First", "created_at": null }
        ]
    }))
}

async fn add_comment(
    Path(_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    match body.get("text").and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => Ok(Json(json!({ "id": 7 }))),
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

fn backend() -> Router {
    Router::new()
        .route("/news", get(list_news))
        .route("/news/{id}", get(get_news))
        .route("/news/{id}/reaction", axum::routing::post(react))
        .route("/news/{id}/comments", get(list_comments).post(add_comment))
        .route("/healthz", get(|| async { Json(json!({ "status": "ok" })) }))
        .route("/broken/news", get(|| async { "<html>not json</html>" }))
        .route(
            "/down/news",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        )
}

async fn spawn_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, backend()).await.expect("serve backend");
    });
    format!("http://{addr}")
}

fn client(base: &str) -> FeedClient {
    FeedClient::new(base, Duration::from_secs(5)).expect("valid base url")
}

#[tokio::test]
async fn list_news_respects_limit() {
    let feed = client(&spawn_backend().await);

    let items = feed.list_news(2).await.expect("list succeeds");
    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["n1", "n2"]);
    assert_eq!(items[0].counts, ReactionCounts::new(2, 0));
    assert!(items[0].created_at.is_some());
}

#[tokio::test]
async fn get_news_encodes_ids_and_maps_404() {
    let feed = client(&spawn_backend().await);

    let item = feed
        .get_news(&ItemId::from("with space"))
        .await
        .expect("item found");
    assert_eq!(item.id.as_str(), "with space");

    let missing = feed.get_news(&ItemId::from("missing")).await;
    assert_eq!(missing, Err(Error::Feed(FeedError::NotFound)));
}

#[tokio::test]
async fn reactions_return_backend_totals() {
    let feed = client(&spawn_backend().await);
    let id = ItemId::from("n1");

    assert_eq!(
        feed.send_reaction(&id, ReactionKind::Like).await,
        Ok(ReactionCounts::new(5, 1))
    );
    assert_eq!(
        feed.send_reaction(&id, ReactionKind::Dislike).await,
        Ok(ReactionCounts::new(4, 2))
    );
}

#[tokio::test]
async fn comments_round_trip() {
    let feed = client(&spawn_backend().await);
    let id = ItemId::from("n1");

    let comments = feed.fetch_comments(&id).await.expect("comments load");
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].text, "Second");
    assert!(comments[0].created_at.is_some());
    assert!(comments[1].created_at.is_none());

    let draft = CommentDraft::new("  Worth reading  ").expect("valid draft");
    assert_eq!(feed.send_comment(&id, &draft).await, Ok("7".to_string()));
}

#[tokio::test]
async fn health_reports_ok() {
    let feed = client(&spawn_backend().await);
    assert_eq!(feed.health().await, Ok(true));
}

#[tokio::test]
async fn bad_bodies_and_statuses_are_classified() {
    let base = spawn_backend().await;

    let broken = client(&format!("{base}/broken"));
    assert!(matches!(
        broken.list_news(10).await,
        Err(Error::Feed(FeedError::Decode(_)))
    ));

    let down = client(&format!("{base}/down"));
    assert_eq!(
        down.list_news(10).await,
        Err(Error::Feed(FeedError::Status(503)))
    );
}

#[tokio::test]
async fn unreachable_backend_is_a_request_error_and_keeps_the_deck() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);

    let feed = client(&format!("http://{addr}"));
    let fetched = feed.list_news(10).await;
    assert!(matches!(fetched, Err(Error::Feed(FeedError::Request(_)))));

    let mut deck = Deck::default();
    let live = client(&spawn_backend().await);
    deck.apply_fetch(live.list_news(10).await)
        .expect("first load succeeds");
    deck.next();

    assert!(deck.apply_fetch(fetched).is_err());
    assert_eq!(deck.current().map(|item| item.id.as_str()), Some("n2"));
    assert_eq!(deck.info().total_count, 3);
}
