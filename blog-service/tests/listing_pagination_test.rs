#![cfg(feature = "pg_tests")]
//! Integration tests: listing and pagination.
//!
//! Coverage:
//! - index/group/profile listings split 15 posts into pages of 10 and 5
//! - page clamping for out-of-range and non-numeric values
//! - group scoping: a post never leaks into another group's listing
//! - newest-first ordering
//! - 404 for unknown slug / username

mod common;

use actix_web::{test, web, App};
use blog_service::routes;
use common::fixtures;
use serde_json::Value;
use sqlx::PgPool;

async fn setup_test_app(
    pool: PgPool,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let config = fixtures::test_config();
    test::init_service(
        App::new()
            .app_data(web::Data::new(pool))
            .app_data(web::Data::new(config.clone()))
            .configure(|cfg| routes::configure_api(cfg, &config)),
    )
    .await
}

async fn get_json(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    uri: &str,
) -> Value {
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success(), "GET {uri} failed");
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn fifteen_posts_paginate_as_ten_then_five_everywhere() {
    let pool = fixtures::setup_test_db().await;
    let user = fixtures::create_test_user(&pool, "paginated-author").await;
    let group = fixtures::create_test_group(&pool, "test group", "test-group").await;

    for i in 0..15 {
        fixtures::create_test_post(&pool, user.id, Some(group.id), &format!("test post {i}"))
            .await;
    }

    let app = setup_test_app(pool.clone()).await;

    let urls = [
        "/api/v1/posts",
        "/api/v1/groups/test-group/posts",
        "/api/v1/users/paginated-author",
    ];

    for url in urls {
        let first = get_json(&app, url).await;
        assert_eq!(first["posts"].as_array().unwrap().len(), 10, "{url} page 1");
        assert_eq!(first["page"], 1);
        assert_eq!(first["total_pages"], 2);
        assert_eq!(first["total_posts"], 15);

        let second = get_json(&app, &format!("{url}?page=2")).await;
        assert_eq!(second["posts"].as_array().unwrap().len(), 5, "{url} page 2");
        assert_eq!(second["page"], 2);
    }
}

#[actix_web::test]
async fn page_parameter_is_clamped() {
    let pool = fixtures::setup_test_db().await;
    let user = fixtures::create_test_user(&pool, "clamped-author").await;

    for i in 0..15 {
        fixtures::create_test_post(&pool, user.id, None, &format!("test post {i}")).await;
    }

    let app = setup_test_app(pool.clone()).await;

    let beyond = get_json(&app, "/api/v1/posts?page=999").await;
    assert_eq!(beyond["page"], 2);
    assert_eq!(beyond["posts"].as_array().unwrap().len(), 5);

    let garbage = get_json(&app, "/api/v1/posts?page=abc").await;
    assert_eq!(garbage["page"], 1);
    assert_eq!(garbage["posts"].as_array().unwrap().len(), 10);

    let negative = get_json(&app, "/api/v1/posts?page=-2").await;
    assert_eq!(negative["page"], 1);
}

#[actix_web::test]
async fn post_appears_only_in_its_own_group() {
    let pool = fixtures::setup_test_db().await;
    let user = fixtures::create_test_user(&pool, "group-author").await;
    let group_a = fixtures::create_test_group(&pool, "group a", "group-a").await;
    let _group_b = fixtures::create_test_group(&pool, "group b", "group-b").await;

    let post = fixtures::create_test_post(&pool, user.id, Some(group_a.id), "scoped post").await;

    let app = setup_test_app(pool.clone()).await;

    let in_a = get_json(&app, "/api/v1/groups/group-a/posts").await;
    assert_eq!(in_a["total_posts"], 1);
    assert_eq!(in_a["posts"][0]["id"], post.id.to_string());
    assert_eq!(in_a["posts"][0]["group_slug"], "group-a");

    let in_b = get_json(&app, "/api/v1/groups/group-b/posts").await;
    assert_eq!(in_b["total_posts"], 0);
    assert!(in_b["posts"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn listings_are_newest_first() {
    let pool = fixtures::setup_test_db().await;
    let user = fixtures::create_test_user(&pool, "ordered-author").await;
    let group = fixtures::create_test_group(&pool, "ordered group", "ordered-group").await;

    for i in 0..3 {
        fixtures::create_test_post(&pool, user.id, Some(group.id), &format!("older post {i}"))
            .await;
    }
    let newest =
        fixtures::create_test_post(&pool, user.id, Some(group.id), "the newest post").await;

    let app = setup_test_app(pool.clone()).await;

    for url in [
        "/api/v1/posts",
        "/api/v1/groups/ordered-group/posts",
        "/api/v1/users/ordered-author",
    ] {
        let body = get_json(&app, url).await;
        assert_eq!(
            body["posts"][0]["id"],
            newest.id.to_string(),
            "{url} should lead with the newest post"
        );
    }
}

#[actix_web::test]
async fn profile_reports_post_count_and_author() {
    let pool = fixtures::setup_test_db().await;
    let user = fixtures::create_test_user(&pool, "counted-author").await;

    for i in 0..4 {
        fixtures::create_test_post(&pool, user.id, None, &format!("test post {i}")).await;
    }

    let app = setup_test_app(pool.clone()).await;

    let body = get_json(&app, "/api/v1/users/counted-author").await;
    assert_eq!(body["posts_count"], 4);
    assert_eq!(body["author"]["username"], "counted-author");
    for post in body["posts"].as_array().unwrap() {
        assert_eq!(post["author_username"], "counted-author");
    }
}

#[actix_web::test]
async fn unknown_slug_and_username_are_not_found() {
    let pool = fixtures::setup_test_db().await;
    let app = setup_test_app(pool.clone()).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/groups/no-such-group/posts")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/v1/users/no-such-user")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}
