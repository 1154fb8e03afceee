/// Group handlers - posts scoped to a named group.
use crate::config::Config;
use crate::error::Result;
use crate::handlers::posts::ListQuery;
use crate::models::{Group, PostWithAuthor};
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Serialize)]
pub struct GroupPostsResponse {
    pub group: Group,
    pub posts: Vec<PostWithAuthor>,
    pub page: i64,
    pub total_pages: i64,
    pub total_posts: i64,
}

/// One page of a group's posts, newest first. Unknown slugs are a 404.
pub async fn group_posts(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    slug: web::Path<String>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), config.posts.page_size);
    let (group, window, posts) = service.group_page(&slug, query.page.as_deref()).await?;

    Ok(HttpResponse::Ok().json(GroupPostsResponse {
        group,
        posts,
        page: window.number,
        total_pages: window.total_pages,
        total_posts: window.total_items,
    }))
}
