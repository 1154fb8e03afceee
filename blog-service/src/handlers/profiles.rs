/// Profile handlers - an author's page with their post count and posts.
use crate::config::Config;
use crate::error::Result;
use crate::handlers::posts::ListQuery;
use crate::models::{PostWithAuthor, User};
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub author: User,
    pub posts_count: i64,
    pub posts: Vec<PostWithAuthor>,
    pub page: i64,
    pub total_pages: i64,
    pub total_posts: i64,
}

/// An author's profile: their total post count plus one page of their posts.
pub async fn profile(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    username: web::Path<String>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), config.posts.page_size);
    let (author, posts_count, window, posts) =
        service.profile_page(&username, query.page.as_deref()).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse {
        author,
        posts_count,
        posts,
        page: window.number,
        total_pages: window.total_pages,
        total_posts: window.total_items,
    }))
}
