/// Post handlers - HTTP endpoints for listing, reading and writing posts.
use crate::config::Config;
use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::middleware::AuthenticatedUser;
use crate::models::{CommentWithAuthor, Group, PostWithAuthor};
use crate::services::{CommentService, PostService};
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Listing query parameters. `page` stays a raw string so that invalid
/// values clamp instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
}

/// One page of posts plus paging metadata.
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostWithAuthor>,
    pub page: i64,
    pub total_pages: i64,
    pub total_posts: i64,
}

#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub post: PostWithAuthor,
    pub author_posts_count: i64,
    pub comments: Vec<CommentWithAuthor>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
    pub group_id: Option<Uuid>,
    pub image_key: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
    pub group_id: Option<Uuid>,
    pub image_key: Option<String>,
}

/// Create-form context: the group choices a new post can be filed under.
#[derive(Debug, Serialize)]
pub struct NewPostFormResponse {
    pub is_edit: bool,
    pub groups: Vec<Group>,
}

/// Edit-form context: current field values plus the group choices.
#[derive(Debug, Serialize)]
pub struct EditPostFormResponse {
    pub post_id: Uuid,
    pub is_edit: bool,
    pub text: String,
    pub group_id: Option<Uuid>,
    pub image_key: Option<String>,
    pub groups: Vec<Group>,
}

pub(crate) fn detail_location(post_id: Uuid) -> String {
    format!("/api/v1/posts/{post_id}")
}

fn profile_location(username: &str) -> String {
    format!("/api/v1/users/{}", urlencoding::encode(username))
}

pub(crate) fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn found(location: String) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// All posts, newest first, one page at a time.
pub async fn index(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), config.posts.page_size);
    let (window, posts) = service.index_page(query.page.as_deref()).await?;

    Ok(HttpResponse::Ok().json(PostListResponse {
        posts,
        page: window.number,
        total_pages: window.total_pages,
        total_posts: window.total_items,
    }))
}

/// A single post with its author's total post count and its comments.
pub async fn post_detail(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), config.posts.page_size);
    let (post, author_posts_count) = service.detail(*post_id).await?;

    let comments = CommentService::new((**pool).clone())
        .list_for_post(post.id)
        .await?;

    Ok(HttpResponse::Ok().json(PostDetailResponse {
        post,
        author_posts_count,
        comments,
    }))
}

/// Create a new post authored by the caller, then redirect to their profile.
pub async fn create_post(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    user: AuthenticatedUser,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let author = user_repo::find_by_id(pool.get_ref(), user.id)
        .await?
        .ok_or(AppError::NotFound("user"))?;

    let service = PostService::new((**pool).clone(), config.posts.page_size);
    let post = service
        .create(author.id, &req.text, req.group_id, req.image_key.as_deref())
        .await?;

    tracing::info!(post_id = %post.id, author = %author.username, "post created");

    Ok(see_other(profile_location(&author.username)))
}

/// Edit a post. Only the author may modify it; anyone else is sent back to
/// the detail view untouched.
pub async fn update_post(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    user: AuthenticatedUser,
    post_id: web::Path<Uuid>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), config.posts.page_size);
    let post = service
        .get_post(*post_id)
        .await?
        .ok_or(AppError::NotFound("post"))?;

    if post.author_id != user.id {
        return Ok(see_other(detail_location(post.id)));
    }

    req.validate()?;

    let updated = service
        .update(post.id, &req.text, req.group_id, req.image_key.as_deref())
        .await?;

    tracing::info!(post_id = %updated.id, "post updated");

    Ok(see_other(detail_location(updated.id)))
}

/// Create-form context for an authenticated caller.
pub async fn new_post_form(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), config.posts.page_size);
    let groups = service.group_choices().await?;

    Ok(HttpResponse::Ok().json(NewPostFormResponse {
        is_edit: false,
        groups,
    }))
}

/// Edit-form context. A non-author is redirected to the detail view before
/// any form data is exposed.
pub async fn edit_post_form(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    user: AuthenticatedUser,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), config.posts.page_size);
    let post = service
        .get_post(*post_id)
        .await?
        .ok_or(AppError::NotFound("post"))?;

    if post.author_id != user.id {
        return Ok(found(detail_location(post.id)));
    }

    let groups = service.group_choices().await?;

    Ok(HttpResponse::Ok().json(EditPostFormResponse {
        post_id: post.id,
        is_edit: true,
        text: post.text,
        group_id: post.group_id,
        image_key: post.image_key,
        groups,
    }))
}
