/// Comment handlers - replies attached to a post.
use crate::error::Result;
use crate::handlers::posts::{detail_location, see_other};
use crate::middleware::AuthenticatedUser;
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
}

/// Add a comment to a post, then redirect back to the detail view.
pub async fn add_comment(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    post_id: web::Path<Uuid>,
    req: web::Json<AddCommentRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = CommentService::new((**pool).clone());
    let comment = service.add(*post_id, user.id, &req.text).await?;

    tracing::info!(comment_id = %comment.id, post_id = %comment.post_id, "comment added");

    Ok(see_other(detail_location(comment.post_id)))
}
