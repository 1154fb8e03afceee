/// Comment service - replies attached to posts.
use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::{Comment, CommentWithAuthor};
use sqlx::PgPool;
use uuid::Uuid;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add a comment to an existing post.
    pub async fn add(&self, post_id: Uuid, author_id: Uuid, text: &str) -> Result<Comment> {
        if post_repo::find_by_id(&self.pool, post_id).await?.is_none() {
            return Err(AppError::NotFound("post"));
        }

        Ok(comment_repo::create_comment(&self.pool, post_id, author_id, text).await?)
    }

    /// All comments on a post, newest first.
    pub async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>> {
        Ok(comment_repo::list_by_post(&self.pool, post_id).await?)
    }
}
