/// Post service - listing, detail, creation and editing of posts.
use crate::db::{group_repo, post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::{Group, Post, PostWithAuthor, User};
use crate::pagination::{PageWindow, Paginator};
use sqlx::PgPool;
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

pub struct PostService {
    pool: PgPool,
    paginator: Paginator,
}

impl PostService {
    pub fn new(pool: PgPool, page_size: i64) -> Self {
        Self {
            pool,
            paginator: Paginator::new(page_size),
        }
    }

    /// One page of all posts, newest first.
    pub async fn index_page(
        &self,
        page: Option<&str>,
    ) -> Result<(PageWindow, Vec<PostWithAuthor>)> {
        let total = post_repo::count_all(&self.pool).await?;
        let window = self.paginator.page_for(total, page);
        let posts = post_repo::list_all(&self.pool, window.limit(), window.offset()).await?;

        Ok((window, posts))
    }

    /// Resolve a group by slug and return one page of its posts.
    pub async fn group_page(
        &self,
        slug: &str,
        page: Option<&str>,
    ) -> Result<(Group, PageWindow, Vec<PostWithAuthor>)> {
        let group = group_repo::find_by_slug(&self.pool, slug)
            .await?
            .ok_or(AppError::NotFound("group"))?;

        let total = post_repo::count_by_group(&self.pool, group.id).await?;
        let window = self.paginator.page_for(total, page);
        let posts =
            post_repo::list_by_group(&self.pool, group.id, window.limit(), window.offset()).await?;

        Ok((group, window, posts))
    }

    /// Resolve an author by username and return their post count plus one
    /// page of their posts.
    pub async fn profile_page(
        &self,
        username: &str,
        page: Option<&str>,
    ) -> Result<(User, i64, PageWindow, Vec<PostWithAuthor>)> {
        let author = user_repo::find_by_username(&self.pool, username)
            .await?
            .ok_or(AppError::NotFound("user"))?;

        let total = post_repo::count_by_author(&self.pool, author.id).await?;
        let window = self.paginator.page_for(total, page);
        let posts =
            post_repo::list_by_author(&self.pool, author.id, window.limit(), window.offset())
                .await?;

        Ok((author, total, window, posts))
    }

    /// A single post with its author's total post count.
    pub async fn detail(&self, post_id: Uuid) -> Result<(PostWithAuthor, i64)> {
        let post = post_repo::find_detail_by_id(&self.pool, post_id)
            .await?
            .ok_or(AppError::NotFound("post"))?;

        let author_posts_count = post_repo::count_by_author(&self.pool, post.author_id).await?;

        Ok((post, author_posts_count))
    }

    /// The bare post row, for authorship checks before editing.
    pub async fn get_post(&self, post_id: Uuid) -> Result<Option<Post>> {
        Ok(post_repo::find_by_id(&self.pool, post_id).await?)
    }

    /// Create a post authored by `author_id`.
    pub async fn create(
        &self,
        author_id: Uuid,
        text: &str,
        group_id: Option<Uuid>,
        image_key: Option<&str>,
    ) -> Result<Post> {
        self.check_group(group_id).await?;

        Ok(post_repo::create_post(&self.pool, author_id, text, group_id, image_key).await?)
    }

    /// Apply an edit to an existing post. The caller has already verified
    /// authorship; `author_id` and `pub_date` are preserved unconditionally.
    pub async fn update(
        &self,
        post_id: Uuid,
        text: &str,
        group_id: Option<Uuid>,
        image_key: Option<&str>,
    ) -> Result<Post> {
        self.check_group(group_id).await?;

        Ok(post_repo::update_post(&self.pool, post_id, text, group_id, image_key).await?)
    }

    /// Groups available as form choices.
    pub async fn group_choices(&self) -> Result<Vec<Group>> {
        Ok(group_repo::list_all(&self.pool).await?)
    }

    /// A submitted group id must name an existing group, the same way a form
    /// choice field rejects values outside its choices.
    async fn check_group(&self, group_id: Option<Uuid>) -> Result<()> {
        if let Some(id) = group_id {
            if group_repo::find_by_id(&self.pool, id).await?.is_none() {
                let mut errors = ValidationErrors::new();
                let mut error = ValidationError::new("unknown_group");
                error.message = Some("unknown group".into());
                errors.add("group_id", error);
                return Err(errors.into());
            }
        }

        Ok(())
    }
}
