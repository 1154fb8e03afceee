use crate::models::{Post, PostWithAuthor};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Create a new post. `pub_date` is assigned by the database at insert time.
pub async fn create_post(
    pool: &PgPool,
    author_id: Uuid,
    text: &str,
    group_id: Option<Uuid>,
    image_key: Option<&str>,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (text, author_id, group_id, image_key)
        VALUES ($1, $2, $3, $4)
        RETURNING id, text, pub_date, author_id, group_id, image_key
        "#,
    )
    .bind(text)
    .bind(author_id)
    .bind(group_id)
    .bind(image_key)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a post by id.
pub async fn find_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, text, pub_date, author_id, group_id, image_key
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Find a post by id, joined with its author and optional group.
pub async fn find_detail_by_id(
    pool: &PgPool,
    post_id: Uuid,
) -> Result<Option<PostWithAuthor>, sqlx::Error> {
    let post = sqlx::query_as::<_, PostWithAuthor>(
        r#"
        SELECT p.id, p.text, p.pub_date, p.image_key,
               p.author_id, u.username AS author_username,
               p.group_id, g.title AS group_title, g.slug AS group_slug
        FROM posts p
        JOIN users u ON u.id = p.author_id
        LEFT JOIN groups g ON g.id = p.group_id
        WHERE p.id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// List all posts, newest first.
pub async fn list_all(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
    let posts = sqlx::query_as::<_, PostWithAuthor>(
        r#"
        SELECT p.id, p.text, p.pub_date, p.image_key,
               p.author_id, u.username AS author_username,
               p.group_id, g.title AS group_title, g.slug AS group_slug
        FROM posts p
        JOIN users u ON u.id = p.author_id
        LEFT JOIN groups g ON g.id = p.group_id
        ORDER BY p.pub_date DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// List a group's posts, newest first.
pub async fn list_by_group(
    pool: &PgPool,
    group_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
    let posts = sqlx::query_as::<_, PostWithAuthor>(
        r#"
        SELECT p.id, p.text, p.pub_date, p.image_key,
               p.author_id, u.username AS author_username,
               p.group_id, g.title AS group_title, g.slug AS group_slug
        FROM posts p
        JOIN users u ON u.id = p.author_id
        LEFT JOIN groups g ON g.id = p.group_id
        WHERE p.group_id = $1
        ORDER BY p.pub_date DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(group_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// List an author's posts, newest first.
pub async fn list_by_author(
    pool: &PgPool,
    author_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
    let posts = sqlx::query_as::<_, PostWithAuthor>(
        r#"
        SELECT p.id, p.text, p.pub_date, p.image_key,
               p.author_id, u.username AS author_username,
               p.group_id, g.title AS group_title, g.slug AS group_slug
        FROM posts p
        JOIN users u ON u.id = p.author_id
        LEFT JOIN groups g ON g.id = p.group_id
        WHERE p.author_id = $1
        ORDER BY p.pub_date DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(author_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Count all posts.
pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM posts")
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}

/// Count a group's posts.
pub async fn count_by_group(pool: &PgPool, group_id: Uuid) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM posts WHERE group_id = $1")
        .bind(group_id)
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}

/// Count an author's posts.
pub async fn count_by_author(pool: &PgPool, author_id: Uuid) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM posts WHERE author_id = $1")
        .bind(author_id)
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}

/// Update a post's editable fields. `author_id` and `pub_date` are never
/// touched; a NULL `image_key` argument keeps the stored attachment.
pub async fn update_post(
    pool: &PgPool,
    post_id: Uuid,
    text: &str,
    group_id: Option<Uuid>,
    image_key: Option<&str>,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET text = $1, group_id = $2, image_key = COALESCE($3, image_key)
        WHERE id = $4
        RETURNING id, text, pub_date, author_id, group_id, image_key
        "#,
    )
    .bind(text)
    .bind(group_id)
    .bind(image_key)
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(post)
}
