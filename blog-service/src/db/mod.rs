/// Data-access layer: repository functions returning plain records.
///
/// Each function issues one explicit query against the pool; related rows
/// are joined up front in the query, never loaded lazily.
pub mod comment_repo;
pub mod group_repo;
pub mod post_repo;
pub mod user_repo;
