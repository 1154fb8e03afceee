/// Business logic layer between HTTP handlers and the repositories.
pub mod comments;
pub mod posts;

pub use comments::CommentService;
pub use posts::PostService;
