/// HTTP handlers for the blog endpoints.
///
/// - Posts: paginated index, detail, create and edit
/// - Groups: paginated listing of a group's posts
/// - Profiles: author info plus their paginated posts
/// - Comments: replies attached to a post
/// - Health: liveness and database reachability
pub mod comments;
pub mod groups;
pub mod health;
pub mod posts;
pub mod profiles;

pub use comments::add_comment;
pub use groups::group_posts;
pub use health::{health_summary, liveness_check};
pub use posts::{create_post, edit_post_form, index, new_post_form, post_detail, update_post};
pub use profiles::profile;
