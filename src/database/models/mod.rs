pub mod blog;
pub mod user;

pub use blog::Blog;
pub use user::User;
