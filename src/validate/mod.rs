use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

/// A body that failed its shape check. Callers map this to their route's
/// fixed status and message; no field-level detail crosses this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidInput;

#[derive(Debug, Deserialize, Validate)]
pub struct SignupInput {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SigninInput {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBlogInput {
    pub title: String,
    pub content: String,
}

/// The blog id is not part of the body; it arrives via the route path.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBlogInput {
    pub title: String,
    pub content: String,
}

fn parse<T>(body: Value) -> Result<T, InvalidInput>
where
    T: serde::de::DeserializeOwned + Validate,
{
    let input: T = serde_json::from_value(body).map_err(|_| InvalidInput)?;
    input.validate().map_err(|_| InvalidInput)?;
    Ok(input)
}

pub fn signup_input(body: Value) -> Result<SignupInput, InvalidInput> {
    parse(body)
}

pub fn signin_input(body: Value) -> Result<SigninInput, InvalidInput> {
    parse(body)
}

pub fn create_blog_input(body: Value) -> Result<CreateBlogInput, InvalidInput> {
    parse(body)
}

pub fn update_blog_input(body: Value) -> Result<UpdateBlogInput, InvalidInput> {
    parse(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn signup_accepts_optional_name() {
        let input =
            signup_input(json!({ "username": "casey", "password": "hunter22" })).unwrap();
        assert_eq!(input.username, "casey");
        assert_eq!(input.name, None);

        let input = signup_input(
            json!({ "username": "casey", "password": "hunter22", "name": "Casey" }),
        )
        .unwrap();
        assert_eq!(input.name.as_deref(), Some("Casey"));
    }

    #[test]
    fn signup_rejects_missing_or_mistyped_fields() {
        assert!(signup_input(json!({ "username": "casey" })).is_err());
        assert!(signup_input(json!({ "password": "hunter22" })).is_err());
        assert!(signup_input(json!({ "username": 1, "password": "hunter22" })).is_err());
        assert!(signup_input(json!("not an object")).is_err());
    }

    #[test]
    fn signup_rejects_empty_credentials() {
        assert!(signup_input(json!({ "username": "", "password": "hunter22" })).is_err());
        assert!(signup_input(json!({ "username": "casey", "password": "" })).is_err());
    }

    #[test]
    fn signin_requires_both_fields() {
        assert!(signin_input(json!({ "username": "casey", "password": "p" })).is_ok());
        assert!(signin_input(json!({ "username": "casey" })).is_err());
        assert!(signin_input(json!({})).is_err());
    }

    #[test]
    fn create_blog_requires_title_and_content() {
        assert!(create_blog_input(json!({ "title": "t", "content": "c" })).is_ok());
        assert!(create_blog_input(json!({ "title": "t" })).is_err());
        assert!(create_blog_input(json!({ "content": "c" })).is_err());
        assert!(create_blog_input(json!({ "title": 5, "content": "c" })).is_err());
    }

    #[test]
    fn update_blog_matches_create_shape() {
        assert!(update_blog_input(json!({ "title": "t", "content": "c" })).is_ok());
        assert!(update_blog_input(json!({ "title": "t" })).is_err());
    }

    #[test]
    fn extra_fields_are_ignored() {
        assert!(signin_input(
            json!({ "username": "casey", "password": "p", "role": "admin" })
        )
        .is_ok());
    }
}
