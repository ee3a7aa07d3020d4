//! Client-side route paths. The create and update views live outside this app;
//! only their links are produced here.

pub const USERS: &str = "/";
pub const CREATE_USER: &str = "/create";

pub fn update_user(id: &str) -> String {
    format!("/update/{id}")
}

#[cfg(test)]
mod tests {
    use super::update_user;

    #[test]
    fn update_path_embeds_id() {
        assert_eq!(update_user("665f1c2e"), "/update/665f1c2e");
    }
}
