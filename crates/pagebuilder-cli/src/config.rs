use std::path::Path;

use pagebuilder_blocks::Principal;

/// Loads `.env` from the crate directory, then from the working directory.
pub fn init() {
    let _ = dotenvy::from_path(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/.env")));
    dotenvy::dotenv().ok();
}

/// `--user` wins over `PAGEBUILDER_USER`; blank names count as absent.
pub fn principal(user: Option<String>) -> Option<Principal> {
    principal_from(user, std::env::var("PAGEBUILDER_USER").ok())
}

fn principal_from(user: Option<String>, env_user: Option<String>) -> Option<Principal> {
    user.into_iter()
        .chain(env_user)
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .map(Principal::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_environment() {
        assert_eq!(
            principal_from(Some("alice".into()), Some("bob".into())),
            Some(Principal::new("alice"))
        );
        assert_eq!(
            principal_from(Some("  ".into()), Some("bob".into())),
            Some(Principal::new("bob"))
        );
        assert_eq!(principal_from(None, Some("".into())), None);
        assert_eq!(principal_from(None, None), None);
    }
}
