/// Shown when the supplied password does not match.
pub const WRONG_PASSWORD: &str = "비밀번호가 틀렸습니다.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", WRONG_PASSWORD)]
pub struct AccessDenied;

/// Passes when no password is configured, or when `supplied` matches it.
pub fn check_access(configured: Option<&str>, supplied: Option<&str>) -> Result<(), AccessDenied> {
    match configured.filter(|password| !password.is_empty()) {
        None => Ok(()),
        Some(expected) if supplied == Some(expected) => Ok(()),
        Some(_) => Err(AccessDenied),
    }
}
