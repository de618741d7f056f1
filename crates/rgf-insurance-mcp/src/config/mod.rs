//! Configuration resolution.

use rgf_insurance::DEFAULT_TARGET_URL;

/// Environment variable overriding the page the advisor reads.
pub const TARGET_URL_ENV: &str = "RGF_TARGET_URL";

/// Resolve the target page URL: explicit flag, then environment, then default.
pub fn resolve_target_url(explicit: Option<&str>) -> String {
    resolve_with_env(explicit, std::env::var(TARGET_URL_ENV).ok())
}

fn resolve_with_env(explicit: Option<&str>, env_url: Option<String>) -> String {
    if let Some(url) = explicit.map(str::trim).filter(|u| !u.is_empty()) {
        return url.to_string();
    }

    if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
        return url.trim().to_string();
    }

    DEFAULT_TARGET_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_wins() {
        let url = resolve_with_env(Some("http://a.test/"), Some("http://b.test/".to_string()));
        assert_eq!(url, "http://a.test/");
    }

    #[test]
    fn test_env_over_default() {
        assert_eq!(resolve_with_env(None, Some("http://b.test/".to_string())), "http://b.test/");
    }

    #[test]
    fn test_blank_values_fall_through() {
        assert_eq!(resolve_with_env(Some(" "), Some(String::new())), DEFAULT_TARGET_URL);
        assert_eq!(resolve_with_env(None, None), "https://www.rgf.com/car-insurance");
    }
}
