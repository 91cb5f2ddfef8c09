use std::{collections::HashMap, fs};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3333";

/// Resolve the resource API base URL: explicit flag, then the
/// `PLATE_SERVER_URL` environment variable, then `dashboard.toml` in the
/// working directory, then the development default.
pub fn resolve_server_url(flag: Option<String>) -> String {
    if let Some(url) = flag {
        return normalize(&url);
    }

    if let Ok(url) = std::env::var("PLATE_SERVER_URL") {
        return normalize(&url);
    }

    if let Ok(raw) = fs::read_to_string("dashboard.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(url) = file_cfg.get("server_url") {
                return normalize(url);
            }
        }
    }

    DEFAULT_SERVER_URL.to_string()
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_and_is_normalized() {
        let url = resolve_server_url(Some("  http://menu.example:3333/  ".to_string()));
        assert_eq!(url, "http://menu.example:3333");
    }

    #[test]
    fn file_entries_are_read_from_toml_tables() {
        let file_cfg: HashMap<String, String> =
            toml::from_str("server_url = \"http://menu.example:4000\"").expect("parse");
        assert_eq!(
            file_cfg.get("server_url").map(String::as_str),
            Some("http://menu.example:4000")
        );
    }
}
