//! Environment configuration.
//!
//! Everything has a default so the server starts with no configuration at
//! all; `.env` is honored via dotenvy for deployments.

use std::env;

/// Server configuration read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub site: SiteSettings,
}

/// Site identity shown on the quote page
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub site_name: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub blog_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "아도나이x티비넷".to_string(),
            contact_name: "박덕진".to_string(),
            contact_phone: "010-2700-9421".to_string(),
            blog_url: "https://blog.naver.com/no1_tvnet".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);

        let defaults = SiteSettings::default();
        let site = SiteSettings {
            site_name: env::var("SITE_NAME").unwrap_or(defaults.site_name),
            contact_name: env::var("CONTACT_NAME").unwrap_or(defaults.contact_name),
            contact_phone: env::var("CONTACT_PHONE").unwrap_or(defaults.contact_phone),
            blog_url: env::var("BLOG_URL").unwrap_or(defaults.blog_url),
        };

        Self {
            bind_addr: format!("{}:{}", host, port),
            site,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site_settings() {
        let site = SiteSettings::default();
        assert!(!site.site_name.is_empty());
        assert!(site.blog_url.starts_with("https://"));
    }
}
