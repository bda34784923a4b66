use std::time::Duration;

const DEFAULT_API_BASE: &str = "https://jonathan-holloway.herokuapp.com";
const DEFAULT_LECTURES_URL: &str = "https://jonathan-holloway-be.onrender.com/lectures";

/// Site-wide settings shared by the data providers and the views.
///
/// The browser bundle has no runtime environment, so endpoint overrides are
/// baked in at compile time.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub projects_url: String,
    pub blogs_url: String,
    pub lectures_url: String,
    pub request_timeout: Duration,
    pub owner_name: String,
    pub contact_email: String,
    pub token_key: String,
    pub success_window: Duration,
    pub max_columns: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let projects_url = option_env!("PORTFOLIO_PROJECTS_URL")
            .map(str::to_string)
            .unwrap_or_else(|| format!("{DEFAULT_API_BASE}/projects"));
        let blogs_url = option_env!("PORTFOLIO_BLOGS_URL")
            .map(str::to_string)
            .unwrap_or_else(|| format!("{DEFAULT_API_BASE}/blogs"));
        let lectures_url = option_env!("PORTFOLIO_LECTURES_URL")
            .unwrap_or(DEFAULT_LECTURES_URL)
            .to_string();
        Self {
            projects_url,
            blogs_url,
            lectures_url,
            request_timeout: Duration::from_secs(10),
            owner_name: "Jonathan Holloway".to_string(),
            contact_email: "jonathanjamelholloway@gmail.com".to_string(),
            token_key: "holloway-portfolio-token".to_string(),
            success_window: Duration::from_secs(3),
            max_columns: 3,
        }
    }
}

impl SiteConfig {
    pub fn project_url(&self, id: u32) -> String {
        format!("{}/{id}", self.projects_url)
    }

    pub fn blog_url(&self, id: u32) -> String {
        format!("{}/{id}", self.blogs_url)
    }

    pub fn category_url(&self, category: &str) -> String {
        format!("{}?category={}", self.projects_url, urlencoding::encode(category))
    }
}
