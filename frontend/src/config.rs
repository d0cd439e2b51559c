pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // In development Trunk serves the frontend and proxies /dashboard/api/
        // to the backend; in production nginx does the same. Relative URLs
        // work for both, so no per-environment configuration is needed.
        "".to_string()
    }
}
