use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub bind_addr: String,
    /// Base URL prefixed to signed upload URLs handed back to clients.
    pub public_base_url: String,
    /// Directory holding the `public/` and `private/` upload buckets.
    pub upload_dir: String,
    /// Server-side secret the upload-URL signatures are derived from.
    pub upload_signing_secret: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "debug".into());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
        let public_base_url =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());
        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into());
        let upload_signing_secret =
            env::var("UPLOAD_SIGNING_SECRET").expect("UPLOAD_SIGNING_SECRET should be provided");

        Ok(Self {
            database_url,
            rust_log,
            bind_addr,
            public_base_url,
            upload_dir,
            upload_signing_secret,
        })
    }
}
