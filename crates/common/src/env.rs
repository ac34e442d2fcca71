//! Environment/runtime helpers
//!
//! Sanity checks run once at startup before the router is built.

use tracing::warn;

/// Warn when the UI asset directory is missing; the API still serves.
pub async fn ensure_env(frontend_dir: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(frontend_dir).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(anyhow::anyhow!("{frontend_dir} exists but is not a directory")),
        Err(_) => {
            warn!(%frontend_dir, "frontend assets directory not found; UI routes will 404");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ensure_env;

    #[tokio::test]
    async fn missing_frontend_dir_is_not_fatal() {
        assert!(ensure_env("definitely/not/here").await.is_ok());
    }

    #[tokio::test]
    async fn file_in_place_of_dir_is_rejected() {
        assert!(ensure_env("Cargo.toml").await.is_err());
    }
}
