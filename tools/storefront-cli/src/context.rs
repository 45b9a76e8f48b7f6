//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use storefront_app::{RouteHistory, SharedCartRepository, Storefront};
use storefront_cache::{FileStore, SessionId, SessionStorage};
use storefront_commerce::cart::SessionCartRepository;
use storefront_commerce::catalog::AssetUrls;
use storefront_data::FetchClient;

use crate::config::{StorefrontConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

const SESSION_ID_FILE: &str = "session-id";

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: StorefrontConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (StorefrontConfig::load(&path)?, Some(path))
            }
            None => match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (StorefrontConfig::default(), None),
            },
        };

        Ok(Self {
            config: config.with_env_overrides(),
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(StorefrontConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match StorefrontConfig::load(&config_path) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => tracing::warn!(error = %e, "skipping unreadable config"),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory holding the session store.
    pub fn session_dir(&self) -> PathBuf {
        match &self.config.session.dir {
            Some(dir) => self.resolve_path(dir),
            None => dirs_path().join("storefront").join("session"),
        }
    }

    /// Open the session store, creating a session id on first use.
    pub fn session_storage(&self) -> Result<SessionStorage<FileStore>> {
        let dir = self.session_dir();
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open session store: {}", dir.display()))?;
        let id = self.session_id(&dir)?;
        tracing::debug!(session = %id, dir = %dir.display(), "session opened");
        Ok(SessionStorage::new(store, id))
    }

    fn session_id(&self, dir: &Path) -> Result<SessionId> {
        if let Some(id) = &self.config.session.id {
            return SessionId::parse(id.clone()).context("Invalid [session] id in config");
        }

        let id_path = dir.join(SESSION_ID_FILE);
        if let Ok(existing) = std::fs::read_to_string(&id_path) {
            match SessionId::parse(existing.trim()) {
                Ok(id) => return Ok(id),
                Err(e) => tracing::warn!(error = %e, "replacing unreadable session id"),
            }
        }

        let id = SessionId::generate();
        std::fs::write(&id_path, id.as_str())
            .with_context(|| format!("Failed to write session id: {}", id_path.display()))?;
        Ok(id)
    }

    /// Drop every slot of the current session and forget its id, so the
    /// next command starts a fresh session.
    pub fn end_session(&self) -> Result<SessionId> {
        let storage = self.session_storage()?;
        storage
            .clear()
            .with_context(|| format!("Failed to clear session {}", storage.id()))?;

        let id_path = self.session_dir().join(SESSION_ID_FILE);
        match std::fs::remove_file(&id_path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to remove session id: {}", id_path.display()))
            }
        }
        Ok(storage.id().clone())
    }

    /// The persisted session cart.
    pub fn cart_repository(&self) -> Result<SharedCartRepository> {
        Ok(Arc::new(SessionCartRepository::new(self.session_storage()?)))
    }

    /// Build the storefront services over HTTP.
    pub fn storefront(&self) -> Result<Storefront> {
        let client = FetchClient::http()
            .with_base_url(self.config.api.base_url.clone())
            .with_default_header("Accept", "application/json");
        let navigator = Arc::new(RouteHistory::default());

        Ok(Storefront::new(client, self.cart_repository()?, navigator)
            .with_assets(AssetUrls::new(self.config.assets.base_url.clone()))
            .with_slide_interval(self.config.slider.interval()))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}
