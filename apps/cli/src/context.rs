use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, Context};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use auth_cell::{resolve, RouteDecision, SessionStore};
use shared_api::ApiClient;
use shared_config::ClientConfig;
use shared_i18n::{LanguageStore, Translator};
use shared_utils::storage::{FileStorage, KeyValueStorage};

/// Everything a command needs: configuration, persisted client state and an
/// API client bound to the process-wide cancellation token.
pub struct AppContext {
    pub config: ClientConfig,
    pub sessions: SessionStore,
    pub languages: LanguageStore,
    pub cancel: CancellationToken,
    api: ApiClient,
}

impl AppContext {
    pub fn new(config: ClientConfig, cancel: CancellationToken) -> anyhow::Result<Self> {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(
            FileStorage::new(config.storage_dir.clone())
                .with_context(|| format!("cannot use storage at {}", config.storage_dir.display()))?,
        );

        let api = ApiClient::new(&config).scoped(cancel.clone());

        Ok(Self {
            sessions: SessionStore::restore(storage.clone()),
            languages: LanguageStore::load(storage),
            api,
            cancel,
            config,
        })
    }

    pub fn api(&self) -> ApiClient {
        self.api.clone()
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.languages.language())
    }

    pub fn token(&self) -> anyhow::Result<String> {
        Ok(self.sessions.require_token()?)
    }

    /// Gate a command on the route it stands for. Returns the route params.
    pub fn enter(&self, path: &str) -> anyhow::Result<HashMap<String, String>> {
        match resolve(&self.sessions.current(), path) {
            RouteDecision::Render { view, params } => {
                debug!("Entering {:?} via {}", view, path);
                Ok(params)
            }
            RouteDecision::Redirect("/login") => bail!("{} requires signing in (booking login)", path),
            RouteDecision::Redirect(to) => bail!("{} is not available to this account (redirected to {})", path, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_i18n::Language;
    use shared_utils::test_utils::{TestConfig, TestUser};

    fn context_in(dir: &tempfile::TempDir) -> AppContext {
        let mut config = TestConfig::default().to_client_config();
        config.storage_dir = dir.path().to_path_buf();
        AppContext::new(config, CancellationToken::new()).unwrap()
    }

    #[test]
    fn test_guest_is_sent_to_login() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(&dir);

        assert!(ctx.enter("/").is_ok());
        assert!(ctx.enter("/login").is_ok());

        let err = ctx.enter("/doctors").unwrap_err();
        assert!(err.to_string().contains("requires signing in"));
        assert!(ctx.token().is_err());
    }

    #[test]
    fn test_role_gates_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        let admin = TestUser::admin("admin@example.com");

        {
            let ctx = context_in(&dir);
            ctx.sessions.login(admin.to_user(), admin.token()).unwrap();
            ctx.languages.change_language(Language::En).unwrap();
        }

        let ctx = context_in(&dir);
        assert_eq!(ctx.token().unwrap(), admin.token());
        assert_eq!(ctx.translator().language(), Language::En);

        assert!(ctx.enter("/admin").is_ok());
        assert!(ctx.enter("/login").is_err());
        let err = ctx.enter("/doctor/schedule").unwrap_err();
        assert!(err.to_string().contains("not available"));
    }

    #[test]
    fn test_route_params_are_returned() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(&dir);
        let user = TestUser::patient("patient@example.com");
        ctx.sessions.login(user.to_user(), user.token()).unwrap();

        let params = ctx.enter("/doctors/abc").unwrap();
        assert_eq!(params.get("doctorId").map(String::as_str), Some("abc"));
    }
}
