use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use crate::client::ApiClient;
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::validation::forms::RegisterForm;

tokio::task_local! {
    static CURRENT_SESSION: Arc<SessionContext>;
}

/// Who, if anyone, is signed in.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Still working out whether a persisted token is valid.
    Unknown,
    /// Nobody is signed in.
    Anonymous,
    /// A user is signed in and their profile is loaded.
    Authenticated(User),
}

impl SessionState {
    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True only until the initial resolution finishes.
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Unknown)
    }

    /// Whether the signed-in user is an admin. False when nobody is signed in.
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(User::is_admin)
    }
}

/// Process-wide authentication state.
///
/// This is the only writer of the session: it decides when the token is
/// dropped and holds the profile of the signed-in user in memory. Every
/// transition is published to subscribers.
///
/// The profile never outlives the token. When the client loses its token
/// (the backend answered 401), the session falls back to `Anonymous` on the
/// next read, and subscribers of a context made with
/// [`SessionContext::start`] are told right away.
pub struct SessionContext {
    api: Arc<ApiClient>,
    state: watch::Sender<SessionState>,
}

impl SessionContext {
    /// Creates a context in the `Unknown` state. Call [`SessionContext::initialize`] next.
    pub fn new(api: Arc<ApiClient>) -> Self {
        let (state, _) = watch::channel(SessionState::Unknown);
        Self { api, state }
    }

    /// Creates a context and resolves the persisted token, if any.
    pub async fn start(api: Arc<ApiClient>) -> Arc<Self> {
        let session = Arc::new(Self::new(api));
        session.follow_token();
        session.initialize().await;
        session
    }

    /// Watches the client's token and drops the profile when it goes away.
    fn follow_token(self: &Arc<Self>) {
        let mut present = self.api.watch_token();
        let session = Arc::downgrade(self);

        tokio::spawn(async move {
            while present.changed().await.is_ok() {
                let Some(session) = session.upgrade() else {
                    break;
                };
                session.sync_with_token();
            }
        });
    }

    /// Moves an authenticated session to `Anonymous` if its token is gone.
    fn sync_with_token(&self) {
        if self.api.has_token() {
            return;
        }

        let dropped = self.state.send_if_modified(|state| {
            if matches!(state, SessionState::Authenticated(_)) {
                *state = SessionState::Anonymous;
                true
            } else {
                false
            }
        });

        if dropped {
            tracing::warn!("🔒 Token was revoked, session is now anonymous");
        }
    }

    /// Resolves the initial state.
    ///
    /// Without a persisted token this settles on `Anonymous` without touching
    /// the network. With one, the profile is fetched; any failure drops the
    /// token and settles on `Anonymous`. Never fails.
    pub async fn initialize(&self) {
        if !self.api.has_token() {
            tracing::debug!("No persisted token, starting anonymous");
            self.transition(SessionState::Anonymous);
            return;
        }

        tracing::debug!("🔑 Persisted token found, loading profile");
        if let Err(e) = self.load_profile().await {
            tracing::warn!("⚠️ Discarding stored session: {}", e);
        }
    }

    /// Fetches the profile for the current token.
    ///
    /// On failure the token is treated as stale: it is removed and the
    /// session becomes `Anonymous` before the error is returned.
    async fn load_profile(&self) -> Result<User> {
        match self.api.get_current_user().await {
            Ok(user) => {
                self.transition(SessionState::Authenticated(user.clone()));
                Ok(user)
            }
            Err(e) => {
                self.transition(SessionState::Anonymous);
                self.api.clear_token();
                Err(e)
            }
        }
    }

    /// Registers an account, then signs into it.
    ///
    /// If registration succeeds but signing in fails, the account exists on
    /// the backend while this session stays signed out.
    ///
    /// # Arguments
    ///
    /// * `email` - The account email.
    /// * `password` - The account password.
    /// * `full_name` - The name shown on bookings and receipts.
    ///
    /// # Returns
    ///
    /// The signed-in `User`.
    #[tracing::instrument(skip(self, password, full_name))]
    pub async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> Result<User> {
        let form = RegisterForm {
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
            phone: None,
        };

        self.api.register(&form).await?;
        self.sign_in(email, password).await
    }

    /// Signs in and loads the profile.
    ///
    /// # Returns
    ///
    /// The signed-in `User`.
    #[tracing::instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        if let Err(e) = self.api.login(email, password).await {
            // a rejected login may have expired the token it carried
            self.sync_with_token();
            return Err(e);
        }
        self.load_profile().await
    }

    /// Drops the token and the profile. Purely local, cannot fail.
    pub fn sign_out(&self) {
        self.transition(SessionState::Anonymous);
        self.api.logout();
    }

    fn transition(&self, next: SessionState) {
        match &next {
            SessionState::Authenticated(user) => {
                tracing::info!("✅ Session authenticated: {} ({})", user.id, user.role.as_str())
            }
            SessionState::Anonymous => tracing::info!("Session anonymous"),
            SessionState::Unknown => {}
        }
        self.state.send_replace(next);
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.sync_with_token();
        self.state.borrow().clone()
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<User> {
        self.sync_with_token();
        self.state.borrow().user().cloned()
    }

    /// True only while the initial resolution is in progress.
    pub fn loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Whether the signed-in user is an admin.
    pub fn is_admin(&self) -> bool {
        self.sync_with_token();
        self.state.borrow().is_admin()
    }

    /// Subscribes to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// The client this session drives.
    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    /// Runs `fut` with this session installed as the current one.
    pub async fn scope<F: Future>(self: Arc<Self>, fut: F) -> F::Output {
        CURRENT_SESSION.scope(self, fut).await
    }
}

/// The session installed by the enclosing [`SessionContext::scope`].
///
/// Calling this outside any scope is a programming error and is reported as
/// [`Error::OutsideSessionScope`] rather than falling back to a default.
pub fn current() -> Result<Arc<SessionContext>> {
    CURRENT_SESSION
        .try_with(Arc::clone)
        .map_err(|_| Error::OutsideSessionScope)
}
