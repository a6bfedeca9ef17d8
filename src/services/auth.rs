use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use crate::models::user::{ProfileUpdate, TokenResponse, User};
use crate::validation::forms::{LoginForm, RegisterForm};

impl ApiClient {
    /// Registers a new account.
    ///
    /// Registration does not sign the user in; call [`ApiClient::login`] afterwards.
    ///
    /// # Arguments
    ///
    /// * `form` - The account details.
    ///
    /// # Returns
    ///
    /// A `Result` containing the created `User`.
    #[tracing::instrument(skip(self, form), fields(email = %form.email))]
    pub async fn register(&self, form: &RegisterForm) -> Result<User> {
        tracing::info!("📝 Registering account");
        let user: User = self
            .request("/api/auth/register", RequestOptions::post().json(form)?)
            .await?;
        tracing::info!("✅ Account registered: {}", user.id);
        Ok(user)
    }

    /// Authenticates and stores the returned token before returning.
    ///
    /// Once this resolves, every later request carries the new token; the
    /// caller never has to call [`ApiClient::set_token`] itself.
    ///
    /// # Arguments
    ///
    /// * `email` - The account email.
    /// * `password` - The account password.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `TokenResponse`.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse> {
        tracing::info!("🔐 Login attempt");
        let form = LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: TokenResponse = self
            .request("/api/auth/login", RequestOptions::post().json(&form)?)
            .await?;

        self.set_token(&response.access_token);
        tracing::info!("✅ Logged in");
        Ok(response)
    }

    /// Fetches the profile the current token belongs to.
    pub async fn get_current_user(&self) -> Result<User> {
        self.request("/api/auth/me", RequestOptions::get()).await
    }

    /// Updates the signed-in user's own profile.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        self.request("/api/auth/me", RequestOptions::put().json(update)?)
            .await
    }
}
