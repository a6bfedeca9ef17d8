//! Route gating.
//!
//! The guard is a pure function of the session state and the route's admin
//! requirement. It holds no state of its own.

use crate::models::user::User;
use crate::session::{SessionContext, SessionState};

/// Where unauthenticated visitors are sent.
pub const SIGN_IN_PATH: &str = "/login";
/// Where signed-in users without admin rights are sent.
pub const USER_HOME_PATH: &str = "/dashboard";
/// Where admins land after signing in.
pub const ADMIN_HOME_PATH: &str = "/admin/dashboard";

/// Where a refused visitor is sent instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// Nobody is signed in.
    SignIn,
    /// Signed in, but not an admin.
    UserHome,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::SignIn => SIGN_IN_PATH,
            Redirect::UserHome => USER_HOME_PATH,
        }
    }
}

/// The guard's verdict for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The session is still resolving; show a neutral placeholder.
    Pending,
    /// Render the protected content.
    Granted,
    /// Do not render; navigate elsewhere.
    Redirect(Redirect),
}

/// Decides whether protected content may be shown.
///
/// # Arguments
///
/// * `state` - The current session state.
/// * `require_admin` - Whether the route is admin-only.
pub fn evaluate(state: &SessionState, require_admin: bool) -> Access {
    match state {
        SessionState::Unknown => Access::Pending,
        SessionState::Anonymous => Access::Redirect(Redirect::SignIn),
        SessionState::Authenticated(user) if require_admin && !user.is_admin() => {
            Access::Redirect(Redirect::UserHome)
        }
        SessionState::Authenticated(_) => Access::Granted,
    }
}

/// What a guarded view resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<T> {
    Pending,
    Render(T),
    Redirect(Redirect),
}

/// Gate for a single protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteGuard {
    pub require_admin: bool,
}

impl RouteGuard {
    /// A guard that only needs a signed-in user.
    pub fn authenticated() -> Self {
        Self { require_admin: false }
    }

    /// A guard that needs a signed-in admin.
    pub fn admin() -> Self {
        Self { require_admin: true }
    }

    pub fn check(&self, session: &SessionContext) -> Access {
        evaluate(&session.state(), self.require_admin)
    }

    /// Produces the protected content only when access is granted.
    ///
    /// `content` is not invoked at all otherwise, so a refused visitor never
    /// sees any part of it.
    pub fn render<T, F>(&self, state: &SessionState, content: F) -> Guarded<T>
    where
        F: FnOnce() -> T,
    {
        match evaluate(state, self.require_admin) {
            Access::Pending => Guarded::Pending,
            Access::Granted => Guarded::Render(content()),
            Access::Redirect(to) => Guarded::Redirect(to),
        }
    }
}

/// Where a user goes right after signing in.
pub fn landing_route(user: &User) -> &'static str {
    if user.is_admin() {
        ADMIN_HOME_PATH
    } else {
        USER_HOME_PATH
    }
}

/// The client routes that sit behind the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtectedRoute {
    Dashboard,
    FindParking,
    Booking { lot_id: String },
    MyBookings,
    AdminDashboard,
    AdminUsers,
    AdminParkingLots,
    AdminSlots,
    AdminBookings,
    AdminAnalytics,
}

impl ProtectedRoute {
    /// Maps a path to a protected route. Public and unknown paths give `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');

        let route = match path {
            "/dashboard" => ProtectedRoute::Dashboard,
            "/find-parking" => ProtectedRoute::FindParking,
            "/my-bookings" => ProtectedRoute::MyBookings,
            "/admin/dashboard" => ProtectedRoute::AdminDashboard,
            "/admin/users" => ProtectedRoute::AdminUsers,
            "/admin/parking-lots" => ProtectedRoute::AdminParkingLots,
            "/admin/slots" => ProtectedRoute::AdminSlots,
            "/admin/bookings" => ProtectedRoute::AdminBookings,
            "/admin/analytics" => ProtectedRoute::AdminAnalytics,
            other => {
                let lot_id = other.strip_prefix("/booking/")?;
                if lot_id.is_empty() || lot_id.contains('/') {
                    return None;
                }
                ProtectedRoute::Booking {
                    lot_id: lot_id.to_string(),
                }
            }
        };

        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            ProtectedRoute::Dashboard => USER_HOME_PATH.to_string(),
            ProtectedRoute::FindParking => "/find-parking".to_string(),
            ProtectedRoute::Booking { lot_id } => format!("/booking/{}", lot_id),
            ProtectedRoute::MyBookings => "/my-bookings".to_string(),
            ProtectedRoute::AdminDashboard => ADMIN_HOME_PATH.to_string(),
            ProtectedRoute::AdminUsers => "/admin/users".to_string(),
            ProtectedRoute::AdminParkingLots => "/admin/parking-lots".to_string(),
            ProtectedRoute::AdminSlots => "/admin/slots".to_string(),
            ProtectedRoute::AdminBookings => "/admin/bookings".to_string(),
            ProtectedRoute::AdminAnalytics => "/admin/analytics".to_string(),
        }
    }

    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            ProtectedRoute::AdminDashboard
                | ProtectedRoute::AdminUsers
                | ProtectedRoute::AdminParkingLots
                | ProtectedRoute::AdminSlots
                | ProtectedRoute::AdminBookings
                | ProtectedRoute::AdminAnalytics
        )
    }

    /// The guard protecting this route.
    pub fn guard(&self) -> RouteGuard {
        RouteGuard {
            require_admin: self.requires_admin(),
        }
    }
}
