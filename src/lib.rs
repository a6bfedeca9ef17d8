//! Client core for the ParkEasy parking platform.
//!
//! [`client::ApiClient`] talks to the backend and owns the bearer token,
//! [`session::SessionContext`] tracks who is signed in, and [`guard`]
//! decides which views that user may see.

pub mod client;
pub mod config;
pub mod error;
pub mod formatting;
pub mod guard;
pub mod session;
pub mod token_store;

pub mod models {
    pub mod admin;
    pub mod analytics;
    pub mod booking;
    pub mod common;
    pub mod parking;
    pub mod payment;
    pub mod review;
    pub mod user;
    pub mod vehicle;
}

pub mod services {
    pub mod admin;
    pub mod analytics;
    pub mod auth;
    pub mod bookings;
    pub mod parking;
    pub mod payments;
    pub mod reviews;
    pub mod vehicles;
}

pub mod validation {
    pub mod forms;
}

pub use client::{ApiClient, RequestOptions};
pub use config::Config;
pub use error::{Error, Result};
pub use guard::{Access, ProtectedRoute, Redirect, RouteGuard};
pub use session::{SessionContext, SessionState};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_STORAGE_KEY};
