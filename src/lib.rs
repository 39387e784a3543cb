//! HomeSphere Client - Main Library
//!
//! Client SDK for the HomeSphere real-estate marketplace: session
//! management, an authenticated HTTP gateway over the backend REST API,
//! optimistic favorites synchronization, and client-local form validation.
//! Screen rendering is deliberately not part of this crate; it consumes
//! the data and session state exposed here and emits user intents back
//! into it.
//!
//! # Module Structure
//!
//! - **`shared`** - Error taxonomy, wire DTOs, and configuration
//! - **`client`** - The remote data gateway: every HTTP call goes through
//!   it, which centralizes auth-header injection, response-shape
//!   normalization, and error normalization
//! - **`session`** - The session manager and its durable two-key store
//! - **`sync`** - Optimistic update helper, per-screen favorites set, and
//!   the cancellation scope for unmounting screens
//! - **`validate`** - Form validation resolved before any network call
//!
//! # Getting started
//!
//! ```rust,no_run
//! use homesphere_client::session::{SessionManager, FileSessionStore};
//! use homesphere_client::shared::{ClientConfig, Credentials};
//!
//! # async fn run() -> Result<(), homesphere_client::shared::ClientError> {
//! let store = FileSessionStore::new()?;
//! let manager = SessionManager::new(ClientConfig::new(), Box::new(store))?;
//! manager.initialize();
//!
//! if !manager.is_authenticated() {
//!     manager
//!         .login(&Credentials {
//!             email: "ada@example.com".into(),
//!             password: "secret1".into(),
//!         })
//!         .await?;
//! }
//!
//! let gateway = manager.gateway();
//! let listings = gateway.get_properties(&Default::default()).await?;
//! # let _ = listings;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod session;
pub mod shared;
pub mod sync;
pub mod validate;

pub use client::{ApiClient, Filter, TokenSource};
pub use session::{SessionManager, SessionState, SessionStore};
pub use shared::{ClientConfig, ClientError};
pub use sync::{apply_optimistic, FavoriteSet, FavoritesView, ScreenScope};
