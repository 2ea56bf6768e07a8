//! Client-side session: persisted token + profile, change signaling, and the
//! service that ties them together.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages write the session after a successful login/registration; route
//! guards and the header re-read it whenever the `AuthChannel` fires. The
//! persisted store is the only source of truth for "is a session active".

pub mod channel;
pub mod cross_tab;
pub mod identity;
pub mod model;
pub mod service;
pub mod storage;
pub mod store;

pub use channel::{AuthChannel, Subscription};
pub use model::{Profile, ProfileMetadata, Role, Session};
pub use service::SessionService;
pub use storage::{BrowserStorage, MemoryStorage, SessionStorage, StorageError};
pub use store::SessionStore;
