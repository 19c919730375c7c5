//! Session state: who is signed in, and the transitions between states.
//!
//! ```text
//! Loading ──refresh ok──▶ Authenticated ──refresh 401──▶ Unauthorized
//!    │                        ▲   │                          │
//!    │ refresh error          │   └──logout──▶ Unauthenticated
//!    ▼                        │                     │
//! Unauthenticated ────────────┴──────refresh ok─────┘
//! ```

mod manager;
mod state;

pub use manager::SessionManager;
pub use state::{SessionSnapshot, SessionStatus};
