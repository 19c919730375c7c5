//! Owner of the session state.
//!
//! [`SessionManager`] is the only writer of the current [`SessionSnapshot`].
//! Observers read it through [`SessionManager::subscribe`]. Refresh and
//! logout are serialized: a second call waits for the first to finish, so
//! the most recent call is always the last one applied.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::{watch, Mutex};

use super::state::SessionSnapshot;
use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::SessionUser;
use crate::traits::{AnalyticsEvent, AnalyticsSink, Navigator, LOGIN_SUCCESS_EVENT};

/// Bookkeeping carried from one refresh to the next.
#[derive(Debug)]
struct Cycle {
    /// The previous cycle ended without a user
    was_logged_out: bool,
}

pub struct SessionManager {
    api: ApiClient,
    analytics: Arc<dyn AnalyticsSink>,
    navigator: Arc<dyn Navigator>,
    state: watch::Sender<SessionSnapshot>,
    cycle: Mutex<Cycle>,
}

impl SessionManager {
    /// Start in the loading state with no user.
    pub fn new(api: ApiClient, analytics: Arc<dyn AnalyticsSink>, navigator: Arc<dyn Navigator>) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::default());
        Self {
            api,
            analytics,
            navigator,
            state,
            cycle: Mutex::new(Cycle {
                was_logged_out: true,
            }),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Receive every subsequent change to the session.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.state.borrow().user.clone()
    }

    /// Ask the backend who the current user is and update the session.
    ///
    /// - success: the user is replaced and `unauthorized` cleared. Login
    ///   analytics fire only if the previous cycle ended logged out.
    /// - 401: the user is cleared and `unauthorized` set.
    /// - anything else: logged; user and `unauthorized` stay as they were.
    ///
    /// Loading ends in every case. The error is still returned so callers
    /// can display it.
    pub async fn refresh(&self) -> ApiResult<SessionUser> {
        let mut cycle = self.cycle.lock().await;

        match self.api.me().await {
            Ok(user) => {
                let just_logged_in = cycle.was_logged_out;
                cycle.was_logged_out = false;

                self.state.send_modify(|state| {
                    state.user = Some(user.clone());
                    state.unauthorized = false;
                    state.loading = false;
                });

                if just_logged_in {
                    tracing::info!(email = %user.email, plan = %user.plan, "Session established");
                    self.analytics.emit(AnalyticsEvent::Identify {
                        distinct_id: user.email.clone(),
                        email: user.email.clone(),
                        plan: user.plan.clone(),
                    });
                    self.analytics.emit(AnalyticsEvent::capture(
                        LOGIN_SUCCESS_EVENT,
                        json!({ "plan": user.plan }),
                    ));
                } else {
                    tracing::debug!(email = %user.email, "Session refreshed");
                }

                Ok(user)
            }
            Err(err) if err.is_unauthorized() => {
                cycle.was_logged_out = true;
                self.state.send_modify(|state| {
                    state.user = None;
                    state.unauthorized = true;
                    state.loading = false;
                });
                tracing::info!("Session is not authorized");
                Err(err)
            }
            Err(err) => {
                tracing::warn!(category = %err.category(), "Session refresh failed: {}", err);
                self.state.send_modify(|state| {
                    state.loading = false;
                });
                Err(err)
            }
        }
    }

    /// Sign out remotely if possible, then always clear the local session
    /// and go to the login screen.
    pub async fn logout(&self) {
        let mut cycle = self.cycle.lock().await;

        if let Err(err) = self.api.logout().await {
            tracing::warn!("Sign-out request failed, clearing local session anyway: {}", err);
        }

        cycle.was_logged_out = true;
        self.state.send_modify(|state| {
            state.user = None;
            state.unauthorized = false;
            state.loading = false;
        });
        tracing::info!("Signed out");

        self.analytics.emit(AnalyticsEvent::Reset);
        self.navigator.go_to_login();
    }

    /// Change the current user's primary channel.
    ///
    /// Returns `false` without changing anything when nobody is signed in.
    pub fn set_primary_channel_id(&self, channel_id: Option<i64>) -> bool {
        self.state.send_if_modified(|state| match state.user.as_mut() {
            Some(user) => {
                user.primary_channel_id = channel_id;
                true
            }
            None => false,
        })
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("api", &self.api)
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
