//! Navigator that opens the login page in the user's browser.

use crate::traits::Navigator;

#[derive(Debug, Clone, Default)]
pub struct BrowserNavigator {
    login_url: Option<String>,
}

impl BrowserNavigator {
    pub fn new(login_url: Option<String>) -> Self {
        Self { login_url }
    }

    pub fn login_url(&self) -> Option<&str> {
        self.login_url.as_deref()
    }
}

impl Navigator for BrowserNavigator {
    fn go_to_login(&self) {
        let Some(url) = &self.login_url else {
            tracing::info!("No login URL configured; skipping redirect");
            return;
        };
        tracing::info!("Opening login page: {}", url);
        if let Err(e) = webbrowser::open(url) {
            tracing::warn!("Failed to open browser for {}: {}", url, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_login_url_does_nothing() {
        let navigator = BrowserNavigator::new(None);
        assert!(navigator.login_url().is_none());
        navigator.go_to_login();
    }
}
