//! Navigation port used by the session layer after logout.

pub trait Navigator: Send + Sync {
    /// Send the user to the login screen.
    fn go_to_login(&self);
}
