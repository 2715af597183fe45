//! Route guard: session state decides which view a navigation lands on.

use crate::session::SessionState;

/// Navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The root path; always redirects based on session state.
    Root,
    Login,
    Register,
    Dashboard,
}

/// Resolve a requested route to the permitted destination.
///
/// Pure function, evaluated synchronously on every navigation: logged-out
/// sessions may only reach the login and registration views; logged-in
/// sessions may only reach the dashboard.
pub fn resolve(session: &SessionState, requested: Route) -> Route {
    match session {
        SessionState::LoggedOut => match requested {
            Route::Login => Route::Login,
            Route::Register => Route::Register,
            Route::Root | Route::Dashboard => Route::Login,
        },
        SessionState::LoggedIn(_) => match requested {
            Route::Dashboard => Route::Dashboard,
            Route::Root | Route::Login | Route::Register => Route::Dashboard,
        },
    }
}
