//! Client Routes
//!
//! The navigational surface and the guard in front of the dashboard.

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ROOT_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
    Dashboard,
    Root,
    NotFound,
}

impl AppRoute {
    /// Match a location path. Query string, fragment and trailing slash are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => AppRoute::Root,
            LOGIN_PATH => AppRoute::Login,
            REGISTER_PATH => AppRoute::Register,
            DASHBOARD_PATH => AppRoute::Dashboard,
            _ => AppRoute::NotFound,
        }
    }

    /// Canonical path, `None` for the wildcard
    pub fn path(&self) -> Option<&'static str> {
        match self {
            AppRoute::Login => Some(LOGIN_PATH),
            AppRoute::Register => Some(REGISTER_PATH),
            AppRoute::Dashboard => Some(DASHBOARD_PATH),
            AppRoute::Root => Some(ROOT_PATH),
            AppRoute::NotFound => None,
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, AppRoute::Dashboard)
    }
}

/// What to do with a location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(AppRoute),
    Redirect(&'static str),
}

pub fn resolve(route: AppRoute, authenticated: bool) -> Navigation {
    match route {
        AppRoute::Root => Navigation::Redirect(DASHBOARD_PATH),
        route if route.is_protected() => match guard(authenticated) {
            Some(target) => Navigation::Redirect(target),
            None => Navigation::Render(route),
        },
        route => Navigation::Render(route),
    }
}

/// Where a protected view sends an unauthenticated visitor. `None` means render.
pub fn guard(authenticated: bool) -> Option<&'static str> {
    if authenticated {
        None
    } else {
        Some(LOGIN_PATH)
    }
}
