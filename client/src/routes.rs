//! Static route table: symbolic names, paths, and required access levels.
//!
//! DESIGN
//! ======
//! Routes are plain data so the guard can reason about access without knowing
//! anything about the router wiring in `app`. Symbolic names are the stable
//! contract; paths may move without touching guard policy.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;
use std::str::FromStr;

/// Symbolic identifier for every route the application knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    Upload,
    /// Account registration.
    New,
    Receipt,
    Profile,
    Admin,
    AdminDash,
}

/// Access level a session must satisfy before a route's view renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Reachable by anyone.
    Public,
    /// Reachable only while logged out.
    GuestOnly,
    /// Requires a logged-in session.
    Member,
    /// Requires a logged-in session whose user carries the admin flag.
    Admin,
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub name: RouteName,
    pub path: &'static str,
    pub access: Access,
}

pub static ROUTES: [RouteDef; 8] = [
    RouteDef { name: RouteName::Home, path: "/", access: Access::Member },
    RouteDef { name: RouteName::Login, path: "/login", access: Access::Public },
    RouteDef { name: RouteName::Upload, path: "/upload", access: Access::Member },
    RouteDef { name: RouteName::New, path: "/new", access: Access::GuestOnly },
    RouteDef { name: RouteName::Receipt, path: "/receipt", access: Access::Member },
    RouteDef { name: RouteName::Profile, path: "/profile", access: Access::Member },
    RouteDef { name: RouteName::Admin, path: "/admin", access: Access::Admin },
    RouteDef { name: RouteName::AdminDash, path: "/admin/dash", access: Access::Admin },
];

/// Returned when a symbolic name does not match any route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route name: {0}")]
pub struct UnknownRoute(pub String);

impl RouteName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Upload => "upload",
            Self::New => "new",
            Self::Receipt => "receipt",
            Self::Profile => "profile",
            Self::Admin => "admin",
            Self::AdminDash => "admin-dash",
        }
    }

    /// Table row for this route.
    #[must_use]
    pub fn def(self) -> &'static RouteDef {
        // Rows are laid out in variant declaration order.
        &ROUTES[self as usize]
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        self.def().path
    }

    #[must_use]
    pub fn access(self) -> Access {
        self.def().access
    }

    /// Resolve a URL path to its route. A single trailing slash is ignored;
    /// repeated slashes never match.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
            _ => path,
        };
        ROUTES.iter().find(|def| def.path == trimmed).map(|def| def.name)
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ROUTES
            .iter()
            .map(|def| def.name)
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownRoute(s.to_owned()))
    }
}
