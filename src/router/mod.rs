//! Static route table with explicit auth-metadata inheritance.
//!
//! DESIGN
//! ======
//! `requires_auth` is declared once on a parent and flows down to children
//! that leave it unset. The inheritance is an explicit nearest-ancestor walk
//! performed during resolution rather than a metadata merge baked into the
//! table, so a resolved route always states its effective requirement.


pub mod guard;

/// Route name of the login destination.
pub const LOGIN_ROUTE: &str = "login";
/// Route name of the default authenticated destination.
pub const OVERVIEW_ROUTE: &str = "overview";

/// One entry in the route tree. Immutable after registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// Path relative to the parent; absolute on top-level entries. `""` marks
    /// the index child of a layout route.
    pub path: &'static str,
    /// View identifier; layout-only routes have none.
    pub name: Option<&'static str>,
    /// Auth requirement; `None` inherits the nearest ancestor's flag.
    pub requires_auth: Option<bool>,
    pub children: Vec<Route>,
}

impl Route {
    fn segments(&self) -> Vec<&'static str> {
        split_segments(self.path)
    }
}

/// A route resolved against a requested path, with inherited metadata applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub name: Option<&'static str>,
    /// Effective requirement after the ancestor walk; absent flags mean `false`.
    pub requires_auth: bool,
}

/// The registered route tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    #[must_use]
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Resolve a requested path to a route, applying `requires_auth`
    /// inheritance. Query strings, fragments, and trailing slashes are
    /// ignored for matching. Returns `None` when nothing in the table
    /// matches (the application's not-found case).
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let segments = split_segments(path);
        resolve_in(&self.routes, &segments, None)
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn resolve_in(routes: &[Route], segments: &[&str], inherited: Option<bool>) -> Option<ResolvedRoute> {
    for route in routes {
        let own = route.segments();
        if segments.len() < own.len() || segments[..own.len()] != own[..] {
            continue;
        }
        let rest = &segments[own.len()..];
        let requires_auth = route.requires_auth.or(inherited);

        // Fully consumed and addressable: named leaves match directly; layout
        // routes defer to an index child first.
        if rest.is_empty() && route.name.is_some() {
            return Some(ResolvedRoute { name: route.name, requires_auth: requires_auth.unwrap_or(false) });
        }
        if let Some(found) = resolve_in(&route.children, rest, requires_auth) {
            return Some(found);
        }
        if rest.is_empty() && route.children.is_empty() {
            return Some(ResolvedRoute { name: route.name, requires_auth: requires_auth.unwrap_or(false) });
        }
    }
    None
}

/// The dashboard's static route table: a public login entry and an
/// authenticated layout whose children inherit the requirement.
#[must_use]
pub fn route_table() -> RouteTable {
    RouteTable::new(vec![
        Route { path: "/login", name: Some(LOGIN_ROUTE), requires_auth: None, children: Vec::new() },
        Route {
            path: "/",
            name: None,
            requires_auth: Some(true),
            children: vec![
                Route { path: "", name: Some(OVERVIEW_ROUTE), requires_auth: None, children: Vec::new() },
                Route { path: "accounts", name: Some("accounts"), requires_auth: None, children: Vec::new() },
                Route { path: "tasks", name: Some("tasks"), requires_auth: None, children: Vec::new() },
                Route { path: "articles", name: Some("articles"), requires_auth: None, children: Vec::new() },
                Route { path: "sessions", name: Some("sessions"), requires_auth: None, children: Vec::new() },
            ],
        },
    ])
}
