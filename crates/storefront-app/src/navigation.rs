//! Routes between screens.

use std::fmt;

use parking_lot::Mutex;

/// A screen the shopper can be on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Home,
    Cart,
    ProductDetail { slug: String },
}

impl Route {
    /// The path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Home => "/".to_string(),
            Route::Cart => "/cart".to_string(),
            Route::ProductDetail { slug } => format!("/product-detail/{slug}"),
        }
    }

    /// Parse a path produced by [`Route::path`].
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        match path {
            "" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/cart" => Some(Route::Cart),
            _ => {
                let slug = path.strip_prefix("/product-detail/")?;
                (!slug.is_empty() && !slug.contains('/')).then(|| Route::ProductDetail {
                    slug: slug.to_string(),
                })
            }
        }
    }

    pub fn product(slug: impl Into<String>) -> Self {
        Route::ProductDetail { slug: slug.into() }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Moves the shopper between screens.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);

    fn current(&self) -> Route;
}

/// In-memory navigation stack.
#[derive(Debug)]
pub struct RouteHistory {
    stack: Mutex<Vec<Route>>,
}

impl Default for RouteHistory {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl RouteHistory {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: Mutex::new(vec![initial]),
        }
    }

    /// Pop the current route. The first route is never popped.
    pub fn back(&self) -> bool {
        let mut stack = self.stack.lock();
        if stack.len() > 1 {
            stack.pop();
            true
        } else {
            false
        }
    }

    /// Every route visited, oldest first.
    pub fn entries(&self) -> Vec<Route> {
        self.stack.lock().clone()
    }
}

impl Navigator for RouteHistory {
    fn navigate(&self, route: Route) {
        tracing::debug!(%route, "navigate");
        self.stack.lock().push(route);
    }

    fn current(&self) -> Route {
        self.stack.lock().last().cloned().unwrap_or(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_parse_back() {
        for route in [
            Route::Login,
            Route::Register,
            Route::Home,
            Route::Cart,
            Route::product("ps5-slim"),
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Route::parse("/admin"), None);
        assert_eq!(Route::parse("/product-detail/"), None);
        assert_eq!(Route::parse("/product-detail/a/b"), None);
    }

    #[test]
    fn test_history() {
        let history = RouteHistory::default();
        history.navigate(Route::product("ps5"));
        history.navigate(Route::Cart);
        assert_eq!(history.current(), Route::Cart);

        assert!(history.back());
        assert!(history.back());
        assert!(!history.back());
        assert_eq!(history.current(), Route::Home);
    }
}
