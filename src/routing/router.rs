//! Route table and resolution
//!
//! Holds the statically declared routes and resolves an incoming
//! (method, path) pair to a handler id in declaration order. HEAD
//! resolves like GET; a path declared only under other methods is a
//! method mismatch rather than a miss.

use hyper::Method;

use super::template::RouteTemplate;
use crate::binding::ParamMap;

/// Handler identifiers for the declared routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteId {
    Index,
    People,
    GetRes1,
    GetRes2,
    GetRes3,
    GetRes4,
    GetRes5,
    IntroducePath,
    IntroduceQuery,
    PostRes1,
    PostRes2,
    PostRes3,
    PostRes4,
    PostRes7,
    DtoRes1,
    DtoRes2,
    DtoRes3,
    VoRes1,
    VoRes2,
    VoRes3,
    AxiosRes1,
    AxiosRes2,
    AxiosRes3,
    AxiosRes4,
    AxiosRes5,
    AxiosVoRes1,
    AxiosVoRes2,
    AxiosVoRes3,
    AxiosVoRes4,
    AxiosVoRes5,
}

struct RouteEntry {
    method: Method,
    template: RouteTemplate,
    id: RouteId,
}

/// Outcome of route resolution.
#[derive(Debug)]
pub enum Resolution {
    /// Matched a declared route, with captured path parameters.
    Matched {
        id: RouteId,
        path_params: ParamMap,
    },
    /// The path exists but only under other methods.
    MethodNotAllowed { allowed: Vec<Method> },
    /// No declared template matches the path.
    NotFound,
}

pub struct Router {
    routes: Vec<RouteEntry>,
}

impl Router {
    pub fn new() -> Self {
        let table: &[(Method, &str, RouteId)] = &[
            (Method::GET, "/", RouteId::Index),
            (Method::GET, "/people", RouteId::People),
            (Method::GET, "/get/res1", RouteId::GetRes1),
            (Method::GET, "/get/res2", RouteId::GetRes2),
            (Method::GET, "/get/res3/{name}/{age}", RouteId::GetRes3),
            (Method::GET, "/get/res4/{name}/{age}", RouteId::GetRes4),
            (Method::GET, "/get/res5/{name}", RouteId::GetRes5),
            (Method::GET, "/introduce/{name}", RouteId::IntroducePath),
            (Method::GET, "/introduce", RouteId::IntroduceQuery),
            (Method::POST, "/post/res1", RouteId::PostRes1),
            (Method::POST, "/post/res2", RouteId::PostRes2),
            (Method::POST, "/post/res3", RouteId::PostRes3),
            (Method::POST, "/post/res4", RouteId::PostRes4),
            (Method::POST, "/post/res7", RouteId::PostRes7),
            (Method::GET, "/dto/res1", RouteId::DtoRes1),
            (Method::POST, "/dto/res2", RouteId::DtoRes2),
            (Method::POST, "/dto/res3", RouteId::DtoRes3),
            (Method::GET, "/vo/res1", RouteId::VoRes1),
            (Method::POST, "/vo/res2", RouteId::VoRes2),
            (Method::POST, "/vo/res3", RouteId::VoRes3),
            (Method::GET, "/axios/res1", RouteId::AxiosRes1),
            (Method::GET, "/axios/res2", RouteId::AxiosRes2),
            (Method::POST, "/axios/res3", RouteId::AxiosRes3),
            (Method::POST, "/axios/res4", RouteId::AxiosRes4),
            (Method::POST, "/axios/res5", RouteId::AxiosRes5),
            (Method::GET, "/axios/vo/res1", RouteId::AxiosVoRes1),
            (Method::GET, "/axios/vo/res2", RouteId::AxiosVoRes2),
            (Method::POST, "/axios/vo/res3", RouteId::AxiosVoRes3),
            (Method::POST, "/axios/vo/res4", RouteId::AxiosVoRes4),
            (Method::POST, "/axios/vo/res5", RouteId::AxiosVoRes5),
        ];

        let routes = table
            .iter()
            .map(|(method, pattern, id)| RouteEntry {
                method: method.clone(),
                template: RouteTemplate::parse(pattern),
                id: *id,
            })
            .collect();
        Self { routes }
    }

    /// Find the first declared route matching path and method.
    pub fn resolve(&self, method: &Method, path: &str) -> Resolution {
        let mut allowed: Vec<Method> = Vec::new();

        for entry in &self.routes {
            let Some(path_params) = entry.template.match_path(path) else {
                continue;
            };

            let method_matches = entry.method == *method
                || (*method == Method::HEAD && entry.method == Method::GET);
            if method_matches {
                return Resolution::Matched {
                    id: entry.id,
                    path_params,
                };
            }

            if !allowed.contains(&entry.method) {
                allowed.push(entry.method.clone());
            }
        }

        if allowed.is_empty() {
            Resolution::NotFound
        } else {
            Resolution::MethodNotAllowed { allowed }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_literal_route() {
        let router = Router::new();
        let resolution = router.resolve(&Method::GET, "/get/res1");
        assert!(matches!(
            resolution,
            Resolution::Matched {
                id: RouteId::GetRes1,
                ..
            }
        ));
    }

    #[test]
    fn test_resolve_captures_path_params() {
        let router = Router::new();
        let Resolution::Matched { id, path_params } =
            router.resolve(&Method::GET, "/get/res3/Alice/10")
        else {
            panic!("expected a match");
        };
        assert_eq!(id, RouteId::GetRes3);
        assert_eq!(path_params.get("name"), Some("Alice"));
        assert_eq!(path_params.get("age"), Some("10"));
    }

    #[test]
    fn test_declaration_order_decides() {
        // /introduce/{name} is declared before /introduce, and a
        // one-segment path can only hit the latter anyway.
        let router = Router::new();
        let Resolution::Matched { id, .. } = router.resolve(&Method::GET, "/introduce") else {
            panic!("expected a match");
        };
        assert_eq!(id, RouteId::IntroduceQuery);
    }

    #[test]
    fn test_head_resolves_like_get() {
        let router = Router::new();
        assert!(matches!(
            router.resolve(&Method::HEAD, "/people"),
            Resolution::Matched {
                id: RouteId::People,
                ..
            }
        ));
    }

    #[test]
    fn test_method_mismatch_reports_allowed() {
        let router = Router::new();
        let Resolution::MethodNotAllowed { allowed } =
            router.resolve(&Method::GET, "/post/res1")
        else {
            panic!("expected a method mismatch");
        };
        assert_eq!(allowed, vec![Method::POST]);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let router = Router::new();
        assert!(matches!(
            router.resolve(&Method::GET, "/nope"),
            Resolution::NotFound
        ));
    }
}
