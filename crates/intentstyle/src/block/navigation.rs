//! Redirect to the first pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current query-string parameters.
pub type Query = BTreeMap<String, String>;

/// A navigation target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub pathname: String,
    #[serde(default)]
    pub query: Query,
}

impl Route {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            query: Query::new(),
        }
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }
}

/// The host's router.
pub trait Router {
    /// Query parameters of the current location.
    fn query(&self) -> Query;

    /// Navigates to `route`.
    fn push(&mut self, route: Route);
}

/// Pathname of a pipeline's page.
pub fn pipeline_path(pipeline: &str) -> String {
    format!("/pipelines/{pipeline}")
}

/// Navigates to the first pipeline in `pipelines`, keeping the current query.
///
/// Returns whether a navigation was issued. With no pipelines nothing
/// happens.
///
/// # Example
///
/// ```rust
/// use intentstyle::block::{redirect_to_first_pipeline, Query, Route, Router};
///
/// #[derive(Default)]
/// struct Recorder(Vec<Route>);
///
/// impl Router for Recorder {
///     fn query(&self) -> Query {
///         Query::from([("tab".to_string(), "logs".to_string())])
///     }
///     fn push(&mut self, route: Route) {
///         self.0.push(route);
///     }
/// }
///
/// let mut router = Recorder::default();
/// assert!(redirect_to_first_pipeline(&["etl", "ml"], &mut router));
/// assert_eq!(router.0[0].pathname, "/pipelines/etl");
/// assert_eq!(router.0[0].query["tab"], "logs");
/// ```
pub fn redirect_to_first_pipeline<P, R>(pipelines: &[P], router: &mut R) -> bool
where
    P: AsRef<str>,
    R: Router + ?Sized,
{
    let Some(first) = pipelines.first() else {
        return false;
    };
    let route = Route::new(pipeline_path(first.as_ref())).with_query(router.query());
    tracing::debug!(pathname = %route.pathname, "redirecting to first pipeline");
    router.push(route);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingRouter {
        query: Query,
        pushed: Vec<Route>,
    }

    impl Router for RecordingRouter {
        fn query(&self) -> Query {
            self.query.clone()
        }

        fn push(&mut self, route: Route) {
            self.pushed.push(route);
        }
    }

    #[test]
    fn empty_list_does_not_navigate() {
        let mut router = RecordingRouter::default();
        let none: [&str; 0] = [];
        assert!(!redirect_to_first_pipeline(&none, &mut router));
        assert!(router.pushed.is_empty());
    }

    #[test]
    fn pushes_first_pipeline_once() {
        let mut router = RecordingRouter::default();
        let pipelines = vec!["first".to_string(), "second".to_string()];
        assert!(redirect_to_first_pipeline(&pipelines, &mut router));
        assert_eq!(router.pushed, vec![Route::new("/pipelines/first")]);
    }

    #[test]
    fn query_is_preserved() {
        let mut router = RecordingRouter {
            query: Query::from([("sideview".to_string(), "tree".to_string())]),
            ..RecordingRouter::default()
        };
        redirect_to_first_pipeline(&["p"], &mut router);
        assert_eq!(router.pushed[0].query.get("sideview").map(String::as_str), Some("tree"));
    }
}
