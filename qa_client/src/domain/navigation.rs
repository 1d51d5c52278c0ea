use std::collections::BTreeMap;

// Pages reachable through the navigation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Homepage,
    UserA,
    UserB,
    Results,
    ViewResults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loading {
    Eager,
    // Built on first navigation only, then reused.
    Deferred,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub name: &'static str,
    // `{name}` segments bind exactly one non-empty path segment.
    pub pattern: &'static str,
    pub page: Page,
    // When set, bound parameters are handed to the page as inputs.
    pub props: bool,
    pub loading: Loading,
}

pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        name: "Homepage",
        pattern: "/",
        page: Page::Homepage,
        props: false,
        loading: Loading::Eager,
    },
    RouteDef {
        name: "UserA",
        pattern: "/user-a",
        page: Page::UserA,
        props: false,
        loading: Loading::Eager,
    },
    RouteDef {
        name: "UserB",
        pattern: "/user-b/{token}",
        page: Page::UserB,
        props: true,
        loading: Loading::Eager,
    },
    RouteDef {
        name: "Results",
        pattern: "/results/{token}",
        page: Page::Results,
        props: true,
        loading: Loading::Eager,
    },
    RouteDef {
        name: "ViewResults",
        pattern: "/view-results",
        page: Page::ViewResults,
        props: false,
        loading: Loading::Deferred,
    },
];

pub type RouteParams = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute {
    pub route: &'static RouteDef,
    pub path: String,
    pub params: RouteParams,
}

impl MatchedRoute {
    pub fn page(&self) -> Page {
        self.route.page
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    // Parameters handed to the page as inputs. Routes without `props` keep them internal.
    pub fn props(&self) -> RouteParams {
        if self.route.props {
            self.params.clone()
        } else {
            RouteParams::new()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(MatchedRoute),
    // Unmatched paths land on a not-found page; there are no redirects.
    NotFound { path: String },
}

impl Resolution {
    pub fn page(&self) -> Option<Page> {
        match self {
            Resolution::Matched(matched) => Some(matched.page()),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn params(&self) -> Option<&RouteParams> {
        match self {
            Resolution::Matched(matched) => Some(&matched.params),
            Resolution::NotFound { .. } => None,
        }
    }
}

// Resolve a location against the table. Query strings and fragments are ignored, as is a
// single trailing slash. Literal segments match case-insensitively; parameter values are
// taken verbatim without percent-decoding.
pub fn resolve(location: &str) -> Resolution {
    let path = normalize(location);
    if path.starts_with('/') {
        for route in ROUTES {
            if let Some(params) = match_pattern(route.pattern, path) {
                return Resolution::Matched(MatchedRoute {
                    route,
                    path: path.to_string(),
                    params,
                });
            }
        }
    }

    Resolution::NotFound {
        path: path.to_string(),
    }
}

pub fn route_for(page: Page) -> &'static RouteDef {
    // Every page has exactly one table entry.
    ROUTES
        .iter()
        .find(|route| route.page == page)
        .unwrap_or(&ROUTES[0])
}

// Build the path for a page from its parameters. None when a required parameter is missing
// or empty.
pub fn link(page: Page, params: &[(&str, &str)]) -> Option<String> {
    let route = route_for(page);
    if route.pattern == "/" {
        return Some("/".to_string());
    }

    let mut path = String::new();
    for segment in segments(route.pattern) {
        path.push('/');
        match param_name(segment) {
            Some(name) => {
                let value = params
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| *value)
                    .filter(|value| !value.is_empty())?;
                path.push_str(value);
            }
            None => path.push_str(segment),
        }
    }
    Some(path)
}

fn normalize(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.trim_start_matches('/').split('/')
}

fn param_name(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

fn match_pattern(pattern: &'static str, path: &str) -> Option<RouteParams> {
    let mut params = RouteParams::new();
    let mut expected = segments(pattern);
    let mut actual = segments(path);

    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return Some(params),
            (Some(want), Some(got)) => match param_name(want) {
                Some(name) if !got.is_empty() => {
                    params.insert(name, got.to_string());
                }
                Some(_) => return None,
                None if want.eq_ignore_ascii_case(got) => {}
                None => return None,
            },
            _ => return None,
        }
    }
}
