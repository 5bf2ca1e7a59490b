// =====================================================================================
// ROLE-GATED ROUTING
// =====================================================================================

use std::collections::HashMap;

use shared_models::auth::{Role, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Only for visitors without a session (login, register).
    GuestOnly,
    Authenticated,
    Roles(&'static [Role]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Login,
    Register,
    DoctorsCatalog,
    DoctorDetails,
    MyAppointments,
    Profile,
    DoctorSchedule,
    DoctorAppointments,
    AssistantDashboard,
    AssistantDoctorAppointments,
    AdminDashboard,
    NotFound,
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub pattern: &'static str,
    pub access: Access,
    pub view: View,
}

pub const ROUTES: &[Route] = &[
    Route { pattern: "/", access: Access::Public, view: View::Home },
    Route { pattern: "/login", access: Access::GuestOnly, view: View::Login },
    Route { pattern: "/register", access: Access::GuestOnly, view: View::Register },
    Route { pattern: "/doctors", access: Access::Authenticated, view: View::DoctorsCatalog },
    Route { pattern: "/doctors/:doctorId", access: Access::Authenticated, view: View::DoctorDetails },
    Route { pattern: "/appointments", access: Access::Authenticated, view: View::MyAppointments },
    Route { pattern: "/profile", access: Access::Authenticated, view: View::Profile },
    Route { pattern: "/doctor/schedule", access: Access::Roles(&[Role::Doctor]), view: View::DoctorSchedule },
    Route { pattern: "/doctor/appointments", access: Access::Roles(&[Role::Doctor]), view: View::DoctorAppointments },
    Route { pattern: "/assistant", access: Access::Roles(&[Role::Assistant]), view: View::AssistantDashboard },
    Route {
        pattern: "/assistant/doctor/:doctorId",
        access: Access::Roles(&[Role::Assistant]),
        view: View::AssistantDoctorAppointments,
    },
    Route { pattern: "/admin", access: Access::Roles(&[Role::Admin]), view: View::AdminDashboard },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Render {
        view: View,
        params: HashMap<String, String>,
    },
    Redirect(&'static str),
}

impl RouteDecision {
    pub fn view(&self) -> Option<View> {
        match self {
            RouteDecision::Render { view, .. } => Some(*view),
            RouteDecision::Redirect(_) => None,
        }
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

fn match_pattern(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let pattern_segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (expected, actual) in pattern_segments.iter().zip(path_segments.iter()) {
        if let Some(name) = expected.strip_prefix(':') {
            params.insert(name.to_string(), actual.to_string());
        } else if expected != actual {
            return None;
        }
    }

    Some(params)
}

/// Find the route for `path` along with its captured parameters.
pub fn match_route(path: &str) -> Option<(&'static Route, HashMap<String, String>)> {
    let path = normalize(path);
    ROUTES
        .iter()
        .find_map(|route| match_pattern(route.pattern, path).map(|params| (route, params)))
}

/// Decide what to show for `path` given the current session.
pub fn resolve(session: &Session, path: &str) -> RouteDecision {
    let Some((route, params)) = match_route(path) else {
        return RouteDecision::Render {
            view: View::NotFound,
            params: HashMap::new(),
        };
    };

    let signed_in = session.is_authenticated && session.user.is_some();

    match route.access {
        Access::Public => {}
        Access::GuestOnly => {
            if session.is_authenticated {
                return RouteDecision::Redirect("/");
            }
        }
        Access::Authenticated => {
            if !session.is_authenticated {
                return RouteDecision::Redirect("/login");
            }
        }
        Access::Roles(allowed) => {
            if !signed_in {
                return RouteDecision::Redirect("/login");
            }
            if !session.role().is_some_and(|role| allowed.contains(&role)) {
                return RouteDecision::Redirect("/");
            }
        }
    }

    RouteDecision::Render {
        view: route.view,
        params,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label_key: &'static str,
    pub path: &'static str,
}

/// Header links for the current session.
pub fn navigation(session: &Session) -> Vec<NavLink> {
    let mut links = vec![NavLink { label_key: "nav.doctors", path: "/doctors" }];

    if !session.is_authenticated {
        links.push(NavLink { label_key: "nav.login", path: "/login" });
        links.push(NavLink { label_key: "nav.register", path: "/register" });
        return links;
    }

    links.push(NavLink { label_key: "nav.my_appointments", path: "/appointments" });

    match session.role() {
        Some(Role::Doctor) => {
            links.push(NavLink { label_key: "nav.schedule", path: "/doctor/schedule" });
            links.push(NavLink { label_key: "nav.doctor_appointments", path: "/doctor/appointments" });
        }
        Some(Role::Assistant) => {
            links.push(NavLink { label_key: "nav.assistant", path: "/assistant" });
        }
        Some(Role::Admin) => {
            links.push(NavLink { label_key: "nav.admin", path: "/admin" });
        }
        Some(Role::User) | None => {}
    }

    links.push(NavLink { label_key: "nav.profile", path: "/profile" });
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_utils::test_utils::TestUser;

    fn session_for(user: TestUser) -> Session {
        let token = user.token();
        Session::logged_in(user.to_user(), token)
    }

    #[test]
    fn test_public_routes_render_for_everyone() {
        let guest = Session::logged_out();
        assert_eq!(resolve(&guest, "/").view(), Some(View::Home));
        assert_eq!(resolve(&guest, "/login").view(), Some(View::Login));
        assert_eq!(resolve(&guest, "/nowhere").view(), Some(View::NotFound));
    }

    #[test]
    fn test_guest_is_sent_to_login() {
        let guest = Session::logged_out();
        assert_eq!(resolve(&guest, "/doctors"), RouteDecision::Redirect("/login"));
        assert_eq!(resolve(&guest, "/admin"), RouteDecision::Redirect("/login"));
        assert_eq!(resolve(&guest, "/doctor/schedule"), RouteDecision::Redirect("/login"));
    }

    #[test]
    fn test_signed_in_user_leaves_guest_pages() {
        let session = session_for(TestUser::patient("p@example.com"));
        assert_eq!(resolve(&session, "/login"), RouteDecision::Redirect("/"));
        assert_eq!(resolve(&session, "/register"), RouteDecision::Redirect("/"));
    }

    #[test]
    fn test_wrong_role_goes_home() {
        let patient = session_for(TestUser::patient("p@example.com"));
        assert_eq!(resolve(&patient, "/admin"), RouteDecision::Redirect("/"));
        assert_eq!(resolve(&patient, "/assistant"), RouteDecision::Redirect("/"));

        let doctor = session_for(TestUser::doctor("d@example.com"));
        assert_eq!(resolve(&doctor, "/doctor/schedule").view(), Some(View::DoctorSchedule));
        assert_eq!(resolve(&doctor, "/admin"), RouteDecision::Redirect("/"));
    }

    #[test]
    fn test_params_are_captured() {
        let assistant = session_for(TestUser::assistant("a@example.com"));
        let decision = resolve(&assistant, "/assistant/doctor/abc-123/");

        match decision {
            RouteDecision::Render { view, params } => {
                assert_eq!(view, View::AssistantDoctorAppointments);
                assert_eq!(params.get("doctorId").map(String::as_str), Some("abc-123"));
            }
            other => panic!("unexpected decision {:?}", other),
        }
    }

    #[test]
    fn test_navigation_by_role() {
        let guest_paths: Vec<_> = navigation(&Session::logged_out()).iter().map(|l| l.path).collect();
        assert_eq!(guest_paths, vec!["/doctors", "/login", "/register"]);

        let admin = session_for(TestUser::admin("admin@example.com"));
        let admin_paths: Vec<_> = navigation(&admin).iter().map(|l| l.path).collect();
        assert!(admin_paths.contains(&"/admin"));
        assert!(admin_paths.contains(&"/appointments"));
        assert!(!admin_paths.contains(&"/login"));
    }
}
