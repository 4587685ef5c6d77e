//! Per-role route table and the decision taken by the guarded layout.

use crate::system::users::{RoleName, Usuario};

pub const LOGIN_PATH: &str = "/login";

/// A route a role may visit. Principal routes appear in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub alias: &'static str,
    pub principal: bool,
}

const fn route(path: &'static str, alias: &'static str, principal: bool) -> RouteEntry {
    RouteEntry {
        path,
        alias,
        principal,
    }
}

const ADMIN_ROUTES: &[RouteEntry] = &[
    route("/admin", "Inicio", true),
    route("/opticas", "Opticas", true),
    route("/opticas/:id", "Optica", false),
    route("/opticas/crear", "Nueva Optica", false),
    route("/opticas/:id/delegaciones", "Delegaciones", false),
    route("/opticas/:id/:delegacion/sindicatos", "Sindicatos", false),
    route("/armazones", "Armazones", true),
    route("/armazones/crear", "Nuevo Armazon", false),
    route("/armazones/stock", "Armazones Stock", false),
    route("/usuarios", "Usuarios", true),
    route("/admin/complementos", "Complementos", true),
];

const BOSS_ROUTES: &[RouteEntry] = &[
    route("/boss", "Inicio", true),
    route("/reportes/opticas", "Opticas", true),
    route("/reportes/armazones", "Armazones", true),
    route("/reportes/sindicatos", "Sindicatos", true),
];

const OWNER_ROUTES: &[RouteEntry] = &[
    route("/owners", "Inicio", true),
    route("/fichas", "Fichas", true),
    route("/fichas/:id", "Fichas Detalle", false),
    route("/fichas/crear", "Nueva Ficha", false),
    route("/fichas/reporte", "Reportes", true),
];

const EMPLOYED_ROUTES: &[RouteEntry] = &[
    route("/fichas", "Fichas", true),
    route("/fichas/:id", "Fichas Detalle", false),
    route("/fichas/crear", "Nueva Ficha", false),
    route("/armazones", "Armazones", true),
    route("/armazones/crear", "Nuevo Armazon", false),
    route("/armazones/stock", "Armazones Stock", false),
];

pub fn routes_for(role: &RoleName) -> &'static [RouteEntry] {
    match role {
        RoleName::Admin => ADMIN_ROUTES,
        RoleName::Boss => BOSS_ROUTES,
        RoleName::Owner => OWNER_ROUTES,
        RoleName::Employed => EMPLOYED_ROUTES,
        RoleName::Other(_) => &[],
    }
}

pub fn principal_routes(role: &RoleName) -> impl Iterator<Item = &'static RouteEntry> {
    routes_for(role).iter().filter(|r| r.principal)
}

/// First principal route, else first route, else `/`
pub fn default_route(role: &RoleName) -> &'static str {
    let routes = routes_for(role);
    routes
        .iter()
        .find(|r| r.principal)
        .or_else(|| routes.first())
        .map(|r| r.path)
        .unwrap_or("/")
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Segment-wise match; a `:name` segment matches any single segment.
/// Trailing slashes are ignored.
pub fn pattern_matches(pattern: &str, path: &str) -> bool {
    let pattern = segments(pattern);
    let path = segments(path.split(['?', '#']).next().unwrap_or(""));
    pattern.len() == path.len()
        && pattern
            .iter()
            .zip(path.iter())
            .all(|(p, s)| p.starts_with(':') || p == s)
}

pub fn is_allowed(role: &RoleName, path: &str) -> bool {
    if *role == RoleName::Admin {
        return true;
    }
    routes_for(role).iter().any(|r| pattern_matches(r.path, path))
}

/// Outcome of visiting a guarded path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    RedirectLogin,
    Redirect(&'static str),
    Render,
}

pub fn decide(user: Option<&Usuario>, path: &str) -> GuardDecision {
    let Some(user) = user else {
        return GuardDecision::RedirectLogin;
    };
    let role = user.role_name();
    if is_allowed(&role, path) {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(default_route(&role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::users::Rol;

    fn user(role: &str) -> Usuario {
        Usuario {
            id: 1,
            nombre: "Test".into(),
            usuario: "test.user".into(),
            rol: Rol {
                id: 1,
                nombre: role.into(),
            },
            activo: true,
        }
    }

    #[test]
    fn test_unauthenticated_goes_to_login() {
        assert_eq!(decide(None, "/fichas"), GuardDecision::RedirectLogin);
        assert_eq!(decide(None, "/admin"), GuardDecision::RedirectLogin);
    }

    #[test]
    fn test_admin_is_never_redirected() {
        let admin = user("admin");
        for path in ["/admin", "/fichas/crear", "/reportes/opticas", "/sindicatos/4", "/cualquier/cosa"] {
            assert_eq!(decide(Some(&admin), path), GuardDecision::Render, "{path}");
        }
    }

    #[test]
    fn test_employed_redirected_to_first_principal() {
        let employed = user("employed");
        assert_eq!(decide(Some(&employed), "/usuarios"), GuardDecision::Redirect("/fichas"));
        assert_eq!(decide(Some(&employed), "/armazones/stock"), GuardDecision::Render);
        assert_eq!(decide(Some(&employed), "/fichas/12"), GuardDecision::Render);
    }

    #[test]
    fn test_default_routes() {
        assert_eq!(default_route(&RoleName::Admin), "/admin");
        assert_eq!(default_route(&RoleName::Boss), "/boss");
        assert_eq!(default_route(&RoleName::Owner), "/owners");
        assert_eq!(default_route(&RoleName::Employed), "/fichas");
        assert_eq!(default_route(&RoleName::Other("x".into())), "/");
    }

    #[test]
    fn test_unknown_role_has_no_routes() {
        let other = user("auditor");
        assert_eq!(decide(Some(&other), "/fichas"), GuardDecision::Redirect("/"));
    }

    #[test]
    fn test_pattern_matching() {
        assert!(pattern_matches("/opticas/:id", "/opticas/7"));
        assert!(pattern_matches("/opticas/:id/:delegacion/sindicatos", "/opticas/7/3/sindicatos"));
        assert!(pattern_matches("/fichas", "/fichas/"));
        assert!(pattern_matches("/fichas", "/fichas?page=2"));
        assert!(!pattern_matches("/opticas/:id", "/opticas"));
        assert!(!pattern_matches("/opticas/:id", "/opticas/7/delegaciones"));
        assert!(!pattern_matches("/fichas", "/fichasx"));
    }

    #[test]
    fn test_principal_routes_for_header() {
        let aliases: Vec<&str> = principal_routes(&RoleName::Owner).map(|r| r.alias).collect();
        assert_eq!(aliases, vec!["Inicio", "Fichas", "Reportes"]);
    }
}
