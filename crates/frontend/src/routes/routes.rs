use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_armazon::ui::{ArmazonCreatePage, ArmazonesPage, ArmazonesStockPage};
use crate::domain::a002_sindicato::ui::{SindicatoDetails, SindicatosPage};
use crate::domain::a003_delegacion::ui::{DelegacionDetails, DelegacionesPage};
use crate::domain::a004_optica::ui::{
    OpticaCreatePage, OpticaDelegacionesPage, OpticaDetails, OpticaSindicatosPage, OpticasPage,
};
use crate::domain::a008_ficha::ui::{FichaCreatePage, FichaDetails, FichasPage};
use crate::system::auth::guard::Guarded;
use crate::system::pages::complementos::ComplementosPage;
use crate::system::pages::home::{AdminHome, BossHome, NotFound, OwnersHome, RootRedirect};
use crate::system::pages::login::LoginPage;
use crate::system::pages::reports::{ReportKind, ReportPage};
use crate::system::users::ui::UsuariosPage;

/// Route tree. Every page except the login sits behind [`Guarded`], which
/// consults the role table; literal segments are declared before `:id`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=RootRedirect />
                <Route path=path!("/login") view=LoginPage />

                // admin
                <Route path=path!("/admin") view=|| view! { <Guarded><AdminHome /></Guarded> } />
                <Route path=path!("/admin/complementos") view=|| view! { <Guarded><ComplementosPage /></Guarded> } />
                <Route path=path!("/usuarios") view=|| view! { <Guarded><UsuariosPage /></Guarded> } />
                <Route path=path!("/sindicatos") view=|| view! { <Guarded><SindicatosPage /></Guarded> } />
                <Route path=path!("/sindicatos/:id") view=|| view! { <Guarded><SindicatoDetails /></Guarded> } />
                <Route path=path!("/delegaciones") view=|| view! { <Guarded><DelegacionesPage /></Guarded> } />
                <Route path=path!("/delegaciones/:id") view=|| view! { <Guarded><DelegacionDetails /></Guarded> } />
                <Route path=path!("/opticas") view=|| view! { <Guarded><OpticasPage /></Guarded> } />
                <Route path=path!("/opticas/crear") view=|| view! { <Guarded><OpticaCreatePage /></Guarded> } />
                <Route path=path!("/opticas/:id") view=|| view! { <Guarded><OpticaDetails /></Guarded> } />
                <Route path=path!("/opticas/:id/delegaciones") view=|| view! { <Guarded><OpticaDelegacionesPage /></Guarded> } />
                <Route path=path!("/opticas/:id/:delegacion/sindicatos") view=|| view! { <Guarded><OpticaSindicatosPage /></Guarded> } />

                // armazones (admin, employed)
                <Route path=path!("/armazones") view=|| view! { <Guarded><ArmazonesPage /></Guarded> } />
                <Route path=path!("/armazones/crear") view=|| view! { <Guarded><ArmazonCreatePage /></Guarded> } />
                <Route path=path!("/armazones/stock") view=|| view! { <Guarded><ArmazonesStockPage /></Guarded> } />

                // boss
                <Route path=path!("/boss") view=|| view! { <Guarded><BossHome /></Guarded> } />
                <Route path=path!("/reportes/opticas") view=|| view! { <Guarded><ReportPage kind=ReportKind::Opticas /></Guarded> } />
                <Route path=path!("/reportes/armazones") view=|| view! { <Guarded><ReportPage kind=ReportKind::Armazones /></Guarded> } />
                <Route path=path!("/reportes/sindicatos") view=|| view! { <Guarded><ReportPage kind=ReportKind::Sindicatos /></Guarded> } />

                // owner, employed
                <Route path=path!("/owners") view=|| view! { <Guarded><OwnersHome /></Guarded> } />
                <Route path=path!("/fichas") view=|| view! { <Guarded><FichasPage /></Guarded> } />
                <Route path=path!("/fichas/crear") view=|| view! { <Guarded><FichaCreatePage /></Guarded> } />
                <Route path=path!("/fichas/reporte") view=|| view! { <Guarded><ReportPage kind=ReportKind::Fichas /></Guarded> } />
                <Route path=path!("/fichas/:id") view=|| view! { <Guarded><FichaDetails /></Guarded> } />
            </Routes>
        </Router>
    }
}
