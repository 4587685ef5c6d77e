use leptos::prelude::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Opticas,
    Armazones,
    Sindicatos,
    Fichas,
}

impl ReportKind {
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Opticas => "Reporte de ópticas",
            ReportKind::Armazones => "Reporte de armazones",
            ReportKind::Sindicatos => "Reporte de sindicatos",
            ReportKind::Fichas => "Reporte de fichas",
        }
    }

    pub fn page_id(self) -> &'static str {
        match self {
            ReportKind::Opticas => "reporte_opticas--report",
            ReportKind::Armazones => "reporte_armazones--report",
            ReportKind::Sindicatos => "reporte_sindicatos--report",
            ReportKind::Fichas => "reporte_fichas--report",
        }
    }
}

/// Placeholder until the backend exposes report endpoints
#[component]
pub fn ReportPage(kind: ReportKind) -> impl IntoView {
    view! {
        <PageFrame page_id=kind.page_id() category=PageCategory::Report>
            <PageHeader title=kind.title()>
                {()}
            </PageHeader>
            <div class="placeholder">
                <p>"Este reporte todavía no está disponible."</p>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::page_standard::is_valid_page_id;

    #[test]
    fn test_report_page_ids() {
        for kind in [ReportKind::Opticas, ReportKind::Armazones, ReportKind::Sindicatos, ReportKind::Fichas] {
            assert!(is_valid_page_id(kind.page_id()), "{:?}", kind);
        }
    }
}
