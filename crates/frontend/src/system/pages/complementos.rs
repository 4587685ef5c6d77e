//! Admin catalogs: tipos de lente, laboratorios and estados.
//!
//! The three share the `{ id, nombre, activo }` shape, so one generic
//! section renders each of them.

use contracts::domain::a005_tipo_lente::TipoLente;
use contracts::domain::a006_laboratorio::Laboratorio;
use contracts::domain::a007_estado::Estado;
use contracts::domain::common::{
    collection_path, pending_suggestions, sorted_by_id, validate_catalog_nombre, CatalogDto, CatalogEntry, Entity,
    SuggestionSource,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{fetch_all, fetch_suggestions, post, set_activo};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, ButtonStyle, Input, Suggestions};
use crate::shared::icons::icon;
use crate::shared::notice::{NoticeBar, NoticeHandle};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;

#[component]
pub fn ComplementosPage() -> impl IntoView {
    let notice = NoticeHandle::new();

    view! {
        <PageFrame page_id="complementos--list" category=PageCategory::List>
            <PageHeader title="Complementos" subtitle="Catálogos usados en las fichas">
                {()}
            </PageHeader>
            <NoticeBar handle=notice />
            {catalog_section::<TipoLente>("tipos-lente", notice)}
            {catalog_section::<Laboratorio>("laboratorios", notice)}
            {catalog_section::<Estado>("estados", notice)}
        </PageFrame>
    }
}

async fn load_candidates<T: CatalogEntry>() -> Vec<String> {
    match T::suggestion_source() {
        SuggestionSource::Fixed(list) => list.iter().map(|s| s.to_string()).collect(),
        SuggestionSource::Backup(path) => match fetch_suggestions(path).await {
            Ok(items) => items,
            Err(e) => {
                log::warn!("suggestions for {} unavailable: {}", T::list_name(), e);
                Vec::new()
            }
        },
    }
}

fn catalog_section<T>(key: &'static str, notice: NoticeHandle) -> impl IntoView
where
    T: CatalogEntry + DeserializeOwned + Send + Sync,
{
    let entries = RwSignal::new(Vec::<T>::new());
    let candidates = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(true);
    let busy_id = RwSignal::new(Option::<i64>::None);

    let form_open = RwSignal::new(false);
    let nombre = RwSignal::new(String::new());
    let nombre_error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let reload = move || {
        loading.set(true);
        spawn_local(async move {
            match fetch_all::<T>().await {
                Ok(items) => {
                    let _ = entries.try_set(sorted_by_id(items));
                }
                Err(e) => notice.error(format!("Error al cargar {}: {}", T::list_name().to_lowercase(), e)),
            }
            let _ = loading.try_set(false);
        });
    };

    reload();
    spawn_local(async move {
        let items = load_candidates::<T>().await;
        let _ = candidates.try_set(items);
    });

    let pending = Memo::new(move |_| entries.with(|e| candidates.with(|c| pending_suggestions(c, e))));

    let toggle = move |entry: T| {
        let id = entry.id();
        let target = !entry.is_activo();
        busy_id.set(Some(id));
        spawn_local(async move {
            match set_activo::<T>(id, target).await {
                Ok(change) => {
                    notice.success(format!("{} {} correctamente", T::element_name(), change.done_label()));
                    reload();
                }
                Err(e) => notice.error(format!("Error al actualizar el estado: {}", e)),
            }
            let _ = busy_id.try_set(None);
        });
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let checked = entries.with_untracked(|e| validate_catalog_nombre(&nombre.get_untracked(), e));
        let value = match checked {
            Ok(value) => value,
            Err(message) => {
                nombre_error.set(Some(message));
                return;
            }
        };
        nombre_error.set(None);
        saving.set(true);
        spawn_local(async move {
            match post(&collection_path::<T>(), &CatalogDto { nombre: value }).await {
                Ok(()) => {
                    notice.success(format!("{} cargado", T::element_name()));
                    let _ = nombre.try_set(String::new());
                    let _ = form_open.try_set(false);
                    reload();
                }
                Err(e) => notice.error(format!("Error al cargar {}: {}", T::element_name().to_lowercase(), e)),
            }
            let _ = saving.try_set(false);
        });
    };

    let datalist_id = format!("sugerencias-{}", key);

    view! {
        <section class="catalog" id=format!("catalog-{}", key)>
            <header class="catalog__header">
                <h2 class="catalog__title">{T::list_name()}</h2>
                <form class="catalog__add" on:submit=submit>
                    <Show when=move || form_open.get()>
                        <Input
                            value=nombre
                            on_input=Callback::new(move |v| nombre.set(v))
                            list=datalist_id.clone()
                            error=Signal::derive(move || nombre_error.get())
                            autocomplete="off"
                            placeholder="Nombre"
                        />
                        <Suggestions id=datalist_id.clone() options=pending />
                        <Button style=ButtonStyle::Add button_type="submit" disabled=Signal::derive(move || saving.get()) title="Guardar">
                            {icon("save")}
                        </Button>
                    </Show>
                    <button
                        type="button"
                        class=move || {
                            let style = if form_open.get() { ButtonStyle::Cancel } else { ButtonStyle::Add };
                            format!("button {}", style.class(true))
                        }
                        title="Agregar"
                        on:click=move |_| {
                            form_open.update(|open| *open = !*open);
                            nombre.set(String::new());
                            nombre_error.set(None);
                        }
                    >
                        {move || if form_open.get() { icon("x") } else { icon("plus") }}
                    </button>
                </form>
            </header>

            <Show
                when=move || !loading.get() || !entries.with(|e| e.is_empty())
                fallback=|| view! { <div class="catalog__loading">"Cargando..."</div> }
            >
                <Show
                    when=move || !entries.with(|e| e.is_empty())
                    fallback=move || view! { <p class="catalog__empty">{format!("No hay {} cargados", T::list_name())}</p> }
                >
                    <ul class="catalog__grid">
                        <For
                            each=move || entries.get()
                            key=|entry| (entry.id(), entry.is_activo())
                            children=move |entry: T| {
                                let id = entry.id();
                                let activo = entry.is_activo();
                                let style = if activo { ButtonStyle::Cancel } else { ButtonStyle::Check };
                                let for_toggle = entry.clone();
                                view! {
                                    <li class="catalog__item">
                                        <span class="catalog__name">{entry.nombre().to_string()}</span>
                                        <span class=if activo { "badge badge--success" } else { "badge badge--error" }>
                                            {if activo { "visible" } else { "oculto" }}
                                        </span>
                                        <Button
                                            style=style
                                            outline=true
                                            title=if activo { "Desactivar" } else { "Activar" }
                                            disabled=Signal::derive(move || busy_id.get() == Some(id))
                                            on_click=Callback::new(move |_| toggle(for_toggle.clone()))
                                        >
                                            {if activo { icon("x") } else { icon("check") }}
                                        </Button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </section>
    }
}
