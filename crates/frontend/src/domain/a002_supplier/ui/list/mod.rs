pub mod state;

use self::state::create_state;
use crate::domain::a002_supplier::api::{delete_supplier, fetch_suppliers};
use crate::layout::global_context::use_app_context;
use crate::layout::modal_service::use_modal;
use crate::layout::tabs::keys::{detail_key, edit_key, list_key, new_key};
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::config::use_config;
use crate::shared::export::export_report;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::navigation::open_mail_draft;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_supplier::notification::low_item_quantity;
use contracts::domain::a002_supplier::Supplier;
use contracts::domain::common::AggregateRoot;
use contracts::shared::report::layout::is_shaded_row;
use contracts::shared::search::filter_records;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let tabs_store = use_app_context();
    let modal = use_modal();
    let config = StoredValue::new(use_config());
    let state = create_state();
    let (items, set_items) = signal::<Vec<Supplier>>(Vec::new());
    let (loading, set_loading) = signal(false);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_suppliers().await {
                Ok(v) => set_items.set(v),
                Err(e) => modal.transport_error(&e),
            }
            set_loading.set(false);
        });
    };

    let revision = tabs_store.revision_memo(&list_key::<Supplier>());
    Effect::new(move |_| {
        let revision = revision.get();
        log::debug!("Loading suppliers, revision {}", revision);
        fetch();
    });

    let filtered = Memo::new(move |_| {
        let query = state.with(|s| s.search.clone());
        items.with(|all| filter_records(all, &query))
    });

    let handle_create_new = move || {
        let key = new_key::<Supplier>();
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    let handle_view = move |supplier: &Supplier| {
        if let Some(id) = supplier.id.as_deref() {
            let title = detail_tab_label(Supplier::element_name(), &supplier.supplier_name);
            tabs_store.open_tab(&detail_key::<Supplier>(id), &title);
        }
    };

    let handle_edit = move |id: String| {
        let key = edit_key::<Supplier>(&id);
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message("Are you sure you want to delete this supplier?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match delete_supplier(&id).await {
                Ok(()) => {
                    log::info!("Supplier {} deleted", id);
                    fetch();
                }
                Err(e) => modal.transport_error(&e),
            }
        });
    };

    // Письмо поставщику о заканчивающихся позициях
    let handle_email = move |email: String| {
        if let Err(e) = open_mail_draft(&low_item_quantity(&email)) {
            log::error!("{}", e);
        }
    };

    let handle_report = move || {
        let records = filtered.get_untracked();
        if let Err(e) = export_report(&records, &config.get_value()) {
            modal.transport_error(&e);
        }
    };

    view! {
        <PageFrame page_id="a002_supplier--list" category=PAGE_CAT_LIST>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Flex align=FlexAlign::Center>
                    <h1 style="font-size: 24px; font-weight: bold;">{Supplier::list_name()}</h1>
                    <Badge>{move || filtered.with(Vec::len).to_string()}</Badge>
                </Flex>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_create_new()
                    >
                        {icon("plus")}
                        " Add Supplier"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| handle_report()
                    >
                        {icon("file-text")}
                        " Generate Report"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </Space>
            </Flex>

            <div style="margin: 16px 0;">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_change=Callback::new(move |value: String| state.update(|s| s.search = value))
                    placeholder="Search suppliers..."
                />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=100.0>"Supplier ID"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=160.0>"Supplier Name"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0>"Item No"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=140.0>"Item Name"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Contact No"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>"Email"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>"Address"</TableHeaderCell>
                        <TableHeaderCell min_width=170.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || filtered.get().into_iter().enumerate().map(|(index, supplier)| {
                        let row_class = if is_shaded_row(index) { "table__row--striped" } else { "" };
                        let id = supplier.id.clone();
                        let email = supplier.email.clone();
                        let for_view = supplier.clone();
                        let for_view_button = supplier.clone();
                        view! {
                            <TableRow class=row_class>
                                <TableCell><TableCellLayout>{supplier.supplier_id}</TableCellLayout></TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <a
                                            href="#"
                                            style="color: var(--colorBrandForeground1); text-decoration: none; cursor: pointer;"
                                            on:click=move |e| {
                                                e.prevent_default();
                                                handle_view(&for_view);
                                            }
                                        >
                                            {supplier.supplier_name}
                                        </a>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell><TableCellLayout>{supplier.item_no}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{supplier.item_name}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{supplier.contact_no}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{supplier.email}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{supplier.address}</TableCellLayout></TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| handle_email(email.clone())
                                            attr:title="Send low item quantity alert"
                                        >
                                            {icon("mail")}
                                        </Button>
                                        {id.map(|id| {
                                            let id_for_edit = id.clone();
                                            let id_for_delete = id.clone();
                                            view! {
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| handle_view(&for_view_button)
                                                    attr:title="View"
                                                >
                                                    {icon("eye")}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| handle_edit(id_for_edit.clone())
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| handle_delete(id_for_delete.clone())
                                                    attr:title="Delete"
                                                >
                                                    {icon("delete")}
                                                </Button>
                                            }
                                        })}
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>

            <Show when=move || !loading.get() && filtered.with(Vec::is_empty)>
                <div class="table__empty" style="padding: 24px; text-align: center; color: var(--colorNeutralForeground3);">
                    "No suppliers found"
                </div>
            </Show>
        </PageFrame>
    }
}
