pub mod state;

use self::state::create_state;
use crate::domain::a001_employee::api::{delete_employee, fetch_employees};
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
use contracts::domain::a001_employee::notification::report_generated;
use contracts::domain::a001_employee::Employee;
use contracts::domain::common::AggregateRoot;
use contracts::shared::report::layout::is_shaded_row;
use contracts::shared::search::filter_records;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let tabs_store = use_app_context();
    let modal = use_modal();
    let config = StoredValue::new(use_config());
    let state = create_state();
    let (items, set_items) = signal::<Vec<Employee>>(Vec::new());
    let (loading, set_loading) = signal(false);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_employees().await {
                Ok(v) => set_items.set(v),
                Err(e) => modal.transport_error(&e),
            }
            set_loading.set(false);
        });
    };

    // Загрузка при открытии и после каждого сохранения формы
    let revision = tabs_store.revision_memo(&list_key::<Employee>());
    Effect::new(move |_| {
        let revision = revision.get();
        log::debug!("Loading employees, revision {}", revision);
        fetch();
    });

    let filtered = Memo::new(move |_| {
        let query = state.with(|s| s.search.clone());
        items.with(|all| filter_records(all, &query))
    });

    let handle_create_new = move || {
        let key = new_key::<Employee>();
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    let handle_view = move |employee: &Employee| {
        if let Some(id) = employee.id.as_deref() {
            let title = detail_tab_label(Employee::element_name(), &employee.display_name());
            tabs_store.open_tab(&detail_key::<Employee>(id), &title);
        }
    };

    let handle_edit = move |id: String| {
        let key = edit_key::<Employee>(&id);
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message("Are you sure you want to delete this employee?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match delete_employee(&id).await {
                Ok(()) => {
                    log::info!("Employee {} deleted", id);
                    fetch();
                }
                Err(e) => modal.transport_error(&e),
            }
        });
    };

    let handle_report = move || {
        let records = filtered.get_untracked();
        let config = config.get_value();
        match export_report(&records, &config) {
            Ok(_) => {
                let draft = report_generated(&config.employee_manager_email);
                if let Err(e) = open_mail_draft(&draft) {
                    log::error!("{}", e);
                }
            }
            Err(e) => modal.transport_error(&e),
        }
    };

    view! {
        <PageFrame page_id="a001_employee--list" category=PAGE_CAT_LIST>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Flex align=FlexAlign::Center>
                    <h1 style="font-size: 24px; font-weight: bold;">{Employee::list_name()}</h1>
                    <Badge>{move || filtered.with(Vec::len).to_string()}</Badge>
                </Flex>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_create_new()
                    >
                        {icon("plus")}
                        " Add Employee"
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
                    placeholder="Search employees..."
                />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=100.0>"Employee No"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=140.0>"First Name"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=140.0>"Last Name"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>"Age"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0>"Gender"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Contact No"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>"Email"</TableHeaderCell>
                        <TableHeaderCell min_width=130.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || filtered.get().into_iter().enumerate().map(|(index, employee)| {
                        let row_class = if is_shaded_row(index) { "table__row--striped" } else { "" };
                        let id = employee.id.clone();
                        let for_view = employee.clone();
                        let for_view_button = employee.clone();
                        view! {
                            <TableRow class=row_class>
                                <TableCell><TableCellLayout>{employee.emp_id}</TableCellLayout></TableCell>
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
                                            {employee.first_name}
                                        </a>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell><TableCellLayout>{employee.last_name}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{employee.age}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{employee.gender}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{employee.contact_no}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{employee.email}</TableCellLayout></TableCell>
                                <TableCell>
                                    <TableCellLayout>
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
                    "No employees found"
                </div>
            </Show>
        </PageFrame>
    }
}
