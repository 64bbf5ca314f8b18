use crate::domain::a001_employee::api::fetch_employee;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::keys::edit_key;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_employee::Employee;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Карточка сотрудника (только чтение)
#[component]
#[allow(non_snake_case)]
pub fn EmployeeCard(id: String, on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_app_context();
    let (employee, set_employee) = signal::<Option<Employee>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let id_for_load = id.clone();
    spawn_local(async move {
        match fetch_employee(&id_for_load).await {
            Ok(record) => set_employee.set(Some(record)),
            Err(e) => {
                log::error!("Failed to load employee {}: {}", id_for_load, e);
                set_error.set(Some(e));
            }
        }
    });

    let handle_edit = move |_| {
        let key = edit_key::<Employee>(&id);
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    let field = |label: &'static str, value: String| {
        view! {
            <div class="card-field" style="display: flex; padding: 8px 0; border-bottom: 1px solid var(--colorNeutralStroke2);">
                <span style="width: 160px; color: var(--colorNeutralForeground3);">{label}</span>
                <span>{value}</span>
            </div>
        }
    };

    view! {
        <PageFrame page_id="a001_employee--detail" category=PAGE_CAT_DETAIL>
            <div style="padding: 20px;">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 20px;">
                    <h2 style="font-size: 20px; font-weight: bold;">
                        {move || employee.with(|e| e.as_ref().map(Employee::display_name).unwrap_or_default())}
                    </h2>
                    <Space>
                        <Button appearance=ButtonAppearance::Primary on_click=handle_edit>
                            {icon("edit")}
                            " Edit"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                            {icon("x")}
                            " Close"
                        </Button>
                    </Space>
                </Flex>

                {move || error.get().map(|e| view! {
                    <div style="color: var(--color-error); margin-bottom: 16px;">{e}</div>
                })}

                <Card>
                    {move || employee.get().map(|e| view! {
                        {field("Employee No", e.emp_id)}
                        {field("First Name", e.first_name)}
                        {field("Last Name", e.last_name)}
                        {field("Age", e.age)}
                        {field("Gender", e.gender)}
                        {field("Contact No", e.contact_no)}
                        {field("Email", e.email)}
                    })}
                </Card>
            </div>
        </PageFrame>
    }
}
