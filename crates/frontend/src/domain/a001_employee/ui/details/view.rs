use super::view_model::EmployeeDetailsVm;
use crate::layout::global_context::use_app_context;
use crate::layout::modal_service::use_modal;
use crate::layout::tabs::keys::{edit_key, list_key, new_key};
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use contracts::domain::a001_employee::{Employee, GENDERS};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn EmployeeDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let vm = EmployeeDetailsVm::new();
    let tabs_store = use_app_context();
    let modal = use_modal();

    let is_edit_mode = id.is_some();
    if let Some(existing_id) = id.clone() {
        vm.load(existing_id);
    }

    // После сохранения: закрыть форму и показать обновлённый список
    let form_key = match id.as_deref() {
        Some(existing_id) => edit_key::<Employee>(existing_id),
        None => new_key::<Employee>(),
    };
    let on_saved = Callback::new(move |_| {
        let list = list_key::<Employee>();
        tabs_store.replace_tab(&form_key, &list, &tab_label_for_key(&list));
    });

    let id = StoredValue::new(id);
    let handle_save = move |_| vm.save_command(id.get_value(), modal, on_saved);

    view! {
        <PageFrame page_id="a001_employee--form" category=PAGE_CAT_FORM>
            <div class="details-form" style="padding: 20px;">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 20px;">
                    <h2 style="font-size: 20px; font-weight: bold;">
                        {if is_edit_mode { "Edit Employee" } else { "Add Employee" }}
                    </h2>
                    <Space>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=handle_save
                            disabled=Signal::derive(move || vm.saving.get())
                        >
                            {icon("save")}
                            {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                            {icon("x")}
                            " Cancel"
                        </Button>
                    </Space>
                </Flex>

                {move || vm.load_error.get().map(|e| view! {
                    <div style="padding: 12px; margin-bottom: 16px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                        <span style="color: var(--color-error);">{e}</span>
                    </div>
                })}

                <Card>
                    <Show when=move || is_edit_mode>
                        <div class="form__group">
                            <label class="form__label">"Employee No"</label>
                            <Input value=vm.emp_id readonly=true />
                        </div>
                    </Show>

                    <div class="form__group">
                        <label class="form__label" style=move || vm.label_style("First Name")>"First Name"<span style="color: red;">"*"</span></label>
                        <Input value=vm.first_name placeholder="Nimal" />
                    </div>

                    <div class="form__group">
                        <label class="form__label" style=move || vm.label_style("Last Name")>"Last Name"<span style="color: red;">"*"</span></label>
                        <Input value=vm.last_name placeholder="Perera" />
                    </div>

                    <div class="form__group">
                        <label class="form__label" style=move || vm.label_style("Age")>"Age"<span style="color: red;">"*"</span></label>
                        <Input value=vm.age placeholder="25" />
                    </div>

                    <div class="form__group">
                        <label class="form__label" style=move || vm.label_style("Gender")>"Gender"<span style="color: red;">"*"</span></label>
                        <Select value=vm.gender>
                            <option value="">"Select gender"</option>
                            {GENDERS.iter().map(|gender| view! {
                                <option value=*gender>{*gender}</option>
                            }).collect_view()}
                        </Select>
                    </div>

                    <div class="form__group">
                        <label class="form__label" style=move || vm.label_style("Contact No")>"Contact No"<span style="color: red;">"*"</span></label>
                        <Input value=vm.contact_no placeholder="0771234567" />
                    </div>

                    <div class="form__group">
                        <label class="form__label" style=move || vm.label_style("Email")>"Email"<span style="color: red;">"*"</span></label>
                        <Input value=vm.email placeholder="name@example.com" />
                    </div>
                </Card>
            </div>
        </PageFrame>
    }
}
