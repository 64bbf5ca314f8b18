use super::view_model::SupplierDetailsVm;
use crate::layout::global_context::use_app_context;
use crate::layout::modal_service::use_modal;
use crate::layout::tabs::keys::{edit_key, list_key, new_key};
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use contracts::domain::a002_supplier::Supplier;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn SupplierDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let vm = SupplierDetailsVm::new();
    let tabs_store = use_app_context();
    let modal = use_modal();

    let is_edit_mode = id.is_some();
    vm.load_items();
    if let Some(existing_id) = id.clone() {
        vm.load(existing_id);
    }

    let form_key = match id.as_deref() {
        Some(existing_id) => edit_key::<Supplier>(existing_id),
        None => new_key::<Supplier>(),
    };
    let on_saved = Callback::new(move |_| {
        let list = list_key::<Supplier>();
        tabs_store.replace_tab(&form_key, &list, &tab_label_for_key(&list));
    });

    let id = StoredValue::new(id);
    let handle_save = move |_| vm.save_command(id.get_value(), modal, on_saved);

    view! {
        <PageFrame page_id="a002_supplier--form" category=PAGE_CAT_FORM>
            <div class="details-form" style="padding: 20px;">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 20px;">
                    <h2 style="font-size: 20px; font-weight: bold;">
                        {if is_edit_mode { "Edit Supplier" } else { "Add Supplier" }}
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
                            <label class="form__label">"Supplier ID"</label>
                            <Input value=vm.supplier_id readonly=true />
                        </div>
                    </Show>

                    <div class="form__group">
                        <label class="form__label" style=move || vm.label_style("Supplier Name")>"Supplier Name"<span style="color: red;">"*"</span></label>
                        <Input value=vm.supplier_name placeholder="Glow Supplies" />
                    </div>

                    <div class="form__group">
                        <label class="form__label" style=move || vm.label_style("Item No")>"Item No"<span style="color: red;">"*"</span></label>
                        <select
                            class="form__select"
                            on:change=move |ev| vm.select_item(event_target_value(&ev))
                            prop:value=move || vm.item_no.get()
                        >
                            <option value="">"Select item"</option>
                            {move || vm.items.get().into_iter().map(|item| {
                                let item_no = item.item_no.clone();
                                view! {
                                    <option
                                        value=item.item_no.clone()
                                        selected=move || vm.item_no.with(|current| *current == item_no)
                                    >
                                        {format!("{} - {}", item.item_no, item.item_name)}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Item Name"</label>
                        <Input value=vm.item_name readonly=true />
                    </div>

                    <div class="form__group">
                        <label class="form__label" style=move || vm.label_style("Contact No")>"Contact No"<span style="color: red;">"*"</span></label>
                        <Input value=vm.contact_no placeholder="0771234567" />
                    </div>

                    <div class="form__group">
                        <label class="form__label" style=move || vm.label_style("Email")>"Email"<span style="color: red;">"*"</span></label>
                        <Input value=vm.email placeholder="orders@example.com" />
                    </div>

                    <div class="form__group">
                        <label class="form__label" style=move || vm.label_style("Address")>"Address"<span style="color: red;">"*"</span></label>
                        <Textarea value=vm.address placeholder="12 Main St, Gampaha" />
                    </div>
                </Card>
            </div>
        </PageFrame>
    }
}
