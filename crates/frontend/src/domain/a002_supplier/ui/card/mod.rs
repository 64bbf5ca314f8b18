use crate::domain::a002_supplier::api::fetch_supplier;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::keys::edit_key;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::shared::navigation::open_mail_draft;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a002_supplier::notification::low_item_quantity;
use contracts::domain::a002_supplier::Supplier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn SupplierCard(id: String, on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_app_context();
    let (supplier, set_supplier) = signal::<Option<Supplier>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let id_for_load = id.clone();
    spawn_local(async move {
        match fetch_supplier(&id_for_load).await {
            Ok(record) => set_supplier.set(Some(record)),
            Err(e) => {
                log::error!("Failed to load supplier {}: {}", id_for_load, e);
                set_error.set(Some(e));
            }
        }
    });

    let handle_edit = move |_| {
        let key = edit_key::<Supplier>(&id);
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    let handle_email = move |_| {
        let Some(email) = supplier.with_untracked(|s| s.as_ref().map(|s| s.email.clone())) else {
            return;
        };
        if let Err(e) = open_mail_draft(&low_item_quantity(&email)) {
            log::error!("{}", e);
        }
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
        <PageFrame page_id="a002_supplier--detail" category=PAGE_CAT_DETAIL>
            <div style="padding: 20px;">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 20px;">
                    <h2 style="font-size: 20px; font-weight: bold;">
                        {move || supplier.with(|s| s.as_ref().map(|s| s.supplier_name.clone()).unwrap_or_default())}
                    </h2>
                    <Space>
                        <Button appearance=ButtonAppearance::Secondary on_click=handle_email>
                            {icon("mail")}
                            " Low Stock Alert"
                        </Button>
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
                    {move || supplier.get().map(|s| view! {
                        {field("Supplier ID", s.supplier_id)}
                        {field("Supplier Name", s.supplier_name)}
                        {field("Item No", s.item_no)}
                        {field("Item Name", s.item_name)}
                        {field("Contact No", s.contact_no)}
                        {field("Email", s.email)}
                        {field("Address", s.address)}
                    })}
                </Card>
            </div>
        </PageFrame>
    }
}
