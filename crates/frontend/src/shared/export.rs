//! Универсальный модуль для выгрузки отчётов в PDF
use super::config::AppConfig;
use super::date_utils::today_display;
use contracts::shared::report::{report_file_name, Report, Reportable};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Строит PDF-отчёт по записям (в том порядке, в каком они показаны) и
/// инициирует скачивание. Возвращает имя файла.
pub fn export_report<T: Reportable>(records: &[T], config: &AppConfig) -> Result<String, String> {
    let generated_on = today_display();

    let mut report = Report::for_records(records, &generated_on)
        .map_err(|e| format!("Failed to build report: {}", e))?;
    report.header.title = config.company_name.clone();
    report.header.address = config.company_address.clone();

    let filename = report_file_name(T::report_entity(), &generated_on);
    let bytes = report
        .to_pdf()
        .map_err(|e| format!("Failed to build report: {}", e))?;

    let blob = create_pdf_blob(&bytes)?;
    download_blob(&blob, &filename)?;

    log::info!(
        "Report {} generated: {} rows, {} bytes",
        filename,
        records.len(),
        bytes.len()
    );
    Ok(filename)
}

/// Создает Blob объект с PDF данными
fn create_pdf_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    // Временная ссылка: добавить в DOM, кликнуть, удалить
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
