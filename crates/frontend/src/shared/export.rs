//! CSV download of master-list rows.
use contracts::shared::export::{to_csv, CsvExportable};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Builds the CSV for `rows` and makes the browser download it as
/// `filename`.
pub fn export_to_csv<T: CsvExportable>(rows: &[T], filename: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("Aucune ligne à exporter".to_string());
    }

    let blob = create_csv_blob(&to_csv(rows))?;
    download_blob(&blob, filename)?;

    log::info!("exported {} rows to {}", rows.len(), filename);
    Ok(())
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Impossible de créer le fichier : {:?}", e))
}

/// Clicks a hidden temporary anchor pointing at an object URL of `blob`.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("Fenêtre du navigateur indisponible")?;
    let document = window.document().ok_or("Document indisponible")?;
    let body = document.body().ok_or("Élément body introuvable")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Impossible de créer l'URL du fichier : {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Impossible de créer le lien : {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Élément de lien invalide : {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Impossible de masquer le lien : {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Impossible d'insérer le lien : {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Impossible de retirer le lien : {:?}", e))?;

    Url::revoke_object_url(&url)
        .map_err(|e| format!("Impossible de libérer l'URL du fichier : {:?}", e))?;

    Ok(())
}
