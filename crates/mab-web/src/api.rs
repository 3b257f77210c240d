//! API Client

use mab_core::{ContactFormData, ContactResponse};

/// Post the contact form.
///
/// The server answers every outcome (accepted, validation failure,
/// unexpected error) with a `ContactResponse` body, so the status code is
/// not inspected here.
pub async fn submit_contact(form: &ContactFormData) -> Result<ContactResponse, String> {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/contact", origin()))
        .json(form)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    response.json::<ContactResponse>().await.map_err(|e| e.to_string())
}

/// Current page path, recorded as the submission source
pub fn current_path() -> Option<String> {
    web_sys::window().and_then(|w| w.location().pathname().ok())
}

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}
