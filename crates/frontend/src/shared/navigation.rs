//! Hand-off of e-mail drafts to the user's mail client.

use contracts::shared::mailto::MailDraft;

/// Points the browser at the draft's `mailto:` URI. The page itself stays
/// loaded; the mail client opens the prefilled message.
pub fn open_mail_draft(draft: &MailDraft) -> Result<(), String> {
    let uri = draft.to_mailto_uri();
    let window = web_sys::window().ok_or("No window object")?;
    window
        .location()
        .set_href(&uri)
        .map_err(|e| format!("Failed to open mail client: {:?}", e))?;
    log::debug!("Mail draft opened for {}", draft.recipient.trim());
    Ok(())
}
