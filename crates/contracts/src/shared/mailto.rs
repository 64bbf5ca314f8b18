//! Pre-filled e-mail drafts handed off to the user's mail client.
//!
//! Nothing is sent by the application: the browser is pointed at the
//! `mailto:` URI and the user's own client takes over.

/// Draft of a message: recipient, subject and plain-text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// `mailto:<recipient>?subject=<subject>&body=<body>`, every component
    /// percent-encoded.
    pub fn to_mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            urlencoding::encode(self.recipient.trim()),
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_are_percent_encoded() {
        let draft = MailDraft::new(
            "manager@salon.lk",
            "Report & Alert",
            "Dear Manager,\n\nDone.",
        );
        assert_eq!(
            draft.to_mailto_uri(),
            "mailto:manager%40salon.lk?subject=Report%20%26%20Alert&body=Dear%20Manager%2C%0A%0ADone."
        );
    }

    #[test]
    fn test_recipient_is_trimmed() {
        let draft = MailDraft::new(" a@b.c ", "s", "b");
        assert!(draft.to_mailto_uri().starts_with("mailto:a%40b.c?"));
    }
}
