use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Generic text for any failed request; details go to the console only
pub const TRANSPORT_ERROR_TEXT: &str = "An error occurred. Please check console.";

/// `"<Entity> created successfully!"` or `"<Entity> updated successfully!"`
pub fn saved_text(entity: &str, updated: bool) -> String {
    let verb = if updated { "updated" } else { "created" };
    format!("{} {} successfully!", entity, verb)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    fn title(self) -> &'static str {
        match self {
            AlertKind::Success => "Success",
            AlertKind::Error => "Error",
        }
    }
}

#[derive(Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub text: String,
    /// Runs once the user dismisses the alert
    pub on_dismiss: Option<Callback<()>>,
}

/// Сервис для централизованного показа блокирующих сообщений
///
/// At most one alert is shown at a time; a new alert replaces the current
/// one without running its dismiss callback.
#[derive(Clone, Copy)]
pub struct ModalService {
    current: RwSignal<Option<Alert>>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn show(&self, alert: Alert) {
        self.current.set(Some(alert));
    }

    /// Validation or other user-facing error
    pub fn error(&self, text: impl Into<String>) {
        self.show(Alert {
            kind: AlertKind::Error,
            text: text.into(),
            on_dismiss: None,
        });
    }

    /// Failed request: the cause is logged, the user sees the generic text
    pub fn transport_error(&self, cause: &str) {
        log::error!("{}", cause);
        self.error(TRANSPORT_ERROR_TEXT);
    }

    pub fn success_then(&self, text: impl Into<String>, on_dismiss: Callback<()>) {
        self.show(Alert {
            kind: AlertKind::Success,
            text: text.into(),
            on_dismiss: Some(on_dismiss),
        });
    }

    /// Закрыть сообщение и выполнить его callback
    pub fn dismiss(&self) {
        let closed = self.current.try_update(|current| current.take()).flatten();
        if let Some(callback) = closed.and_then(|alert| alert.on_dismiss) {
            callback.run(());
        }
    }
}

pub fn use_modal() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

/// Renders the current alert over the whole application
#[component]
pub fn ModalRenderer() -> impl IntoView {
    let modal = use_modal();

    move || {
        modal.current.get().map(|alert| {
            let on_close = Callback::new(move |_| modal.dismiss());
            let (icon_name, color) = match alert.kind {
                AlertKind::Success => ("check-circle", "var(--color-success)"),
                AlertKind::Error => ("alert-circle", "var(--color-error)"),
            };
            view! {
                <Modal title=alert.kind.title().to_string() on_close=on_close>
                    <div class="alert-body" style="display: flex; align-items: center; gap: 16px;">
                        <span style=format!("color: {};", color)>{icon(icon_name)}</span>
                        <span class="alert-body__text">{alert.text}</span>
                    </div>
                    <div class="modal-footer" style="display: flex; justify-content: flex-end; margin-top: 16px;">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| on_close.run(())>
                            "OK"
                        </Button>
                    </div>
                </Modal>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_text() {
        assert_eq!(saved_text("Employee", false), "Employee created successfully!");
        assert_eq!(saved_text("Supplier", true), "Supplier updated successfully!");
    }
}
