use crate::shared::icons::icon;
use crate::shared::scope_token::ScopeToken;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;

/// Сообщение появилось или сменилось с прошлого запуска эффекта
fn is_new_message(prev: Option<&Option<String>>, current: &Option<String>) -> bool {
    current.is_some() && prev != Some(current)
}

/// Временное уведомление об ошибке
///
/// Показывается, пока `message` содержит текст и пользователь его не закрыл.
/// Само скрывается через `timeout_ms`.
#[component]
pub fn ErrorNotification(
    #[prop(into)] message: Signal<Option<String>>,
    timeout_ms: u32,
) -> impl IntoView {
    let open = RwSignal::new(true);
    let token = ScopeToken::bound_to_owner();

    // Закрытый баннер открывается заново только новым сообщением
    Effect::new(move |prev: Option<Option<String>>| {
        let current = message.get();
        if is_new_message(prev.as_ref(), &current) {
            open.set(true);
            let token = token.clone();
            leptos::task::spawn_local(async move {
                TimeoutFuture::new(timeout_ms).await;
                if !token.is_cancelled() {
                    open.set(false);
                }
            });
        }
        current
    });

    move || {
        let text = message.get().filter(|_| open.get())?;
        Some(view! {
            <div class="notification">
                <MessageBar intent=MessageBarIntent::Error>
                    <div style="display: flex; align-items: center; gap: 8px; width: 100%;">
                        <span style="flex: 1;">{text}</span>
                        <Button
                            appearance=ButtonAppearance::Transparent
                            size=ButtonSize::Small
                            on_click=move |_| open.set(false)
                        >
                            {icon("x")}
                        </Button>
                    </div>
                </MessageBar>
            </div>
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_new_message() {
        let failed = Some("Failed to fetch products".to_string());
        assert!(is_new_message(None, &failed));
        assert!(is_new_message(Some(&None), &failed));
        assert!(!is_new_message(Some(&failed), &failed));
        assert!(!is_new_message(None, &None));
        assert!(!is_new_message(Some(&failed), &None));
        assert!(is_new_message(Some(&failed), &Some("Other".to_string())));
    }
}
