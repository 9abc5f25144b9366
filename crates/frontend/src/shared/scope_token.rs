use leptos::prelude::on_cleanup;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Флаг отмены для асинхронных задач компонента
///
/// Задача, запущенная через `spawn_local`, проверяет токен перед записью в
/// сигналы: после размонтирования компонента результат отбрасывается.
#[derive(Clone, Debug, Default)]
pub struct ScopeToken {
    cancelled: Arc<AtomicBool>,
}

impl ScopeToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Токен, который отменяется при очистке текущего владельца (компонента)
    pub fn bound_to_owner() -> Self {
        let token = Self::new();
        let on_drop = token.clone();
        on_cleanup(move || on_drop.cancel());
        token
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
