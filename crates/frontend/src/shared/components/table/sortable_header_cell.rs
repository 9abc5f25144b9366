//! Компонент сортируемой ячейки заголовка таблицы
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Price"
//!     sort_field="price"
//!     sort_model=Memo::new(move |_| state.with(|s| s.sort_model.clone()))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SortItem};
use leptos::prelude::*;
use thaw::*;

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Показывает индикатор сортировки (▲▼) и сообщает о клике через `on_sort`.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    /// Текущая модель сортировки
    #[prop(into)]
    sort_model: Signal<Vec<SortItem>>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=true min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_field_for_click.clone())
            >
                {label}
                <span class=move || {
                    sort_model.with(|model| get_sort_class(model, &sort_field_for_class))
                }>
                    {move || {
                        sort_model.with(|model| get_sort_indicator(model, &sort_field_for_indicator))
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
