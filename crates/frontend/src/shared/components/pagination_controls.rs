use crate::shared::icons::icon;
use leptos::prelude::*;

/// Диапазон строк текущей страницы в виде "1–5 of 12"
pub fn page_range_label(page: usize, page_size: usize, total_count: usize) -> String {
    if total_count == 0 {
        return "0–0 of 0".to_string();
    }
    if page_size == 0 {
        return format!("1–{} of {}", total_count, total_count);
    }
    let from = page * page_size + 1;
    let to = ((page + 1) * page_size).min(total_count);
    format!("{}–{} of {}", from, to, total_count)
}

/// PaginationControls component - client-side pagination for tables
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed, already clamped to the last page)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let fallback_size = page_size_options.first().copied().unwrap_or(5);

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">"Rows per page:"</span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(fallback_size);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <span class="pagination-info">
                {move || page_range_label(current_page.get(), page_size.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=move || current_page.get() == 0
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= total_pages.get()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_range_label() {
        assert_eq!(page_range_label(0, 5, 12), "1–5 of 12");
        assert_eq!(page_range_label(2, 5, 12), "11–12 of 12");
        assert_eq!(page_range_label(0, 5, 0), "0–0 of 0");
        assert_eq!(page_range_label(0, 0, 7), "1–7 of 7");
    }
}
