/// Универсальные утилиты для работы со списками (поиск, сортировка, пагинация)
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Элемент модели сортировки: поле и направление
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortItem {
    pub field: String,
    pub sort: SortDirection,
}

impl SortItem {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            sort: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            sort: SortDirection::Desc,
        }
    }
}

/// Сортирует список по модели сортировки (стабильно, по ключам по порядку)
pub fn sort_by_model<T: Sortable>(items: &mut [T], model: &[SortItem]) {
    if model.is_empty() {
        return;
    }
    items.sort_by(|a, b| {
        model
            .iter()
            .map(|item| {
                let cmp = a.compare_by_field(b, &item.field);
                match item.sort {
                    SortDirection::Asc => cmp,
                    SortDirection::Desc => cmp.reverse(),
                }
            })
            .find(|cmp| cmp.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Модель сортировки после клика по заголовку колонки
///
/// asc → desc → без сортировки; клик по другой колонке начинает с asc.
pub fn next_sort_model(current: &[SortItem], field: &str) -> Vec<SortItem> {
    match current.first() {
        Some(item) if item.field == field => match item.sort {
            SortDirection::Asc => vec![SortItem::desc(field)],
            SortDirection::Desc => Vec::new(),
        },
        _ => vec![SortItem::asc(field)],
    }
}

/// Направление сортировки колонки, если она участвует в модели
pub fn sort_direction_of(model: &[SortItem], field: &str) -> Option<SortDirection> {
    model.iter().find(|item| item.field == field).map(|item| item.sort)
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(model: &[SortItem], field: &str) -> &'static str {
    match sort_direction_of(model, field) {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => " ⇅",
    }
}

/// CSS-класс индикатора сортировки
pub fn get_sort_class(model: &[SortItem], field: &str) -> &'static str {
    if sort_direction_of(model, field).is_some() {
        "table__sort-icon table__sort-icon--active"
    } else {
        "table__sort-icon"
    }
}

/// Количество страниц; пустой список — одна пустая страница
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 || total == 0 {
        return 1;
    }
    total.div_ceil(page_size)
}

/// Номер страницы, ограниченный последней доступной
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.min(page_count(total, page_size) - 1)
}

/// Срез строк для отображаемой страницы. `page_size == 0` — без пагинации.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page_size == 0 {
        return items.to_vec();
    }
    let page = clamp_page(page, items.len(), page_size);
    items
        .iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect()
}
