use crate::domain::a001_product::api::ProductFetchError;
use crate::shared::list_utils::{
    clamp_page, filter_list, page_count, page_slice, sort_by_model, Searchable, SortItem,
    Sortable,
};
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Сообщение об ошибке загрузки, одинаковое для всех причин
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch products";

/// Поле, по которому каталог сортируется по умолчанию
pub const DEFAULT_SORT_FIELD: &str = "price";

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "brand" => self.brand.to_lowercase().cmp(&other.brand.to_lowercase()),
            "description" => self
                .description
                .to_lowercase()
                .cmp(&other.description.to_lowercase()),
            "sku_code" => self
                .sku_code
                .to_lowercase()
                .cmp(&other.sku_code.to_lowercase()),
            "main_category" => self
                .main_category
                .to_lowercase()
                .cmp(&other.main_category.to_lowercase()),
            "marketPlaceSellable" => self
                .market_place_sellable
                .to_lowercase()
                .cmp(&other.market_place_sellable.to_lowercase()),
            "activation_date" => self.activation_date.cmp(&other.activation_date),
            "deactivation_date" => self.deactivation_date.cmp(&other.deactivation_date),
            "price" => self
                .price
                .partial_cmp(&other.price)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

/// Вариант выпадающего списка категорий
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

impl CategoryOption {
    /// Пустое значение — фильтр по категории не применяется
    pub fn no_filter() -> Self {
        Self {
            value: String::new(),
            label: "None".to_string(),
        }
    }
}

/// Товары, у которых имя содержит `search` (без учёта регистра) и категория
/// совпадает с `category`, если она выбрана
pub fn filter_products(products: &[Product], search: &str, category: &str) -> Vec<Product> {
    let by_name = filter_list(products, search);
    if category.is_empty() {
        return by_name;
    }
    by_name
        .into_iter()
        .filter(|p| p.main_category == category)
        .collect()
}

/// Уникальные категории в порядке первого появления, первым — "без фильтра"
pub fn category_options(products: &[Product]) -> Vec<CategoryOption> {
    let mut seen = HashSet::new();
    let mut options = vec![CategoryOption::no_filter()];
    for product in products {
        let category = product.main_category.as_str();
        if category.is_empty() || !seen.insert(category) {
            continue;
        }
        options.push(CategoryOption {
            value: category.to_string(),
            label: category.to_string(),
        });
    }
    options
}

/// Отображаемая страница таблицы
#[derive(Clone, Debug, PartialEq)]
pub struct ProductPage {
    pub rows: Vec<Product>,
    /// Номер страницы после ограничения последней доступной
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductCatalogState {
    // Данные
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,

    // Фильтры
    pub search: String,
    pub category: String,

    // Клиентская пагинация
    pub page: usize,
    pub page_size: usize,

    // Сортировка
    pub sort_model: Vec<SortItem>,
}

impl Default for ProductCatalogState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            error: None,
            search: String::new(),
            category: String::new(),
            page: 0,
            page_size: 5,
            sort_model: vec![SortItem::asc(DEFAULT_SORT_FIELD)],
        }
    }
}

impl ProductCatalogState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// Загрузка завершилась успешно
    pub fn apply_loaded(&mut self, products: Vec<Product>) {
        self.products = products;
        self.loading = false;
    }

    /// Загрузка завершилась ошибкой: список не трогаем
    pub fn apply_failed(&mut self, error: &ProductFetchError) {
        log::error!("Failed to fetch products: {}", error);
        self.error = Some(FETCH_ERROR_MESSAGE.to_string());
        self.loading = false;
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
    }

    pub fn set_category(&mut self, category: String) {
        self.category = category;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
    }

    pub fn set_sort_model(&mut self, sort_model: Vec<SortItem>) {
        self.sort_model = sort_model;
    }

    pub fn filtered(&self) -> Vec<Product> {
        filter_products(&self.products, &self.search, &self.category)
    }

    pub fn category_options(&self) -> Vec<CategoryOption> {
        category_options(&self.products)
    }

    /// Отфильтрованные, отсортированные и нарезанные на страницы строки
    pub fn visible_page(&self) -> ProductPage {
        let mut rows = self.filtered();
        sort_by_model(&mut rows, &self.sort_model);
        let total_count = rows.len();
        ProductPage {
            page: clamp_page(self.page, total_count, self.page_size),
            total_pages: page_count(total_count, self.page_size),
            rows: page_slice(&rows, self.page, self.page_size),
            total_count,
        }
    }
}

pub fn create_state(page_size: usize) -> RwSignal<ProductCatalogState> {
    RwSignal::new(ProductCatalogState::with_page_size(page_size))
}

/// Производные сигналы состояния каталога
///
/// Каждый `Memo` уведомляет подписчиков только при изменении своего значения:
/// ввод в поиск не перерисовывает баннер ошибки и не пересоздаёт таблицу.
#[derive(Clone, Copy)]
pub struct CatalogSignals {
    pub is_loading: Memo<bool>,
    pub error: Memo<Option<String>>,
    pub sort_model: Memo<Vec<SortItem>>,
    pub category_options: Memo<Vec<CategoryOption>>,
    pub visible: Memo<ProductPage>,
}

impl CatalogSignals {
    pub fn new(state: RwSignal<ProductCatalogState>) -> Self {
        Self {
            is_loading: Memo::new(move |_| state.with(|s| s.loading)),
            error: Memo::new(move |_| state.with(|s| s.error.clone())),
            sort_model: Memo::new(move |_| state.with(|s| s.sort_model.clone())),
            category_options: Memo::new(move |_| {
                state.with(ProductCatalogState::category_options)
            }),
            visible: Memo::new(move |_| state.with(ProductCatalogState::visible_page)),
        }
    }
}
