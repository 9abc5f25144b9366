pub mod state;

use self::state::{create_state, CatalogSignals, CategoryOption, ProductPage};
use crate::domain::a001_product::api::fetch_products;
use crate::shared::api_utils::products_url;
use crate::shared::components::error_notification::ErrorNotification;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::AppConfig;
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::next_sort_model;
use crate::shared::scope_token::ScopeToken;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use thaw::*;

/// Колонка таблицы каталога
struct Column {
    field: &'static str,
    label: &'static str,
    min_width: f64,
    sortable: bool,
    align: &'static str,
}

const fn column(field: &'static str, label: &'static str, min_width: f64) -> Column {
    Column {
        field,
        label,
        min_width,
        sortable: true,
        align: "left",
    }
}

const COLUMNS: &[Column] = &[
    column("id", "ID", 70.0),
    Column {
        field: "image",
        label: "Image",
        min_width: 150.0,
        sortable: false,
        align: "left",
    },
    column("brand", "Brand", 130.0),
    column("name", "Name", 250.0),
    column("description", "Description", 300.0),
    column("sku_code", "SKU Code", 130.0),
    column("main_category", "Main Category", 180.0),
    column("marketPlaceSellable", "Market Place Sellable", 180.0),
    column("activation_date", "Activation Date", 180.0),
    column("deactivation_date", "Deactivation Date", 180.0),
    Column {
        field: "price",
        label: "Price",
        min_width: 100.0,
        sortable: true,
        align: "right",
    },
];

#[component]
#[allow(non_snake_case)]
pub fn ProductCatalogList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let state = create_state(config.catalog.default_page_size);
    let token = ScopeToken::bound_to_owner();

    // RwSignals bound to controls
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());

    // Sync RwSignals → state
    Effect::new(move |_| {
        let v = search.get();
        state.update(|s| s.set_search(v));
    });
    Effect::new(move |_| {
        let v = category.get();
        state.update(|s| s.set_category(v));
    });

    let url = products_url(&config.api);
    let load = move || {
        let url = url.clone();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let result = fetch_products(&url).await;
            if token.is_cancelled() {
                log::debug!("Product catalog unmounted, dropping fetch result");
                return;
            }
            match result {
                Ok(products) => {
                    log::info!("Fetched {} products", products.len());
                    state.update(|s| s.apply_loaded(products));
                }
                Err(e) => state.update(|s| s.apply_failed(&e)),
            }
        });
    };

    // Initial load
    Effect::new(move |_| load());

    let CatalogSignals {
        is_loading,
        error,
        sort_model,
        category_options,
        visible,
    } = CatalogSignals::new(state);

    let on_sort = Callback::new(move |field: String| {
        state.update(|s| {
            let next = next_sort_model(&s.sort_model, &field);
            s.set_sort_model(next);
        });
    });

    let go_to_page = Callback::new(move |page: usize| {
        state.update(|s| s.set_page(page));
    });

    let change_page_size = Callback::new(move |size: usize| {
        state.update(|s| {
            s.set_page_size(size);
            s.set_page(0);
        });
    });

    let placeholder_image = config.catalog.placeholder_image_url.clone();
    let page_size_options = config.catalog.page_size_options.clone();

    view! {
        <div id="a001_product--list" class="page" style="text-align: center;">
            <h1 class="page__title" style="font-family: Arial, sans-serif; margin: 20px 0;">
                "Product Catalog"
            </h1>

            <div class="filter-panel">
                <Flex gap=FlexGap::Large align=FlexAlign::End justify=FlexJustify::Center>
                    <div style="width: 260px;">
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Search by Name"</Label>
                            <Input value=search placeholder="Name..." />
                        </Flex>
                    </div>
                    <div style="min-width: 160px;">
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Category"</Label>
                            <Select value=category>
                                {move || category_options.get().into_iter().map(|opt: CategoryOption| {
                                    view! { <option value={opt.value}>{opt.label}</option> }
                                }).collect_view()}
                            </Select>
                        </Flex>
                    </div>
                </Flex>
            </div>

            {move || if is_loading.get() {
                view! {
                    <div style="display: flex; justify-content: center; align-items: center; height: 60vh;">
                        <Spinner />
                    </div>
                }.into_any()
            } else {
                let placeholder_image = placeholder_image.clone();
                let page_size_options = page_size_options.clone();
                view! {
                    <div class="table-wrapper" style="width: 100%;">
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    {COLUMNS.iter().map(|col| if col.sortable {
                                        view! {
                                            <SortableHeaderCell
                                                label=col.label
                                                sort_field=col.field
                                                sort_model=sort_model
                                                on_sort=on_sort
                                                min_width=col.min_width
                                                align=col.align
                                            />
                                        }.into_any()
                                    } else {
                                        view! {
                                            <TableHeaderCell min_width=col.min_width>{col.label}</TableHeaderCell>
                                        }.into_any()
                                    }).collect_view()}
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    let placeholder_image = placeholder_image.clone();
                                    visible.with(|page: &ProductPage| {
                                        page.rows.iter().cloned().map(|product| {
                                            product_row(product, placeholder_image.clone())
                                        }).collect_view()
                                    })
                                }}
                            </TableBody>
                        </Table>
                        <PaginationControls
                            current_page=Signal::derive(move || visible.with(|p| p.page))
                            total_pages=Signal::derive(move || visible.with(|p| p.total_pages))
                            total_count=Signal::derive(move || visible.with(|p| p.total_count))
                            page_size=Signal::derive(move || state.with(|s| s.page_size))
                            on_page_change=go_to_page
                            on_page_size_change=change_page_size
                            page_size_options=page_size_options
                        />
                    </div>
                }.into_any()
            }}

            <ErrorNotification message=error timeout_ms=config.catalog.notification_timeout_ms />
        </div>
    }
}

fn product_row(product: Product, placeholder_image: String) -> impl IntoView {
    let alt_text = product.name.clone();
    view! {
        <TableRow>
            <TableCell><TableCellLayout>{product.id.to_string()}</TableCellLayout></TableCell>
            <TableCell>
                <TableCellLayout>
                    <img
                        src=placeholder_image
                        alt=alt_text
                        style="width: 50px; height: 50px; object-fit: cover;"
                    />
                </TableCellLayout>
            </TableCell>
            <TableCell><TableCellLayout>{product.brand}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{product.name}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{product.description}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{product.sku_code}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{product.main_category}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{product.market_place_sellable}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{format_date(product.activation_date)}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{format_date(product.deactivation_date)}</TableCellLayout></TableCell>
            <TableCell>
                <TableCellLayout attr:style="justify-content: flex-end;">
                    {product.price.to_string()}
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}
