//! Marketplace: property list with server-side sort/filter and local search.
//!
//! Sort, price-range and amenity fetches can overlap; each one is tagged by a
//! [`RequestSequencer`] and only the most recently issued result is shown.
//! Text and location search narrow the fetched list locally without
//! discarding it.

#[cfg(test)]
#[path = "marketplace_test.rs"]
mod marketplace_test;

use leptos::prelude::*;

use crate::components::main_layout::MainLayout;
use crate::components::notice_bar::notify;
use crate::net::ConsoleClient;
use crate::net::error::ApiError;
use crate::net::products::PriceOrder;
use crate::net::types::Product;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::Role;
use crate::util::latest::RequestSequencer;
use crate::util::route_guard::{AppRoute, product_path};

pub(crate) const PRICE_MIN: f64 = 0.0;
pub(crate) const PRICE_MAX: f64 = 100_000.0;
const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300";
const LOCATION_TYPES: [&str; 3] = ["Urban", "Coastal", "Rural"];

/// One server-side listing request.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ListQuery {
    All(PriceOrder),
    Price { min: f64, max: f64 },
    Amenity(String),
}

impl ListQuery {
    /// Amenity filter, or the plain list when the input is blank.
    pub(crate) fn amenity(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() { Self::All(PriceOrder::Unsorted) } else { Self::Amenity(input.to_owned()) }
    }

    async fn run(self, client: &ConsoleClient) -> Result<Vec<Product>, ApiError> {
        match self {
            Self::All(order) => client.list_products(order).await,
            Self::Price { min, max } => client.filter_by_price(min, max).await,
            Self::Amenity(name) => client.filter_by_amenity(&name).await,
        }
    }
}

/// `<select>` value to server ordering.
pub(crate) fn price_order_from_value(value: &str) -> PriceOrder {
    match value {
        "price-asc" => PriceOrder::Ascending,
        "price-desc" => PriceOrder::Descending,
        _ => PriceOrder::Unsorted,
    }
}

/// Parse both bounds, falling back to the slider limits, and order them.
pub(crate) fn price_bounds(min: &str, max: &str) -> (f64, f64) {
    let min = min.trim().parse::<f64>().unwrap_or(PRICE_MIN);
    let max = max.trim().parse::<f64>().unwrap_or(PRICE_MAX);
    if min <= max { (min, max) } else { (max, min) }
}

/// Client-side narrowing of an already-fetched list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LocalFilters {
    pub search: String,
    pub location: String,
}

pub(crate) fn apply_local_filters(products: &[Product], filters: &LocalFilters) -> Vec<Product> {
    let search = filters.search.trim();
    let location = filters.location.trim();
    products
        .iter()
        .filter(|p| search.is_empty() || p.matches_text(search))
        .filter(|p| location.is_empty() || p.matches_location(location))
        .cloned()
        .collect()
}

/// Landowners add and delete listings.
pub(crate) fn can_manage(role: Option<Role>) -> bool {
    role == Some(Role::Landowner)
}

fn cover_image(product: &Product) -> String {
    product.image_urls.first().cloned().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned())
}

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let client = expect_context::<ConsoleClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let manage = can_manage(client.session().get().effective_role());
    let sequencer = RequestSequencer::new();
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let order = RwSignal::new(PriceOrder::Unsorted);
    let filters = RwSignal::new(LocalFilters::default());
    let min_price = RwSignal::new(PRICE_MIN.to_string());
    let max_price = RwSignal::new(PRICE_MAX.to_string());
    let amenity = RwSignal::new(String::new());

    let fetch = {
        let client = client.clone();
        Callback::new(move |query: ListQuery| {
            let tag = sequencer.issue();
            loading.set(true);
            let client = client.clone();
            let sequencer = sequencer.clone();
            leptos::task::spawn_local(async move {
                let result = query.run(&client).await;
                sequencer.apply_if_current(tag, result, |result| {
                    loading.set(false);
                    match result {
                        Ok(list) => products.set(list),
                        Err(e) => {
                            log::warn!("marketplace: {e}");
                            notify(notices, NoticeKind::Error, "Failed to load properties.");
                        }
                    }
                });
            });
        })
    };
    Effect::new(move || fetch.run(ListQuery::All(PriceOrder::Unsorted)));

    let on_delete = Callback::new(move |id: i64| {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match client.delete_product(id).await {
                Ok(()) => {
                    notify(notices, NoticeKind::Success, "Product deleted successfully!");
                    fetch.run(ListQuery::All(order.get_untracked()));
                }
                Err(e) => {
                    log::warn!("marketplace: delete {id} failed: {e}");
                    notify(notices, NoticeKind::Error, "Failed to delete product.");
                }
            }
        });
    });

    let on_reset = move |_| {
        order.set(PriceOrder::Unsorted);
        filters.set(LocalFilters::default());
        min_price.set(PRICE_MIN.to_string());
        max_price.set(PRICE_MAX.to_string());
        amenity.set(String::new());
        fetch.run(ListQuery::All(PriceOrder::Unsorted));
    };

    let visible = move || filters.with(|f| products.with(|list| apply_local_filters(list, f)));

    view! {
        <MainLayout title="Marketplace">
            <div class="marketplace">
                <div class="marketplace__header">
                    <h2>"Marketplace"</h2>
                    {manage
                        .then(|| view! {
                            <a class="btn btn--primary" href=AppRoute::AddMarketplace.path()>
                                "Add New Marketplace"
                            </a>
                        })}
                </div>
                <div class="marketplace__body">
                    <aside class="marketplace__filters">
                        <div class="filter-card">
                            <h5>"Filter by Price"</h5>
                            <input
                                type="number"
                                prop:value=move || min_price.get()
                                on:input=move |ev| min_price.set(event_target_value(&ev))
                            />
                            <input
                                type="number"
                                prop:value=move || max_price.get()
                                on:input=move |ev| max_price.set(event_target_value(&ev))
                            />
                            <button
                                class="btn"
                                on:click=move |_| {
                                    let (min, max) = price_bounds(&min_price.get(), &max_price.get());
                                    fetch.run(ListQuery::Price { min, max });
                                }
                            >
                                "Apply"
                            </button>
                        </div>
                        <div class="filter-card">
                            <h5>"Search Properties"</h5>
                            <input
                                type="text"
                                placeholder="Search by name or description..."
                                prop:value=move || filters.get().search
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    filters.update(|f| f.search = value);
                                }
                            />
                        </div>
                        <div class="filter-card">
                            <h5>"Filter by Amenities"</h5>
                            <input
                                type="text"
                                placeholder="Enter amenity name..."
                                prop:value=move || amenity.get()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    fetch.run(ListQuery::amenity(&value));
                                    amenity.set(value);
                                }
                            />
                        </div>
                        <div class="filter-card">
                            <h5>"Sort By"</h5>
                            <select on:change=move |ev| {
                                let next = price_order_from_value(&event_target_value(&ev));
                                order.set(next);
                                fetch.run(ListQuery::All(next));
                            }>
                                <option value="" selected=move || order.get() == PriceOrder::Unsorted>
                                    "Default"
                                </option>
                                <option value="price-desc" selected=move || order.get() == PriceOrder::Descending>
                                    "Price (High to low)"
                                </option>
                                <option value="price-asc" selected=move || order.get() == PriceOrder::Ascending>
                                    "Price (Low to High)"
                                </option>
                            </select>
                        </div>
                        <div class="filter-card">
                            <h5>"Type of location"</h5>
                            <select on:change=move |ev| {
                                let value = event_target_value(&ev);
                                filters.update(|f| f.location = value);
                            }>
                                <option value="">"Any"</option>
                                {LOCATION_TYPES
                                    .into_iter()
                                    .map(|t| view! { <option value=t>{t}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <button class="btn btn--block" on:click=on_reset>"Reset Filters"</button>
                    </aside>
                    <section class="marketplace__list">
                        <Show
                            when=move || !loading.get()
                            fallback=|| view! { <div class="spinner">"Loading..."</div> }
                        >
                            {move || {
                                let list = visible();
                                if list.is_empty() {
                                    view! { <p class="marketplace__empty">"No properties found."</p> }.into_any()
                                } else {
                                    list.into_iter()
                                        .map(|p| product_card(p, manage, on_delete))
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </Show>
                    </section>
                </div>
            </div>
        </MainLayout>
    }
}

fn product_card(product: Product, manage: bool, on_delete: Callback<i64>) -> impl IntoView {
    let id = product.id;
    let confirming = RwSignal::new(false);
    let image = cover_image(&product);
    let price = product.price.map(|p| format!("${p}")).unwrap_or_else(|| "N/A".to_owned());
    let place = [product.city.clone(), product.country.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <article class="product-card">
            <img class="product-card__image" src=image alt=product.name.clone() />
            <div class="product-card__body">
                <h3>
                    <a href=product_path(id)>{product.name.clone()}</a>
                </h3>
                <p class="product-card__description">{product.description.clone()}</p>
                <p class="product-card__meta">
                    <span>{price}</span>
                    <span>{place}</span>
                    <span>{product.location_type.clone().unwrap_or_default()}</span>
                </p>
                <a class="btn" href=product_path(id)>"View Details"</a>
                {manage
                    .then(|| view! {
                        <Show
                            when=move || confirming.get()
                            fallback=move || view! {
                                <button class="btn btn--danger" on:click=move |_| confirming.set(true)>
                                    "Delete"
                                </button>
                            }
                        >
                            <span class="product-card__confirm">"Delete this product?"</span>
                            <button class="btn" on:click=move |_| confirming.set(false)>"No"</button>
                            <button
                                class="btn btn--danger"
                                on:click=move |_| {
                                    confirming.set(false);
                                    on_delete.run(id);
                                }
                            >
                                "Yes"
                            </button>
                        </Show>
                    })}
            </div>
        </article>
    }
}
