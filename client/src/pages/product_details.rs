//! Single listing with owner contact form.

#[cfg(test)]
#[path = "product_details_test.rs"]
mod product_details_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::main_layout::MainLayout;
use crate::components::notice_bar::notify;
use crate::net::ConsoleClient;
use crate::net::types::{ContactOwner, Product, ProductDetails};
use crate::state::notice::{NoticeKind, NoticeState};

pub(crate) fn parse_product_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Build the contact request; the owner's email is required.
pub(crate) fn contact_message(details: &ProductDetails, text: &str) -> Result<ContactOwner, &'static str> {
    let email = details
        .product_owner_information
        .as_ref()
        .and_then(|owner| owner.email.as_deref())
        .filter(|email| !email.trim().is_empty())
        .ok_or("Owner email not found.")?;
    let text = text.trim();
    if text.is_empty() {
        return Err("Please enter a message.");
    }
    Ok(ContactOwner {
        message: text.to_owned(),
        recipient_email: email.to_owned(),
        product_id: details.product.id,
    })
}

/// Amenity names from the listing. The backend sends either a JSON array or
/// a string holding one (or a comma-separated list).
pub(crate) fn amenity_names(product: &Product) -> Vec<String> {
    use serde_json::Value;

    fn from_array(items: &[Value]) -> Vec<String> {
        items.iter().filter_map(Value::as_str).map(str::to_owned).collect()
    }

    match &product.desired_amenities {
        Some(Value::Array(items)) => from_array(items),
        Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => from_array(&items),
            _ => text
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        },
        _ => Vec::new(),
    }
}

fn detail_rows(product: &Product) -> Vec<(&'static str, String)> {
    let number = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_else(|| "N/A".to_owned());
    let text = |v: &Option<String>| v.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| "N/A".to_owned());
    vec![
        ("Type", text(&product.kind)),
        ("Investment Volume", number(product.price)),
        ("Collected Amount", number(product.collected_amount)),
        ("Amount of Modules", number(product.amount_of_module)),
        ("Min Persons", number(product.min_persons)),
        ("Max Persons", number(product.max_persons)),
        ("Country", text(&product.country)),
        ("City", text(&product.city)),
        ("Location Type", text(&product.location_type)),
        ("Financial Aspects", text(&product.financial_aspects)),
        ("Environment Area", text(&product.enviroment_area)),
        ("Special Attractions", text(&product.special_attractions)),
        ("Public Transportation", text(&product.public_transportation)),
        ("Other Details", text(&product.other_details)),
        ("Investor Requirements", text(&product.requirements_investors)),
    ]
}

#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let client = expect_context::<ConsoleClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();

    let details = RwSignal::new(None::<ProductDetails>);
    let loading = RwSignal::new(true);
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    {
        let client = client.clone();
        Effect::new(move || {
            let id = params.with(|p| p.get("id")).as_deref().and_then(parse_product_id);
            let Some(id) = id else {
                details.set(None);
                loading.set(false);
                return;
            };
            loading.set(true);
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match client.product_details(id).await {
                    Ok(found) => details.set(Some(found)),
                    Err(e) => {
                        log::warn!("product {id}: {e}");
                        details.set(None);
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get() {
            return;
        }
        let Some(current) = details.get_untracked() else {
            return;
        };
        let request = match contact_message(&current, &message.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                notify(notices, NoticeKind::Error, msg);
                return;
            }
        };
        sending.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match client.contact_owner(&request).await {
                Ok(()) => {
                    notify(notices, NoticeKind::Success, "Message sent successfully!");
                    message.set(String::new());
                }
                Err(e) => {
                    log::warn!("contact owner: {e}");
                    notify(notices, NoticeKind::Error, "Failed to send message. Please try again.");
                }
            }
            sending.set(false);
        });
    };

    view! {
        <MainLayout title="Product Details">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="spinner">"Loading..."</div> }
            >
                {move || match details.get() {
                    None => view! { <h3 class="product__missing">"Product Not Found"</h3> }.into_any(),
                    Some(found) => {
                        let product = found.product.clone();
                        let owner = found.product_owner_information.clone();
                        view! {
                            <article class="product">
                                <div class="product__gallery">
                                    {product
                                        .image_urls
                                        .iter()
                                        .map(|url| view! { <img src=url.clone() alt=product.name.clone() /> })
                                        .collect_view()}
                                </div>
                                <h2>{product.name.clone()}</h2>
                                <p>{product.description.clone()}</p>
                                <dl class="product__facts">
                                    {detail_rows(&product)
                                        .into_iter()
                                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                        .collect_view()}
                                </dl>
                                <ul class="product__amenities">
                                    {amenity_names(&product)
                                        .into_iter()
                                        .map(|name| view! { <li>{name}</li> })
                                        .collect_view()}
                                </ul>
                                <section class="product__owner">
                                    <h4>"Owner"</h4>
                                    <p>
                                        {owner.as_ref().map(|o| o.display_name()).unwrap_or_else(|| "N/A".to_owned())}
                                    </p>
                                    <p>{owner.and_then(|o| o.email).unwrap_or_else(|| "N/A".to_owned())}</p>
                                </section>
                            </article>
                        }
                        .into_any()
                    }
                }}
                <form class="contact-form" on:submit=on_send.clone()>
                    <label>
                        "Your Message"
                        <textarea
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                        "Contact Owner"
                    </button>
                </form>
            </Show>
        </MainLayout>
    }
}
