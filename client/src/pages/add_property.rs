//! Add-property form (multipart upload of the listing's text fields).

#[cfg(test)]
#[path = "add_property_test.rs"]
mod add_property_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::main_layout::MainLayout;
use crate::components::notice_bar::notify;
use crate::net::ConsoleClient;
use crate::net::types::{Amenity, PropertyDraft};
use crate::state::notice::{NoticeKind, NoticeState};
use crate::util::route_guard::AppRoute;

const LOCATION_TYPES: [&str; 3] = ["Urban", "Coastal", "Rural"];

/// Raw input values; numbers stay text until submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct PropertyForm {
    pub name: String,
    pub description: String,
    pub kind: String,
    pub price: String,
    pub collected_amount: String,
    pub amount_of_module: String,
    pub min_persons: String,
    pub max_persons: String,
    pub country: String,
    pub city: String,
    pub desired_amenities: Vec<String>,
    pub financial_aspects: String,
    pub enviroment_area: String,
    pub special_attractions: String,
    pub public_transportation: String,
    pub other_details: String,
    pub location_type: String,
    pub requirements_investors: String,
}

fn number(text: &str) -> f64 {
    text.trim().parse().unwrap_or_default()
}

fn count(text: &str) -> u32 {
    text.trim().parse().unwrap_or_default()
}

impl PropertyForm {
    /// Unparseable numbers become zero.
    pub(crate) fn to_draft(&self) -> PropertyDraft {
        PropertyDraft {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            kind: self.kind.trim().to_owned(),
            price: number(&self.price),
            collected_amount: number(&self.collected_amount),
            amount_of_module: number(&self.amount_of_module),
            min_persons: count(&self.min_persons),
            max_persons: count(&self.max_persons),
            country: self.country.trim().to_owned(),
            city: self.city.trim().to_owned(),
            desired_amenities: self.desired_amenities.clone(),
            financial_aspects: self.financial_aspects.clone(),
            enviroment_area: self.enviroment_area.clone(),
            special_attractions: self.special_attractions.clone(),
            public_transportation: self.public_transportation.clone(),
            other_details: self.other_details.clone(),
            location_type: self.location_type.clone(),
            requirements_investors: self.requirements_investors.clone(),
        }
    }

    /// Select `amenity` if absent, otherwise deselect it. Order of first
    /// selection is kept.
    pub(crate) fn toggle_amenity(&mut self, amenity: &str) {
        if let Some(pos) = self.desired_amenities.iter().position(|a| a == amenity) {
            self.desired_amenities.remove(pos);
        } else {
            self.desired_amenities.push(amenity.to_owned());
        }
    }
}

type Getter = fn(&PropertyForm) -> String;
type Setter = fn(&mut PropertyForm, String);

#[component]
pub fn AddPropertyPage() -> impl IntoView {
    let client = expect_context::<ConsoleClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(PropertyForm::default());
    let amenities = RwSignal::new(Vec::<Amenity>::new());
    let busy = RwSignal::new(false);

    {
        let client = client.clone();
        Effect::new(move || {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match client.list_amenities().await {
                    Ok(list) => amenities.set(list),
                    Err(e) => {
                        log::warn!("add property: amenities: {e}");
                        notify(notices, NoticeKind::Error, "Failed to fetch amenities");
                    }
                }
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        let draft = form.get().to_draft();
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match client.add_product(&draft).await {
                Ok(()) => {
                    notify(notices, NoticeKind::Success, "Property added successfully!");
                    navigate(AppRoute::Marketplace.path(), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("add property: {e}");
                    notify(notices, NoticeKind::Error, "Failed to add product.");
                }
            }
            busy.set(false);
        });
    };

    let fields: [(&'static str, &'static str, Getter, Setter); 16] = [
        ("Name", "text", |f| f.name.clone(), |f, v| f.name = v),
        ("Description", "text", |f| f.description.clone(), |f, v| f.description = v),
        ("Type", "text", |f| f.kind.clone(), |f, v| f.kind = v),
        ("Investment Volume", "number", |f| f.price.clone(), |f, v| f.price = v),
        ("Collected Amount", "number", |f| f.collected_amount.clone(), |f, v| f.collected_amount = v),
        ("Amount of Modules", "number", |f| f.amount_of_module.clone(), |f, v| f.amount_of_module = v),
        ("Min Persons", "number", |f| f.min_persons.clone(), |f, v| f.min_persons = v),
        ("Max Persons", "number", |f| f.max_persons.clone(), |f, v| f.max_persons = v),
        ("Country", "text", |f| f.country.clone(), |f, v| f.country = v),
        ("City", "text", |f| f.city.clone(), |f, v| f.city = v),
        ("Financial Aspects", "text", |f| f.financial_aspects.clone(), |f, v| f.financial_aspects = v),
        ("Environment Area", "text", |f| f.enviroment_area.clone(), |f, v| f.enviroment_area = v),
        ("Special Attractions", "text", |f| f.special_attractions.clone(), |f, v| f.special_attractions = v),
        ("Public Transportation", "text", |f| f.public_transportation.clone(), |f, v| f.public_transportation = v),
        ("Other Details", "text", |f| f.other_details.clone(), |f, v| f.other_details = v),
        ("Investor Requirements", "text", |f| f.requirements_investors.clone(), |f, v| f.requirements_investors = v),
    ];

    view! {
        <MainLayout title="Add Property">
            <form class="property-form" on:submit=on_submit>
                {fields
                    .into_iter()
                    .map(|(label, kind, get, set)| {
                        view! {
                            <label class="property-form__field">
                                {label}
                                <input
                                    type=kind
                                    prop:value=move || form.with(get)
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| set(f, value));
                                    }
                                />
                            </label>
                        }
                    })
                    .collect_view()}
                <label class="property-form__field">
                    "Location Type"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.location_type = value);
                    }>
                        <option value="">"Select a location type"</option>
                        {LOCATION_TYPES.into_iter().map(|t| view! { <option value=t>{t}</option> }).collect_view()}
                    </select>
                </label>
                <fieldset class="property-form__amenities">
                    <legend>"Desired Amenities"</legend>
                    {move || {
                        amenities
                            .get()
                            .into_iter()
                            .map(|a| {
                                let name = a.name;
                                let checked_name = name.clone();
                                let toggle_name = name.clone();
                                view! {
                                    <label class="property-form__amenity">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form.with(|f| f.desired_amenities.contains(&checked_name))
                                            on:change=move |_| form.update(|f| f.toggle_amenity(&toggle_name))
                                        />
                                        {name}
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                </fieldset>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Add Property"
                </button>
            </form>
        </MainLayout>
    }
}
