// templates/pages/catalog.rs

use crate::domain::filter::{CategoryFilter, FilterDefaults, FilterSpec, RoomsFilter};
use crate::domain::{Category, Listing};
use crate::templates::{desktop_layout, listing_card, PageCtx};
use maud::{html, Markup};

/// Room counts offered in the filter form.
const ROOM_OPTIONS: [u32; 4] = [1, 3, 4, 5];

pub struct CatalogVm<'a> {
    pub listings: &'a [&'a Listing],
    pub is_filtered: bool,
    pub spec: &'a FilterSpec,
    pub defaults: &'a FilterDefaults,
}

pub fn catalog_page(ctx: &PageCtx, vm: &CatalogVm) -> Markup {
    desktop_layout(
        "Catalog",
        ctx.favorites.len(),
        html! {
            h1 { "Catalog" }
            p class="muted" { "Find the right home for your family" }

            (filter_form(ctx, vm))

            @if vm.listings.is_empty() {
                div class="empty-state" {
                    @if vm.is_filtered {
                        p { "No listings match these filters." }
                    } @else {
                        p { "The catalog is empty." }
                    }
                }
            } @else {
                div class="grid" {
                    @for listing in vm.listings {
                        (listing_card(ctx, listing, "/catalog"))
                    }
                }
            }
        },
    )
}

fn filter_form(ctx: &PageCtx, vm: &CatalogVm) -> Markup {
    let spec = vm.spec;
    let defaults = vm.defaults;
    let mut rooms = ROOM_OPTIONS.to_vec();
    if let RoomsFilter::Exactly(n) = spec.rooms {
        if !rooms.contains(&n) {
            rooms.push(n);
            rooms.sort_unstable();
        }
    }

    html! {
        section class="card filters" {
            h3 { "Filters" }
            form method="get" action="/catalog" id="filters" {
                fieldset {
                    legend {
                        "Price: " (ctx.price(spec.price.min)) " – " (ctx.price(spec.price.max))
                    }
                    input type="number" name="price_min" min="0" max=(defaults.price_max)
                        step=(defaults.price_step) value=(spec.price.min);
                    input type="number" name="price_max" min="0" max=(defaults.price_max)
                        step=(defaults.price_step) value=(spec.price.max);
                }
                fieldset {
                    legend {
                        "Area: " (spec.area.min.to_string()) " – " (spec.area.max.to_string()) " m²"
                    }
                    input type="number" name="area_min" min="0" max=(defaults.area_max.to_string())
                        step=(defaults.area_step.to_string()) value=(spec.area.min.to_string());
                    input type="number" name="area_max" min="0" max=(defaults.area_max.to_string())
                        step=(defaults.area_step.to_string()) value=(spec.area.max.to_string());
                }
                label {
                    "Property type"
                    select name="category" {
                        option value="any" selected[spec.category == CategoryFilter::Any] { "All types" }
                        @for category in Category::ALL {
                            option value=(category.slug())
                                selected[spec.category == CategoryFilter::Only(category)]
                            { (category.label()) }
                        }
                    }
                }
                label {
                    "Rooms"
                    select name="rooms" {
                        option value="any" selected[spec.rooms == RoomsFilter::Any] { "Any" }
                        @for n in &rooms {
                            option value=(n) selected[spec.rooms == RoomsFilter::Exactly(*n)] {
                                (n) @if *n == 1 { " room" } @else { " rooms" }
                            }
                        }
                    }
                }
                button type="submit" class="primary" { "Apply" }
            }
            div class="filters-footer" {
                p { "Found: " strong { (vm.listings.len()) } }
                form method="post" action="/catalog/reset" {
                    button type="submit" { "Reset filters" }
                }
            }
        }
    }
}
