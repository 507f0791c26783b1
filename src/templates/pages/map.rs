// templates/pages/map.rs

use crate::domain::session::Marker;
use crate::domain::Listing;
use crate::templates::components::{favorite_button, listing_facts};
use crate::templates::{desktop_layout, PageCtx};
use maud::{html, Markup};

pub struct MapVm<'a> {
    pub markers: &'a [Marker<'a>],
    pub selected: Option<&'a Listing>,
}

pub fn map_page(ctx: &PageCtx, vm: &MapVm) -> Markup {
    desktop_layout(
        "Map",
        ctx.favorites.len(),
        html! {
            h1 { "Interactive map" }
            p class="muted" { "Where the listings are" }

            div class="map-layout" {
                div class="map-surface" style="position: relative;" {
                    @for marker in vm.markers {
                        (map_marker(ctx, marker))
                    }
                }

                aside class="map-panel" {
                    @match vm.selected {
                        Some(listing) => {
                            (selected_panel(ctx, listing))
                        }
                        None => {
                            div class="card hint" {
                                p { "Click a marker to see the listing." }
                            }
                        }
                    }
                    div class="card legend" {
                        p { span class="pin" {} " Available listings" }
                        p { span class="pin selected" {} " Selected listing" }
                    }
                }
            }
        },
    )
}

fn map_marker(ctx: &PageCtx, marker: &Marker) -> Markup {
    let (left, top) = marker.point.as_percent();
    let listing = marker.listing;

    html! {
        form
            method="post"
            action=(format!("/map/select?id={}", listing.id))
            class=(if marker.selected { "marker selected" } else { "marker" })
            style=(format!("position: absolute; left: {left:.2}%; top: {top:.2}%;"))
            data-listing=(listing.id.to_string())
        {
            button type="submit" title=(listing.title) { "📍" }
            @if marker.selected {
                div class="marker-popup" {
                    div class="title" { (listing.title) }
                    div class="price" { (ctx.price(listing.price)) }
                    (listing_facts(listing))
                }
            }
        }
    }
}

fn selected_panel(ctx: &PageCtx, listing: &Listing) -> Markup {
    html! {
        article class="card selected-listing" {
            img src=(listing.image) alt=(listing.title);
            h3 { (listing.title) }
            span class="badge category" { (listing.category.label()) }
            p { (listing.description) }
            (listing_facts(listing))
            div class="price" { (ctx.price(listing.price)) }
            (favorite_button(listing.id, ctx.favorites.contains(listing.id), "/map"))
            a href=(format!("/listings/{}", listing.id)) { "Details" }
            form method="post" action="/map/clear" {
                button type="submit" { "Clear selection" }
            }
        }
    }
}
