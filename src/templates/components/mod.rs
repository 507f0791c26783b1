use crate::domain::favorites::FavoritesSet;
use crate::domain::price::format_price;
use crate::domain::{Listing, ListingId};
use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

/// Session-derived bits every page needs to render cards and the header.
pub struct PageCtx<'a> {
    pub favorites: &'a FavoritesSet,
    pub currency: &'a str,
}

impl PageCtx<'_> {
    pub fn price(&self, price: u64) -> String {
        format_price(price, self.currency)
    }
}

pub fn nav_link(href: &str, label: &str, current_title: &str) -> Markup {
    html! {
        a href=(href) class=[(label == current_title).then_some("active")] { (label) }
    }
}

/// POST target for toggling a favorite, coming back to `next` afterwards.
pub fn toggle_favorite_action(id: ListingId, next: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("id", &id.to_string())
        .append_pair("next", next)
        .finish();
    format!("/favorites/toggle?{query}")
}

pub fn favorite_button(id: ListingId, is_favorite: bool, next: &str) -> Markup {
    html! {
        form method="post" action=(toggle_favorite_action(id, next)) class="favorite-form" {
            button
                type="submit"
                class=(if is_favorite { "favorite is-favorite" } else { "favorite" })
                aria-pressed=(is_favorite.to_string())
            {
                @if is_favorite { "♥ Saved" } @else { "♡ Save" }
            }
        }
    }
}

/// POST form that selects the listing and lands on the map.
pub fn show_on_map_button(id: ListingId) -> Markup {
    html! {
        form method="post" action=(format!("/map/select?id={id}")) class="map-form" {
            button type="submit" { "Show on map" }
        }
    }
}

pub fn listing_facts(listing: &Listing) -> Markup {
    html! {
        div class="facts" {
            span { (format!("{} m²", listing.area)) }
            span { (listing.rooms) " rooms" }
        }
    }
}

pub fn listing_card(ctx: &PageCtx, listing: &Listing, next: &str) -> Markup {
    html! {
        article class="card listing-card" {
            div class="card-image" {
                img src=(listing.image) alt=(listing.title);
                span class="badge category" { (listing.category.label()) }
                (favorite_button(listing.id, ctx.favorites.contains(listing.id), next))
            }
            div class="card-body" {
                h3 { a href=(format!("/listings/{}", listing.id)) { (listing.title) } }
                p class="description" { (listing.description) }
                (listing_facts(listing))
                div class="price" { (ctx.price(listing.price)) }
                (show_on_map_button(listing.id))
            }
        }
    }
}
