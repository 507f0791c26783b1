use crate::domain::Listing;
use crate::templates::{desktop_layout, listing_card, PageCtx};
use maud::{html, Markup};

pub fn favorites_page(ctx: &PageCtx, listings: &[&Listing]) -> Markup {
    desktop_layout(
        "Favorites",
        ctx.favorites.len(),
        html! {
            h1 { "Favorites" }
            p class="muted" { "Listings you have saved" }

            @if listings.is_empty() {
                div class="empty-state" {
                    p { "You haven't saved any listings yet." }
                    a href="/catalog" class="button" { "Go to catalog" }
                }
            } @else {
                div class="grid" {
                    @for listing in listings {
                        (listing_card(ctx, listing, "/favorites"))
                    }
                }
            }
        },
    )
}
