// templates/pages/home.rs

use crate::domain::Listing;
use crate::templates::{desktop_layout, listing_card, PageCtx};
use maud::{html, Markup};

pub fn home_page(ctx: &PageCtx, featured: &[Listing]) -> Markup {
    desktop_layout(
        "Home",
        ctx.favorites.len(),
        html! {
            section class="hero" {
                p class="eyebrow" { "Exclusive real estate" }
                h1 { "Living in harmony with nature" }
                p { "Modern homes in a clean, green neighbourhood with everything close by." }
                a href="/catalog" class="button primary" { "Browse listings →" }
            }

            section class="featured" {
                h2 { "Featured listings" }
                div class="grid" {
                    @for listing in featured {
                        (listing_card(ctx, listing, "/"))
                    }
                }
            }
        },
    )
}
