use crate::domain::Listing;
use crate::templates::components::{favorite_button, listing_facts, show_on_map_button};
use crate::templates::{desktop_layout, PageCtx};
use maud::{html, Markup};

pub fn listing_page(ctx: &PageCtx, listing: &Listing) -> Markup {
    let here = format!("/listings/{}", listing.id);

    desktop_layout(
        &listing.title,
        ctx.favorites.len(),
        html! {
            article class="listing-detail" {
                img src=(listing.image) alt=(listing.title);
                h1 { (listing.title) }
                span class="badge category" { (listing.category.label()) }
                p { (listing.description) }
                (listing_facts(listing))
                div class="price" { (ctx.price(listing.price)) }
                (favorite_button(listing.id, ctx.favorites.contains(listing.id), &here))
                (show_on_map_button(listing.id))
            }
        },
    )
}
