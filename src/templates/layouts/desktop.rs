use crate::templates::components::nav_link;
use maud::{html, Markup, DOCTYPE};

/// Page shell with the top navigation. `favorites_count` drives the badge on
/// the favorites link.
pub fn desktop_layout(title: &str, favorites_count: usize, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · EcoEstate" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { "EcoEstate" }
                    nav {
                        ul {
                            li { (nav_link("/", "Home", title)) }
                            li { (nav_link("/catalog", "Catalog", title)) }
                            li { (nav_link("/map", "Map", title)) }
                        }
                    }
                    a href="/favorites" class="favorites-link" aria-label="Favorites" {
                        "Favorites"
                        @if favorites_count > 0 {
                            span class="badge" { (favorites_count) }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
