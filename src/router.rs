use crate::api::{ListingDto, ListingsResponse, MarkerDto, MarkersResponse};
use crate::app::App;
use crate::domain::favorites::FavoritesSet;
use crate::domain::filter::{self, CategoryFilter, FilterDefaults, FilterSpec, RoomsFilter};
use crate::domain::price::format_price;
use crate::domain::{Category, ListingId, SessionEvent};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, see_other, ResultResp};
use crate::templates::pages::{self, CatalogVm, MapVm};
use crate::templates::{html_error_response, PageCtx};
use astra::{Request, Response};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, error, warn};

type Query = HashMap<String, String>;

/// Query keys that make up a filter; a request carrying any of them sets the filter.
const FILTER_KEYS: [&str; 6] = [
    "price_min",
    "price_max",
    "area_min",
    "area_max",
    "category",
    "rooms",
];

/// Number of listings shown on the home page.
const FEATURED_COUNT: usize = 3;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = parse_query(&req);

    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => home(app),

        ("GET", "/catalog") => catalog(app, &query),
        ("POST", "/catalog/reset") => {
            apply_event(app, SessionEvent::ResetFilters)?;
            see_other("/catalog")
        }

        ("GET", "/favorites") => favorites(app),
        ("POST", "/favorites/toggle") => {
            let id = required_id(&query)?;
            apply_event(app, SessionEvent::ToggleFavorite(id))?;
            see_other(local_path(query.get("next")).unwrap_or("/favorites"))
        }

        ("GET", "/map") => map(app),
        ("POST", "/map/select") => {
            let id = required_id(&query)?;
            apply_event(app, SessionEvent::Select(id))?;
            see_other("/map")
        }
        ("POST", "/map/clear") => {
            apply_event(app, SessionEvent::ClearSelection)?;
            see_other("/map")
        }

        ("GET", "/api/listings") => api_listings(app, &query),
        ("GET", "/api/markers") => api_markers(app),

        ("GET", p) if p.starts_with("/listings/") => listing_detail(app, &p["/listings/".len()..]),

        _ => Err(ServerError::NotFound),
    }
}

/// Like [`handle`], but renders errors as HTML pages.
pub fn respond(req: Request, app: &App) -> Response {
    match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => {
            match &err {
                ServerError::InternalError => error!(error = %err, "request failed"),
                _ => debug!(error = %err, "request rejected"),
            }
            html_error_response(err)
        }
    }
}

fn apply_event(app: &App, event: SessionEvent) -> Result<(), ServerError> {
    app.with_session(|session, store| {
        session.apply(event, store).map_err(|e| {
            warn!(?event, error = %e, "event rejected");
            ServerError::from(e)
        })
    })
}

fn home(app: &App) -> ResultResp {
    let featured = &app.store.all()[..app.store.len().min(FEATURED_COUNT)];

    app.with_session(|session, _| {
        let ctx = page_ctx(app, session.favorites());
        Ok(pages::home_page(&ctx, featured))
    })
    .and_then(html_response)
}

fn catalog(app: &App, query: &Query) -> ResultResp {
    let requested = filter_from_query(query, &app.config.filter)?;

    app.with_session(|session, store| {
        if let Some(spec) = requested {
            session
                .apply(SessionEvent::FilterChanged(spec), store)
                .map_err(|e| {
                    warn!(error = %e, "filter rejected");
                    ServerError::from(e)
                })?;
        }

        let view = session.filtered(store)?;
        let ctx = page_ctx(app, session.favorites());
        let vm = CatalogVm {
            listings: &view.listings,
            is_filtered: view.is_filtered,
            spec: session.filter(),
            defaults: session.defaults(),
        };
        Ok(pages::catalog_page(&ctx, &vm))
    })
    .and_then(html_response)
}

fn favorites(app: &App) -> ResultResp {
    app.with_session(|session, store| {
        let listings = session.favorite_listings(store);
        let ctx = page_ctx(app, session.favorites());
        Ok(pages::favorites_page(&ctx, &listings))
    })
    .and_then(html_response)
}

fn map(app: &App) -> ResultResp {
    app.with_session(|session, store| {
        let markers = session.markers(store, &app.config.bounds)?;
        let vm = MapVm {
            markers: &markers,
            selected: session.selected_listing(store),
        };
        let ctx = page_ctx(app, session.favorites());
        Ok(pages::map_page(&ctx, &vm))
    })
    .and_then(html_response)
}

fn listing_detail(app: &App, raw_id: &str) -> ResultResp {
    let id = ListingId::from_str(raw_id).map_err(|_| ServerError::NotFound)?;

    app.with_session(|session, store| {
        let listing = store.get(id)?;
        let ctx = page_ctx(app, session.favorites());
        Ok(pages::listing_page(&ctx, listing))
    })
    .and_then(html_response)
}

/// Filtered listings as JSON. Uses the filter from the query when given,
/// the session's current filter otherwise; never changes the session.
fn api_listings(app: &App, query: &Query) -> ResultResp {
    let requested = filter_from_query(query, &app.config.filter)?;

    app.with_session(|session, store| {
        let spec = requested.unwrap_or(*session.filter());
        let listings = filter::apply(&spec, store)?;

        let body = ListingsResponse {
            count: listings.len(),
            is_filtered: spec != FilterSpec::reset(session.defaults()),
            listings: listings
                .into_iter()
                .map(|listing| ListingDto {
                    listing,
                    price_label: format_price(listing.price, &app.config.currency),
                    is_favorite: session.favorites().contains(listing.id),
                })
                .collect(),
        };
        json_response(&body)
    })
}

fn api_markers(app: &App) -> ResultResp {
    app.with_session(|session, store| {
        let markers = session.markers(store, &app.config.bounds)?;
        let body = MarkersResponse {
            selected: session.selection().current(),
            markers: markers
                .iter()
                .map(|m| MarkerDto::from_marker(m, &app.config.currency))
                .collect(),
        };
        json_response(&body)
    })
}

fn page_ctx<'a>(app: &'a App, favorites: &'a FavoritesSet) -> PageCtx<'a> {
    PageCtx {
        favorites,
        currency: &app.config.currency,
    }
}

fn parse_query(req: &Request) -> Query {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Only same-site absolute paths are accepted as redirect targets.
fn local_path(next: Option<&String>) -> Option<&str> {
    next.map(String::as_str)
        .filter(|p| p.starts_with('/') && !p.starts_with("//"))
}

fn required_id(query: &Query) -> Result<ListingId, ServerError> {
    parse_param(query, "id")?.ok_or_else(|| ServerError::BadRequest("missing id".into()))
}

/// Missing or empty parameters are `None`; unparsable ones are a bad request.
fn parse_param<T: FromStr>(query: &Query, key: &str) -> Result<Option<T>, ServerError> {
    match query.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ServerError::BadRequest(format!("invalid {key}: '{raw}'"))),
    }
}

/// Builds a filter from query parameters, or `None` when the query has no
/// filter keys at all. Keys that are absent fall back to the reset values.
fn filter_from_query(
    query: &Query,
    defaults: &FilterDefaults,
) -> Result<Option<FilterSpec>, ServerError> {
    if !FILTER_KEYS.iter().any(|k| query.contains_key(*k)) {
        return Ok(None);
    }

    let mut spec = FilterSpec::reset(defaults);

    if let Some(v) = parse_param(query, "price_min")? {
        spec.price.min = v;
    }
    if let Some(v) = parse_param(query, "price_max")? {
        spec.price.max = v;
    }
    if let Some(v) = parse_param(query, "area_min")? {
        spec.area.min = v;
    }
    if let Some(v) = parse_param(query, "area_max")? {
        spec.area.max = v;
    }

    spec.category = match parse_param::<String>(query, "category")?.as_deref() {
        None => CategoryFilter::Any,
        Some(raw) if is_any(raw) => CategoryFilter::Any,
        Some(raw) => {
            CategoryFilter::Only(Category::from_str(raw).map_err(ServerError::BadRequest)?)
        }
    };
    spec.rooms = match parse_param::<String>(query, "rooms")?.as_deref() {
        None => RoomsFilter::Any,
        Some(raw) if is_any(raw) => RoomsFilter::Any,
        Some(raw) => RoomsFilter::Exactly(
            raw.parse()
                .map_err(|_| ServerError::BadRequest(format!("invalid rooms: '{raw}'")))?,
        ),
    };

    Ok(Some(spec))
}

fn is_any(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("any")
}
