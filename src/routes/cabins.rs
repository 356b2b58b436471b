//! Cabin page route handlers

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::{debug, info};

use crate::booking::requests::SelectRangeForm;
use crate::booking::{today, DateSelector};
use crate::error::{AppError, Result};
use crate::models::{CabinCard, DateSelectorView};
use crate::session::Session;
use crate::AppState;

/// Cabin listing template
#[derive(Template)]
#[template(path = "cabins/list.html")]
struct CabinListTemplate {
    cabins: Vec<CabinCard>,
    has_cabins: bool,
}

/// Cabin detail template
#[derive(Template)]
#[template(path = "cabins/detail.html")]
struct CabinDetailTemplate {
    name: String,
    description: String,
    max_capacity: u32,
    image: String,
    image_alt: String,
    selector: DateSelectorView,
}

/// Cabin listing page
pub async fn list(State(state): State<AppState>) -> Result<Html<String>> {
    let cabins: Vec<CabinCard> = state.catalog.cabins().iter().map(CabinCard::from).collect();

    let template = CabinListTemplate {
        has_cabins: !cabins.is_empty(),
        cabins,
    };

    Ok(Html(template.render()?))
}

/// Cabin detail page with the date selector
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    session: Session,
) -> Result<Response> {
    let cabin = state.catalog.cabin(id).ok_or(AppError::NotFound)?;
    let booked_dates = state.catalog.booked_dates(id);

    let mut ctx = state.cache.reservation(session.id).await;
    if ctx.enter_cabin(id) {
        debug!(cabin_id = id, "Left previous booking flow, range cleared");
    }

    let selector = DateSelector::new(cabin, state.catalog.settings(), &booked_dates, today());
    let selector_state = selector.state(&mut ctx);
    state.cache.store_reservation(session.id, ctx).await;

    let template = CabinDetailTemplate {
        name: cabin.name.clone(),
        description: cabin.description.clone(),
        max_capacity: cabin.max_capacity,
        image: cabin.image.clone(),
        image_alt: format!("Cabin {}", cabin.name),
        selector: DateSelectorView::new(cabin, &selector.rules(), &selector_state),
    };

    Ok(session.attach(Html(template.render()?).into_response()))
}

/// Range selection event from the date selector
pub async fn select_range(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    session: Session,
    Form(form): Form<SelectRangeForm>,
) -> Result<Response> {
    let cabin = state.catalog.cabin(id).ok_or(AppError::NotFound)?;
    let booked_dates = state.catalog.booked_dates(id);

    let mut ctx = state.cache.reservation(session.id).await;
    ctx.enter_cabin(id);

    let selector = DateSelector::new(cabin, state.catalog.settings(), &booked_dates, today());
    match selector.select(&mut ctx, form.range()) {
        Ok(()) => info!(cabin_id = id, range = ?ctx.range(), "Range selected"),
        Err(e) => debug!(cabin_id = id, "Selection ignored: {}", e),
    }
    state.cache.store_reservation(session.id, ctx).await;

    Ok(session.attach(Redirect::to(&cabin.href()).into_response()))
}

/// Clear action
pub async fn clear_range(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    session: Session,
) -> Result<Response> {
    let cabin = state.catalog.cabin(id).ok_or(AppError::NotFound)?;

    let mut ctx = state.cache.reservation(session.id).await;
    ctx.enter_cabin(id);
    ctx.reset_range();
    state.cache.store_reservation(session.id, ctx).await;

    Ok(session.attach(Redirect::to(&cabin.href()).into_response()))
}
