use seed::{prelude::*, virtual_dom::AtValue, *};
use serde::Deserialize;
use shared::{Coordinate, RouteQuery, RouteResponse, RouteStats, SearchQuery, SearchResponse};
use wasm_bindgen::{prelude::wasm_bindgen, JsCast};

pub mod form;
pub mod map;
pub mod outcome;
pub mod overlay;
pub mod stats;
pub mod viewport;

use form::{RouteForm, SearchForm};
use map::{LeafletMap, MapSurface};
use outcome::{RequestFailure, RouteOutcome};
use overlay::Overlays;

fn api_root() -> String {
    if let Some(url) = option_env!("FRONTEND_API_ROOT") {
        return url.trim_end_matches('/').to_string();
    }
    // same origin as the page
    String::new()
}

fn route_endpoint() -> String {
    format!("{}/api", api_root())
}

fn search_endpoint() -> String {
    format!("{}/search", api_root())
}

#[derive(Default)]
pub struct Model {
    form: RouteForm,
    search: SearchForm,
    busy: bool,
    stats: Option<RouteStats>,
    notice: Option<String>,
    overlays: Overlays,
}

pub enum Msg {
    OriginChanged(String),
    DestinationChanged(String),
    DistanceChanged(String),
    ElevationChanged(String),
    GraphChanged(String),
    PlaceChanged(String),
    OriginPicked { lat: f64, lon: f64 },
    DestinationPicked { lat: f64, lon: f64 },
    Submit,
    RouteFetched(Result<RouteResponse, String>),
    SearchSubmit,
    SearchFetched(Result<SearchResponse, String>),
}

#[derive(Deserialize)]
struct MapClickPayload {
    lat: f64,
    lon: f64,
}

fn decode_gesture(event: web_sys::Event) -> MapClickPayload {
    let event = event
        .dyn_into::<web_sys::CustomEvent>()
        .expect("map gesture event must be CustomEvent");
    serde_wasm_bindgen::from_value(event.detail()).unwrap_or(MapClickPayload { lat: 0.0, lon: 0.0 })
}

pub fn init(_: Url, orders: &mut impl Orders<Msg>) -> Model {
    orders.stream(streams::window_event(Ev::from("map-click"), |event| {
        let payload = decode_gesture(event);
        Msg::OriginPicked {
            lat: payload.lat,
            lon: payload.lon,
        }
    }));
    orders.stream(streams::window_event(Ev::from("map-contextmenu"), |event| {
        let payload = decode_gesture(event);
        Msg::DestinationPicked {
            lat: payload.lat,
            lon: payload.lon,
        }
    }));

    Model::default()
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::OriginChanged(val) => model.form.origin = val,
        Msg::DestinationChanged(val) => model.form.destination = val,
        Msg::DistanceChanged(val) => model.form.distance = val,
        Msg::ElevationChanged(val) => model.form.elevation = form::elevation_from_value(&val),
        Msg::GraphChanged(val) => model.form.graph = form::graph_from_value(&val),
        Msg::PlaceChanged(val) => model.search.place = val,
        Msg::OriginPicked { lat, lon } => {
            web_sys::console::debug_1(
                &format!("[frontend] origin picked lat={lat:.5} lon={lon:.5}").into(),
            );
            pick_origin(model, &LeafletMap, Coordinate { lat, lon });
        }
        Msg::DestinationPicked { lat, lon } => {
            web_sys::console::debug_1(
                &format!("[frontend] destination picked lat={lat:.5} lon={lon:.5}").into(),
            );
            pick_destination(model, &LeafletMap, Coordinate { lat, lon });
        }
        Msg::Submit => {
            if model.busy {
                return;
            }
            let query = begin_route_request(model, &LeafletMap);
            orders.perform_cmd(send_route_request(query));
        }
        Msg::RouteFetched(result) => {
            finish_route_request(model, &LeafletMap, result);
        }
        Msg::SearchSubmit => {
            // Searches are not single-flight: a pan is cheap enough that
            // last-arrival-wins is an accepted race.
            let query = model.search.to_query();
            orders.perform_cmd(send_search_request(query));
        }
        Msg::SearchFetched(result) => {
            finish_search(model, &LeafletMap, result);
        }
    }
}

/// Place the origin marker and reflect the point into the origin input.
/// The marker moves on the gesture itself, never deferred to a response.
fn pick_origin(model: &mut Model, surface: &impl MapSurface, at: Coordinate) {
    overlay::place_origin(&mut model.overlays, surface, at);
    model.form.origin = form::format_point(at);
}

fn pick_destination(model: &mut Model, surface: &impl MapSurface, at: Coordinate) {
    overlay::place_destination(&mut model.overlays, surface, at);
    model.form.destination = form::format_point(at);
}

/// Enter the busy state and commit to discarding the previous result:
/// stats hidden and route lines gone before the request is even sent.
fn begin_route_request(model: &mut Model, surface: &impl MapSurface) -> RouteQuery {
    model.busy = true;
    model.notice = None;
    model.stats = None;
    model.overlays.clear_routes(surface);
    model.form.to_query()
}

/// Leave the busy state on every variant, then apply the outcome.
fn finish_route_request(
    model: &mut Model,
    surface: &impl MapSurface,
    result: Result<RouteResponse, String>,
) {
    model.busy = false;
    let outcome = match result {
        Ok(resp) => RouteOutcome::from(resp),
        Err(err) => RouteOutcome::Failed(RequestFailure::Transport(err)),
    };
    match outcome {
        RouteOutcome::Found {
            primary,
            alternative,
            stats,
        } => {
            overlay::render_route(&mut model.overlays, surface, &primary, &alternative);
            model.stats = Some(stats);
        }
        RouteOutcome::Failed(failure) => {
            model.notice = Some(failure.to_string());
        }
    }
}

fn finish_search(
    model: &mut Model,
    surface: &impl MapSurface,
    result: Result<SearchResponse, String>,
) {
    match result {
        Ok(resp) => match resp.coordinate() {
            Some(place) => viewport::pan_to(surface, place),
            None => model.notice = Some(RequestFailure::PlaceNotFound.to_string()),
        },
        Err(err) => {
            model.notice = Some(RequestFailure::Transport(err).to_string());
        }
    }
}

async fn send_route_request(query: RouteQuery) -> Msg {
    web_sys::console::debug_1(
        &format!(
            "[frontend] sending route request origin={:?} destination={:?}",
            query.origin, query.destination
        )
        .into(),
    );
    let body = match serde_urlencoded::to_string(&query) {
        Err(err) => return Msg::RouteFetched(Err(format!("{err:?}"))),
        Ok(body) => body,
    };
    let request = Request::new(route_endpoint())
        .method(Method::Post)
        .text(body)
        .header(Header::custom(
            "Content-Type",
            "application/x-www-form-urlencoded",
        ));
    let response = match request.fetch().await {
        Err(err) => Err(format!("{err:?}")),
        Ok(raw) => match raw.check_status() {
            Err(status_err) => Err(format!("{status_err:?}")),
            Ok(resp) => match resp.json::<RouteResponse>().await {
                Ok(payload) => Ok(payload),
                Err(err) => Err(format!("{err:?}")),
            },
        },
    };

    Msg::RouteFetched(response)
}

async fn send_search_request(query: SearchQuery) -> Msg {
    web_sys::console::debug_1(
        &format!("[frontend] sending search request place={:?}", query.place).into(),
    );
    let body = match serde_urlencoded::to_string(&query) {
        Err(err) => return Msg::SearchFetched(Err(format!("{err:?}"))),
        Ok(body) => body,
    };
    let request = Request::new(search_endpoint())
        .method(Method::Post)
        .text(body)
        .header(Header::custom(
            "Content-Type",
            "application/x-www-form-urlencoded",
        ));
    let response = match request.fetch().await {
        Err(err) => Err(format!("{err:?}")),
        Ok(raw) => match raw.check_status() {
            Err(status_err) => Err(format!("{status_err:?}")),
            Ok(resp) => match resp.json::<SearchResponse>().await {
                Ok(payload) => Ok(payload),
                Err(err) => Err(format!("{err:?}")),
            },
        },
    };

    Msg::SearchFetched(response)
}

pub fn view(model: &Model) -> Node<Msg> {
    let header = h1!["Route planner"];
    let search = view_search(model);
    let form = view_form(model);
    let stats = view_stats(model);
    let notice = if let Some(notice) = &model.notice {
        p![C!["error"], notice]
    } else {
        empty![]
    };

    div![C!["app-container"], header, search, form, stats, notice]
}

fn view_search(model: &Model) -> Node<Msg> {
    form![
        C!["search"],
        fieldset![
            legend!["Find a place"],
            input![
                attrs! {
                    At::Value => model.search.place,
                    At::Placeholder => "Place or address",
                    At::AutoComplete => "off",
                },
                input_ev(Ev::Input, Msg::PlaceChanged),
            ],
            button![
                "Search",
                ev(Ev::Click, |event| {
                    event.prevent_default();
                    Msg::SearchSubmit
                }),
            ],
        ],
    ]
}

fn view_form(model: &Model) -> Node<Msg> {
    let input_field = |label: &str, value: &str, msg: fn(String) -> Msg| {
        div![
            C!["input-field"],
            label![label],
            input![
                attrs! {
                    At::Value => value,
                    At::AutoComplete => "off",
                    At::SpellCheck => "false",
                },
                input_ev(Ev::Input, msg),
            ]
        ]
    };

    form![
        C!["controls"],
        fieldset![
            legend!["Points"],
            input_field("Origin", &model.form.origin, Msg::OriginChanged),
            input_field(
                "Destination",
                &model.form.destination,
                Msg::DestinationChanged
            ),
            small!["Left-click the map to set the origin, right-click for the destination."],
        ],
        fieldset![
            legend!["Options"],
            input_field(
                "Max length (% of shortest)",
                &model.form.distance,
                Msg::DistanceChanged
            ),
            div![
                C!["input-field"],
                label!["Elevation gain"],
                select![
                    attrs! { At::Value => form::elevation_value(model.form.elevation) },
                    option![attrs! { At::Value => "shortest" }, "Shortest path only"],
                    option![attrs! { At::Value => "minimal" }, "Minimize elevation gain"],
                    option![attrs! { At::Value => "maximal" }, "Maximize elevation gain"],
                    input_ev(Ev::Change, Msg::ElevationChanged),
                ],
            ],
            div![
                C!["input-field"],
                label!["Graph"],
                select![
                    attrs! { At::Value => form::graph_value(model.form.graph) },
                    option![attrs! { At::Value => "bounded" }, "Bounded"],
                    option![attrs! { At::Value => "loading" }, "Loading"],
                    input_ev(Ev::Change, Msg::GraphChanged),
                ],
            ],
        ],
        button![
            "Find path",
            ev(Ev::Click, |event| {
                event.prevent_default();
                Msg::Submit
            }),
            attrs! { At::Disabled => bool_attr(model.busy) },
        ],
        if model.busy {
            span![C!["throbber"], "Searching for path…"]
        } else {
            empty![]
        },
    ]
}

fn view_stats(model: &Model) -> Node<Msg> {
    if let Some(stats) = &model.stats {
        div![
            C!["stats"],
            stats::summary_lines(stats).into_iter().map(|line| p![line]),
        ]
    } else {
        empty![]
    }
}

fn bool_attr(value: bool) -> AtValue {
    if value {
        AtValue::Some("true".into())
    } else {
        AtValue::Ignored
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    viewport::mount();
    App::start("app", init, update, view);
}
