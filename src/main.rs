#[macro_use] extern crate rocket;
use rocket::response::{self, status, Responder};
use rocket::serde::json::Json;
use rocket::{Request, State};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use models::{Guest, MissingField};
use store::GuestBook;

pub mod models;
pub mod store;
pub mod summary;


/// The two hosts guests can be invited on behalf of.
const HOSTS: [&str; 2] = ["Molly", "James"];

/// Client failures, rendered as plain-text 400 bodies the guest-list UI
/// displays as-is.
#[derive(Debug, Error)]
enum ApiError {
    #[error(transparent)]
    Missing(#[from] MissingField),
    // save reports the name bare, get quotes it
    #[error("no guest with name {0}")]
    NoGuest(String),
    #[error("no guest with name '{0}'")]
    NoGuestNamed(String),
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        status::BadRequest(self.to_string()).respond_to(req)
    }
}

#[derive(Serialize)]
struct GuestReply {
    guest: Guest,
}

#[derive(Serialize)]
struct ListReply {
    guests: Vec<Guest>,
}

#[derive(Serialize)]
struct HostSummary {
    host: String,
    range: String,
    family: usize,
}

#[derive(Serialize)]
struct SummaryReply {
    hosts: Vec<HostSummary>,
}

#[get("/api/list")]
fn list(book: &State<GuestBook>) -> Json<ListReply> {
    Json(ListReply {
        guests: book.list(),
    })
}

#[post("/api/add", data = "<body>")]
fn add(body: Json<Value>, book: &State<GuestBook>) -> Result<Json<GuestReply>, ApiError> {
    let guest = Guest::from_value(&body)?;
    // A guest re-added under the same name replaces the earlier record.
    book.put(guest.clone());
    Ok(Json(GuestReply { guest }))
}

#[post("/api/save", data = "<body>")]
fn save(body: Json<Value>, book: &State<GuestBook>) -> Result<Json<GuestReply>, ApiError> {
    // The whole record is validated, but only the details fields are
    // written back: guestOf and isFamily are fixed at add time.
    let update = Guest::from_value(&body)?;
    let mut guest = book
        .get(&update.name)
        .ok_or_else(|| ApiError::NoGuest(update.name.clone()))?;
    guest.restriction = update.restriction;
    guest.p1 = update.p1;
    guest.p1_name = update.p1_name;
    guest.p1_restriction = update.p1_restriction;
    book.put(guest.clone());
    Ok(Json(GuestReply { guest }))
}

#[get("/api/get?<name>")]
fn get(name: Vec<String>, book: &State<GuestBook>) -> Result<Json<GuestReply>, ApiError> {
    // A repeated name= key sends every value; only the first counts.
    let name = name
        .into_iter()
        .next()
        .ok_or(ApiError::Missing(MissingField("name")))?;
    let guest = book
        .get(&name)
        .ok_or_else(|| ApiError::NoGuestNamed(name))?;
    Ok(Json(GuestReply { guest }))
}

#[get("/api/summary")]
fn summarize(book: &State<GuestBook>) -> Json<SummaryReply> {
    let guests = book.list();
    let hosts = HOSTS
        .iter()
        .map(|host| {
            let invited = summary::host_guests(host, &guests);
            HostSummary {
                host: host.to_string(),
                range: summary::attendance_range(&invited),
                family: summary::family_count(&invited),
            }
        })
        .collect();
    Json(SummaryReply { hosts })
}

#[launch]
fn rocket() -> _ {
    rocket::build()
        .mount("/", routes![list, add, save, get, summarize])
        .manage(GuestBook::new())
}
