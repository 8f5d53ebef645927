//! In-memory backend used by the integration tests
//!
//! Rows are stored in persistence naming and queries are evaluated the way
//! the hosted store would: filters, ordering, exact counts, ranges,
//! single-row requests and embedded joins.

#![allow(dead_code)]

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use oasis_admin::api::{
    Auth, BackendError, FileUpload, Filter, FilterValue, Operation, OperationResult, OrderBy, Query, QueryResult,
    Session, Signup, Storage, Tables, User, UserAttributes, UserMetadata,
};
use serde_json::{json, Map, Value};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering as AtomicOrdering};
use std::sync::Mutex;

pub const BASE_URL: &str = "https://demo.example.co";

#[derive(Default)]
pub struct FakeBackend {
    rows: Mutex<HashMap<String, Vec<Value>>>,
    next_id: AtomicI64,
    pub queries: Mutex<Vec<Query>>,
    pub operations: Mutex<Vec<Operation>>,
    pub uploads: Mutex<Vec<(String, String)>>,
    pub fail_selects: AtomicBool,
    pub fail_writes: AtomicBool,
    pub fail_deletes: AtomicBool,
    pub fail_uploads: AtomicBool,
    users: Mutex<Vec<(String, User)>>,
    session: Mutex<Option<Session>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1000),
            ..Default::default()
        }
    }

    /// Add rows given in persistence naming
    pub fn seed(&self, table: &str, rows: Vec<Value>) {
        self.rows.lock().unwrap().entry(table.to_string()).or_default().extend(rows);
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.rows.lock().unwrap().get(table).cloned().unwrap_or_default()
    }

    pub fn row(&self, table: &str, id: i64) -> Option<Value> {
        self.rows(table).into_iter().find(|row| row["id"] == json!(id))
    }

    pub fn last_query(&self) -> Query {
        self.queries.lock().unwrap().last().cloned().expect("no query was run")
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.operations.lock().unwrap().clone()
    }

    pub fn upload_names(&self) -> Vec<String> {
        self.uploads.lock().unwrap().iter().map(|(_, name)| name.clone()).collect()
    }

    fn embed(&self, row: &Value, projection: &str) -> Value {
        let tables = self.rows.lock().unwrap();
        project(row, projection, &tables)
    }
}

#[async_trait]
impl Tables for FakeBackend {
    async fn select(&self, query: &Query) -> Result<QueryResult> {
        self.queries.lock().unwrap().push(query.clone());
        if self.fail_selects.load(AtomicOrdering::SeqCst) {
            bail!("select on {} failed (503): service unavailable", query.table);
        }

        let mut rows: Vec<Value> = self
            .rows(&query.table)
            .into_iter()
            .filter(|row| query.filter.as_ref().is_none_or(|f| matches(f, row)))
            .collect();

        for order in query.orderby.clauses().iter().rev() {
            rows.sort_by(|a, b| {
                let ordering = compare_json(&a[order.field()], &b[order.field()]);
                if order.is_ascending() { ordering } else { ordering.reverse() }
            });
        }

        let total = rows.len() as u64;
        if let Some(range) = &query.range {
            rows = rows
                .into_iter()
                .skip(range.offset() as usize)
                .take(range.limit() as usize)
                .collect();
        }

        if query.single && rows.len() != 1 {
            return Err(BackendError {
                operation: "select".to_string(),
                status: 406,
                message: "JSON object requested, multiple (or no) rows returned".to_string(),
            }
            .into());
        }

        let projection = query.projection();
        let rows = rows.iter().map(|row| self.embed(row, &projection)).collect();
        Ok(QueryResult::new(rows, query.count.then_some(total)))
    }

    async fn execute(&self, operation: &Operation) -> Result<OperationResult> {
        self.operations.lock().unwrap().push(operation.clone());

        match operation {
            Operation::Insert { table, data } => {
                if self.fail_writes.load(AtomicOrdering::SeqCst) {
                    bail!("insert on {} failed (403): new row violates row-level security policy", table);
                }
                let mut row = data.as_object().cloned().ok_or_else(|| anyhow!("insert needs an object"))?;
                row.insert("id".to_string(), json!(self.next_id.fetch_add(1, AtomicOrdering::SeqCst)));
                row.entry("created_at").or_insert(json!("2024-05-01T10:00:00.000Z"));
                let row = Value::Object(row);
                self.seed(table, vec![row.clone()]);
                Ok(OperationResult::new(operation.clone(), vec![row], Some(201)))
            }
            Operation::Update { table, filter, data } => {
                if self.fail_writes.load(AtomicOrdering::SeqCst) {
                    bail!("update on {} failed (403): permission denied", table);
                }
                let patch = data.as_object().cloned().ok_or_else(|| anyhow!("update needs an object"))?;
                let mut rows = self.rows.lock().unwrap();
                let mut updated = Vec::new();
                for row in rows.entry(table.clone()).or_default().iter_mut() {
                    if matches(filter, row) {
                        if let Some(fields) = row.as_object_mut() {
                            for (key, value) in &patch {
                                fields.insert(key.clone(), value.clone());
                            }
                        }
                        updated.push(row.clone());
                    }
                }
                Ok(OperationResult::new(operation.clone(), updated, Some(200)))
            }
            Operation::Delete { table, filter } => {
                if self.fail_deletes.load(AtomicOrdering::SeqCst) {
                    bail!("delete on {} failed (500): connection reset", table);
                }
                let mut rows = self.rows.lock().unwrap();
                let all = rows.entry(table.clone()).or_default();
                let (removed, kept): (Vec<Value>, Vec<Value>) = all.drain(..).partition(|row| matches(filter, row));
                *all = kept;
                Ok(OperationResult::new(operation.clone(), removed, Some(200)))
            }
        }
    }
}

#[async_trait]
impl Storage for FakeBackend {
    async fn upload(&self, bucket: &str, name: &str, _file: &FileUpload) -> Result<()> {
        if self.fail_uploads.load(AtomicOrdering::SeqCst) {
            return Err(BackendError {
                operation: "upload".to_string(),
                status: 413,
                message: "The object exceeded the maximum allowed size".to_string(),
            }
            .into());
        }
        let mut uploads = self.uploads.lock().unwrap();
        if uploads.iter().any(|(b, n)| b == bucket && n == name) {
            bail!("The resource already exists");
        }
        uploads.push((bucket.to_string(), name.to_string()));
        Ok(())
    }

    fn public_url(&self, bucket: &str, name: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{}", BASE_URL, bucket, name)
    }

    fn is_stored_url(&self, url: &str) -> bool {
        url.starts_with(BASE_URL)
    }
}

#[async_trait]
impl Auth for FakeBackend {
    async fn sign_up(&self, email: &str, password: &str, metadata: UserMetadata) -> Result<Signup> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|(_, u)| u.email.as_deref() == Some(email)) {
            return Err(auth_error("User already registered"));
        }
        let user = User {
            id: format!("user-{}", users.len() + 1),
            email: Some(email.to_string()),
            role: Some("authenticated".to_string()),
            user_metadata: metadata,
        };
        users.push((password.to_string(), user.clone()));
        Ok(Signup { user, session: None })
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        let user = self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(p, u)| p == password && u.email.as_deref() == Some(email))
            .map(|(_, u)| u.clone())
            .ok_or_else(|| auth_error("Invalid login credentials"))?;

        let session = Session {
            access_token: format!("token-{}", user.id),
            token_type: Some("bearer".to_string()),
            expires_in: Some(3600),
            refresh_token: None,
            user,
        };
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> Result<()> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }

    async fn get_session(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    async fn get_user(&self) -> Result<User> {
        let session = self.session.lock().unwrap().clone().ok_or_else(|| auth_error("Auth session missing!"))?;
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|(_, u)| u.id == session.user.id)
            .map(|(_, u)| u.clone())
            .ok_or_else(|| auth_error("User not found"))
    }

    async fn update_user(&self, attributes: &UserAttributes) -> Result<User> {
        let session = self.session.lock().unwrap().clone().ok_or_else(|| auth_error("Auth session missing!"))?;
        let mut users = self.users.lock().unwrap();
        let (password, user) = users
            .iter_mut()
            .find(|(_, u)| u.id == session.user.id)
            .ok_or_else(|| auth_error("User not found"))?;

        if let Some(new_password) = &attributes.password {
            if new_password.len() < 6 {
                return Err(auth_error("Password should be at least 6 characters"));
            }
            *password = new_password.clone();
        }
        if let Some(data) = &attributes.data {
            if data.full_name.is_some() {
                user.user_metadata.full_name = data.full_name.clone();
            }
            if data.avatar.is_some() {
                user.user_metadata.avatar = data.avatar.clone();
            }
        }
        Ok(user.clone())
    }
}

fn auth_error(message: &str) -> anyhow::Error {
    BackendError {
        operation: "auth".to_string(),
        status: 400,
        message: message.to_string(),
    }
    .into()
}

fn matches(filter: &Filter, row: &Value) -> bool {
    let cmp = |field: &str, value: &FilterValue| compare_json(&row[field], &value.to_json());
    match filter {
        Filter::Eq(field, FilterValue::Null) => row[field.as_str()].is_null(),
        Filter::Eq(field, value) => cmp(field, value) == Ordering::Equal,
        Filter::Neq(field, value) => cmp(field, value) != Ordering::Equal,
        Filter::Gt(field, value) => cmp(field, value) == Ordering::Greater,
        Filter::Gte(field, value) => cmp(field, value) != Ordering::Less,
        Filter::Lt(field, value) => cmp(field, value) == Ordering::Less,
        Filter::Lte(field, value) => cmp(field, value) != Ordering::Greater,
        Filter::And(filters) => filters.iter().all(|f| matches(f, row)),
        Filter::Or(filters) => filters.iter().any(|f| matches(f, row)),
        Filter::Not(filter) => !matches(filter, row),
    }
}

fn compare_json(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .unwrap_or_default()
            .partial_cmp(&y.as_f64().unwrap_or_default())
            .unwrap_or(Ordering::Equal),
        (Value::Number(x), Value::String(y)) => match y.parse::<f64>() {
            Ok(y) => x.as_f64().unwrap_or_default().partial_cmp(&y).unwrap_or(Ordering::Equal),
            Err(_) => x.to_string().cmp(y),
        },
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Bool(x), Value::String(y)) => x.to_string().cmp(y),
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (x, y) => x.to_string().cmp(&y.to_string()),
    }
}

/// Apply a projection such as `id, status, cabins(name), guests(*)`
fn project(row: &Value, projection: &str, tables: &HashMap<String, Vec<Value>>) -> Value {
    let mut out = Map::new();
    for item in split_top_level(projection) {
        if item == "*" {
            if let Some(fields) = row.as_object() {
                out.extend(fields.clone());
            }
        } else if let Some((join, inner)) = item.strip_suffix(')').and_then(|i| i.split_once('(')) {
            let foreign_key = format!("{}_id", join.trim_end_matches('s'));
            let joined = tables
                .get(join)
                .and_then(|rows| rows.iter().find(|r| r["id"] == row[foreign_key.as_str()]))
                .map(|r| project(r, inner, tables))
                .unwrap_or(Value::Null);
            out.insert(join.to_string(), joined);
        } else if let Some(value) = row.get(item) {
            out.insert(item.to_string(), value.clone());
        }
    }
    Value::Object(out)
}

fn split_top_level(projection: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0;
    let mut start = 0;
    for (i, c) in projection.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(projection[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(projection[start..].trim());
    parts.into_iter().filter(|p| !p.is_empty()).collect()
}

pub fn order_fields(query: &Query) -> Vec<(String, bool)> {
    query
        .orderby
        .clauses()
        .iter()
        .map(|o: &OrderBy| (o.field().to_string(), o.is_ascending()))
        .collect()
}

// Sample data in persistence naming

pub fn cabin_row(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "created_at": "2024-01-10T10:00:00.000Z",
        "name": name,
        "max_capacity": 4,
        "regular_price": 350,
        "discount": 0,
        "description": "Cozy cabin in the woods",
        "image": format!("{}/storage/v1/object/public/cabin-images/cabin-{}.jpg", BASE_URL, name)
    })
}

pub fn guest_row(id: i64, full_name: &str) -> Value {
    json!({
        "id": id,
        "created_at": "2024-01-01T10:00:00.000Z",
        "full_name": full_name,
        "email": format!("{}@example.com", full_name.to_lowercase().replace(' ', ".")),
        "nationality": "Portugal",
        "country_flag": "https://flagcdn.com/pt.svg",
        "national_id": "3525436345"
    })
}

pub struct BookingSeed<'a> {
    pub id: i64,
    pub created_at: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub status: &'a str,
    pub cabin_id: i64,
    pub guest_id: i64,
}

pub fn booking_row(seed: BookingSeed<'_>) -> Value {
    json!({
        "id": seed.id,
        "created_at": seed.created_at,
        "start_date": seed.start_date,
        "end_date": seed.end_date,
        "num_nights": 3,
        "num_guests": 2,
        "cabin_price": 1050,
        "extras_price": 0,
        "total_price": 1050,
        "has_breakfast": false,
        "is_paid": false,
        "observations": "",
        "status": seed.status,
        "cabin_id": seed.cabin_id,
        "guest_id": seed.guest_id
    })
}

/// Fixed "now" for all date-dependent tests: 2024-05-10 15:30 UTC
pub fn clock() -> oasis_admin::dates::FixedClock {
    use chrono::TimeZone;
    oasis_admin::dates::FixedClock(chrono::Utc.with_ymd_and_hms(2024, 5, 10, 15, 30, 0).unwrap())
}

/// Two cabins, two guests and six bookings around 2024-05-10
pub fn hotel() -> FakeBackend {
    let backend = FakeBackend::new();
    backend.seed("cabins", vec![cabin_row(1, "001"), cabin_row(2, "002")]);
    backend.seed("guests", vec![guest_row(1, "Jonas Schmedtmann"), guest_row(2, "Maria Gomez")]);

    let bookings = [
        (1, "2024-05-03T09:00:00.000Z", "2024-05-10", "2024-05-13", "unconfirmed", 1, 1),
        (2, "2024-05-01T09:00:00.000Z", "2024-05-07", "2024-05-10", "checked-in", 2, 2),
        (3, "2024-05-08T09:00:00.000Z", "2024-05-11", "2024-05-14", "unconfirmed", 1, 2),
        (4, "2024-04-20T09:00:00.000Z", "2024-05-08", "2024-05-11", "checked-in", 2, 1),
        (5, "2024-04-25T09:00:00.000Z", "2024-05-07", "2024-05-10", "checked-out", 1, 2),
        (6, "2024-05-10T12:00:00.000Z", "2024-05-10", "2024-05-12", "checked-in", 2, 2),
    ];
    backend.seed(
        "bookings",
        bookings
            .iter()
            .map(|&(id, created_at, start, end, status, cabin_id, guest_id)| {
                booking_row(BookingSeed {
                    id,
                    created_at,
                    start_date: &format!("{}T00:00:00.000Z", start),
                    end_date: &format!("{}T00:00:00.000Z", end),
                    status,
                    cabin_id,
                    guest_id,
                })
            })
            .collect(),
    );
    backend
}
