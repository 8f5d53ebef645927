//! Booking data access

use super::{decode_row, decode_rows, encode_payload};
use crate::api::constants::{tables, PAGE_SIZE};
use crate::api::{Filter, FilterDirective, Operation, QueryBuilder, QueryOptions, SortDirective, Tables};
use crate::dates::{self, Clock, SystemClock};
use crate::error::{logged, DashboardError, Result};
use crate::mapping::BOOKING_FIELDS;
use crate::models::{Booking, BookingPatch, BookingSales, BookingStatus};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::sync::Arc;

const LIST_PROJECTION: &str =
    "id, created_at, start_date, end_date, num_nights, num_guests, status, total_price, cabins(name), guests(full_name, email)";
const DETAIL_PROJECTION: &str = "*, cabins(*), guests(*)";
const SALES_PROJECTION: &str = "created_at, total_price, extras_price";
const STAYS_PROJECTION: &str = "*, guests(full_name)";
const ACTIVITY_PROJECTION: &str = "*, guests(full_name, nationality, country_flag)";

const FETCH_FAILED: &str = "Unable to fetch bookings";
const LOAD_FAILED: &str = "Bookings could not get loaded";
const NOT_FOUND: &str = "Booking not found";
const UPDATE_FAILED: &str = "Booking could not be updated";
const DELETE_FAILED: &str = "Booking could not be deleted";

/// One page of bookings plus the total number of matches
#[derive(Debug, Clone, PartialEq)]
pub struct BookingPage {
    pub bookings: Vec<Booking>,
    pub count: u64,
}

pub struct BookingRepository {
    tables: Arc<dyn Tables>,
    clock: Arc<dyn Clock>,
    page_size: u32,
}

impl BookingRepository {
    pub fn new(tables: Arc<dyn Tables>) -> Self {
        Self {
            tables,
            clock: Arc::new(SystemClock),
            page_size: PAGE_SIZE,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Page size for `list_bookings`; zero keeps the default
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        if page_size == 0 {
            warn!("Ignoring page size 0, using {}", PAGE_SIZE);
        } else {
            self.page_size = page_size;
        }
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// One page of bookings with the exact total. Directive field names may
    /// use either naming convention.
    pub async fn list_bookings(&self, options: &QueryOptions) -> Result<BookingPage> {
        let options = remote_options(options);
        let query = QueryBuilder::from_options(tables::BOOKINGS, LIST_PROJECTION, &options, self.page_size)
            .count()
            .build();
        debug!("Listing bookings: {:?}", query.to_query_params());

        let result = self
            .tables
            .select(&query)
            .await
            .map_err(logged(DashboardError::Fetch, FETCH_FAILED))?;
        let count = result.count().unwrap_or(result.len() as u64);
        let bookings = decode_rows(&BOOKING_FIELDS, result.into_rows())
            .map_err(logged(DashboardError::Fetch, FETCH_FAILED))?;

        Ok(BookingPage { bookings, count })
    }

    /// A booking with its cabin and guest; exactly one row is requested
    pub async fn get_booking(&self, id: i64) -> Result<Booking> {
        let query = QueryBuilder::new(tables::BOOKINGS)
            .select(DETAIL_PROJECTION)
            .by_id(id)
            .single()
            .build();

        let result = self
            .tables
            .select(&query)
            .await
            .map_err(logged(DashboardError::NotFound, NOT_FOUND))?;
        let row = result
            .into_rows()
            .into_iter()
            .next()
            .ok_or_else(|| DashboardError::NotFound(NOT_FOUND.to_string()))?;

        decode_row(&BOOKING_FIELDS, row).map_err(logged(DashboardError::NotFound, NOT_FOUND))
    }

    /// Sales of bookings created between `date` and the end of today
    pub async fn get_bookings_created_after(&self, date: DateTime<Utc>) -> Result<Vec<BookingSales>> {
        let today_end = dates::end_of_day(self.clock.now());
        let query = QueryBuilder::new(tables::BOOKINGS)
            .select(SALES_PROJECTION)
            .filter(Filter::and(vec![
                Filter::gte("created_at", dates::to_store_string(date)),
                Filter::lte("created_at", dates::to_store_string(today_end)),
            ]))
            .build();

        let result = self
            .tables
            .select(&query)
            .await
            .map_err(logged(DashboardError::Fetch, LOAD_FAILED))?;
        decode_rows(&BOOKING_FIELDS, result.into_rows()).map_err(logged(DashboardError::Fetch, LOAD_FAILED))
    }

    /// Stays that started between `date` and the start of today
    pub async fn get_stays_starting_after(&self, date: DateTime<Utc>) -> Result<Vec<Booking>> {
        let today = dates::start_of_day(self.clock.now());
        let query = QueryBuilder::new(tables::BOOKINGS)
            .select(STAYS_PROJECTION)
            .filter(Filter::and(vec![
                Filter::gte("start_date", dates::to_store_string(date)),
                Filter::lte("start_date", dates::to_store_string(today)),
            ]))
            .build();

        let result = self
            .tables
            .select(&query)
            .await
            .map_err(logged(DashboardError::Fetch, LOAD_FAILED))?;
        decode_rows(&BOOKING_FIELDS, result.into_rows()).map_err(logged(DashboardError::Fetch, LOAD_FAILED))
    }

    /// Guests arriving today (unconfirmed, starting today) and leaving today
    /// (checked in, ending today), oldest booking first. The predicate runs in
    /// the store so only today's rows are transferred.
    pub async fn get_today_activity(&self) -> Result<Vec<Booking>> {
        let today = dates::to_store_string(dates::start_of_day(self.clock.now()));
        let query = QueryBuilder::new(tables::BOOKINGS)
            .select(ACTIVITY_PROJECTION)
            .filter(today_activity_filter(&today))
            .oldest_first()
            .build();

        let result = self
            .tables
            .select(&query)
            .await
            .map_err(logged(DashboardError::Fetch, LOAD_FAILED))?;
        decode_rows(&BOOKING_FIELDS, result.into_rows()).map_err(logged(DashboardError::Fetch, LOAD_FAILED))
    }

    /// Apply a partial update and return the row as written
    pub async fn update_booking(&self, id: i64, patch: &BookingPatch) -> Result<Booking> {
        let data = encode_payload(&BOOKING_FIELDS, patch).map_err(logged(DashboardError::Update, UPDATE_FAILED))?;
        let operation = Operation::update_by_id(tables::BOOKINGS, id, data);

        let row = self
            .tables
            .execute(&operation)
            .await
            .and_then(|result| result.single_row())
            .map_err(logged(DashboardError::Update, UPDATE_FAILED))?;

        info!("Updated booking #{}", id);
        decode_row(&BOOKING_FIELDS, row).map_err(logged(DashboardError::Update, UPDATE_FAILED))
    }

    /// Delete a booking. Row-level policies of the store still apply.
    pub async fn delete_booking(&self, id: i64) -> Result<Vec<Booking>> {
        let operation = Operation::delete_by_id(tables::BOOKINGS, id);

        let result = self
            .tables
            .execute(&operation)
            .await
            .map_err(logged(DashboardError::Delete, DELETE_FAILED))?;

        info!("Deleted booking #{} ({} row(s))", id, result.rows.len());
        decode_rows(&BOOKING_FIELDS, result.rows).map_err(logged(DashboardError::Delete, DELETE_FAILED))
    }
}

fn today_activity_filter(today: &str) -> Filter {
    Filter::or(vec![
        Filter::and(vec![
            Filter::eq("status", BookingStatus::Unconfirmed.as_str()),
            Filter::eq("start_date", today),
        ]),
        Filter::and(vec![
            Filter::eq("status", BookingStatus::CheckedIn.as_str()),
            Filter::eq("end_date", today),
        ]),
    ])
}

fn remote_options(options: &QueryOptions) -> QueryOptions {
    QueryOptions {
        filter: options.filter.as_ref().map(|f| FilterDirective {
            field: BOOKING_FIELDS.remote_name(&f.field).to_string(),
            value: f.value.clone(),
            method: f.method,
        }),
        sort_by: options
            .sort_by
            .as_ref()
            .map(|s| SortDirective::new(BOOKING_FIELDS.remote_name(&s.field), s.direction)),
        page: options.page,
    }
}
