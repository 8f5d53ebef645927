//! Table reads and writes over the PostgREST endpoint

use super::backend::Tables;
use super::client::BackendClient;
use super::constants::{self, headers};
use super::operations::{Operation, OperationResult};
use super::query::result::parse_content_range_total;
use super::query::{Query, QueryResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

#[async_trait]
impl Tables for BackendClient {
    async fn select(&self, query: &Query) -> anyhow::Result<QueryResult> {
        let url = constants::table_endpoint(self.base_url(), &query.table);
        let params = query.to_query_params();
        let context = self.logger().start_operation("select", &query.table);

        let mut request_headers = HashMap::new();
        let mut request = self.http().get(&url).query(&params);

        if query.count {
            request = request.header("Prefer", headers::PREFER_COUNT_EXACT);
            request_headers.insert("Prefer".to_string(), headers::PREFER_COUNT_EXACT.to_string());
        }
        if query.single {
            request = request.header("Accept", headers::ACCEPT_SINGLE_OBJECT);
            request_headers.insert("Accept".to_string(), headers::ACCEPT_SINGLE_OBJECT.to_string());
        }
        self.logger().log_request(&context, "GET", &query.to_url(self.base_url()), &request_headers);

        let response = self
            .authorize(request, &context)
            .await
            .send()
            .await
            .map_err(|e| self.transport_error(&context, e))?;

        let (body, response_headers) = self.read_response(&context, response).await?;
        let count = if query.count {
            response_headers
                .get("content-range")
                .and_then(|range| parse_content_range_total(range))
        } else {
            None
        };

        QueryResult::from_json(body, count)
    }

    async fn execute(&self, operation: &Operation) -> anyhow::Result<OperationResult> {
        let url = constants::table_endpoint(self.base_url(), operation.table());
        let context = self
            .logger()
            .start_operation(operation.operation_type(), operation.table());

        let mut params = vec![("select".to_string(), "*".to_string())];
        let request = match operation {
            Operation::Insert { data, .. } => self.http().post(&url).json(data),
            Operation::Update { filter, data, .. } => {
                params.extend(filter.to_query_pairs());
                self.http().patch(&url).json(data)
            }
            Operation::Delete { filter, .. } => {
                params.extend(filter.to_query_pairs());
                self.http().delete(&url)
            }
        };

        let mut request_headers = HashMap::new();
        request_headers.insert("Prefer".to_string(), headers::PREFER_RETURN_REPRESENTATION.to_string());
        self.logger().log_request(&context, method_for(operation), &url, &request_headers);

        let request = request
            .query(&params)
            .header("Content-Type", headers::CONTENT_TYPE_JSON)
            .header("Prefer", headers::PREFER_RETURN_REPRESENTATION);

        let response = self
            .authorize(request, &context)
            .await
            .send()
            .await
            .map_err(|e| self.transport_error(&context, e))?;
        let status_code = response.status().as_u16();

        let (body, _) = self.read_response(&context, response).await?;
        let rows = match body {
            Value::Array(rows) => rows,
            Value::Null => Vec::new(),
            row => vec![row],
        };

        Ok(OperationResult::new(operation.clone(), rows, Some(status_code)))
    }
}

fn method_for(operation: &Operation) -> &'static str {
    match operation {
        Operation::Insert { .. } => "POST",
        Operation::Update { .. } => "PATCH",
        Operation::Delete { .. } => "DELETE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::logging::MonitoringConfig;
    use crate::api::query::{Filter, QueryBuilder};
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> BackendClient {
        BackendClient::with_custom_client(
            server.base_url(),
            "anon-key",
            reqwest::Client::new(),
            MonitoringConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_select_with_count_and_range() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/rest/v1/bookings")
                .query_param("select", "id,status")
                .query_param("status", "eq.checked-in")
                .query_param("offset", "10")
                .query_param("limit", "10")
                .header("apikey", "anon-key")
                .header("Prefer", "count=exact");
            then.status(206)
                .header("Content-Range", "10-11/12")
                .json_body(json!([{"id": 11, "status": "checked-in"}, {"id": 12, "status": "checked-in"}]));
        });

        let client = client_for(&server);
        let query = QueryBuilder::new("bookings")
            .select("id, status")
            .filter(Filter::eq("status", "checked-in"))
            .page(2, 10)
            .count()
            .build();

        let result = client.select(&query).await.unwrap();

        mock.assert();
        assert_eq!(result.len(), 2);
        assert_eq!(result.count(), Some(12));
    }

    #[tokio::test]
    async fn test_single_select_sends_object_accept() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/rest/v1/bookings")
                .query_param("id", "eq.7")
                .header("Accept", "application/vnd.pgrst.object+json");
            then.status(200).json_body(json!({"id": 7}));
        });

        let client = client_for(&server);
        let query = QueryBuilder::new("bookings").by_id(7).single().build();
        let result = client.select(&query).await.unwrap();

        mock.assert();
        assert_eq!(result.first(), Some(&json!({"id": 7})));
    }

    #[tokio::test]
    async fn test_select_error_carries_backend_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/rest/v1/bookings");
            then.status(406)
                .json_body(json!({"code": "PGRST116", "message": "JSON object requested, multiple (or no) rows returned"}));
        });

        let client = client_for(&server);
        let query = QueryBuilder::new("bookings").by_id(999).single().build();
        let error = client.select(&query).await.unwrap_err();

        assert!(error.to_string().contains("multiple (or no) rows returned"));
    }

    #[tokio::test]
    async fn test_update_sends_filter_and_returns_rows() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/rest/v1/bookings")
                .query_param("id", "eq.3")
                .header("Prefer", "return=representation")
                .json_body(json!({"status": "checked-out"}));
            then.status(200).json_body(json!([{"id": 3, "status": "checked-out"}]));
        });

        let client = client_for(&server);
        let op = Operation::update_by_id("bookings", 3, json!({"status": "checked-out"}));
        let result = client.execute(&op).await.unwrap();

        mock.assert();
        assert_eq!(result.status_code, Some(200));
        assert_eq!(result.single_row().unwrap()["status"], "checked-out");
    }

    #[tokio::test]
    async fn test_insert_posts_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/rest/v1/cabins")
                .json_body(json!({"name": "009", "max_capacity": 4}));
            then.status(201).json_body(json!([{"id": 20, "name": "009", "max_capacity": 4}]));
        });

        let client = client_for(&server);
        let op = Operation::insert("cabins", json!({"name": "009", "max_capacity": 4}));
        let result = client.execute(&op).await.unwrap();

        mock.assert();
        assert_eq!(result.rows.len(), 1);
    }
}
