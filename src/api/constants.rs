//! API constants and endpoint helpers for the hosted backend

/// Table (PostgREST) API path
pub const REST_PATH: &str = "/rest/v1";

/// Authentication API path
pub const AUTH_PATH: &str = "/auth/v1";

/// Object storage API path
pub const STORAGE_PATH: &str = "/storage/v1";

/// Number of bookings shown per page
pub const PAGE_SIZE: u32 = 10;

/// Storage buckets used by the dashboard
pub mod buckets {
    pub const CABIN_IMAGES: &str = "cabin-images";
    pub const AVATARS: &str = "avatars";
}

/// Table names
pub mod tables {
    pub const BOOKINGS: &str = "bookings";
    pub const CABINS: &str = "cabins";
    pub const SETTINGS: &str = "settings";
}

/// Standard headers for backend requests
pub mod headers {
    /// Project key header sent with every request
    pub const API_KEY: &str = "apikey";

    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    /// Accept header asking for exactly one row as an object
    pub const ACCEPT_SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

    /// Prefer header for returning representation
    pub const PREFER_RETURN_REPRESENTATION: &str = "return=representation";

    /// Prefer header for an exact total row count
    pub const PREFER_COUNT_EXACT: &str = "count=exact";

    /// Correlation id attached to each request for log tracing
    pub const X_CORRELATION_ID: &str = "x-correlation-id";

    /// Overwrite an existing object on upload
    pub const X_UPSERT: &str = "x-upsert";
}

/// Build table endpoint URL
pub fn table_endpoint(base_url: &str, table: &str) -> String {
    format!("{}{}/{}", trim_base(base_url), REST_PATH, table)
}

/// Build auth endpoint URL
pub fn auth_endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}/{}", trim_base(base_url), AUTH_PATH, path)
}

/// Build the upload endpoint for an object
pub fn object_endpoint(base_url: &str, bucket: &str, name: &str) -> String {
    format!(
        "{}{}/object/{}/{}",
        trim_base(base_url),
        STORAGE_PATH,
        bucket,
        urlencoding::encode(name)
    )
}

/// Public URL under which a stored object is served
pub fn public_object_url(base_url: &str, bucket: &str, name: &str) -> String {
    format!(
        "{}{}/object/public/{}/{}",
        trim_base(base_url),
        STORAGE_PATH,
        bucket,
        urlencoding::encode(name)
    )
}

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}
