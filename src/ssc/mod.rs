//! Access to the SSC REST API
//!
//! Two layers sit here. The [`Gateway`] issues authenticated read-only `GET` requests against
//! `{base}/ssc/api/v1/{resource}` and hands back the raw body, classifying anything other than a
//! 2xx answer as an [`ApiError`]. The [`Repository`] builds typed accessors on top of it: each one
//! owns its resource path, its page-size ceiling and field projection, and the decoding of the
//! `{data, count, totalCount}` envelope.
//!
//! Nothing is cached and nothing is retried. Every accessor call is one outbound request.

mod error;
mod gateway;
mod repository;

pub use error::ApiError;
pub use gateway::Gateway;
pub use repository::Repository;
