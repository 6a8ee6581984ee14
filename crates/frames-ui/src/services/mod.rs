//! Browser services: REST client, report downloads and the wall clock.

pub(crate) mod api;
pub(crate) mod clock;
pub(crate) mod download;
