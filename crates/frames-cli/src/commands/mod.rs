//! Command handlers grouped by concern.

pub(crate) mod auth;
pub(crate) mod face;
pub(crate) mod reports;
pub(crate) mod users;

#[cfg(test)]
pub(crate) mod test_support {
    use httpmock::MockServer;
    use reqwest::Client;

    use crate::client::AppContext;

    pub(crate) fn context_with(server: &MockServer) -> AppContext {
        AppContext {
            client: Client::new(),
            base_url: server.base_url().parse().expect("valid URL"),
        }
    }
}
