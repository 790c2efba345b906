use serde::Deserialize;
use thiserror::Error;

/// What a remote operation can fail with. Server-supplied messages are kept
/// verbatim: the UI shows them as-is, without a client-side fallback.
#[derive(Clone, Debug, Error)]
pub enum ServiceError {
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("network error: {0}")]
    Transport(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl From<ureq::Error> for ServiceError {
    fn from(value: ureq::Error) -> Self {
        match value {
            ureq::Error::Status(status, response) => {
                let message = match response.into_string() {
                    Ok(body) => match serde_json::from_str::<ErrorBody>(&body) {
                        Ok(parsed) => parsed.error,
                        Err(_) => body.trim().to_owned(),
                    },
                    Err(_) => String::new(),
                };
                Self::Server { status, message }
            }
            ureq::Error::Transport(transport) => Self::Transport(transport.to_string()),
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(value: std::io::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16, body: &str) -> ServiceError {
        let response = ureq::Response::new(status, "Error", body).unwrap();
        ureq::Error::Status(status, response).into()
    }

    #[test]
    fn server_messages_pass_through_verbatim() {
        let error = status_error(404, r#"{"error": "Link not found"}"#);
        assert_eq!(error.to_string(), "Link not found");
    }

    #[test]
    fn empty_server_messages_stay_empty() {
        let error = status_error(500, r#"{"error": ""}"#);
        assert_eq!(error.to_string(), "");

        let error = status_error(500, "");
        assert_eq!(error.to_string(), "");
    }

    #[test]
    fn non_json_bodies_are_used_as_the_message() {
        let error = status_error(502, "upstream unavailable\n");
        assert_eq!(error.to_string(), "upstream unavailable");
    }

    #[test]
    fn io_errors_are_transport_errors() {
        let error: ServiceError =
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused").into();
        assert_eq!(error.to_string(), "network error: connection refused");
    }
}
