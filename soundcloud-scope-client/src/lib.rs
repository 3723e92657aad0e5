use snafu::prelude::*;

pub mod client;
pub mod soundcloud_models;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Snafu, Debug)]
pub enum Error {
    #[snafu(display("transport error: {message}"))]
    Transport { message: String },
    #[snafu(display("unexpected status code: {status}"))]
    Status { status: u16 },
    #[snafu(display("failed to deserialize response: {message}"))]
    Deserialize { message: String },
    #[snafu(display("invalid search url: {url}"))]
    InvalidUrl { url: String },
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport {
            message: value.to_string(),
        }
    }
}
