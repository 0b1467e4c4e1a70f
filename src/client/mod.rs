//! Lookup service clients

mod datamuse;

pub use datamuse::{
    ClientConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DatamuseClient, check_status,
    parse_candidates,
};
