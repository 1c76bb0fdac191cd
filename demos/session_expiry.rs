use http_errors::{HttpError, Result, StatusCode, AGENT_TOKEN_EXPIRED, LOGIN_TOKEN_EXPIRED};
use std::fmt;

#[derive(Debug)]
struct ExpiredAt(u64);

impl fmt::Display for ExpiredAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token expired at unix time {}", self.0)
    }
}

impl std::error::Error for ExpiredAt {}

fn authorize(agent: bool, now: u64, exp: u64) -> Result<()> {
    if now < exp {
        return Ok(());
    }
    let cause = Some(ExpiredAt(exp).into());
    if agent {
        Err(HttpError::agent_expired(format!("agent token stale by {}s", now - exp), cause))
    } else {
        Err(HttpError::login_expired(format!("login token stale by {}s", now - exp), cause))
    }
}

fn status_for_client(code: StatusCode) -> &'static str {
    // Custom codes are answered with a re-authentication hint
    match code {
        AGENT_TOKEN_EXPIRED => "re-register agent",
        LOGIN_TOKEN_EXPIRED => "log in again",
        _ => "retry later",
    }
}

fn main() {
    println!("--- Session Expiry Example ---\n");

    for agent in [true, false] {
        if let Err(err) = authorize(agent, 1_700_000_100, 1_700_000_000) {
            println!("client: {} -> {}", err, status_for_client(err.code()));
            println!("log:    {}\n", err.describe());
            assert!(err.is_client_error());
        }
    }
}
