use std::env;

// Runtime/server settings (not echo semantics).

pub fn http_port() -> u16 {
    env::var("ECHO_SERVER_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3333)
}

// Optional clamp on the repetition count; unset or unparsable means uncapped.
pub fn max_repetitions() -> Option<i64> {
    env::var("ECHO_MAX_REPETITIONS")
        .ok()
        .and_then(|value| value.parse::<i64>().ok())
}
