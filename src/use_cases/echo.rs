use crate::domain::case_mode::CaseMode;
use crate::domain::errors::EchoError;
use crate::interface_adapters::protocol::EchoQuery;

// Echo use case with the configured output limits injected.
pub struct EchoUseCase {
    // Optional clamp on the repetition count; None means uncapped.
    pub max_repetitions: Option<i64>,
}

impl EchoUseCase {
    // Transform the echo text and repeat it according to the query.
    pub fn execute(&self, query: EchoQuery) -> Result<String, EchoError> {
        let text = query.data.unwrap_or_default();
        if text.is_empty() {
            return Err(EchoError::EmptyText);
        }

        let transformed = CaseMode::parse(query.case.as_deref()).apply(&text);

        // Absent or unparsable counts fall back to a single copy.
        let requested = query
            .repetitions
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or(1);
        let requested = match self.max_repetitions {
            Some(cap) => requested.min(cap),
            None => requested,
        };

        // Zero and negative counts still yield exactly one copy.
        let mut response = transformed.clone();
        for _ in 1..requested.max(1) {
            response.push(' ');
            response.push_str(&transformed);
        }

        Ok(response)
    }
}
