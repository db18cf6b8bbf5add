// Domain-level errors for the echo workflow.
#[derive(Debug)]
pub enum EchoError {
    EmptyText,
}
