// Use cases layer: application workflows for the echo server.

pub mod echo;
