// Aggregator for session integration tests in `tests/session/`.

#[path = "session/sequence_test.rs"]
mod sequence_test;

#[path = "session/failure_test.rs"]
mod failure_test;
