//! HTTP-level integration tests driving the Agency Login router.

mod helpers;

mod health_test;
mod session_test;
