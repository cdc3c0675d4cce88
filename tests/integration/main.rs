//! Integration tests against an in-process fake loan API

mod api_tests;
mod search_flow;
mod support;
