//! Route handlers for the request bridge. Each handler takes the raw query
//! or body and returns the response text.

pub mod options;
