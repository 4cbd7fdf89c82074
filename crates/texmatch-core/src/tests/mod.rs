//! Unit tests for `texmatch_core` types.

mod expr_tests;
mod tag_tests;
