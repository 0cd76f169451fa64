//! Unit tests for the dispatch bounded context.
