//! Edge case tests for lunar-lex
