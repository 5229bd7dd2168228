//! Edge case tests for ctok-lex
