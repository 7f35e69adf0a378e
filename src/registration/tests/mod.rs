//! Unit tests for the registration module.
//!
//! Tests are organised by layer, covering the field rules, the composite
//! validator, domain values, and the submission cycle.
