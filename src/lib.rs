//! Calculation engine for Indian personal-finance calculators
//!
//! This crate provides income-tax regime comparison, loan EMIs and
//! eligibility, savings-scheme projections (SIP, RD, EPF, NPS, SSY, PPF,
//! lumpsum) and salary-side calculators (HRA, gratuity, TDS, CTC breakdown,
//! GST), driven by statutory tables for FY 2025-26. It also models the
//! citizen eligibility profile used to match government schemes, and exposes
//! every calculator over a JSON HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
