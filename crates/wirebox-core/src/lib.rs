//! Wirebox Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Wirebox parser,
//! projector and renderers. It includes:
//!
//! - **Cells**: Logical `(row, column)` coordinates ([`cell::Cell`])
//! - **Tags**: Inline rendering hints such as `:center` ([`tag::Tag`])
//! - **Blocks**: The parsed tree of bracketed regions ([`block::Block`])
//! - **Grid**: The dense 2-D projection of a block tree ([`grid::Grid`])

pub mod block;
pub mod cell;
pub mod grid;
pub mod tag;
