//! # Commands Module
//!
//! One submodule per command family, mirroring the interactions the
//! tracker's pages offered:
//!
//! - [`product`] - create, list, inspect, delete
//! - [`sales`] - record and correct sales
//! - [`config`] - theme preference

pub mod config;
pub mod product;
pub mod sales;
