//! Stitchline API Library
//!
//! Backend for a garment manufacturing business: buyer/supplier directory,
//! style catalog, sample development lifecycle, material consumption and SMV
//! timing.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod migrator;
pub mod services;
pub mod tracing;

use axum::Router;
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub stores: db::DataStores,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
    pub redis: Arc<redis::Client>,
}

/// Composes the full v1 API surface.
///
/// The samples router keeps its literal sub-paths (tna, plan, smv,
/// operations, operations-master) ahead of the generic `/:id` matcher.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/buyers", handlers::clients::buyer_routes())
        .nest("/suppliers", handlers::clients::supplier_routes())
        .nest("/styles", handlers::styles::style_routes())
        .nest(
            "/style-variants",
            handlers::styles::style_variant_routes(),
        )
        .nest(
            "/required-materials",
            handlers::materials::required_material_routes(),
        )
        .nest("/samples", handlers::samples::sample_routes())
        .nest(
            "/garment-colors",
            handlers::masters::garment_color_routes(),
        )
        .nest("/garment-sizes", handlers::masters::garment_size_routes())
        .nest("/operations", handlers::operations::operation_routes())
        .nest(
            "/merchandiser",
            handlers::merchandiser::merchandiser_routes(),
        )
}
