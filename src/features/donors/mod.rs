//! Blood donor intake feature.
//!
//! Serves a server-rendered registration form and stores each submission as a
//! donor record, refusing future donation dates and exact duplicates.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/` | No | Render the empty intake form |
//! | POST | `/` | No | Submit a donor (form-encoded) |

pub mod dtos;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgDonorRepository;
pub use services::DonorIntakeService;
