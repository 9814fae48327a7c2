//! Civic issue reports.
//!
//! Citizens submit reports through the citizen routes; administrators filter,
//! count and triage them through the admin routes. Both sides share one
//! [`ReportRepository`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/citizen/reports` | Submit a report |
//! | GET | `/api/citizen/reports` | Recent reports |
//! | POST | `/api/citizen/image-preview` | Image to data URL |
//! | GET | `/api/admin/reports` | Filter by `status` / `category` |
//! | GET | `/api/admin/reports/stats` | Counts per status |
//! | GET | `/api/admin/reports/{id}` | Single report |
//! | PATCH | `/api/admin/reports/{id}/status` | Change status |

pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod presentation;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{InMemoryReportRepository, ReportRepository};
pub use services::{ImagePreviewService, SubmissionService, TriageService};
