//! # tickmatch-api
//!
//! HTTP front end for the tickmatch matching engine.
//!
//! | Route               | Engine call                     |
//! |---------------------|---------------------------------|
//! | `POST /order`       | `submit_buy` / `submit_sell`    |
//! | `GET /order/{id}`   | `find_order` + `Order::summary` |
//! | `GET /orderBook`    | `get_summary`                   |
//!
//! One engine per process, shared behind a single mutex.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod telemetry;

pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
