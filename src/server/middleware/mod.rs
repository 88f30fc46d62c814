//! Request processing middleware.
//!
//! - `logging` - Logs every request before and after the handler runs
//! - `extract` - Extractors that turn rejections and failed validation into `AppError`

pub mod extract;
pub mod logging;
