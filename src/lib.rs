//! Meal photo in, calorie table out.
//!
//! The landing page posts an image to `/upload`; the image is base64-encoded,
//! sent to a vision-capable chat-completions API with a fixed prompt, and the
//! pipe-delimited table in the reply is rewritten into HTML.

pub mod config;
pub mod encoder;
pub mod error;
pub mod pages;
pub mod routes;
pub mod table;
pub mod vision;

pub use config::{Config, VisionSettings};
pub use encoder::EncodedImage;
pub use error::{AppError, VisionError};
pub use routes::{router, AppState};
pub use vision::{extract_table_text, VisionClient, VisionReply};
