pub mod fallback;
pub mod normalize;
pub mod parse;
pub mod prompt;

use serde::de::DeserializeOwned;

pub use normalize::normalize;
pub use parse::{parse_structured, Validate};

use crate::errors::Result;
use crate::models::Assessed;
use crate::services::{GenerationRequest, GenerativeModel};

/// Call the model and turn its answer into `T`, reporting the first failure.
pub async fn request_structured<T>(model: &dyn GenerativeModel, request: &GenerationRequest) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let response = model.generate(request).await?;
    log::debug!("💬 Raw completion: {}", response.text());

    let json = normalize(response.text())?;
    parse_structured(&json)
}

/// Like [`request_structured`], but never fails: any error is logged and
/// replaced by `fallback()`, tagged with the reason.
pub async fn assess<T, F>(
    model: &dyn GenerativeModel,
    request: &GenerationRequest,
    label: &str,
    fallback: F,
) -> Assessed<T>
where
    T: DeserializeOwned + Validate,
    F: FnOnce() -> T,
{
    match request_structured(model, request).await {
        Ok(result) => {
            log::info!("✅ {} answered by {}", label, model.name());
            Assessed::live(result)
        }
        Err(e) => {
            log::warn!("⚠️ {} failed, using fallback: {}", label, e);
            Assessed::fallback(fallback(), e)
        }
    }
}
