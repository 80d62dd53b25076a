use hydrate_model::{form::FormInput, water::WaterIntakeResult};
use log::warn;

use crate::{Client, Result};

/// Estimates every form in order. A failed form does not stop the rest.
pub async fn estimate_batch(
    client: &dyn Client,
    forms: &[FormInput],
) -> Vec<Result<WaterIntakeResult>> {
    let mut results = Vec::with_capacity(forms.len());
    for (i, form) in forms.iter().enumerate() {
        let result = client.estimate(form).await;
        if let Err(e) = &result {
            warn!("Form #{} failed: {}", i, e);
        }
        results.push(result);
    }
    results
}
