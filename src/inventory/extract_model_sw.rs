use crate::inventory::patterns::MODEL_SOFTWARE_REGEX;
use crate::inventory::types::ModelSoftware;

/// Every model / software version / software image row in `text`.
///
/// Identical rows are kept: stack members of the same model running the same
/// image each get their own row.
pub fn extract_model_software(text: &str) -> Vec<ModelSoftware> {
    MODEL_SOFTWARE_REGEX
        .captures_iter(text)
        .map(|caps| {
            ModelSoftware::new(
                &caps["model_number"],
                &caps["software_version"],
                &caps["software_image"],
            )
        })
        .collect()
}
