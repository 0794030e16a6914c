//! AI refinement of the heuristic demographics baseline.

use tpulse_models::{baseline, AiOutcome, Demographics, DegradeReason};

use crate::generator::TextGenerator;
use crate::json::parse_document;
use crate::metrics::record_outcome;
use crate::prompts::demographics_prompt;

/// Ask the generative service for a better audience estimate.
///
/// Always resolves. Without a generator, or when the request fails, the reply
/// does not parse, or the parsed document fails [`Demographics::check_shape`],
/// the result is the heuristic baseline for `category_id`. A valid document is
/// returned as generated, untouched.
pub async fn refine_demographics(
    generator: Option<&dyn TextGenerator>,
    title: &str,
    description: &str,
    category_id: &str,
) -> AiOutcome<Demographics> {
    let base = baseline(category_id);

    let outcome = match generator {
        None => AiOutcome::degraded(base, DegradeReason::MissingCredential),
        Some(generator) => {
            let prompt = demographics_prompt(title, description, &base.category_name);
            match generator.generate(&prompt).await {
                Err(e) => AiOutcome::degraded(base, e.degrade_reason()),
                Ok(text) => match parse_document::<Demographics>(&text) {
                    Err(e) => {
                        AiOutcome::degraded(base, DegradeReason::MalformedResponse(e.to_string()))
                    }
                    Ok(refined) => match refined.check_shape() {
                        Ok(()) => AiOutcome::Generated(refined),
                        Err(e) => {
                            AiOutcome::degraded(base, DegradeReason::InvalidShape(e.to_string()))
                        }
                    },
                },
            }
        }
    };

    record_outcome("demographics", &outcome);
    outcome
}
