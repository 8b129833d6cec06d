//! Request Submission Handler
//!
//! Validate the inputs, POST them to the automation webhook once, and map
//! whatever happens into an ActionResult. Every failure is recovered here;
//! callers always get a result back.

use tracing::{debug, error};

use crate::domain::entities::{ActionResult, SearchRequest};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{fsn_tokens, ReportTarget};
use crate::ports::ReportWebhook;

/// Submit one report request to `endpoint` through `webhook`.
///
/// No retries and no dedup: calling this twice fires two POSTs.
pub async fn submit(
    webhook: &dyn ReportWebhook,
    endpoint: &str,
    request: &SearchRequest,
) -> ActionResult {
    let term = request.term.as_str();

    if let Err(err) = request.validate() {
        debug!(target_kind = %request.target, error = %err, "Rejected submission");
        let echoed_email = match &err {
            DomainError::InvalidEmail(email) => Some(email.as_str()),
            _ => None,
        };
        return ActionResult::failed(err.to_string(), term, echoed_email);
    }

    let email = request.email.as_str();

    if request.target == ReportTarget::Flipkart {
        debug!(fsn_count = fsn_tokens(term).len(), "Submitting FSN list");
    }

    match webhook.post_json(endpoint, &request.payload()).await {
        Ok(reply) if reply.is_success() => {
            ActionResult::succeeded(request.target.success_message(term, email), term, email)
        }
        Ok(reply) => {
            error!(
                target_kind = %request.target,
                term = %term,
                status = reply.status,
                body = %reply.body,
                "Webhook rejected request"
            );
            ActionResult::failed(
                format!(
                    "Could not process request for '{term}'. The server responded with status {}. Please try again.",
                    reply.status
                ),
                term,
                Some(email),
            )
        }
        Err(err) => {
            error!(
                target_kind = %request.target,
                term = %term,
                error = %err,
                "Network or unexpected error calling webhook"
            );
            ActionResult::failed(
                format!(
                    "An unexpected error occurred while searching for '{term}'. Please check your connection and try again."
                ),
                term,
                Some(email),
            )
        }
    }
}
