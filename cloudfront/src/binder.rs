use aws_sdk_cloudfront::Client;
use aws_sdk_cloudfront::operation::get_distribution::GetDistributionOutput;
use aws_sdk_cloudfront::operation::update_distribution::UpdateDistributionOutput;
use aws_sdk_cloudfront::types::{DistributionConfig, EventType};
use edge_binder_core::AwsClientConfig;

use crate::editor::{AssociationEditor, EdgeAction};
use crate::error::EdgeBinderError;

/// One `UpdateDistribution` request: distribution id, the concurrency token
/// fetched alongside the current config, and the rewritten config.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateParams {
    pub id: String,
    pub if_match: Option<String>,
    pub config: DistributionConfig,
}

/// Fails when the fetch came back without a distribution. A missing ETag is
/// passed along as-is and left to the store to reject.
pub fn build_update_params(
    distribution_id: &str,
    fetched: &GetDistributionOutput,
    config: DistributionConfig,
) -> Result<UpdateParams, EdgeBinderError> {
    let Some(distribution) = fetched.distribution() else {
        return Err(EdgeBinderError::NoSuchDistribution(distribution_id.to_owned()));
    };

    Ok(UpdateParams {
        id: distribution.id.clone(),
        if_match: fetched.e_tag().map(str::to_owned),
        config,
    })
}

/// Drives the read-modify-write protocol for one distribution at a time:
/// fetch config and ETag, apply the editor's transform, submit the update
/// under that ETag. One read and at most one write per call, no retries.
pub struct EdgeFunctionBinder {
    client: Client,
    editor: AssociationEditor,
    debug: bool,
}

impl EdgeFunctionBinder {
    pub fn new(client: Client, function_arn: impl Into<String>, event_type: EventType) -> Self {
        Self::with_editor(client, AssociationEditor::new(function_arn, event_type))
    }

    pub fn with_editor(client: Client, editor: AssociationEditor) -> Self {
        Self {
            client,
            editor,
            debug: false,
        }
    }

    /// Build the CloudFront client from shared bootstrap settings.
    pub async fn connect(config: &AwsClientConfig, function_arn: impl Into<String>, event_type: EventType) -> Self {
        let sdk_config = config.load_sdk_config().await;
        Self::new(Client::new(&sdk_config), function_arn, event_type)
    }

    pub fn editor(&self) -> &AssociationEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut AssociationEditor {
        &mut self.editor
    }

    /// Log every request and response of both round trips. Observability
    /// only; control flow and return values are unaffected.
    pub fn enable_debugger(&mut self) -> &mut Self {
        self.debug = true;
        self
    }

    pub fn disable_debugger(&mut self) -> &mut Self {
        self.debug = false;
        self
    }

    pub async fn attach_to(&self, distribution_id: &str) -> Result<UpdateDistributionOutput, EdgeBinderError> {
        self.update_association(distribution_id, EdgeAction::Attach).await
    }

    pub async fn detach_from(&self, distribution_id: &str) -> Result<UpdateDistributionOutput, EdgeBinderError> {
        self.update_association(distribution_id, EdgeAction::Detach).await
    }

    async fn update_association(
        &self,
        distribution_id: &str,
        action: EdgeAction,
    ) -> Result<UpdateDistributionOutput, EdgeBinderError> {
        if self.debug {
            tracing::debug!(action = "get_distribution", distribution_id, "request");
        }

        let fetched = self.client.get_distribution().id(distribution_id).send().await?;

        if self.debug {
            tracing::debug!(action = "get_distribution", data = ?fetched, "response");
        }

        let config = fetched
            .distribution()
            .ok_or_else(|| EdgeBinderError::NoSuchDistribution(distribution_id.to_owned()))?
            .distribution_config()
            .ok_or_else(|| EdgeBinderError::MissingDistributionConfig(distribution_id.to_owned()))?;

        let new_config = self.editor.build_update_config(config.clone(), Some(action))?;
        let params = build_update_params(distribution_id, &fetched, new_config)?;

        if self.debug {
            tracing::debug!(action = "update_distribution", distribution_id, if_match = ?params.if_match, "request");
        }

        let result = self
            .client
            .update_distribution()
            .id(params.id)
            .set_if_match(params.if_match)
            .distribution_config(params.config)
            .send()
            .await?;

        if self.debug {
            tracing::debug!(action = "update_distribution", data = ?result, "response");
        }

        Ok(result)
    }
}
