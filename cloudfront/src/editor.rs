use aws_sdk_cloudfront::error::BuildError;
use aws_sdk_cloudfront::types::{
    DistributionConfig, EventType, LambdaFunctionAssociation, LambdaFunctionAssociations,
};
use serde::{Deserialize, Serialize};

/// Which way to rewrite the association list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeAction {
    Attach,
    Detach,
}

impl EdgeAction {
    /// Unrecognized discriminators map to `None`, which
    /// [`AssociationEditor::build_update_config`] treats as a pass-through.
    pub fn parse(s: &str) -> Option<EdgeAction> {
        match s {
            "attach" => Some(EdgeAction::Attach),
            "detach" => Some(EdgeAction::Detach),
            _ => None,
        }
    }
}

/// Pure rewrite of `DefaultCacheBehavior.LambdaFunctionAssociations` for one
/// function arn and one target event type. Every other field of the config
/// passes through untouched.
#[derive(Debug, Clone)]
pub struct AssociationEditor {
    function_arn: String,
    event_type: EventType,
}

impl AssociationEditor {
    pub fn new(function_arn: impl Into<String>, event_type: EventType) -> Self {
        Self {
            function_arn: function_arn.into(),
            event_type,
        }
    }

    pub fn function_arn(&self) -> &str {
        &self.function_arn
    }

    pub fn event_type(&self) -> &EventType {
        &self.event_type
    }

    /// Retarget the editor; takes effect on the next attach/detach.
    pub fn set_event_type(&mut self, event_type: EventType) -> &mut Self {
        self.event_type = event_type;
        self
    }

    pub fn is_bound_arn(&self, arn: &str) -> bool {
        self.function_arn == arn
    }

    fn is_bound_association(&self, item: &LambdaFunctionAssociation) -> bool {
        item.event_type == self.event_type && self.is_bound_arn(&item.lambda_function_arn)
    }

    /// Remove every association matching the bound arn AND the target event
    /// type. Partial matches survive, in their original order, as do
    /// associations carrying an event type this editor does not recognize.
    /// A config without a default cache behavior or association list comes
    /// back unchanged.
    pub fn detach(&self, mut config: DistributionConfig) -> DistributionConfig {
        if let Some(behavior) = config.default_cache_behavior.as_mut()
            && let Some(associations) = behavior.lambda_function_associations.as_mut()
            && associations.quantity >= 1
            && let Some(items) = associations.items.take()
        {
            let kept: Vec<LambdaFunctionAssociation> = items
                .into_iter()
                .filter(|item| !self.is_bound_association(item))
                .collect();

            associations.quantity = kept.len() as i32;
            associations.items = Some(kept);
        }

        config
    }

    /// Detach first, then append the bound association, so a second attach
    /// never duplicates it. The association list is rebuilt from scratch on
    /// every call. Only fallible through the SDK builders; the values this
    /// editor supplies always pass.
    pub fn attach(&self, config: DistributionConfig) -> Result<DistributionConfig, BuildError> {
        let mut config = self.detach(config);

        if let Some(behavior) = config.default_cache_behavior.as_mut() {
            let mut items = behavior
                .lambda_function_associations
                .take()
                .and_then(|associations| associations.items)
                .unwrap_or_default();

            items.push(
                LambdaFunctionAssociation::builder()
                    .lambda_function_arn(self.function_arn.as_str())
                    .event_type(self.event_type.clone())
                    .build()?,
            );

            behavior.lambda_function_associations = Some(
                LambdaFunctionAssociations::builder()
                    .quantity(items.len() as i32)
                    .set_items(Some(items))
                    .build()?,
            );
        }

        Ok(config)
    }

    pub fn build_update_config(
        &self,
        config: DistributionConfig,
        action: Option<EdgeAction>,
    ) -> Result<DistributionConfig, BuildError> {
        match action {
            Some(EdgeAction::Attach) => self.attach(config),
            Some(EdgeAction::Detach) => Ok(self.detach(config)),
            None => Ok(config),
        }
    }
}
