pub mod github;

use crate::labels::{LabelColor, LabelDetails};
use crate::utils::error::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Labels currently on the repository, keyed by name
pub type RemoteLabelSet = HashMap<String, LabelDetails>;

/// A label record as returned by the labels endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteLabel {
    pub name: String,
    pub color: LabelColor,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of a create call; a missing description is sent as `null`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLabel {
    pub name: String,
    pub color: LabelColor,
    pub description: Option<String>,
}

/// Body of an update call: only the fields being changed are serialized
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabelPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<LabelColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl LabelPatch {
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.description.is_none()
    }

    /// Names of the staged fields, in payload order
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.color.is_some() {
            fields.push("color");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        fields
    }
}

/// Label operations against a single repository
#[async_trait]
pub trait LabelApi: Send + Sync {
    /// Every label on the repository, across all pages
    async fn list_labels(&self) -> AppResult<Vec<RemoteLabel>>;
    async fn create_label(&self, label: &NewLabel) -> AppResult<RemoteLabel>;
    async fn update_label(&self, name: &str, patch: &LabelPatch) -> AppResult<()>;
}

/// Fetch the full label inventory. Later duplicates overwrite earlier ones.
pub async fn fetch_all_labels(api: &dyn LabelApi) -> AppResult<RemoteLabelSet> {
    Ok(api
        .list_labels()
        .await?
        .into_iter()
        .map(|label| {
            (
                label.name,
                LabelDetails::observed(label.color, label.description),
            )
        })
        .collect())
}
