//! Label reconciliation
//!
//! [`LabelMaker`] owns the label inventory fetched at the start of a run and
//! keeps it current as labels are created or updated, so nothing is fetched
//! twice.

use crate::labels::{DesiredLabel, LabelDetails};
use crate::remote::{LabelApi, LabelPatch, NewLabel, RemoteLabelSet, fetch_all_labels};
use crate::utils::error::AppResult;
use crate::utils::{OutputStyle, print_info, print_muted};
use rand::Rng;
use std::collections::BTreeSet;

/// What [`LabelMaker::ensure_label`] did for one label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelAction {
    Created,
    Updated(Vec<&'static str>),
    Unchanged,
}

/// Tally of a reconciliation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl RunSummary {
    fn record(&mut self, action: &LabelAction) {
        match action {
            LabelAction::Created => self.created += 1,
            LabelAction::Updated(_) => self.updated += 1,
            LabelAction::Unchanged => self.unchanged += 1,
        }
    }
}

pub struct LabelMaker<'a> {
    api: &'a dyn LabelApi,
    labels: RemoteLabelSet,
}

impl<'a> LabelMaker<'a> {
    pub fn new(api: &'a dyn LabelApi, labels: RemoteLabelSet) -> Self {
        Self { api, labels }
    }

    /// Fetch the repository's labels and start a run with them
    pub async fn load(api: &'a dyn LabelApi) -> AppResult<Self> {
        let labels = fetch_all_labels(api).await?;
        Ok(Self::new(api, labels))
    }

    pub fn labels(&self) -> &RemoteLabelSet {
        &self.labels
    }

    /// Create `name` if it is missing; with `force`, bring an existing
    /// label's color and description in line with `details`.
    pub async fn ensure_label(
        &mut self,
        name: &str,
        details: &LabelDetails,
        force: bool,
    ) -> AppResult<LabelAction> {
        let Some(extant) = self.labels.get_mut(name) else {
            print_info(&format!(
                "Creating {} label ({})",
                OutputStyle::quoted(name),
                OutputStyle::swatch(&details.color)
            ));
            let created = self
                .api
                .create_label(&NewLabel {
                    name: name.to_string(),
                    color: details.color.clone(),
                    description: details.description.clone(),
                })
                .await?;
            self.labels.insert(
                name.to_string(),
                LabelDetails::observed(created.color, created.description),
            );
            return Ok(LabelAction::Created);
        };

        let mut patch = LabelPatch::default();
        if force {
            if details.color != extant.color {
                patch.color = Some(details.color.clone());
                extant.color = details.color.clone();
            }
            if details.description_text() != extant.description_text() {
                patch.description = Some(details.description.clone());
                extant.description = details.description.clone();
            }
        }

        if patch.is_empty() {
            print_muted(&format!(
                "{} label already exists; not modifying",
                OutputStyle::quoted(name)
            ));
            return Ok(LabelAction::Unchanged);
        }

        let fields = patch.fields();
        print_info(&format!(
            "Updating {} for {} label",
            OutputStyle::field(&fields.join(", ")),
            OutputStyle::quoted(name)
        ));
        self.api.update_label(name, &patch).await?;
        Ok(LabelAction::Updated(fields))
    }
}

/// Ensure every configured label exists on the repository.
///
/// Stops at the first failed create or update.
pub async fn sync_labels<R: Rng + ?Sized>(
    api: &dyn LabelApi,
    names: &BTreeSet<String>,
    force: bool,
    rng: &mut R,
) -> AppResult<RunSummary> {
    let mut summary = RunSummary::default();
    if names.is_empty() {
        return Ok(summary);
    }

    let mut maker = LabelMaker::load(api).await?;
    for name in names {
        let desired = DesiredLabel::resolve(name, force, &mut *rng);
        let action = maker
            .ensure_label(name, &desired.details, desired.force)
            .await?;
        summary.record(&action);
    }
    Ok(summary)
}
