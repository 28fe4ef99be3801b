// ABOUTME: Data source reading capabilities, characteristics, and samples from a JSON document
// ABOUTME: Loaded once with tokio::fs; fetches filter the loaded samples in memory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cardioload_core::models::{
    ActivityKind, ActivityKinds, BiologicalSex, MetricKind, MetricKinds, Sample, Season,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;

use crate::capabilities::{AuthorizationStatus, SourceCapabilities};
use crate::errors::SourceError;
use crate::source::{select_samples, DataSource};

/// On-disk layout of a source document
///
/// ```json
/// {
///   "name": "chest-strap",
///   "activities": ["running", "cycling"],
///   "metrics": ["heart_rate"],
///   "biological_sex": "female",
///   "date_of_birth": "1990-04-12",
///   "samples": [
///     {
///       "activity": "running",
///       "metric": "heart_rate",
///       "start_date": "2025-03-01T07:00:00Z",
///       "end_date": "2025-03-01T07:00:00Z",
///       "measurement": { "value": 142.0, "unit": "beats_per_minute" }
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Source name
    pub name: String,
    /// Supported activity kinds
    #[serde(default)]
    pub activities: Vec<ActivityKind>,
    /// Supported metrics
    #[serde(default)]
    pub metrics: Vec<MetricKind>,
    /// Recorded biological sex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biological_sex: Option<BiologicalSex>,
    /// Recorded date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// Samples, in any order
    #[serde(default)]
    pub samples: Vec<Sample>,
}

impl SourceDocument {
    /// Capabilities declared by the document
    #[must_use]
    pub fn capabilities(&self) -> SourceCapabilities {
        SourceCapabilities::new(
            self.activities.iter().copied().collect::<ActivityKinds>(),
            self.metrics.iter().copied().collect::<MetricKinds>(),
        )
    }
}

/// Data source served from a [`SourceDocument`] on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    capabilities: SourceCapabilities,
    document: SourceDocument,
}

impl JsonFileSource {
    /// Read and parse the document at `path`
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if the file cannot be read and
    /// `SourceError::Parse` if it is not a valid source document
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let raw = fs::read_to_string(&path)
            .await
            .map_err(|error| SourceError::Io {
                path: path.clone(),
                error,
            })?;
        let document: SourceDocument =
            serde_json::from_str(&raw).map_err(|error| SourceError::Parse {
                path: path.clone(),
                error,
            })?;
        info!(
            path = %path.display(),
            name = %document.name,
            samples = document.samples.len(),
            "Loaded source document"
        );
        Ok(Self::from_document(path, document))
    }

    /// Wrap an already parsed document
    #[must_use]
    pub fn from_document(path: PathBuf, document: SourceDocument) -> Self {
        Self {
            path,
            capabilities: document.capabilities(),
            document,
        }
    }

    /// Path the document was loaded from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loaded document
    #[must_use]
    pub const fn document(&self) -> &SourceDocument {
        &self.document
    }
}

#[async_trait]
impl DataSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.document.name
    }

    fn capabilities(&self) -> SourceCapabilities {
        self.capabilities
    }

    async fn is_available(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }

    async fn request_authorization(
        &self,
        metrics: MetricKinds,
    ) -> Result<AuthorizationStatus, SourceError> {
        if self.capabilities.supports_metrics(metrics) {
            Ok(AuthorizationStatus::Authorized)
        } else {
            Ok(AuthorizationStatus::Denied)
        }
    }

    async fn fetch(
        &self,
        activity: ActivityKind,
        metric: MetricKind,
        season: &Season,
    ) -> Result<Vec<Sample>, SourceError> {
        Ok(select_samples(
            &self.document.samples,
            activity,
            metric,
            season,
        ))
    }

    async fn biological_sex(&self) -> Result<Option<BiologicalSex>, SourceError> {
        Ok(self.document.biological_sex)
    }

    async fn date_of_birth(&self) -> Result<Option<NaiveDate>, SourceError> {
        Ok(self.document.date_of_birth)
    }
}
