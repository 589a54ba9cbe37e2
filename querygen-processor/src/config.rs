//! Processor configuration: which annotations play which role.
//!
//! Presets cover the native annotation set and the JPA mapping annotations.
//! A TOML file can override any role:
//!
//! ```toml
//! [annotations]
//! entity = "javax.persistence.Entity"
//! skip = "javax.persistence.Transient"
//! mapping = ["javax.persistence.Column", "javax.persistence.Id"]
//! ```

use crate::error::{ConfigError, ConfigResult};
use crate::member::{AnnotatedMember, AnnotationId};
use crate::visibility::VisibilityPolicySelector;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// The query type marker; always relevant for visibility decisions.
pub const MARKER_ANNOTATION: &str = "com.mysema.query.annotations.QueryType";

const NATIVE_PACKAGE: &str = "com.mysema.query.annotations";
const JPA_PACKAGE: &str = "javax.persistence";

const JPA_MAPPING: [&str; 9] = [
    "Column",
    "Embedded",
    "EmbeddedId",
    "GeneratedValue",
    "Id",
    "JoinColumn",
    "ManyToOne",
    "OneToMany",
    "PrimaryKeyJoinColumn",
];

fn native(simple: &str) -> AnnotationId {
    AnnotationId::new(format!("{NATIVE_PACKAGE}.{simple}"))
}

fn jpa(simple: &str) -> AnnotationId {
    AnnotationId::new(format!("{JPA_PACKAGE}.{simple}"))
}

/// Annotation roles recognised by the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    pub entity: AnnotationId,
    pub supertype: AnnotationId,
    pub embeddable: AnnotationId,
    pub dto: AnnotationId,
    pub skip: AnnotationId,
    pub marker: AnnotationId,
    /// Mapping annotations whose placement drives the visibility policy.
    pub mapping: Vec<AnnotationId>,
}

impl ProcessorConfig {
    /// Native annotations only; no mapping annotations.
    pub fn querydsl() -> Self {
        Self {
            entity: native("QueryEntity"),
            supertype: native("QuerySupertype"),
            embeddable: native("QueryEmbeddable"),
            dto: native("QueryProjection"),
            skip: native("QueryTransient"),
            marker: AnnotationId::from(MARKER_ANNOTATION),
            mapping: Vec::new(),
        }
    }

    /// JPA entity annotations with the JPA mapping annotation set.
    pub fn jpa() -> Self {
        Self {
            entity: jpa("Entity"),
            supertype: jpa("MappedSuperclass"),
            embeddable: jpa("Embeddable"),
            dto: native("QueryProjection"),
            skip: jpa("Transient"),
            marker: AnnotationId::from(MARKER_ANNOTATION),
            mapping: JPA_MAPPING.iter().map(|s| jpa(s)).collect(),
        }
    }

    /// Parses a TOML document. Roles it leaves out keep their native preset.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        file.into_config()
    }

    /// Reads and parses a TOML configuration file.
    pub fn try_load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads configuration from `path`, falling back to [`ProcessorConfig::jpa`]
    /// when the file is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            warn!("No processor config at {:?}, using JPA defaults", path);
            return Self::jpa();
        }

        match Self::try_load_from(path) {
            Ok(config) => {
                info!(mapping = config.mapping.len(), "Loaded processor config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("{}. Falling back to JPA defaults.", e);
                Self::jpa()
            }
        }
    }

    /// Relevant annotations for visibility decisions: the marker, then mappings.
    pub fn relevant_annotations(&self) -> Vec<AnnotationId> {
        std::iter::once(self.marker.clone())
            .chain(self.mapping.iter().cloned())
            .collect()
    }

    pub fn selector(&self) -> VisibilityPolicySelector {
        VisibilityPolicySelector::new(self.relevant_annotations())
    }

    /// Returns true if the member is excluded from the generated type.
    pub fn is_skipped<M: AnnotatedMember + ?Sized>(&self, member: &M) -> bool {
        member.has_annotation(&self.skip)
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::querydsl()
    }
}

/// Raw TOML structure.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    annotations: AnnotationSection,
}

#[derive(Deserialize, Default)]
struct AnnotationSection {
    entity: Option<String>,
    supertype: Option<String>,
    embeddable: Option<String>,
    dto: Option<String>,
    skip: Option<String>,
    marker: Option<String>,
    #[serde(default)]
    mapping: Vec<String>,
}

impl ConfigFile {
    fn into_config(self) -> ConfigResult<ProcessorConfig> {
        let defaults = ProcessorConfig::querydsl();
        let a = self.annotations;

        let mapping = a
            .mapping
            .into_iter()
            .map(|name| match name.trim() {
                "" => Err(ConfigError::EmptyAnnotation("mapping")),
                trimmed => Ok(AnnotationId::new(trimmed)),
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        Ok(ProcessorConfig {
            entity: non_empty("entity", a.entity, defaults.entity)?,
            supertype: non_empty("supertype", a.supertype, defaults.supertype)?,
            embeddable: non_empty("embeddable", a.embeddable, defaults.embeddable)?,
            dto: non_empty("dto", a.dto, defaults.dto)?,
            skip: non_empty("skip", a.skip, defaults.skip)?,
            marker: non_empty("marker", a.marker, defaults.marker)?,
            mapping,
        })
    }
}

fn non_empty(
    role: &'static str,
    value: Option<String>,
    default: AnnotationId,
) -> ConfigResult<AnnotationId> {
    match value {
        None => Ok(default),
        Some(name) if name.trim().is_empty() => Err(ConfigError::EmptyAnnotation(role)),
        Some(name) => Ok(AnnotationId::new(name.trim())),
    }
}
