//! Error type for layer composition

use std::fmt;
use std::io;

use crate::select::Concern;

/// Error produced while composing the layer sequence.
///
/// Composition is all-or-nothing: the first failing provider aborts the
/// whole run and surfaces here, tagged with the concern that failed.
#[derive(Debug)]
pub enum ComposeError {
    /// IO error while a provider read project files
    Io(io::Error),
    /// A deferred plugin module could not be obtained
    ModuleLoad { module: String, reason: String },
    /// A provider invocation failed
    Provider {
        concern: Concern,
        source: Box<ComposeError>,
    },
    /// A provider task aborted without producing a result
    ProviderPanic { concern: Concern },
}

impl ComposeError {
    /// Tag an error with the concern whose provider produced it.
    ///
    /// Already-tagged errors pass through unchanged so the outermost
    /// concern name is the one the provider was invoked under.
    pub(crate) fn for_concern(self, concern: Concern) -> Self {
        match self {
            ComposeError::Provider { .. } | ComposeError::ProviderPanic { .. } => self,
            other => ComposeError::Provider {
                concern,
                source: Box::new(other),
            },
        }
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::Io(e) => write!(f, "io error while building layers: {e}"),
            ComposeError::ModuleLoad { module, reason } => {
                write!(f, "failed to load module `{module}`: {reason}")
            }
            ComposeError::Provider { concern, source } => {
                write!(f, "provider for `{concern}` failed: {source}")
            }
            ComposeError::ProviderPanic { concern } => {
                write!(f, "provider task for `{concern}` aborted unexpectedly")
            }
        }
    }
}

impl std::error::Error for ComposeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ComposeError::Io(e) => Some(e),
            ComposeError::Provider { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for ComposeError {
    fn from(e: io::Error) -> Self {
        ComposeError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_names_the_concern() {
        let err = ComposeError::ModuleLoad {
            module: "eslint-plugin-vue".into(),
            reason: "not in registry".into(),
        }
        .for_concern(Concern::Vue);

        let message = err.to_string();
        assert!(message.contains("vue"));
        assert!(message.contains("eslint-plugin-vue"));
    }

    #[test]
    fn test_for_concern_does_not_rewrap() {
        let inner = ComposeError::ModuleLoad {
            module: "yaml-eslint-parser".into(),
            reason: "not in registry".into(),
        };
        let tagged = inner.for_concern(Concern::Yaml).for_concern(Concern::Jsonc);

        match tagged {
            ComposeError::Provider { concern, .. } => assert_eq!(concern, Concern::Yaml),
            other => panic!("expected Provider error, got {other:?}"),
        }
    }
}
