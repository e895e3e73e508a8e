use crate::globs::GLOB_EXCLUDE;
use crate::layer::Layer;

/// Global exclusion layer, always first among the base layers.
pub(crate) fn ignores() -> Vec<Layer> {
    vec![Layer {
        name: Some("lintweave:ignores".into()),
        ignores: Some(GLOB_EXCLUDE.iter().map(|g| g.to_string()).collect()),
        ..Layer::default()
    }]
}
