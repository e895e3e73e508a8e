use crate::layer::{plugin_map, Layer};
use crate::plugins::PluginHandle;

/// Alphabetization/sorting layer.
///
/// Registers the plugin without enabling any rule; projects opt into
/// specific sort rules through overrides or a user layer.
pub(crate) fn perfectionist() -> Vec<Layer> {
    vec![Layer {
        name: Some("lintweave:perfectionist".into()),
        plugins: Some(plugin_map([(
            "perfectionist",
            PluginHandle::new("eslint-plugin-perfectionist"),
        )])),
        ..Layer::default()
    }]
}
