//! Composition entry point
//!
//! One stateless pass per call: select providers, resolve them in
//! parallel, flatten, then append the caller's raw escape-hatch layer and
//! extra layer lists. Nothing persists between invocations.

use std::sync::Arc;

use crate::combine::combine;
use crate::detect::{EnvProbe, SystemProbe};
use crate::error::ComposeError;
use crate::layer::Layer;
use crate::options::ComposeOptions;
use crate::plugins::{ModuleLoader, PluginHandle, StaticRegistry};
use crate::resolve::resolve;
use crate::select::select;

/// Compose the final ordered layer sequence from `options`.
///
/// `user_layers` are appended after every built-in layer, in the order
/// supplied, and therefore take the highest precedence at the consuming
/// tool's resolution time.
pub async fn compose(
    options: ComposeOptions,
    user_layers: Vec<Vec<Layer>>,
) -> Result<Vec<Layer>, ComposeError> {
    let probe = SystemProbe::current();
    let loader: Arc<dyn ModuleLoader> = Arc::new(StaticRegistry::new());
    compose_with(options, user_layers, &probe, loader).await
}

/// [`compose`] with explicit environment and module-loading collaborators.
pub async fn compose_with(
    options: ComposeOptions,
    user_layers: Vec<Vec<Layer>>,
    probe: &dyn EnvProbe,
    loader: Arc<dyn ModuleLoader>,
) -> Result<Vec<Layer>, ComposeError> {
    let invocations = select(&options, probe, &loader);
    let mut lists = resolve(invocations).await?;

    if let Some(layer) = passthrough_layer(&options) {
        lists.push(vec![layer]);
    }

    Ok(combine(lists, user_layers))
}

/// Project the whitelisted raw keys out of the options into one final
/// layer. Returns `None` when no raw key was supplied.
fn passthrough_layer(options: &ComposeOptions) -> Option<Layer> {
    let layer = Layer {
        name: None,
        files: options.files.clone(),
        ignores: options.ignores.clone(),
        plugins: options.plugins.as_ref().map(|plugins| {
            plugins
                .iter()
                .map(|(alias, module)| (alias.clone(), PluginHandle::new(module)))
                .collect()
        }),
        rules: options.rules.clone(),
        language_options: options.language_options.clone(),
        linter_options: options.linter_options.clone(),
        processor: options.processor.clone(),
        settings: options.settings.clone(),
    };

    if layer == Layer::default() {
        None
    } else {
        Some(layer)
    }
}
