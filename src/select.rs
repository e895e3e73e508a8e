//! Feature selection: which providers run, and in what order
//!
//! The selector reads the options and the environment probe exactly once
//! and produces an ordered list of provider invocations. It never runs a
//! provider itself; that is the resolver's job. The final sequence order
//! is a pure function of this list plus any caller-supplied extra layers.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

use crate::detect::EnvProbe;
use crate::error::ComposeError;
use crate::layer::Layer;
use crate::options::{ComposeOptions, Toggle};
use crate::plugins::ModuleLoader;
use crate::presets;
use crate::presets::TypescriptParams;

/// Marker packages whose presence enables the vue layer.
const VUE_MARKER_PACKAGES: &[&str] = &["vue", "nuxt", "vitepress", "@slidev/cli"];

/// Identity of a provider invocation, used for ordering and error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concern {
    Gitignore,
    Ignores,
    Javascript,
    Comments,
    Node,
    Jsdoc,
    Imports,
    Unicorn,
    Perfectionist,
    Prettier,
    Typescript,
    Test,
    Vue,
    React,
    Jsonc,
    SortPackageJson,
    SortTsconfig,
    Yaml,
    Markdown,
}

impl std::fmt::Display for Concern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Concern::Gitignore => "gitignore",
            Concern::Ignores => "ignores",
            Concern::Javascript => "javascript",
            Concern::Comments => "comments",
            Concern::Node => "node",
            Concern::Jsdoc => "jsdoc",
            Concern::Imports => "imports",
            Concern::Unicorn => "unicorn",
            Concern::Perfectionist => "perfectionist",
            Concern::Prettier => "prettier",
            Concern::Typescript => "typescript",
            Concern::Test => "test",
            Concern::Vue => "vue",
            Concern::React => "react",
            Concern::Jsonc => "jsonc",
            Concern::SortPackageJson => "sort-package-json",
            Concern::SortTsconfig => "sort-tsconfig",
            Concern::Yaml => "yaml",
            Concern::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

pub(crate) type LayerFuture =
    Pin<Box<dyn Future<Output = Result<Vec<Layer>, ComposeError>> + Send>>;

pub(crate) enum InvocationKind {
    /// Pure provider; never suspends
    Sync(Box<dyn FnOnce() -> Vec<Layer> + Send>),
    /// Provider with a deferred-load suspension point
    Deferred(LayerFuture),
}

/// One provider invocation the resolver should perform.
pub(crate) struct Invocation {
    pub(crate) concern: Concern,
    pub(crate) kind: InvocationKind,
}

impl Invocation {
    pub(crate) fn sync<F>(concern: Concern, produce: F) -> Self
    where
        F: FnOnce() -> Vec<Layer> + Send + 'static,
    {
        Invocation {
            concern,
            kind: InvocationKind::Sync(Box::new(produce)),
        }
    }

    pub(crate) fn deferred<Fut>(concern: Concern, future: Fut) -> Self
    where
        Fut: Future<Output = Result<Vec<Layer>, ComposeError>> + Send + 'static,
    {
        Invocation {
            concern,
            kind: InvocationKind::Deferred(Box::pin(future)),
        }
    }
}

/// Decide the ordered provider invocations for one composition.
pub(crate) fn select(
    options: &ComposeOptions,
    probe: &dyn EnvProbe,
    loader: &Arc<dyn ModuleLoader>,
) -> Vec<Invocation> {
    let in_editor = probe.editor_marker() && !probe.ci_marker();
    let enable_typescript = Toggle::enabled(
        &options.typescript,
        probe.package_installed("typescript"),
    );
    let enable_vue = options.vue.unwrap_or_else(|| {
        VUE_MARKER_PACKAGES
            .iter()
            .any(|pkg| probe.package_installed(pkg))
    });
    let enable_react = options.react.unwrap_or(false);

    // Shared extension list consumed by the markdown and typescript layers.
    let mut component_exts: Vec<String> = Vec::new();
    if enable_vue {
        component_exts.push("vue".into());
    }
    if enable_react {
        component_exts.push("jsx".into());
    }

    let overrides = &options.overrides;
    let mut invocations = Vec::new();

    // Gitignore-derived layer, first of all. Explicit configuration skips
    // the file-presence oracle and makes the file required.
    match &options.gitignore {
        Some(Toggle::Flag(false)) => {}
        Some(Toggle::Options(git)) => {
            let path = git.path.clone().unwrap_or_else(|| PathBuf::from(".gitignore"));
            invocations.push(Invocation::deferred(Concern::Gitignore, async move {
                presets::gitignore(&path).await
            }));
        }
        None | Some(Toggle::Flag(true)) => {
            if probe.has_gitignore() {
                let path = PathBuf::from(".gitignore");
                invocations.push(Invocation::deferred(Concern::Gitignore, async move {
                    presets::gitignore(&path).await
                }));
            }
        }
    }

    // Base layers, fixed order.
    let js_overrides = overrides.javascript.clone();
    invocations.push(Invocation::sync(Concern::Ignores, presets::ignores));
    invocations.push(Invocation::sync(Concern::Javascript, move || {
        presets::javascript(in_editor, js_overrides)
    }));
    invocations.push(Invocation::sync(Concern::Comments, presets::comments));
    invocations.push(Invocation::sync(Concern::Node, presets::node));
    invocations.push(Invocation::sync(Concern::Jsdoc, presets::jsdoc));
    invocations.push(Invocation::sync(Concern::Imports, presets::imports));
    invocations.push(Invocation::sync(Concern::Unicorn, presets::unicorn));
    invocations.push(Invocation::sync(Concern::Perfectionist, presets::perfectionist));
    invocations.push(Invocation::sync(Concern::Prettier, || presets::prettier(None)));

    if enable_typescript {
        let loader = Arc::clone(loader);
        let params = TypescriptParams {
            component_exts: component_exts.clone(),
            tsconfig_path: Toggle::options(&options.typescript)
                .and_then(|ts| ts.tsconfig_path.clone()),
            overrides: overrides.typescript.clone(),
        };
        invocations.push(Invocation::deferred(Concern::Typescript, async move {
            presets::typescript(loader, params).await
        }));
    }

    if options.test.unwrap_or(true) {
        let loader = Arc::clone(loader);
        let test_overrides = overrides.test.clone();
        invocations.push(Invocation::deferred(Concern::Test, async move {
            presets::test(loader, in_editor, test_overrides).await
        }));
    }

    if enable_vue {
        let loader = Arc::clone(loader);
        let vue_overrides = overrides.vue.clone();
        invocations.push(Invocation::deferred(Concern::Vue, async move {
            presets::vue(loader, enable_typescript, vue_overrides).await
        }));
    }

    if enable_react {
        let loader = Arc::clone(loader);
        let react_overrides = overrides.react.clone();
        invocations.push(Invocation::deferred(Concern::React, async move {
            presets::react(loader, enable_typescript, react_overrides).await
        }));
    }

    if options.jsonc.unwrap_or(true) {
        let jsonc_loader = Arc::clone(loader);
        let jsonc_overrides = overrides.jsonc.clone();
        invocations.push(Invocation::deferred(Concern::Jsonc, async move {
            presets::jsonc(jsonc_loader, jsonc_overrides).await
        }));

        let pkg_loader = Arc::clone(loader);
        invocations.push(Invocation::deferred(Concern::SortPackageJson, async move {
            presets::sort_package_json(pkg_loader).await
        }));

        let ts_loader = Arc::clone(loader);
        invocations.push(Invocation::deferred(Concern::SortTsconfig, async move {
            presets::sort_tsconfig(ts_loader).await
        }));
    }

    if options.yaml.unwrap_or(true) {
        let loader = Arc::clone(loader);
        let yaml_overrides = overrides.yaml.clone();
        invocations.push(Invocation::deferred(Concern::Yaml, async move {
            presets::yaml(loader, yaml_overrides).await
        }));
    }

    if options.markdown.unwrap_or(true) {
        let loader = Arc::clone(loader);
        let md_overrides = overrides.markdown.clone();
        let md_exts = component_exts.clone();
        invocations.push(Invocation::deferred(Concern::Markdown, async move {
            presets::markdown(loader, md_exts, md_overrides).await
        }));
    }

    // Formatting integration re-applied last so it outranks framework
    // layers; this occurrence takes the caller's overrides.
    if options.prettier.unwrap_or(true) {
        let prettier_overrides = overrides.prettier.clone();
        invocations.push(Invocation::sync(Concern::Prettier, move || {
            presets::prettier(prettier_overrides)
        }));
    }

    invocations
}
