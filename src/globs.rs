//! Shared glob patterns used by the built-in presets

pub const GLOB_SRC_EXT: &str = "?([cm])[jt]s?(x)";
pub const GLOB_SRC: &str = "**/*.?([cm])[jt]s?(x)";

pub const GLOB_TS: &str = "**/*.?([cm])ts";
pub const GLOB_TSX: &str = "**/*.?([cm])tsx";

pub const GLOB_VUE: &str = "**/*.vue";
pub const GLOB_JSX: &str = "**/*.jsx";

pub const GLOB_JSON: &str = "**/*.json";
pub const GLOB_JSON5: &str = "**/*.json5";
pub const GLOB_JSONC: &str = "**/*.jsonc";

pub const GLOB_YAML: &str = "**/*.y?(a)ml";
pub const GLOB_MARKDOWN: &str = "**/*.md";

pub const GLOB_TESTS: &[&str] = &[
    "**/__tests__/**/*.?([cm])[jt]s?(x)",
    "**/*.spec.?([cm])[jt]s?(x)",
    "**/*.test.?([cm])[jt]s?(x)",
    "**/*.bench.?([cm])[jt]s?(x)",
];

/// Paths no layer should ever look at.
pub const GLOB_EXCLUDE: &[&str] = &[
    "**/node_modules",
    "**/dist",
    "**/package-lock.json",
    "**/yarn.lock",
    "**/pnpm-lock.yaml",
    "**/output",
    "**/coverage",
    "**/temp",
    "**/.temp",
    "**/tmp",
    "**/.tmp",
    "**/.history",
    "**/.vitepress/cache",
    "**/.nuxt",
    "**/.next",
    "**/.vercel",
    "**/.changeset",
    "**/.idea",
    "**/.cache",
    "**/.output",
    "**/CHANGELOG*.md",
    "**/*.min.*",
    "**/LICENSE*",
    "**/__snapshots__",
    "**/auto-import?(s).d.ts",
    "**/components.d.ts",
];
