//! Built-in layer providers
//!
//! Each provider owns one concern (a language, a formatting integration,
//! an import-hygiene rule set) and produces an ordered list of layers from
//! its slice of the options. The engine depends only on that contract; the
//! rule content below is house style, never inspected by the engine.

mod comments;
mod gitignore;
mod ignores;
mod imports;
mod javascript;
mod jsdoc;
mod jsonc;
mod markdown;
mod node;
mod perfectionist;
mod prettier;
mod react;
mod sort;
mod typescript;
mod unicorn;
mod vue;
mod yaml;

pub(crate) use comments::comments;
pub(crate) use gitignore::gitignore;
pub(crate) use ignores::ignores;
pub(crate) use imports::imports;
pub(crate) use javascript::javascript;
pub(crate) use jsdoc::jsdoc;
pub(crate) use jsonc::jsonc;
pub(crate) use markdown::markdown;
pub(crate) use node::node;
pub(crate) use perfectionist::perfectionist;
pub(crate) use prettier::prettier;
pub(crate) use react::react;
pub(crate) use sort::{sort_package_json, sort_tsconfig};
pub(crate) use test::test;
pub(crate) use typescript::{typescript, TypescriptParams};
pub(crate) use unicorn::unicorn;
pub(crate) use vue::vue;
pub(crate) use yaml::yaml;
