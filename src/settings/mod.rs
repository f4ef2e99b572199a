//! Tool settings loading and resolution.
//!
//! Settings are layered with the `config` crate: default files, then
//! `--config` files, then `LVCFG__SECTION__KEY` environment variables, and
//! finally command-line flags. `load` is the entry point and returns the
//! [`ResolvedSettings`] the workflow runs with.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub(crate) use loader::load;
pub(crate) use resolved::{LogSettings, ResolvedSettings, SettingSource};
