//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Every command invocation opens its own [`FileStore`] on the data
//! directory, so each process is a separate execution context: changes it
//! writes are picked up by a concurrent `forkful watch`.

pub mod add;
pub mod check;
pub mod clear;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod list;
pub mod remove;
pub mod watch;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use std::path::Path;
use std::rc::Rc;

use crate::favorites::FavoritesEngine;
use crate::store::FileStore;

/// Open the favorites stored in `data_dir`.
pub(crate) fn open_favorites(data_dir: &Path) -> (Rc<FileStore>, FavoritesEngine) {
    let store = Rc::new(FileStore::new(data_dir));
    let engine = FavoritesEngine::new(store.clone());
    (store, engine)
}
