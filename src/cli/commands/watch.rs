//! Watch command implementation.
//!
//! The `forkful watch` command shows the favorites and redraws them whenever
//! another forkful process changes them.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::cli::args::WatchArgs;
use crate::config::WatchSettings;
use crate::error::Result;
use crate::favorites::{FavoritesEngine, Recipe};
use crate::store::FileStore;
use crate::subscription::Subscription;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::render_favorites;
use super::open_favorites;

/// The watch command implementation.
pub struct WatchCommand {
    data_dir: PathBuf,
    interval: Duration,
    max_polls: Option<u64>,
}

impl WatchCommand {
    /// Create a new watch command.
    ///
    /// `--interval` overrides the configured poll interval.
    pub fn new(data_dir: &Path, settings: &WatchSettings, args: WatchArgs) -> Self {
        let interval_ms = args.interval.unwrap_or(settings.poll_interval_ms);
        Self {
            data_dir: data_dir.to_path_buf(),
            interval: Duration::from_millis(interval_ms),
            max_polls: args.max_polls,
        }
    }

    /// Delay between polls.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Command for WatchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let session = WatchSession::open(&self.data_dir);
        session.render_current(ui);
        ui.detail(&format!(
            "Watching {} every {}ms",
            self.data_dir.display(),
            self.interval.as_millis()
        ));

        let mut polls = 0u64;
        loop {
            thread::sleep(self.interval);
            session.poll(ui);
            polls += 1;
            if self.max_polls.is_some_and(|max| polls >= max) {
                debug!("Stopping watch after {} polls", polls);
                break;
            }
        }
        Ok(CommandResult::success())
    }
}

/// A favorites view that follows changes written by other processes.
struct WatchSession {
    store: Rc<FileStore>,
    favorites: FavoritesEngine,
    updates: Rc<RefCell<Vec<Vec<Recipe>>>>,
    _subscription: Subscription,
}

impl WatchSession {
    fn open(data_dir: &Path) -> Self {
        let (store, favorites) = open_favorites(data_dir);
        let updates: Rc<RefCell<Vec<Vec<Recipe>>>> = Rc::default();
        let queue = Rc::clone(&updates);
        let subscription = favorites.subscribe(move |recipes: &[Recipe]| {
            queue.borrow_mut().push(recipes.to_vec());
        });
        Self {
            store,
            favorites,
            updates,
            _subscription: subscription,
        }
    }

    fn render_current(&self, ui: &mut dyn UserInterface) {
        render_favorites(ui, &self.favorites.list());
    }

    /// Check for external changes and render each update. Returns the number
    /// of updates rendered.
    fn poll(&self, ui: &mut dyn UserInterface) -> usize {
        self.store.poll();
        let updates = std::mem::take(&mut *self.updates.borrow_mut());
        for recipes in &updates {
            ui.message("");
            render_favorites(ui, recipes);
        }
        updates.len()
    }
}
