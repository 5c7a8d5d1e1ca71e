//! Screen lifecycle contract and the activation table.

use crate::types::ScreenId;

/// One top-level screen (splash, menu, game, ...).
///
/// `E` is the input event type forwarded by the runtime and `C` the shared
/// application context. A screen owns all of its own mutable state; anything
/// shared with other screens goes through the context.
pub trait Screen<E, C> {
    /// Tag this screen answers to. Returning it from [`update`](Self::update)
    /// means "stay".
    fn id(&self) -> ScreenId;

    /// Called once when the screen becomes active.
    fn init(&mut self, _ctx: &mut C) {}

    fn handle_event(&mut self, event: &E, ctx: &mut C);

    /// Advance one frame and return the screen that should be active next.
    fn update(&mut self, now_ms: u64, ctx: &mut C) -> ScreenId;

    fn render(&mut self, ctx: &mut C);

    /// Called once when the screen stops being active.
    fn teardown(&mut self, _ctx: &mut C) {}
}

/// Builds screens on demand when the runtime switches to them.
pub trait ScreenFactory<E, C> {
    /// A fresh, not yet initialised screen for `id`, or `None` if there is no
    /// screen for that tag.
    fn create(&mut self, id: ScreenId) -> Option<Box<dyn Screen<E, C>>>;
}

impl<E, C, F> ScreenFactory<E, C> for F
where
    F: FnMut(ScreenId) -> Option<Box<dyn Screen<E, C>>>,
{
    fn create(&mut self, id: ScreenId) -> Option<Box<dyn Screen<E, C>>> {
        self(id)
    }
}
