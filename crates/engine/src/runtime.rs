//! ScreenRuntime: owns the active screen and runs the per-frame protocol.
//!
//! Each call to [`ScreenRuntime::frame`] does, strictly in order:
//!
//! 1. forward pending events to the active screen, handing global events to
//!    the context instead; a quit event stops draining at once
//! 2. bail out if the runtime is no longer running
//! 3. `update` the active screen
//! 4. on a valid transition: `teardown` the old screen and `init` the new one,
//!    skipping render for this frame (`Exit` stops the runtime instead)
//! 5. otherwise `render`

use crate::screen::{Screen, ScreenFactory};
use crate::types::ScreenId;

/// Events that are handled by the runtime or the context, never by a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalEvent {
    ToggleMetrics,
    Resize { width: u16, height: u16 },
}

/// One event from the platform pump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent<E> {
    /// Window closed or interrupt requested.
    Quit,
    Global(GlobalEvent),
    Input(E),
}

/// Context hook for events intercepted before they reach a screen.
pub trait RuntimeContext {
    fn on_global(&mut self, event: GlobalEvent);
}

/// What a single frame ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Stopped,
    Transitioned { from: ScreenId, to: ScreenId },
    Rendered,
}

pub struct ScreenRuntime<E, C> {
    factory: Box<dyn ScreenFactory<E, C>>,
    active: Box<dyn Screen<E, C>>,
    running: bool,
    torn_down: bool,
}

impl<E, C: RuntimeContext> ScreenRuntime<E, C> {
    /// Build the runtime on `initial` (normally [`ScreenId::Splash`]) and
    /// initialise it. Returns `None` if the factory has no such screen.
    pub fn start(
        mut factory: Box<dyn ScreenFactory<E, C>>,
        initial: ScreenId,
        ctx: &mut C,
    ) -> Option<Self> {
        let mut active = factory.create(initial)?;
        log::info!("starting on {} screen", initial.name());
        active.init(ctx);
        Some(Self {
            factory,
            active,
            running: true,
            torn_down: false,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn active_id(&self) -> ScreenId {
        self.active.id()
    }

    /// Run one frame. See the module docs for the exact order of calls.
    pub fn frame<I>(&mut self, events: I, now_ms: u64, ctx: &mut C) -> FrameOutcome
    where
        I: IntoIterator<Item = PlatformEvent<E>>,
    {
        if !self.running {
            return FrameOutcome::Stopped;
        }

        for event in events {
            match event {
                PlatformEvent::Quit => {
                    log::info!("quit requested on {} screen", self.active.id().name());
                    self.running = false;
                    break;
                }
                PlatformEvent::Global(global) => ctx.on_global(global),
                PlatformEvent::Input(input) => self.active.handle_event(&input, ctx),
            }
        }

        if !self.running {
            self.shutdown(ctx);
            return FrameOutcome::Stopped;
        }

        let from = self.active.id();
        let to = self.active.update(now_ms, ctx);

        if to == from {
            self.active.render(ctx);
            return FrameOutcome::Rendered;
        }

        if !from.can_transition_to(to) {
            log::warn!(
                "ignoring transition {} -> {}: no such edge",
                from.name(),
                to.name()
            );
            self.active.render(ctx);
            return FrameOutcome::Rendered;
        }

        if to.is_terminal() {
            log::info!("{} screen requested exit", from.name());
            self.shutdown(ctx);
            return FrameOutcome::Transitioned { from, to };
        }

        let Some(mut next) = self.factory.create(to) else {
            log::error!("no screen registered for {}, staying on {}", to.name(), from.name());
            self.active.render(ctx);
            return FrameOutcome::Rendered;
        };

        self.active.teardown(ctx);
        log::debug!("screen {} -> {}", from.name(), to.name());
        next.init(ctx);
        self.active = next;

        FrameOutcome::Transitioned { from, to }
    }

    /// Stop the runtime and tear the active screen down. Safe to call more
    /// than once; only the first call reaches the screen.
    pub fn shutdown(&mut self, ctx: &mut C) {
        self.running = false;
        if !self.torn_down {
            self.torn_down = true;
            self.active.teardown(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Ctx {
        calls: Vec<(ScreenId, &'static str)>,
        requests: HashMap<ScreenId, ScreenId>,
        globals: Vec<GlobalEvent>,
        events: Vec<(ScreenId, u32)>,
    }

    impl RuntimeContext for Ctx {
        fn on_global(&mut self, event: GlobalEvent) {
            self.globals.push(event);
        }
    }

    struct Stub(ScreenId);

    impl Screen<u32, Ctx> for Stub {
        fn id(&self) -> ScreenId {
            self.0
        }

        fn init(&mut self, ctx: &mut Ctx) {
            ctx.calls.push((self.0, "init"));
        }

        fn handle_event(&mut self, event: &u32, ctx: &mut Ctx) {
            ctx.events.push((self.0, *event));
        }

        fn update(&mut self, _now_ms: u64, ctx: &mut Ctx) -> ScreenId {
            ctx.calls.push((self.0, "update"));
            ctx.requests.get(&self.0).copied().unwrap_or(self.0)
        }

        fn render(&mut self, ctx: &mut Ctx) {
            ctx.calls.push((self.0, "render"));
        }

        fn teardown(&mut self, ctx: &mut Ctx) {
            ctx.calls.push((self.0, "teardown"));
        }
    }

    fn factory() -> Box<dyn ScreenFactory<u32, Ctx>> {
        Box::new(|id: ScreenId| -> Option<Box<dyn Screen<u32, Ctx>>> {
            match id {
                ScreenId::Exit => None,
                other => Some(Box::new(Stub(other))),
            }
        })
    }

    fn runtime_on(id: ScreenId, ctx: &mut Ctx) -> ScreenRuntime<u32, Ctx> {
        let rt = ScreenRuntime::start(factory(), id, ctx).unwrap();
        ctx.calls.clear();
        rt
    }

    #[test]
    fn start_initialises_first_screen() {
        let mut ctx = Ctx::default();
        let rt = ScreenRuntime::start(factory(), ScreenId::Splash, &mut ctx).unwrap();
        assert!(rt.is_running());
        assert_eq!(rt.active_id(), ScreenId::Splash);
        assert_eq!(ctx.calls, vec![(ScreenId::Splash, "init")]);
    }

    #[test]
    fn steady_frame_updates_then_renders() {
        let mut ctx = Ctx::default();
        let mut rt = runtime_on(ScreenId::Menu, &mut ctx);
        let outcome = rt.frame(vec![PlatformEvent::Input(7)], 0, &mut ctx);
        assert_eq!(outcome, FrameOutcome::Rendered);
        assert_eq!(ctx.events, vec![(ScreenId::Menu, 7)]);
        assert_eq!(
            ctx.calls,
            vec![(ScreenId::Menu, "update"), (ScreenId::Menu, "render")]
        );
    }

    #[test]
    fn transition_tears_down_before_init_and_skips_render() {
        let mut ctx = Ctx::default();
        let mut rt = runtime_on(ScreenId::Menu, &mut ctx);
        ctx.requests.insert(ScreenId::Menu, ScreenId::Game);

        let outcome = rt.frame(Vec::new(), 0, &mut ctx);
        assert_eq!(
            outcome,
            FrameOutcome::Transitioned {
                from: ScreenId::Menu,
                to: ScreenId::Game
            }
        );
        assert_eq!(
            ctx.calls,
            vec![
                (ScreenId::Menu, "update"),
                (ScreenId::Menu, "teardown"),
                (ScreenId::Game, "init"),
            ]
        );
        assert_eq!(rt.active_id(), ScreenId::Game);

        ctx.calls.clear();
        rt.frame(Vec::new(), 16, &mut ctx);
        assert_eq!(
            ctx.calls,
            vec![(ScreenId::Game, "update"), (ScreenId::Game, "render")]
        );
    }

    #[test]
    fn undefined_edge_is_ignored() {
        let mut ctx = Ctx::default();
        let mut rt = runtime_on(ScreenId::Splash, &mut ctx);
        ctx.requests.insert(ScreenId::Splash, ScreenId::GameOver);

        assert_eq!(rt.frame(Vec::new(), 0, &mut ctx), FrameOutcome::Rendered);
        assert_eq!(rt.active_id(), ScreenId::Splash);
        assert_eq!(
            ctx.calls,
            vec![(ScreenId::Splash, "update"), (ScreenId::Splash, "render")]
        );
    }

    #[test]
    fn exit_tears_down_and_stops() {
        let mut ctx = Ctx::default();
        let mut rt = runtime_on(ScreenId::Menu, &mut ctx);
        ctx.requests.insert(ScreenId::Menu, ScreenId::Exit);

        let outcome = rt.frame(Vec::new(), 0, &mut ctx);
        assert_eq!(
            outcome,
            FrameOutcome::Transitioned {
                from: ScreenId::Menu,
                to: ScreenId::Exit
            }
        );
        assert!(!rt.is_running());
        assert_eq!(
            ctx.calls,
            vec![(ScreenId::Menu, "update"), (ScreenId::Menu, "teardown")]
        );

        ctx.calls.clear();
        assert_eq!(rt.frame(Vec::new(), 16, &mut ctx), FrameOutcome::Stopped);
        rt.shutdown(&mut ctx);
        assert!(ctx.calls.is_empty());
    }

    #[test]
    fn quit_stops_draining_and_skips_update() {
        let mut ctx = Ctx::default();
        let mut rt = runtime_on(ScreenId::Game, &mut ctx);
        let events = vec![
            PlatformEvent::Input(1),
            PlatformEvent::Quit,
            PlatformEvent::Input(2),
        ];

        assert_eq!(rt.frame(events, 0, &mut ctx), FrameOutcome::Stopped);
        assert_eq!(ctx.events, vec![(ScreenId::Game, 1)]);
        assert_eq!(ctx.calls, vec![(ScreenId::Game, "teardown")]);
        assert!(!rt.is_running());
    }

    #[test]
    fn global_events_are_not_forwarded() {
        let mut ctx = Ctx::default();
        let mut rt = runtime_on(ScreenId::Menu, &mut ctx);
        let events = vec![
            PlatformEvent::Global(GlobalEvent::ToggleMetrics),
            PlatformEvent::Global(GlobalEvent::Resize {
                width: 80,
                height: 24,
            }),
        ];

        rt.frame(events, 0, &mut ctx);
        assert!(ctx.events.is_empty());
        assert_eq!(
            ctx.globals,
            vec![
                GlobalEvent::ToggleMetrics,
                GlobalEvent::Resize {
                    width: 80,
                    height: 24
                }
            ]
        );
    }

    #[test]
    fn missing_screen_keeps_current() {
        let mut ctx = Ctx::default();
        let sparse: Box<dyn ScreenFactory<u32, Ctx>> =
            Box::new(|id: ScreenId| -> Option<Box<dyn Screen<u32, Ctx>>> {
                match id {
                    ScreenId::Menu => Some(Box::new(Stub(ScreenId::Menu))),
                    _ => None,
                }
            });
        let mut rt = ScreenRuntime::start(sparse, ScreenId::Menu, &mut ctx).unwrap();
        ctx.calls.clear();
        ctx.requests.insert(ScreenId::Menu, ScreenId::HighScoreTable);

        assert_eq!(rt.frame(Vec::new(), 0, &mut ctx), FrameOutcome::Rendered);
        assert_eq!(rt.active_id(), ScreenId::Menu);
        assert!(ScreenRuntime::<u32, Ctx>::start(
            Box::new(|_: ScreenId| -> Option<Box<dyn Screen<u32, Ctx>>> { None }),
            ScreenId::Splash,
            &mut ctx
        )
        .is_none());
    }
}
