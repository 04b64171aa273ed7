//! Composition root: one artifact store, every screen, and navigation.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use qrforge_states::{Shared, StateCtx};

use crate::{
    ArtifactStore, EditScreen, InputKind, InputScreen, ModuleRenderer, Platform, QrRenderer,
    ScannerScreen, ShareFlow, StudioConfig, StudioError,
};

/// Screens reachable from the tab bar plus the edit screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    App,
    Text,
    Youtube,
    Link,
    Scanner,
    Edit,
}

impl Route {
    /// Routes shown as tabs. `Edit` is only reached from a generated artifact.
    pub const TABS: [Self; 5] = [
        Self::App,
        Self::Text,
        Self::Youtube,
        Self::Link,
        Self::Scanner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::App => "App",
            Self::Text => "Text",
            Self::Youtube => "YouTube",
            Self::Link => "Link",
            Self::Scanner => "Scanner",
            Self::Edit => "Edit-QR",
        }
    }

    pub fn input_kind(self) -> Option<InputKind> {
        match self {
            Self::App => Some(InputKind::App),
            Self::Text => Some(InputKind::Text),
            Self::Youtube => Some(InputKind::Youtube),
            Self::Link => Some(InputKind::Link),
            Self::Scanner | Self::Edit => None,
        }
    }
}

impl From<InputKind> for Route {
    fn from(kind: InputKind) -> Self {
        match kind {
            InputKind::App => Self::App,
            InputKind::Text => Self::Text,
            InputKind::Youtube => Self::Youtube,
            InputKind::Link => Self::Link,
        }
    }
}

/// Owns the state context and every screen for the lifetime of the app.
///
/// Navigation is explicit: [`Studio::navigate`] runs the old screen's
/// `on_leave` and the new screen's `on_enter` before returning, so the
/// artifact is already cleared when the first input reaches the new screen.
#[derive(Debug)]
pub struct Studio {
    ctx: StateCtx,
    config: StudioConfig,
    platform: Platform,
    route: Route,
    entered: bool,
    store: Shared<ArtifactStore>,
    inputs: [InputScreen; 4],
    scanner: ScannerScreen,
    edit: EditScreen,
    share: ShareFlow,
}

impl Studio {
    pub fn new(config: StudioConfig, platform: Platform) -> Self {
        Self::with_renderer(config, platform, Rc::new(ModuleRenderer))
    }

    pub fn with_renderer(
        config: StudioConfig,
        platform: Platform,
        renderer: Rc<dyn QrRenderer>,
    ) -> Self {
        let mut ctx = StateCtx::new();
        let store = ctx.add_state(ArtifactStore::with_renderer(&config, renderer));

        let inputs = InputKind::ALL.map(|kind| InputScreen::new(kind, store.clone(), &config));

        Self {
            scanner: ScannerScreen::new(config.indicator_period()),
            edit: EditScreen::new(store.clone()),
            share: ShareFlow::new(store.clone()),
            ctx,
            config,
            platform,
            route: Route::default(),
            entered: false,
            store,
            inputs,
        }
    }

    pub fn ctx(&self) -> &StateCtx {
        &self.ctx
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn store(&self) -> &Shared<ArtifactStore> {
        &self.store
    }

    pub fn input(&self, kind: InputKind) -> &InputScreen {
        &self.inputs[kind.index()]
    }

    pub fn input_mut(&mut self, kind: InputKind) -> &mut InputScreen {
        &mut self.inputs[kind.index()]
    }

    pub fn scanner(&self) -> &ScannerScreen {
        &self.scanner
    }

    pub fn scanner_mut(&mut self) -> &mut ScannerScreen {
        &mut self.scanner
    }

    pub fn edit(&self) -> &EditScreen {
        &self.edit
    }

    pub fn edit_mut(&mut self) -> &mut EditScreen {
        &mut self.edit
    }

    pub fn share(&self) -> &ShareFlow {
        &self.share
    }

    /// Enters the initial route. Later calls are no-ops.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), StudioError> {
        if self.entered {
            return Ok(());
        }
        self.entered = true;
        self.enter(self.route, now)
    }

    /// Moves focus to `route`. Navigating to the current route changes nothing.
    pub fn navigate(&mut self, route: Route, now: DateTime<Utc>) -> Result<(), StudioError> {
        if !self.entered {
            self.route = route;
            return self.start(now);
        }
        if route == self.route {
            return Ok(());
        }
        log::debug!("Navigating {:?} -> {:?}", self.route, route);
        self.leave(self.route);
        self.route = route;
        self.enter(route, now)
    }

    /// The "Edit QR" action: only available while an artifact exists.
    pub fn open_editor(&mut self, now: DateTime<Utc>) -> Result<(), StudioError> {
        if !self.store.read(ArtifactStore::has_artifact)? {
            return Err(StudioError::NoArtifact);
        }
        self.navigate(Route::Edit, now)
    }

    fn enter(&mut self, route: Route, now: DateTime<Utc>) -> Result<(), StudioError> {
        match route.input_kind() {
            Some(kind) => {
                self.input_mut(kind).on_enter()?;
            }
            None if route == Route::Scanner => self.scanner.on_enter(now),
            None => {}
        }
        Ok(())
    }

    fn leave(&mut self, route: Route) {
        match route.input_kind() {
            Some(kind) => self.input_mut(kind).on_leave(),
            None if route == Route::Scanner => self.scanner.on_leave(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldId;

    fn studio() -> Studio {
        Studio::new(StudioConfig::default(), Platform::Ios)
    }

    #[test]
    fn test_store_is_registered_in_ctx() {
        let studio = studio();
        let from_ctx = studio.ctx().shared::<ArtifactStore>().expect("registered");
        assert!(from_ctx.ptr_eq(studio.store()));
    }

    #[test]
    fn test_every_input_kind_has_a_screen() {
        let studio = studio();
        for kind in InputKind::ALL {
            assert_eq!(studio.input(kind).kind(), kind);
        }
    }

    #[test]
    fn test_open_editor_requires_artifact() {
        let mut studio = studio();
        let now = Utc::now();
        studio.start(now).expect("start");
        assert!(matches!(
            studio.open_editor(now),
            Err(StudioError::NoArtifact)
        ));

        studio
            .input_mut(InputKind::App)
            .set_field(FieldId::DefaultLink, "https://example.com/app");
        studio
            .input(InputKind::App)
            .generate(Platform::Ios)
            .expect("generates");
        studio.open_editor(now).expect("editor opens");
        assert_eq!(studio.route(), Route::Edit);
    }

    #[test]
    fn test_route_kind_round_trip() {
        for kind in InputKind::ALL {
            assert_eq!(Route::from(kind).input_kind(), Some(kind));
        }
        assert_eq!(Route::Scanner.input_kind(), None);
    }
}
