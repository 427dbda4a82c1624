// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the portfolio page.
//!
//! The `App` struct owns the lightbox (with its gallery), the star field and
//! its render loop, and the page preferences. It translates messages into
//! lightbox transitions, frame renders and config persistence.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::gallery::{load_manifest, GalleryIndex};
use crate::i18n::I18n;
use crate::lightbox::dispatch::{self, Effect, PointerTarget};
use crate::lightbox::Lightbox;
use crate::render_loop::{DrawList, FrameClock, RenderLoop};
use crate::starfield::StarField;
use crate::ui::theming::{Appearance, ThemeMode};
use crate::ui::notifications::{self, Notification};
use crate::ui::{details, header};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    /// Effective appearance, resolved when the theme mode changes.
    appearance: Appearance,
    lightbox: Lightbox,
    starfield: StarField,
    render_loop: RenderLoop,
    /// Circles of the most recent frame, replayed by the star canvas.
    stars: DrawList,
    details: details::State,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("lightbox", &self.lightbox.state())
            .field("artworks", &self.lightbox.gallery().len())
            .field("frames", &self.render_loop.frames_rendered())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`, but the flags are consumed only once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the page from explicit parts, without touching the filesystem.
    pub fn with_parts(i18n: I18n, config: Config, gallery: GalleryIndex) -> Self {
        let theme_mode = config.general.theme_mode;
        Self {
            i18n,
            theme_mode,
            appearance: theme_mode.appearance(),
            config,
            lightbox: Lightbox::new(gallery),
            starfield: StarField::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            render_loop: RenderLoop::new(),
            stars: DrawList::new(),
            details: details::State::new(),
            notifications: notifications::Manager::new(),
        }
    }

    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let manifest_path = flags
            .manifest
            .map(PathBuf::from)
            .or_else(|| config.manifest_path());
        let gallery = load_gallery(manifest_path);
        tracing::info!(artworks = gallery.len(), "portfolio ready");

        let mut app = Self::with_parts(i18n, config, gallery);
        app.notify_if_any(config_warning.map(Notification::warning));
        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.lightbox.display() {
            Some(display) => format!("{} - {app_name}", display.name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.appearance.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let needs_frames = self.render_loop.is_running()
            || self.details.is_animating()
            || self.notifications.has_pending_timeouts();
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(needs_frames),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Pointer(target) => self.handle_pointer(target),
            Message::Key(key) => {
                let was_open = self.lightbox.is_open();
                if dispatch::key_press(&mut self.lightbox, key) {
                    self.log_transition(was_open);
                }
            }
            Message::Resized(size) => self.starfield.regenerate(size.width, size.height),
            Message::Frame(_) => {
                if self.render_loop.is_running() {
                    if let Err(error) = self.render_loop.render_frame(
                        &mut self.starfield,
                        &self.appearance,
                        &mut self.stars,
                    ) {
                        // The loop stays stopped; this fires once.
                        self.notify(Notification::error(error.i18n_key()));
                    }
                }
                let now = self.now();
                self.details.tick(now);
                self.notifications.tick(now);
            }
            Message::Header(header::Message::ToggleTheme) => {
                let failure =
                    persistence::apply_theme_toggle(&mut self.theme_mode, &mut self.config);
                self.appearance = self.theme_mode.appearance();
                self.notify_if_any(failure);
            }
            Message::Header(header::Message::ToggleLanguage) => {
                let failure = persistence::apply_language_toggle(&mut self.i18n, &mut self.config);
                self.notify_if_any(failure);
            }
            Message::Details(details_message) => {
                let now = self.now();
                details::update(&mut self.details, details_message, now);
            }
            Message::Notification(notification_message) => {
                let now = self.now();
                self.notifications.update(notification_message, now);
            }
        }
        Task::none()
    }

    fn handle_pointer(&mut self, target: PointerTarget) {
        let was_open = self.lightbox.is_open();
        match dispatch::click(&mut self.lightbox, target) {
            Ok(outcome) => {
                if let Effect::OpenLink(url) = outcome.effect {
                    self.notify_if_any(link_outcome(&url, open::that_detached(&url)));
                }
                self.log_transition(was_open);
            }
            Err(error) => {
                tracing::warn!(%error, ?target, "click ignored");
                self.notify(Notification::warning(error.i18n_key()));
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        let now = self.now();
        self.notifications.push(notification, now);
    }

    fn notify_if_any(&mut self, notification: Option<Notification>) {
        if let Some(notification) = notification {
            self.notify(notification);
        }
    }

    fn log_transition(&self, was_open: bool) {
        match (was_open, self.lightbox.current_index()) {
            (false, Some(index)) => tracing::info!(index, "lightbox opened"),
            (true, Some(index)) => tracing::debug!(index, "lightbox moved"),
            (true, None) => tracing::info!("lightbox closed"),
            (false, None) => {}
        }
    }

    fn now(&self) -> std::time::Duration {
        self.render_loop.clock().elapsed()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            appearance: self.appearance,
            stars: &self.stars,
            gallery: self.lightbox.gallery(),
            lightbox: self.lightbox.display(),
            details: &self.details,
            notifications: &self.notifications,
            now: self.now(),
        })
    }
}

/// Loads the manifest at `path`. A missing or broken manifest yields an
/// empty gallery.
fn load_gallery(path: Option<PathBuf>) -> GalleryIndex {
    let Some(path) = path else {
        return GalleryIndex::default();
    };
    if !path.exists() {
        tracing::info!(path = %path.display(), "no gallery manifest found");
        return GalleryIndex::default();
    }
    match load_manifest(&path) {
        Ok(manifest) => GalleryIndex::build(&manifest.artworks),
        Err(error) => {
            tracing::error!(path = %path.display(), %error, "failed to load gallery manifest");
            GalleryIndex::default()
        }
    }
}

/// Logs the result of opening an artist link, returning the toast for a
/// failure.
fn link_outcome(url: &str, result: std::io::Result<()>) -> Option<Notification> {
    match result {
        Ok(()) => {
            tracing::info!(url, "opened artist link");
            None
        }
        Err(error) => {
            tracing::warn!(url, %error, "failed to open artist link");
            Some(Notification::warning("notification-link-open-error"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Thumbnail;
    use crate::lightbox::dispatch::Key;
    use crate::lightbox::LightboxState;
    use crate::starfield::PARTICLE_COUNT;
    use crate::ui::details::Section;
    use iced::Size;
    use std::io::Write;
    use std::time::Instant;
    use tempfile::NamedTempFile;

    fn app_with(count: usize) -> App {
        let thumbnails: Vec<Thumbnail> = (0..count)
            .map(|i| Thumbnail::new(format!("art{i}.png"), format!("Artwork {i}")))
            .collect();
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        App::with_parts(
            I18n::new(Some("en-US".to_string()), &config),
            config,
            GalleryIndex::build(&thumbnails),
        )
    }

    #[test]
    fn thumbnail_click_opens_lightbox() {
        let mut app = app_with(3);
        let _ = app.update(Message::Pointer(PointerTarget::Thumbnail(1)));
        assert_eq!(app.lightbox.state(), LightboxState::Open { index: 1 });
        assert_eq!(app.title(), "Artwork 1 - Starfolio");
    }

    #[test]
    fn keys_navigate_and_close() {
        let mut app = app_with(3);
        let _ = app.update(Message::Pointer(PointerTarget::Thumbnail(0)));
        let _ = app.update(Message::Key(Key::ArrowLeft));
        assert_eq!(app.lightbox.current_index(), Some(2));
        let _ = app.update(Message::Key(Key::Escape));
        assert!(!app.lightbox.is_open());
        assert_eq!(app.title(), "Starfolio");
    }

    fn toast_keys(app: &App) -> Vec<&str> {
        app.notifications
            .visible()
            .map(Notification::message_key)
            .collect()
    }

    #[test]
    fn out_of_range_click_is_ignored_with_toast() {
        let mut app = app_with(2);
        let _ = app.update(Message::Pointer(PointerTarget::Thumbnail(7)));
        assert_eq!(app.lightbox.state(), LightboxState::Closed);
        assert_eq!(toast_keys(&app), vec!["error-lightbox-index-out-of-range"]);
        assert_eq!(app.i18n.tr(toast_keys(&app)[0]), "That artwork does not exist.");
    }

    #[test]
    fn click_on_empty_gallery_raises_warning() {
        let mut app = app_with(0);
        let _ = app.update(Message::Pointer(PointerTarget::Thumbnail(0)));
        assert_eq!(toast_keys(&app), vec!["error-lightbox-empty-gallery"]);
        assert!(app.notifications.has_pending_timeouts());
    }

    #[test]
    fn failed_link_raises_translated_warning() {
        let failure = link_outcome(
            "https://example.com/artist",
            Err(std::io::Error::other("no browser")),
        )
        .expect("a toast for the failure");
        assert_eq!(failure.message_key(), "notification-link-open-error");
        assert!(link_outcome("https://example.com/artist", Ok(())).is_none());

        let mut app = app_with(1);
        let _ = app.update(Message::Pointer(PointerTarget::Thumbnail(0)));
        app.notify(failure);
        assert!(app.lightbox.is_open());
        assert_eq!(app.i18n.tr(toast_keys(&app)[0]), "The link could not be opened.");
    }

    #[test]
    fn config_load_warning_becomes_toast() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("settings.toml"), "not = [valid").expect("write");
        let (_, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

        let mut app = app_with(0);
        app.notify_if_any(warning.map(Notification::warning));
        assert_eq!(toast_keys(&app), vec!["notification-config-load-error"]);
        assert_eq!(
            app.i18n.tr(toast_keys(&app)[0]),
            "Settings could not be read. Defaults are in use."
        );
    }

    #[test]
    fn dismissed_toast_disappears() {
        let mut app = app_with(0);
        let notification = Notification::error("notification-config-save-error");
        let id = notification.id();
        app.notify(notification);

        let _ = app.update(Message::Notification(notifications::Message::Dismiss(id)));
        assert!(toast_keys(&app).is_empty());
    }

    #[test]
    fn frame_renders_star_field() {
        let mut app = app_with(0);
        let _ = app.update(Message::Frame(Instant::now()));
        assert_eq!(app.stars.len(), PARTICLE_COUNT);
        assert_eq!(app.render_loop.frames_rendered(), 1);
        assert!(app
            .stars
            .dots()
            .iter()
            .all(|dot| (dot.color.r, dot.color.g, dot.color.b) == (1.0, 1.0, 1.0)));
    }

    #[test]
    fn resize_regenerates_within_new_bounds() {
        let mut app = app_with(0);
        let _ = app.update(Message::Resized(Size::new(200.0, 100.0)));
        let viewport = app.starfield.viewport();
        assert_eq!((viewport.width(), viewport.height()), (200.0, 100.0));
        assert!(app
            .starfield
            .particles()
            .iter()
            .all(|p| p.x <= 200.0 && p.y <= 100.0));
    }

    #[test]
    fn theme_toggle_switches_star_color() {
        let mut app = app_with(0);
        let _ = app.update(Message::Header(header::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(app.config.general.theme_mode, ThemeMode::Light);
        assert_eq!(app.theme(), Theme::Light);

        let _ = app.update(Message::Frame(Instant::now()));
        assert!(app
            .stars
            .dots()
            .iter()
            .all(|dot| (dot.color.r, dot.color.g, dot.color.b) == (0.0, 0.0, 0.0)));
    }

    #[test]
    fn language_toggle_is_recorded_in_config() {
        let mut app = app_with(0);
        let _ = app.update(Message::Header(header::Message::ToggleLanguage));
        assert_eq!(app.config.general.language.as_deref(), Some("zh-CN"));
        assert_eq!(app.i18n.tr("lightbox-close"), "关闭");
    }

    #[test]
    fn section_toggle_requests_frames() {
        let mut app = app_with(0);
        let _ = app.update(Message::Details(details::Message::Toggle(Section::About)));
        assert!(app.details.disclosure(Section::About).is_open());
        assert!(app.details.is_animating());
    }

    #[test]
    fn load_gallery_reads_manifest() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "[[artwork]]\nsrc = \"a.png\"\nalt = \"A\"").expect("write");

        let gallery = load_gallery(Some(file.path().to_path_buf()));
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn load_gallery_tolerates_missing_or_broken_manifest() {
        assert!(load_gallery(None).is_empty());
        assert!(load_gallery(Some(PathBuf::from("/nonexistent/gallery.toml"))).is_empty());

        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "[[artwork]]\nsrc = \"\"\nalt = \"A\"").expect("write");
        assert!(load_gallery(Some(file.path().to_path_buf())).is_empty());
    }
}
