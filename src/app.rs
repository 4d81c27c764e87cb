use color_eyre::Result;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use std::sync::Arc;
use throbber_widgets_tui::ThrobberState;

use crate::config::{mount_panels, FetcherConfig};
use crate::event::{AppEvent, Event, EventHandler};
use crate::net::{GraphClient, ReqwestGraphClient};
use crate::panel::{GraphPanel, PanelContext, TimeRange};
use crate::renderer::SeriesRendererFactory;
use crate::ui::graph_image::ImageCache;
use crate::{log_error, log_info};

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// One panel per configured graph, in config order.
    pub panels: Vec<GraphPanel>,
    /// Index of the panel keys act on.
    pub selected: usize,
    /// Shown in the title bar and sent as the dashboard target.
    pub page_target: String,
    pub events: EventHandler,
    pub images: ImageCache,
    pub throbber: ThrobberState,
}

impl App {
    /// Mounts every configured graph. Must run after the terminal is
    /// initialized, since the image cache queries it.
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let client: Arc<dyn GraphClient> = Arc::new(ReqwestGraphClient::new(config.base_url.as_deref())?);
        let context = PanelContext {
            renderer_factory: Arc::new(SeriesRendererFactory::new(client.clone())),
            client,
            dashboard: config.dashboard.clone(),
            page_target: config.page_target.clone(),
        };

        let panels = mount_panels(config, &context)?;
        log_info!("Mounted {} graph panel(s)", panels.len());

        Ok(Self {
            running: true,
            panels,
            selected: 0,
            page_target: config.page_target.clone(),
            events: EventHandler::new(),
            images: ImageCache::new(),
            throbber: ThrobberState::default(),
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await {
                Ok(Event::Tick) => {
                    needs_redraw = self.poll_panels();
                }
                Ok(Event::Crossterm(crossterm::event::Event::Key(key_event))) => {
                    self.handle_key_events(key_event);
                }
                Ok(Event::Crossterm(crossterm::event::Event::Resize(_, _))) => {
                    needs_redraw = true;
                }
                Ok(Event::Crossterm(_)) => {}
                Ok(Event::App(app_event)) => {
                    self.handle_app_event(app_event);
                    needs_redraw = true;
                }
                Err(e) => log_error!("Event error: {}", e),
            }
        }

        Ok(())
    }

    /// Apply finished fetches on every panel; advance the spinner while
    /// anything is still loading.
    pub fn poll_panels(&mut self) -> bool {
        let mut changed = false;
        for panel in self.panels.iter_mut() {
            changed |= panel.process_messages();
        }

        if self.panels.iter().any(|p| p.is_loading() && p.container().is_visible()) {
            self.throbber.calc_next();
            changed = true;
        }

        changed
    }

    pub fn handle_key_events(&mut self, key_event: KeyEvent) {
        if let Some(app_event) = map_key(key_event) {
            self.events.send(app_event);
        }
    }

    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::Quit => self.quit(),
            AppEvent::SelectNext => {
                if !self.panels.is_empty() {
                    self.selected = (self.selected + 1) % self.panels.len();
                }
            }
            AppEvent::SelectPrev => {
                if !self.panels.is_empty() {
                    self.selected = (self.selected + self.panels.len() - 1) % self.panels.len();
                }
            }
            other => {
                if let Some(panel) = self.panels.get_mut(self.selected) {
                    apply_to_panel(panel, &other);
                }
            }
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

/// Key bindings. Releases are ignored so each press acts once.
pub fn map_key(key_event: KeyEvent) -> Option<AppEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    match key_event.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(AppEvent::Quit),
        KeyCode::Char('c') if key_event.modifiers == KeyModifiers::CONTROL => Some(AppEvent::Quit),
        KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::SelectPrev),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppEvent::ToggleSelected),
        KeyCode::Char('a') => Some(AppEvent::PublishSelected),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| AppEvent::SelectSource(digit as usize - 1)),
        KeyCode::Char(c) => TimeRange::all()
            .into_iter()
            .find(|range| range.hotkey() == c)
            .map(AppEvent::SelectTimeRange),
        _ => None,
    }
}

/// Route a panel action. Range buttons only exist once the panel has been
/// initialized, so range presses on a dormant panel do nothing.
pub fn apply_to_panel(panel: &mut GraphPanel, app_event: &AppEvent) {
    match app_event {
        AppEvent::ToggleSelected => {
            panel.handle_toggle_click();
        }
        AppEvent::SelectTimeRange(range) => {
            if panel.container().controls().is_some() {
                panel.select_time_range(*range);
            }
        }
        AppEvent::SelectSource(index) => panel.select_source_index(*index),
        AppEvent::PublishSelected => panel.publish_to_dashboard(),
        AppEvent::SelectNext | AppEvent::SelectPrev | AppEvent::Quit => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_range_hotkeys_map_to_ranges() {
        assert_eq!(map_key(press(KeyCode::Char('d'))), Some(AppEvent::SelectTimeRange(TimeRange::Day)));
        assert_eq!(map_key(press(KeyCode::Char('w'))), Some(AppEvent::SelectTimeRange(TimeRange::Week)));
        assert_eq!(map_key(press(KeyCode::Char('m'))), Some(AppEvent::SelectTimeRange(TimeRange::Month)));
        assert_eq!(map_key(press(KeyCode::Char('y'))), Some(AppEvent::SelectTimeRange(TimeRange::Year)));
    }

    #[test]
    fn test_digits_are_one_based_source_indices() {
        assert_eq!(map_key(press(KeyCode::Char('1'))), Some(AppEvent::SelectSource(0)));
        assert_eq!(map_key(press(KeyCode::Char('9'))), Some(AppEvent::SelectSource(8)));
        assert_eq!(map_key(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_navigation_and_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(AppEvent::ToggleSelected));
        assert_eq!(map_key(press(KeyCode::Char('a'))), Some(AppEvent::PublishSelected));
        assert_eq!(map_key(press(KeyCode::Down)), Some(AppEvent::SelectNext));
        assert_eq!(map_key(press(KeyCode::Char('k'))), Some(AppEvent::SelectPrev));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(AppEvent::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppEvent::Quit)
        );
    }
}
