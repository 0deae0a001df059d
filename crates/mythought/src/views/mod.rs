use ratatui::{layout::Rect, widgets::Block, Frame};

use crate::scene::Scene;
use crate::state::AppState;

pub mod home_view;
pub mod nav_bar;
pub mod services_view;
pub mod toast_overlay;

pub use home_view::HomeView;
pub use services_view::ServicesView;

/// Rows taken by the navigation bar above every page
pub const NAV_HEIGHT: u16 = 1;

/// View identifier - allows comparing which page is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Home,
    Services,
}

impl ViewId {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
        }
    }
}

/// View trait - a page of the showcase
///
/// Views travel inside actions (`GlobalAction::ReplaceView`), so the trait
/// must stay object-safe and `Send`.
pub trait View: std::fmt::Debug + Send {
    fn view_id(&self) -> ViewId;

    /// Render this view into the page body
    fn render(&self, state: &AppState, scene: &Scene, area: Rect, f: &mut Frame);

    /// Clone this view into a Box
    fn clone_box(&self) -> Box<dyn View>;
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI: navigation bar, active page, toasts on top
pub fn render(state: &AppState, scene: &Scene, area: Rect, f: &mut Frame) {
    f.render_widget(Block::default().style(state.theme.page_background()), area);

    let nav_area = Rect {
        height: NAV_HEIGHT.min(area.height),
        ..area
    };
    let body = Rect {
        y: area.y + nav_area.height,
        height: area.height.saturating_sub(nav_area.height),
        ..area
    };

    nav_bar::render(state, nav_area, f);
    state.active_view.render(state, scene, body, f);
    toast_overlay::render(state, area, f);
}
