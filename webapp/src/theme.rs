use dioxus::prelude::*;
use tracing::{debug, error};

use crate::common::storage::{get_local_storage, set_local_storage};
use api::theme::Theme;

pub const THEME_KEY: &str = "theme";

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// the tab-wide theme
//
// every write goes through set_theme(), which persists the value and updates
// the class on <html> in the same call, so the stored value, the signal and
// the document never disagree
pub static THEME: GlobalSignal<Theme> = Signal::global(initial_theme);

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn initial_theme() -> Theme {
    let stored = get_local_storage::<Theme>(THEME_KEY);
    let theme = Theme::resolve(stored, prefers_dark());

    debug!(?stored, %theme, "resolved initial theme");
    theme
}

fn apply_root_class(theme: Theme) -> anyhow::Result<()> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .ok_or_else(|| anyhow::Error::msg("no document root"))?;

    root.class_list()
        .toggle_with_force(Theme::DARK_CLASS, theme.is_dark())
        .map_err(|err| anyhow::Error::msg(format!("{err:?}")))?;

    Ok(())
}

fn reflect_theme(theme: Theme) {
    set_local_storage(THEME_KEY, theme);

    if let Err(err) = apply_root_class(theme) {
        error!("failed to apply {theme} theme to document: {err}");
    }
}

pub fn set_theme(theme: Theme) {
    *THEME.write() = theme;
    reflect_theme(theme);
}

pub fn toggle_theme() {
    let next = THEME.peek().toggled();
    debug!(%next, "toggling theme");
    set_theme(next);
}

// "card" -> "card card--dark" under the dark theme, for the sections that
// restyle whole blocks instead of relying on the palette variables
pub fn themed(base: &str, theme: Theme) -> String {
    if theme.is_dark() {
        format!("{base} {base}--dark")
    } else {
        base.to_owned()
    }
}

// reflect whatever the initial resolution picked before anything is toggled
pub fn use_theme_root() {
    use_hook(|| reflect_theme(*THEME.peek()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themed_classes() {
        assert_eq!(themed("project-card", Theme::Light), "project-card");
        assert_eq!(themed("project-card", Theme::Dark), "project-card project-card--dark");
    }
}
