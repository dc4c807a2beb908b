use shared::domain::DisplayMode;

const DARK_PANEL: egui::Color32 = egui::Color32::from_rgb(30, 31, 34);
const DARK_WINDOW: egui::Color32 = egui::Color32::from_rgb(43, 45, 49);
const DARK_STRIPE: egui::Color32 = egui::Color32::from_rgb(49, 51, 56);
const LIGHT_STRIPE: egui::Color32 = egui::Color32::from_rgb(242, 243, 245);

pub fn visuals_for_mode(mode: DisplayMode) -> egui::Visuals {
    match mode {
        DisplayMode::Light => {
            let mut v = egui::Visuals::light();
            v.faint_bg_color = LIGHT_STRIPE;
            v
        }
        DisplayMode::Dark => {
            let mut v = egui::Visuals::dark();
            v.panel_fill = DARK_PANEL;
            v.window_fill = DARK_WINDOW;
            v.extreme_bg_color = DARK_PANEL;
            v.faint_bg_color = DARK_STRIPE;
            v
        }
    }
}

/// Fill and text colors of the mode toggle button.
pub fn toggle_button_colors(mode: DisplayMode) -> (egui::Color32, egui::Color32) {
    match mode {
        DisplayMode::Dark => (egui::Color32::from_rgb(0x33, 0x33, 0x33), egui::Color32::WHITE),
        DisplayMode::Light => (egui::Color32::from_rgb(0xdd, 0xdd, 0xdd), egui::Color32::BLACK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visuals_follow_display_mode() {
        assert!(!visuals_for_mode(DisplayMode::Light).dark_mode);
        let dark = visuals_for_mode(DisplayMode::Dark);
        assert!(dark.dark_mode);
        assert_eq!(dark.panel_fill, DARK_PANEL);
    }

    #[test]
    fn toggle_button_contrasts_with_its_fill() {
        let (fill, text) = toggle_button_colors(DisplayMode::Dark);
        assert_eq!(fill, egui::Color32::from_rgb(51, 51, 51));
        assert_eq!(text, egui::Color32::WHITE);

        let (fill, text) = toggle_button_colors(DisplayMode::Light);
        assert_eq!(fill, egui::Color32::from_rgb(221, 221, 221));
        assert_eq!(text, egui::Color32::BLACK);
    }
}
