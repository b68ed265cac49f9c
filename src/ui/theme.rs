use eframe::egui::{Context, FontFamily, FontId, TextStyle, Theme};

// ---------------------------------------------------------------------------
// Visual theme
// ---------------------------------------------------------------------------

/// Install the application look before the first frame: light theme by
/// default (the top bar offers a switch) and slightly roomier typography
/// for the card text.
pub fn install(ctx: &Context) {
    ctx.set_theme(Theme::Light);

    ctx.all_styles_mut(|style| {
        style
            .text_styles
            .insert(TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional));
        style
            .text_styles
            .insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
        style
            .text_styles
            .insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
        style.spacing.item_spacing.y = 4.0;
    });
}
