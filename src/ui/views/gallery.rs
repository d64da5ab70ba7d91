//! Component gallery window.
//!
//! One scrollable page per the demo app: each section exercises one
//! component's variants, sizes, and states.

use gpui::{
    div, px, AppContext, Context, Entity, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::ToggleTheme;
use crate::config::{Settings, SizePreference, ThemePreference};
use crate::ui::components::{
    Button, ButtonVariant, ControlSize, FieldId, FieldVariant, InputKind, Label, Resize, Select,
    SelectOption, TextArea, TextField, TextFieldState,
};
use crate::ui::theme::{Theme, ThemeMode};

/// The gallery view: demo sections for every component.
pub struct Gallery {
    theme: Theme,
    default_size: ControlSize,
    username: Entity<TextFieldState>,
    email: Entity<TextFieldState>,
    password: Entity<TextFieldState>,
    filled_demo: Entity<TextFieldState>,
    disabled_demo: Entity<TextFieldState>,
    bio_id: FieldId,
    country_id: FieldId,
}

impl Gallery {
    pub fn new(settings: &Settings, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let theme = match settings.appearance.theme {
            ThemePreference::Light => Theme::light(),
            ThemePreference::Dark => Theme::dark(),
        };
        let default_size = match settings.appearance.control_size {
            SizePreference::Sm => ControlSize::Sm,
            SizePreference::Md => ControlSize::Md,
            SizePreference::Lg => ControlSize::Lg,
        };

        Self {
            theme,
            default_size,
            username: cx.new(|_| TextFieldState::with_value(Some("username"), "jappleseed")),
            email: cx.new(|_| TextFieldState::new(Some("email"))),
            password: cx.new(|_| TextFieldState::with_value(None::<&str>, "secret123")),
            filled_demo: cx.new(|_| TextFieldState::new(Some("filled-demo"))),
            disabled_demo: cx.new(|_| TextFieldState::with_value(Some("disabled-demo"), "Read only")),
            bio_id: FieldId::resolve(Some("bio"), "textarea"),
            country_id: FieldId::resolve(None::<&str>, "select"),
        }
    }

    /// Flip between light and dark palettes.
    pub fn toggle_theme(&mut self, cx: &mut Context<Self>) {
        self.theme.toggle();
        tracing::info!("Switched to {:?} theme", self.theme.mode);
        cx.notify();
    }

    fn section(&self, title: &str) -> gpui::Div {
        let colors = &self.theme.colors;

        div()
            .w_full()
            .p(px(24.0))
            .flex()
            .flex_col()
            .gap(px(16.0))
            .bg(colors.surface)
            .rounded(px(12.0))
            .child(
                div()
                    .text_size(px(18.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(colors.text_primary)
                    .child(SharedString::from(title.to_string())),
            )
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let toggle_label = match self.theme.mode {
            ThemeMode::Light => "Dark theme",
            ThemeMode::Dark => "Light theme",
        };

        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(4.0))
                    .child(
                        div()
                            .text_size(px(32.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(colors.text_primary)
                            .child(SharedString::from("coreframe")),
                    )
                    .child(
                        div()
                            .text_size(px(16.0))
                            .text_color(colors.text_secondary)
                            .child(SharedString::from(
                                "Apple-inspired components for gpui applications",
                            )),
                    ),
            )
            .child(
                Button::new("toggle-theme", toggle_label)
                    .variant(ButtonVariant::Outline)
                    .size(ControlSize::Sm)
                    .colors(colors.clone())
                    .on_click(cx.listener(|this, _, _, cx| this.toggle_theme(cx))),
            )
    }

    fn render_buttons(&self) -> impl IntoElement {
        let colors = self.theme.colors.clone();

        self.section("Buttons")
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(12.0))
                    .child(
                        Button::new("btn-primary", "Primary")
                            .colors(colors.clone())
                            .on_click(|_, _, _| tracing::info!("Primary clicked")),
                    )
                    .child(
                        Button::new("btn-secondary", "Secondary")
                            .variant(ButtonVariant::Secondary)
                            .colors(colors.clone())
                            .on_click(|_, _, _| tracing::info!("Secondary clicked")),
                    )
                    .child(
                        Button::new("btn-outline", "Outline")
                            .variant(ButtonVariant::Outline)
                            .colors(colors.clone())
                            .on_click(|_, _, _| tracing::info!("Outline clicked")),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(12.0))
                    .child(
                        Button::new("btn-sm", "Small")
                            .size(ControlSize::Sm)
                            .colors(colors.clone()),
                    )
                    .child(
                        Button::new("btn-md", "Medium")
                            .size(ControlSize::Md)
                            .colors(colors.clone()),
                    )
                    .child(
                        Button::new("btn-lg", "Large")
                            .size(ControlSize::Lg)
                            .colors(colors.clone()),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(12.0))
                    .child(Button::new("btn-normal", "Normal").colors(colors.clone()))
                    .child(
                        // Never fires: the handler is dropped for
                        // disabled buttons.
                        Button::new("btn-disabled", "Disabled")
                            .disabled(true)
                            .colors(colors.clone())
                            .on_click(|_, _, _| tracing::warn!("unreachable")),
                    ),
            )
    }

    fn render_labels(&self) -> impl IntoElement {
        let colors = self.theme.colors.clone();

        self.section("Labels").child(
            div()
                .flex()
                .flex_col()
                .gap(px(8.0))
                .child(Label::new("label-plain", "Full name").colors(colors.clone()))
                .child(
                    Label::new("label-required", "Email address")
                        .required(true)
                        .colors(colors.clone()),
                )
                .child(
                    Label::new("label-optional", "Nickname")
                        .optional(true)
                        .colors(colors.clone()),
                )
                .child(
                    Label::new("label-small", "Compact caption")
                        .size(ControlSize::Sm)
                        .colors(colors.clone()),
                ),
        )
    }

    fn render_text_fields(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.theme.colors.clone();
        let toggle_announcement = self.password.read(cx).toggle_label();

        self.section("Text fields")
            .child(
                TextField::new(&self.username)
                    .label("Username")
                    .helper_text("Visible on your public profile")
                    .size(self.default_size)
                    .colors(colors.clone()),
            )
            .child(
                TextField::new(&self.email)
                    .label("Email")
                    .kind(InputKind::Email)
                    .placeholder("you@example.com")
                    .left_icon("\u{2709}")
                    .error("This field is required")
                    .helper_text("Never shown while the error is present")
                    .colors(colors.clone()),
            )
            .child(
                TextField::new(&self.filled_demo)
                    .label("Filled variant")
                    .placeholder("Type here")
                    .variant(FieldVariant::Filled)
                    .colors(colors.clone()),
            )
            .child(
                // The supplied right icon is suppressed by the toggle.
                TextField::new(&self.password)
                    .label("Password")
                    .kind(InputKind::Password)
                    .show_password_toggle(true)
                    .right_icon("\u{2713}")
                    .colors(colors.clone()),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(colors.text_muted)
                    .child(SharedString::from(format!(
                        "Toggle announced as: \"{toggle_announcement}\""
                    ))),
            )
            .child(
                TextField::new(&self.disabled_demo)
                    .label("Disabled")
                    .disabled(true)
                    .colors(colors.clone()),
            )
    }

    fn render_textareas(&self) -> impl IntoElement {
        let colors = self.theme.colors.clone();

        self.section("Textareas")
            .child(
                TextArea::new(self.bio_id.clone())
                    .label("Bio")
                    .placeholder("Tell us about yourself")
                    .helper_text("Markdown is supported")
                    .colors(colors.clone()),
            )
            .child(
                div()
                    .flex()
                    .gap(px(12.0))
                    .child(
                        TextArea::new(FieldId::resolve(Some("notes-fixed"), "textarea"))
                            .label("Fixed")
                            .resize(Resize::None)
                            .rows(3)
                            .colors(colors.clone()),
                    )
                    .child(
                        TextArea::new(FieldId::resolve(Some("notes-both"), "textarea"))
                            .label("Free resize")
                            .resize(Resize::Both)
                            .rows(3)
                            .colors(colors.clone()),
                    ),
            )
            .child(
                TextArea::new(FieldId::resolve(Some("feedback"), "textarea"))
                    .label("Feedback")
                    .value("line one\nline two")
                    .error("Please keep it under 500 characters")
                    .colors(colors.clone()),
            )
    }

    fn render_selects(&self) -> impl IntoElement {
        let colors = self.theme.colors.clone();
        let countries = vec![
            SelectOption::new("us", "United States"),
            SelectOption::new("uk", "United Kingdom"),
            SelectOption::new("mars", "Mars").disabled(),
        ];

        self.section("Selects")
            .child(
                Select::new(self.country_id.clone(), countries.clone())
                    .label("Country")
                    .placeholder("Choose a country")
                    .helper_text("The third entry is disabled")
                    .colors(colors.clone()),
            )
            .child(
                Select::new(FieldId::resolve(Some("plan"), "select"), countries.clone())
                    .label("With selection")
                    .placeholder("Choose a country")
                    .value("uk")
                    .colors(colors.clone()),
            )
            .child(
                Select::new(FieldId::resolve(Some("region"), "select"), countries)
                    .label("Invalid")
                    .error("Pick a country to continue")
                    .colors(colors.clone()),
            )
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.theme.colors.clone();

        div()
            .id("gallery")
            .key_context("Gallery")
            .on_action(cx.listener(|this, _: &ToggleTheme, _, cx| this.toggle_theme(cx)))
            .size_full()
            .overflow_y_scroll()
            .bg(colors.background)
            .p(px(32.0))
            .flex()
            .flex_col()
            .gap(px(24.0))
            .child(self.render_header(cx))
            .child(self.render_buttons())
            .child(self.render_labels())
            .child(self.render_text_fields(cx))
            .child(self.render_textareas())
            .child(self.render_selects())
    }
}
