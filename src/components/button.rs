use std::rc::Rc;
use std::sync::Arc;

use gpui::{
    AnyElement, ClickEvent, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, px, relative,
};
use tracing::warn;

use crate::contracts::StyleConfigurable;
use crate::error::PaletteError;
use crate::id::ComponentId;
use crate::style::{Cursor, ResolvedStyle, StyleDimensions, StyleResolver, Width};
use crate::theme::TokenPalette;

use super::utils::{
    PressHandler, apply_interaction_styles, overlay_surface_styles, quantized_stroke_px,
};

type SlotRenderer = Box<dyn FnOnce() -> AnyElement>;

const DEFAULT_LOADING_LABEL: &str = "Loading...";

/// Interactive DDS button. Every visual attribute comes from
/// [`StyleResolver::resolve`]; the element only paints it.
#[derive(IntoElement)]
pub struct Button {
    id: ComponentId,
    label: Option<SharedString>,
    loading_label: SharedString,
    dimensions: StyleDimensions,
    palette: Option<Arc<TokenPalette>>,
    left_slot: Option<SlotRenderer>,
    right_slot: Option<SlotRenderer>,
    on_click: Option<PressHandler>,
}

impl Button {
    #[track_caller]
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self::without_label().label(label)
    }

    #[track_caller]
    pub fn without_label() -> Self {
        Self {
            id: ComponentId::auto("button"),
            label: None,
            loading_label: SharedString::new_static(DEFAULT_LOADING_LABEL),
            dimensions: StyleDimensions::default(),
            palette: None,
            left_slot: None,
            right_slot: None,
            on_click: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn loading_label(mut self, label: impl Into<SharedString>) -> Self {
        self.loading_label = label.into();
        self
    }

    /// Replaces every style option at once, e.g. with a named preset.
    pub fn dimensions(mut self, dimensions: StyleDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Resolves against `palette` instead of the shared DDS palette.
    pub fn palette(mut self, palette: impl Into<Arc<TokenPalette>>) -> Self {
        self.palette = Some(palette.into());
        self
    }

    pub fn left_slot(mut self, content: impl IntoElement + 'static) -> Self {
        self.left_slot = Some(Box::new(|| content.into_any_element()));
        self
    }

    pub fn right_slot(mut self, content: impl IntoElement + 'static) -> Self {
        self.right_slot = Some(Box::new(|| content.into_any_element()));
        self
    }

    pub fn full_width(mut self, value: bool) -> Self {
        self.dimensions.full_width = value;
        self
    }

    pub fn icon_only(mut self, value: bool) -> Self {
        self.dimensions.icon_only = value;
        self
    }

    pub fn loading(mut self, value: bool) -> Self {
        self.dimensions.loading = value;
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.dimensions.disabled = value;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn style_dimensions(&self) -> StyleDimensions {
        self.dimensions
    }

    pub fn resolved_style(&self) -> Result<ResolvedStyle, PaletteError> {
        let resolver = match self.palette.as_deref() {
            Some(palette) => StyleResolver::new(palette),
            None => StyleResolver::shared()?,
        };
        Ok(resolver.resolve(&self.dimensions))
    }

    /// Text shown inside the button: the loading label while loading,
    /// nothing for icon-only buttons.
    pub(crate) fn visible_label(&self) -> Option<SharedString> {
        if self.dimensions.loading {
            Some(self.loading_label.clone())
        } else if self.dimensions.icon_only {
            None
        } else {
            self.label.clone()
        }
    }

    pub(crate) fn is_interactive(&self) -> bool {
        !self.dimensions.is_effectively_disabled() && self.on_click.is_some()
    }

    fn render_content(&mut self, style: &ResolvedStyle) -> AnyElement {
        if self.dimensions.loading {
            return div()
                .flex()
                .items_center()
                .child(self.loading_label.clone())
                .into_any_element();
        }

        let icon_color = style.icon_color.to_hsla();
        let mut row = div()
            .flex()
            .flex_row()
            .items_center()
            .gap(px(style.gap));

        if let Some(left) = self.left_slot.take() {
            row = row.child(div().flex().text_color(icon_color).child(left()));
        }
        if let Some(label) = self.visible_label() {
            row = row.child(div().truncate().child(label));
        }
        if let Some(right) = self.right_slot.take() {
            row = row.child(div().flex().text_color(icon_color).child(right()));
        }

        row.into_any_element()
    }
}

impl StyleConfigurable for Button {
    fn dimensions_mut(&mut self) -> &mut StyleDimensions {
        &mut self.dimensions
    }
}

crate::impl_disableable!(Button);

impl RenderOnce for Button {
    fn render(mut self, window: &mut Window, _cx: &mut gpui::App) -> impl IntoElement {
        let style = match self.resolved_style() {
            Ok(style) => style,
            Err(error) => {
                warn!(id = %self.id, %error, "button palette rejected, rendering nothing");
                return div().id(self.id.clone()).into_any_element();
            }
        };

        let bg = style.background_color.to_hsla();
        let mut root = div()
            .id(self.id.clone())
            .flex()
            .flex_row()
            .flex_none()
            .items_center()
            .justify_center()
            .gap(px(style.gap))
            .px(px(style.padding_horizontal))
            .py(px(style.padding_vertical))
            .max_w(px(style.max_width))
            .bg(bg)
            .text_color(style.text_color.to_hsla())
            .text_size(px(style.font_size))
            .line_height(relative(style.line_height))
            .font_weight(FontWeight(f32::from(style.font_weight)))
            .rounded(px(style.radius.px()))
            .border(quantized_stroke_px(window, style.border_width))
            .border_color(style.border_color.to_hsla())
            .opacity(style.opacity);

        root = match style.width {
            Width::Full => root.w_full(),
            Width::Intrinsic => root,
        };
        root = match style.cursor {
            Cursor::Pointer => root.cursor_pointer(),
            Cursor::NotAllowed => root.cursor_not_allowed(),
        };

        if !self.dimensions.is_effectively_disabled() {
            if let Some(styles) = overlay_surface_styles(bg, style.overlay) {
                root = apply_interaction_styles(root, styles);
            }
        }
        if self.is_interactive() {
            if let Some(handler) = self.on_click.clone() {
                root = root.on_click(move |event, window, cx| handler(event, window, cx));
            }
        }

        let content = self.render_content(&style);
        root.child(content).into_any_element()
    }
}
