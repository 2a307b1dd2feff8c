use std::rc::Rc;

use gpui::{ClickEvent, Hsla, Pixels, Rgba, StatefulInteractiveElement, Styled, Window, px};

use crate::style::Overlay;

pub type PressHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut gpui::App)>;

#[derive(Clone, Default)]
pub struct InteractionStyles {
    pub hover: Option<gpui::StyleRefinement>,
    pub active: Option<gpui::StyleRefinement>,
}

impl InteractionStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(mut self, value: gpui::StyleRefinement) -> Self {
        self.hover = Some(value);
        self
    }

    pub fn active(mut self, value: gpui::StyleRefinement) -> Self {
        self.active = Some(value);
        self
    }
}

pub fn interaction_style(
    apply: impl FnOnce(gpui::StyleRefinement) -> gpui::StyleRefinement,
) -> gpui::StyleRefinement {
    apply(gpui::StyleRefinement::default())
}

pub fn apply_interaction_styles<T>(mut node: T, styles: InteractionStyles) -> T
where
    T: StatefulInteractiveElement,
{
    if let Some(hover_style) = styles.hover {
        node = node.hover(move |_| hover_style);
    }

    if let Some(active_style) = styles.active {
        node = node.active(move |_| active_style);
    }

    node
}

/// Paints `top` over `base` with source-over compositing, so a tint over a
/// transparent base keeps the tint's own alpha.
pub fn composite_over(base: Hsla, top: Hsla) -> Hsla {
    let base = Rgba::from(base);
    let top = Rgba::from(top);
    let alpha = top.a + base.a * (1.0 - top.a);
    if alpha <= 0.0 {
        return gpui::transparent_black();
    }
    let channel =
        |under: f32, over: f32| (over * top.a + under * base.a * (1.0 - top.a)) / alpha;
    Rgba {
        r: channel(base.r, top.r),
        g: channel(base.g, top.g),
        b: channel(base.b, top.b),
        a: alpha,
    }
    .into()
}

/// Hover and press backgrounds for `overlay` on top of `bg`.
pub fn overlay_colors(bg: Hsla, overlay: Overlay) -> Option<(Hsla, Hsla)> {
    match overlay {
        Overlay::Suppressed => None,
        Overlay::Tint { hover, pressed } => Some((
            composite_over(bg, hover.to_hsla()),
            composite_over(bg, pressed.to_hsla()),
        )),
    }
}

pub fn overlay_surface_styles(bg: Hsla, overlay: Overlay) -> Option<InteractionStyles> {
    let (hover_bg, active_bg) = overlay_colors(bg, overlay)?;
    Some(
        InteractionStyles::new()
            .hover(interaction_style(move |style| style.bg(hover_bg)))
            .active(interaction_style(move |style| style.bg(active_bg))),
    )
}

fn scale_factor(window: &Window) -> f32 {
    window.scale_factor().max(f32::EPSILON)
}

pub fn snap_px(window: &Window, logical_px: f32) -> Pixels {
    if !logical_px.is_finite() {
        return px(0.0);
    }
    let scale = scale_factor(window);
    px((logical_px * scale).round() / scale)
}

pub fn hairline_px(window: &Window) -> Pixels {
    px(1.0 / scale_factor(window))
}

/// Zero stays zero; any positive stroke is at least one device pixel.
pub fn quantized_stroke_px(window: &Window, logical_px: f32) -> Pixels {
    if !logical_px.is_finite() || logical_px <= 0.0 {
        return px(0.0);
    }
    let snapped = snap_px(window, logical_px);
    if f32::from(snapped) > 0.0 {
        snapped
    } else {
        hairline_px(window)
    }
}
