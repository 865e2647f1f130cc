use std::rc::Rc;

use crate::{
    graphics::{self, CenterText, RectCenter, Shape, Transformable},
    theme::Theme,
    view::{
        id::{ViewId, ViewIdMaker},
        GeneralEvent, SizeConstraints, TargetedEvent, View, ViewWithoutLayout,
    },
};

pub(crate) struct LabelStyle {
    pub(crate) font_size: u32,
    pub(crate) bold: bool,
    pub(crate) fg: graphics::Color,
    pub(crate) bg: Option<graphics::Color>,
}

pub(crate) struct LabelView {
    id: ViewId,
    text: String,
    style: LabelStyle,
    font: Rc<graphics::SfBox<graphics::Font>>,
}
pub(crate) struct LabelLayout<'label> {
    label: &'label LabelView,
    size: graphics::Vector2f,
}

impl LabelStyle {
    pub(crate) fn bold(font_size: u32, fg: graphics::Color) -> LabelStyle {
        LabelStyle { font_size, bold: true, fg, bg: None }
    }
    pub(crate) fn with_bg(self, bg: graphics::Color) -> LabelStyle {
        LabelStyle { bg: Some(bg), ..self }
    }
}

impl LabelView {
    fn make_text(&self) -> graphics::Text<'_> {
        let mut text = graphics::Text::new(self.text.as_str(), &self.font, self.style.font_size);
        if self.style.bold {
            text.set_style(graphics::TextStyle::BOLD);
        }
        text.set_fill_color(self.style.fg);
        text
    }
}

pub(crate) fn label(id_maker: &mut ViewIdMaker, text: impl Into<String>, style: LabelStyle, font: &Rc<graphics::SfBox<graphics::Font>>) -> LabelView {
    LabelView { id: id_maker.next_id(), text: text.into(), style, font: font.clone() }
}

impl<Data> ViewWithoutLayout<Data> for LabelView {
    type WithLayout<'without_layout> = LabelLayout<'without_layout>;

    fn layout(&self, sc: SizeConstraints) -> Self::WithLayout<'_> {
        let bounds = self.make_text().local_bounds();
        let padding = Theme::DEFAULT.widget_padding;
        let size = graphics::Vector2f::new(bounds.left + bounds.width + padding * 2.0, bounds.top + bounds.height + padding * 2.0);
        LabelLayout { label: self, size: sc.clamp_size(size) }
    }
}
impl<Data> View<Data> for LabelLayout<'_> {
    fn draw_inner(&self, _: &crate::App, target: &mut dyn graphics::RenderTarget, top_left: graphics::Vector2f, _: Option<ViewId>) {
        let rect = graphics::FloatRect::from_vecs(top_left, self.size);

        if let Some(bg) = self.label.style.bg {
            let mut background_rect = graphics::RectangleShape::from_rect(rect);
            background_rect.set_fill_color(bg);
            target.draw(&background_rect);
        }

        let mut text = self.label.make_text();
        text.center();
        text.set_position(rect.center());
        target.draw(&text);
    }

    fn find_hover(&self, top_left: graphics::Vector2f, mouse: graphics::Vector2f) -> Option<ViewId> {
        if graphics::FloatRect::from_vecs(top_left, self.size).contains(mouse) {
            Some(self.label.id)
        } else {
            None
        }
    }

    fn size(&self) -> graphics::Vector2f {
        self.size
    }

    fn send_targeted_event(&self, _: &crate::App, _: &mut Data, _: ViewId, _: TargetedEvent) {}
    fn targeted_event(&self, _: &crate::App, _: &mut Data, _: TargetedEvent) {}
    fn general_event(&self, _: &crate::App, _: &mut Data, _: GeneralEvent) {}
}
