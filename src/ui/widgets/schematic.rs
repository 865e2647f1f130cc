pub(crate) mod display_list;

use std::rc::Rc;

use crate::{
    graphics::{self, CenterText, Shape, Transformable},
    theme::Theme,
    view::{
        id::{ViewId, ViewIdMaker},
        GeneralEvent, SizeConstraints, TargetedEvent, View, ViewWithoutLayout,
    },
};

use display_list::{Anchor, Primitive, SchematicState};

pub(crate) struct SchematicView {
    id: ViewId,
    state: SchematicState,
    font: Rc<graphics::SfBox<graphics::Font>>,
}
pub(crate) struct SchematicLayout<'schematic> {
    schematic: &'schematic SchematicView,
    size: graphics::Vector2f,
}

pub(crate) fn schematic(id_maker: &mut ViewIdMaker, state: SchematicState, font: &Rc<graphics::SfBox<graphics::Font>>) -> SchematicView {
    SchematicView { id: id_maker.next_id(), state, font: font.clone() }
}

impl<Data> ViewWithoutLayout<Data> for SchematicView {
    type WithLayout<'without_layout> = SchematicLayout<'without_layout>;

    // takes all of the space it is given
    fn layout(&self, sc: SizeConstraints) -> Self::WithLayout<'_> {
        let min_height = Theme::DEFAULT.schematic_min_height + Theme::DEFAULT.widget_padding * 2.0;
        let width = if sc.max.x.is_finite() { sc.max.x } else { sc.min.x };
        let height = if sc.max.y.is_finite() { sc.max.y.max(min_height) } else { min_height };
        SchematicLayout { schematic: self, size: sc.clamp_size(graphics::Vector2f::new(width, height)) }
    }
}

impl<Data> View<Data> for SchematicLayout<'_> {
    fn draw_inner(&self, _: &crate::App, target: &mut dyn graphics::RenderTarget, top_left: graphics::Vector2f, _: Option<ViewId>) {
        let padding = Theme::DEFAULT.widget_padding;
        let surface_top_left = top_left + graphics::Vector2f::new(padding, padding);
        let surface_size = graphics::Vector2f::new((self.size.x - padding * 2.0).max(0.0), (self.size.y - padding * 2.0).max(0.0));

        let mut background = graphics::RectangleShape::from_rect(graphics::FloatRect::from_vecs(surface_top_left, surface_size));
        background.set_fill_color(Theme::DEFAULT.schematic_bg);
        background.set_outline_color(Theme::DEFAULT.schematic_border);
        background.set_outline_thickness(Theme::DEFAULT.schematic_border_thickness);
        target.draw(&background);

        for primitive in display_list::display_list(self.schematic.state, surface_size) {
            self.draw_primitive(target, surface_top_left, primitive);
        }
    }

    fn find_hover(&self, top_left: graphics::Vector2f, mouse: graphics::Vector2f) -> Option<ViewId> {
        if graphics::FloatRect::from_vecs(top_left, self.size).contains(mouse) {
            Some(self.schematic.id)
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

impl SchematicLayout<'_> {
    fn draw_primitive(&self, target: &mut dyn graphics::RenderTarget, offset: graphics::Vector2f, primitive: Primitive) {
        match primitive {
            Primitive::Polygon { points, fill, outline, outline_thickness } => {
                let points: Vec<_> = points.into_iter().map(|p| p + offset).collect();
                graphics::draw_filled_polygon(target, &points, fill);
                let closed: Vec<_> = points.iter().chain(points.first()).copied().collect();
                graphics::draw_polyline(target, &closed, outline_thickness, outline);
            }
            Primitive::Polyline { points, color, thickness } => {
                let points: Vec<_> = points.into_iter().map(|p| p + offset).collect();
                graphics::draw_polyline(target, &points, thickness, color);
            }
            Primitive::Circle { center, radius, fill, outline, outline_thickness } => {
                let mut circle = graphics::CircleShape::new(radius, 30);
                circle.set_origin((radius, radius));
                circle.set_position(center + offset);
                circle.set_fill_color(fill);
                circle.set_outline_color(outline);
                circle.set_outline_thickness(outline_thickness);
                target.draw(&circle);
            }
            Primitive::Wire { name, start, end, color, thickness } => {
                tracing::trace!(wire = ?name, ?color, "drawing wire");
                graphics::draw_thick_line(target, start + offset, end + offset, thickness, color);
            }
            Primitive::Label { text, position, anchor, color, font_size, bold } => {
                let mut text = graphics::Text::new(text.as_str(), &self.schematic.font, font_size);
                if bold {
                    text.set_style(graphics::TextStyle::BOLD);
                }
                text.set_fill_color(color);
                match anchor {
                    Anchor::Left => text.center_vertically(),
                    Anchor::Right => text.anchor_right(),
                }
                text.set_position(position + offset);
                target.draw(&text);
            }
        }
    }
}
