// graphics utilities

pub(crate) use sfml::{
    graphics::{CircleShape, Color, FloatRect, Font, PrimitiveType, RectangleShape, RenderStates, RenderTarget, Shape, Text, TextStyle, Transformable, Vertex},
    system::{Vector2f, Vector2i, Vector2u},
    SfBox,
};

pub(crate) trait RectCenter<T> {
    fn center(&self) -> sfml::system::Vector2<T>;
}
impl<T: std::ops::Div + std::ops::Add<<T as std::ops::Div>::Output, Output = T> + From<i8> + Copy> RectCenter<T> for sfml::graphics::Rect<T> {
    fn center(&self) -> sfml::system::Vector2<T> {
        sfml::system::Vector2::new(self.left + self.width / 2.into(), self.top + self.height / 2.into())
    }
}
pub(crate) trait CenterText {
    fn center(&mut self);
    fn center_vertically(&mut self);
    fn anchor_right(&mut self);
}
impl CenterText for Text<'_> {
    fn center(&mut self) {
        let bounds = self.local_bounds();
        self.set_origin((bounds.left + bounds.width / 2.0, bounds.top + bounds.height / 2.0));
    }

    fn center_vertically(&mut self) {
        let bounds = self.local_bounds();
        self.set_origin((bounds.left, bounds.top + bounds.height / 2.0));
    }

    fn anchor_right(&mut self) {
        let bounds = self.local_bounds();
        self.set_origin((bounds.left + bounds.width, bounds.top + bounds.height / 2.0));
    }
}

// sfml lines are always 1 pixel wide so thick lines are drawn as rotated rectangles
pub(crate) fn draw_thick_line(target: &mut dyn RenderTarget, start: Vector2f, end: Vector2f, thickness: f32, color: Color) {
    let diff = end - start;
    let length = (diff.x * diff.x + diff.y * diff.y).sqrt();
    if length == 0.0 {
        return;
    }

    let mut line = RectangleShape::with_size(Vector2f::new(length, thickness));
    line.set_origin((0.0, thickness / 2.0));
    line.set_position(start);
    line.set_rotation(diff.y.atan2(diff.x).to_degrees());
    line.set_fill_color(color);
    target.draw(&line);
}

pub(crate) fn draw_polyline(target: &mut dyn RenderTarget, points: &[Vector2f], thickness: f32, color: Color) {
    for segment in points.windows(2) {
        draw_thick_line(target, segment[0], segment[1], thickness, color);
    }
}

// only correct for polygons that are star shaped around their vertex average, which every gate body is
pub(crate) fn draw_filled_polygon(target: &mut dyn RenderTarget, points: &[Vector2f], color: Color) {
    if points.len() < 3 {
        return;
    }

    let sum = points.iter().fold(Vector2f::new(0.0, 0.0), |acc, p| acc + *p);
    let center = sum / points.len() as f32;

    let vertices: Vec<Vertex> = std::iter::once(center).chain(points.iter().copied()).chain(std::iter::once(points[0])).map(|p| Vertex::with_pos_color(p, color)).collect();
    target.draw_primitives(&vertices, PrimitiveType::TRIANGLE_FAN, &RenderStates::default());
}

pub(crate) fn to_f32<T: Into<f64>>(v: sfml::system::Vector2<T>) -> Vector2f {
    Vector2f::new(Into::<f64>::into(v.x) as f32, Into::<f64>::into(v.y) as f32)
}
