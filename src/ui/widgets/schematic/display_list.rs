use crate::{
    graphics::{Color, Vector2f},
    simulation::{Bit, GateKind, InputB, Simulation},
    theme::Theme,
};

const CURVE_SEGMENTS: usize = 16;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct SchematicState {
    pub(crate) gate: GateKind,
    pub(crate) a: Bit,
    pub(crate) b: InputB,
    pub(crate) y: Bit,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum WireName {
    A,
    B,
    Y,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Anchor {
    // the position is the middle of the left edge of the text
    Left,
    Right,
}

#[derive(Clone, PartialEq, Debug)]
pub(crate) enum Primitive {
    Polygon { points: Vec<Vector2f>, fill: Color, outline: Color, outline_thickness: f32 },
    Polyline { points: Vec<Vector2f>, color: Color, thickness: f32 },
    Circle { center: Vector2f, radius: f32, fill: Color, outline: Color, outline_thickness: f32 },
    Wire { name: WireName, start: Vector2f, end: Vector2f, color: Color, thickness: f32 },
    Label { text: String, position: Vector2f, anchor: Anchor, color: Color, font_size: u32, bold: bool },
}

impl SchematicState {
    pub(crate) fn new(simulation: &Simulation) -> SchematicState {
        SchematicState { gate: simulation.gate(), a: simulation.input_a(), b: simulation.input_b(), y: simulation.output() }
    }
}

struct Body {
    primitives: Vec<Primitive>,
    // where each input wire ends, given the wire's y coordinate
    input_end_x: Box<dyn Fn(f32) -> f32>,
    output: Vector2f,
}

// everything is recomputed from the surface size on every call so that the gate stays centered
pub(crate) fn display_list(state: SchematicState, surface_size: Vector2f) -> Vec<Primitive> {
    let theme = &Theme::DEFAULT;
    let center = surface_size / 2.0;
    let left = center.x - theme.gate_body_width / 2.0;

    let body = match state.gate {
        GateKind::And => and_body(theme, center, left),
        GateKind::Or => or_body(theme, center, left, false),
        GateKind::Xor => or_body(theme, center, left, true),
        GateKind::Not => not_body(theme, center, left),
    };

    let mut primitives = body.primitives;

    let wire_start_x = left - theme.wire_length;
    let label_x = wire_start_x - theme.wire_label_gap;
    let a_y = if state.gate.uses_input_b() { center.y - theme.gate_body_height / 4.0 } else { center.y };
    let b_y = center.y + theme.gate_body_height / 4.0;

    let mut labels = Vec::new();

    let a_color = theme.bit_color(state.a.is_high());
    primitives.push(Primitive::Wire { name: WireName::A, start: Vector2f::new(wire_start_x, a_y), end: Vector2f::new((body.input_end_x)(a_y), a_y), color: a_color, thickness: theme.wire_thickness });
    labels.push(Primitive::Label { text: format!("A ({})", state.a), position: Vector2f::new(label_x, a_y), anchor: Anchor::Right, color: a_color, font_size: theme.wire_label_font_size, bold: true });

    match state.b {
        InputB::Bit(b) => {
            let b_color = theme.bit_color(b.is_high());
            primitives.push(Primitive::Wire { name: WireName::B, start: Vector2f::new(wire_start_x, b_y), end: Vector2f::new((body.input_end_x)(b_y), b_y), color: b_color, thickness: theme.wire_thickness });
            labels.push(Primitive::Label { text: format!("B ({})", b), position: Vector2f::new(label_x, b_y), anchor: Anchor::Right, color: b_color, font_size: theme.wire_label_font_size, bold: true });
        }
        InputB::NotApplicable => {
            labels.push(Primitive::Label {
                text: format!("B ({})", InputB::NotApplicable),
                position: Vector2f::new(label_x, b_y),
                anchor: Anchor::Right,
                color: theme.not_applicable_color,
                font_size: theme.wire_label_font_size,
                bold: false,
            });
        }
    }

    let y_color = theme.bit_color(state.y.is_high());
    let output_end = Vector2f::new(body.output.x + theme.wire_length, body.output.y);
    primitives.push(Primitive::Wire { name: WireName::Y, start: body.output, end: output_end, color: y_color, thickness: theme.wire_thickness });
    labels.push(Primitive::Label {
        text: format!("Y ({})", state.y),
        position: Vector2f::new(output_end.x + theme.wire_label_gap, output_end.y),
        anchor: Anchor::Left,
        color: y_color,
        font_size: theme.output_label_font_size,
        bold: true,
    });

    primitives.extend(labels);
    primitives
}

fn body_polygon(theme: &Theme, points: Vec<Vector2f>) -> Primitive {
    Primitive::Polygon { points, fill: theme.gate_fill, outline: theme.gate_outline, outline_thickness: theme.gate_outline_thickness }
}

// flat back, rectangular body, half circle output face
fn and_body(theme: &Theme, center: Vector2f, left: f32) -> Body {
    let radius = theme.gate_body_height / 2.0;
    let face_x = left + theme.gate_body_width - radius;

    let mut points = vec![Vector2f::new(left, center.y - radius)];
    points.extend((0..=CURVE_SEGMENTS).map(|i| {
        let angle = -std::f32::consts::FRAC_PI_2 + std::f32::consts::PI * i as f32 / CURVE_SEGMENTS as f32;
        Vector2f::new(face_x + radius * angle.cos(), center.y + radius * angle.sin())
    }));
    points.push(Vector2f::new(left, center.y + radius));

    Body { primitives: vec![body_polygon(theme, points)], input_end_x: Box::new(move |_| left), output: Vector2f::new(left + theme.gate_body_width, center.y) }
}

// curved back, two curved sides meeting at the output tip
fn or_body(theme: &Theme, center: Vector2f, left: f32, exclusive: bool) -> Body {
    let half_height = theme.gate_body_height / 2.0;
    let depth = theme.gate_curve_depth;
    let back_x = move |y: f32| {
        let t = (y - center.y) / half_height;
        left + depth * (1.0 - t * t)
    };

    let top = Vector2f::new(left, center.y - half_height);
    let bottom = Vector2f::new(left, center.y + half_height);
    let tip = Vector2f::new(left + theme.gate_body_width - 5.0, center.y);
    let shoulder_x = left + theme.gate_body_width * 0.55;

    let mut points: Vec<Vector2f> = (0..=CURVE_SEGMENTS).map(|i| quadratic_bezier(top, Vector2f::new(shoulder_x, top.y), tip, i as f32 / CURVE_SEGMENTS as f32)).collect();
    points.extend((1..=CURVE_SEGMENTS).map(|i| quadratic_bezier(tip, Vector2f::new(shoulder_x, bottom.y), bottom, i as f32 / CURVE_SEGMENTS as f32)));
    points.extend((1..CURVE_SEGMENTS).map(|i| {
        let y = bottom.y - theme.gate_body_height * i as f32 / CURVE_SEGMENTS as f32;
        Vector2f::new(back_x(y), y)
    }));

    let mut primitives = vec![body_polygon(theme, points)];
    if exclusive {
        let gap = theme.xor_curve_gap;
        let curve = (0..=CURVE_SEGMENTS)
            .map(|i| {
                let y = top.y + theme.gate_body_height * i as f32 / CURVE_SEGMENTS as f32;
                Vector2f::new(back_x(y) - gap, y)
            })
            .collect();
        primitives.push(Primitive::Polyline { points: curve, color: theme.gate_outline, thickness: theme.gate_outline_thickness });
    }

    Body { primitives, input_end_x: Box::new(back_x), output: tip }
}

// triangle followed by the inversion bubble
fn not_body(theme: &Theme, center: Vector2f, left: f32) -> Body {
    let half_height = theme.gate_body_height / 2.0;
    let radius = theme.bubble_radius;
    let triangle_end = left + theme.gate_body_width - radius * 2.0;

    let triangle = vec![Vector2f::new(left, center.y - half_height), Vector2f::new(triangle_end, center.y), Vector2f::new(left, center.y + half_height)];
    let bubble = Primitive::Circle { center: Vector2f::new(triangle_end + radius, center.y), radius, fill: theme.bubble_fill, outline: theme.gate_outline, outline_thickness: theme.gate_outline_thickness };

    Body { primitives: vec![body_polygon(theme, triangle), bubble], input_end_x: Box::new(move |_| left), output: Vector2f::new(triangle_end + radius * 2.0, center.y) }
}

fn quadratic_bezier(p0: Vector2f, p1: Vector2f, p2: Vector2f, t: f32) -> Vector2f {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

#[cfg(test)]
mod test {
    use super::{display_list, Primitive, SchematicState, WireName};
    use crate::{
        graphics::{Color, Vector2f},
        simulation::{Bit, GateKind, InputB},
        theme::Theme,
    };

    fn state(gate: GateKind, a: Bit, b: Bit) -> SchematicState {
        let input_b = if gate.uses_input_b() { InputB::Bit(b) } else { InputB::NotApplicable };
        SchematicState { gate, a, b: input_b, y: gate.evaluate(a, b) }
    }

    fn wire(list: &[Primitive], name: WireName) -> Option<(Vector2f, Vector2f, Color)> {
        list.iter().find_map(|p| match p {
            Primitive::Wire { name: n, start, end, color, .. } if *n == name => Some((*start, *end, *color)),
            _ => None,
        })
    }

    fn labels(list: &[Primitive]) -> Vec<&str> {
        list.iter()
            .filter_map(|p| match p {
                Primitive::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn wire_colors_follow_bits() {
        let list = display_list(state(GateKind::And, Bit::One, Bit::Zero), Vector2f::new(600.0, 200.0));
        assert_eq!(wire(&list, WireName::A).map(|w| w.2), Some(Theme::DEFAULT.on_color));
        assert_eq!(wire(&list, WireName::B).map(|w| w.2), Some(Theme::DEFAULT.off_color));
        assert_eq!(wire(&list, WireName::Y).map(|w| w.2), Some(Theme::DEFAULT.off_color));
        assert_eq!(labels(&list), vec!["A (1)", "B (0)", "Y (0)"]);
    }

    #[test]
    fn not_has_no_b_wire() {
        let list = display_list(state(GateKind::Not, Bit::Zero, Bit::Zero), Vector2f::new(600.0, 200.0));
        assert_eq!(wire(&list, WireName::B), None);
        assert_eq!(wire(&list, WireName::Y).map(|w| w.2), Some(Theme::DEFAULT.on_color));
        assert_eq!(labels(&list), vec!["A (0)", "B (N/A)", "Y (1)"]);
        assert!(list.iter().any(|p| matches!(p, Primitive::Circle { .. })));

        // the only input sits on the center line
        let (start, _, _) = wire(&list, WireName::A).expect("NOT has an A wire");
        assert_eq!(start.y, 100.0);
    }

    #[test]
    fn only_xor_has_extra_curve() {
        let size = Vector2f::new(600.0, 200.0);
        let count_polylines = |gate| display_list(state(gate, Bit::Zero, Bit::Zero), size).iter().filter(|p| matches!(p, Primitive::Polyline { .. })).count();
        assert_eq!(count_polylines(GateKind::Xor), 1);
        assert_eq!(count_polylines(GateKind::Or), 0);
        assert_eq!(count_polylines(GateKind::And), 0);
        assert_eq!(count_polylines(GateKind::Not), 0);
    }

    #[test]
    fn stays_centered_after_resize() {
        for gate in GateKind::ALL {
            for (w, h) in [(600.0, 200.0), (1000.0, 400.0)] {
                let list = display_list(state(gate, Bit::One, Bit::One), Vector2f::new(w, h));
                assert!(wire(&list, WireName::A).is_some());
                let (y_start, _, _) = wire(&list, WireName::Y).expect("every gate has an output");
                assert_eq!(y_start.y, h / 2.0);

                let Some(Primitive::Polygon { points, .. }) = list.first() else { panic!("body should be drawn first") };
                let min_x = points.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
                assert_eq!(min_x, w / 2.0 - Theme::DEFAULT.gate_body_width / 2.0);
            }
        }
    }

    #[test]
    fn input_wires_touch_body() {
        let list = display_list(state(GateKind::Or, Bit::Zero, Bit::One), Vector2f::new(600.0, 200.0));
        let (a_start, a_end, _) = wire(&list, WireName::A).expect("OR has an A wire");
        assert!(a_end.x > a_start.x);
        assert!(a_end.x - a_start.x > Theme::DEFAULT.wire_length);
    }

    #[test]
    fn zero_size_surface_draws_around_origin() {
        let list = display_list(state(GateKind::And, Bit::Zero, Bit::Zero), Vector2f::new(0.0, 0.0));
        let (start, _, _) = wire(&list, WireName::Y).expect("AND has an output");
        assert_eq!(start, Vector2f::new(Theme::DEFAULT.gate_body_width / 2.0, 0.0));
    }
}
