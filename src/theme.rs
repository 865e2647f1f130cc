use sfml::graphics::Color;

pub(crate) struct Theme {
    pub(crate) main_window_size: (u32, u32),
    pub(crate) main_bg: Color,
    pub(crate) widget_padding: f32,

    pub(crate) button_font_size: u32,
    pub(crate) button_normal_bg: Color,
    pub(crate) button_normal_fg: Color,
    pub(crate) button_hover_bg: Color,
    pub(crate) button_hover_fg: Color,
    pub(crate) button_pressed_bg: Color,
    pub(crate) button_pressed_fg: Color,
    pub(crate) button_selected_bg: Color,
    pub(crate) button_disabled_bg: Color,
    pub(crate) button_disabled_fg: Color,

    pub(crate) label_font_size: u32,
    pub(crate) label_fg: Color,
    pub(crate) gate_name_font_size: u32,
    pub(crate) gate_name_fg: Color,
    pub(crate) gate_name_bg: Color,
    pub(crate) input_heading_font_size: u32,
    pub(crate) input_value_font_size: u32,
    pub(crate) input_fg: Color,
    pub(crate) output_heading_font_size: u32,
    pub(crate) output_value_font_size: u32,
    pub(crate) output_fg: Color,

    pub(crate) schematic_min_height: f32,
    pub(crate) schematic_bg: Color,
    pub(crate) schematic_border: Color,
    pub(crate) schematic_border_thickness: f32,
    pub(crate) gate_body_width: f32,
    pub(crate) gate_body_height: f32,
    pub(crate) gate_fill: Color,
    pub(crate) gate_outline: Color,
    pub(crate) gate_outline_thickness: f32,
    pub(crate) gate_curve_depth: f32,
    pub(crate) xor_curve_gap: f32,
    pub(crate) bubble_radius: f32,
    pub(crate) bubble_fill: Color,
    pub(crate) wire_length: f32,
    pub(crate) wire_thickness: f32,
    pub(crate) wire_label_gap: f32,
    pub(crate) wire_label_font_size: u32,
    pub(crate) output_label_font_size: u32,
    pub(crate) on_color: Color,
    pub(crate) off_color: Color,
    pub(crate) not_applicable_color: Color,

    pub(crate) table_window_bg: Color,
    pub(crate) table_margin: f32,
    pub(crate) table_column_width: f32,
    pub(crate) table_row_height: f32,
    pub(crate) table_heading_font_size: u32,
    pub(crate) table_heading_bg: Color,
    pub(crate) table_heading_fg: Color,
    pub(crate) table_font_size: u32,
    pub(crate) table_bg: Color,
    pub(crate) table_fg: Color,
    pub(crate) table_highlight_bg: Color,
    pub(crate) table_highlight_fg: Color,
}

impl Theme {
    pub(crate) const DEFAULT: Theme = Theme {
        main_window_size: (700, 500),
        main_bg: Color::rgb(224, 242, 254),
        widget_padding: 10.0,

        button_font_size: 14,
        button_normal_bg: Color::rgb(2, 132, 199),
        button_normal_fg: Color::WHITE,
        button_hover_bg: Color::rgb(7, 89, 133),
        button_hover_fg: Color::WHITE,
        button_pressed_bg: Color::rgb(8, 47, 73),
        button_pressed_fg: Color::WHITE,
        button_selected_bg: Color::rgb(14, 116, 144),
        button_disabled_bg: Color::rgb(148, 163, 184),
        button_disabled_fg: Color::rgb(226, 232, 240),

        label_font_size: 16,
        label_fg: Color::BLACK,
        gate_name_font_size: 24,
        gate_name_fg: Color::rgb(5, 46, 22),
        gate_name_bg: Color::rgb(204, 251, 241),
        input_heading_font_size: 18,
        input_value_font_size: 32,
        input_fg: Color::rgb(30, 58, 138),
        output_heading_font_size: 20,
        output_value_font_size: 48,
        output_fg: Color::rgb(190, 18, 60),

        schematic_min_height: 150.0,
        schematic_bg: Color::WHITE,
        schematic_border: Color::rgb(100, 116, 139),
        schematic_border_thickness: 2.0,
        gate_body_width: 80.0,
        gate_body_height: 60.0,
        gate_fill: Color::rgb(165, 243, 252),
        gate_outline: Color::rgb(6, 182, 212),
        gate_outline_thickness: 2.0,
        gate_curve_depth: 10.0,
        xor_curve_gap: 10.0,
        bubble_radius: 5.0,
        bubble_fill: Color::WHITE,
        wire_length: 45.0,
        wire_thickness: 3.0,
        wire_label_gap: 10.0,
        wire_label_font_size: 16,
        output_label_font_size: 18,
        on_color: Color::rgb(74, 222, 128),
        off_color: Color::rgb(156, 163, 175),
        not_applicable_color: Color::rgb(156, 163, 175),

        table_window_bg: Color::rgb(240, 249, 255),
        table_margin: 20.0,
        table_column_width: 100.0,
        table_row_height: 25.0,
        table_heading_font_size: 16,
        table_heading_bg: Color::rgb(2, 132, 199),
        table_heading_fg: Color::WHITE,
        table_font_size: 14,
        table_bg: Color::rgb(240, 249, 255),
        table_fg: Color::BLACK,
        table_highlight_bg: Color::rgb(255, 248, 225),
        table_highlight_fg: Color::rgb(97, 97, 97),
    };

    pub(crate) fn bit_color(&self, high: bool) -> Color {
        if high {
            self.on_color
        } else {
            self.off_color
        }
    }
}
