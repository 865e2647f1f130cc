use std::rc::Rc;

use crate::{
    graphics::{self, CenterText, RectCenter, Shape, Transformable},
    simulation::truth_table::TruthTableSnapshot,
    theme::Theme,
    view::{
        id::{ViewId, ViewIdMaker},
        GeneralEvent, SizeConstraints, TargetedEvent, View, ViewWithoutLayout,
    },
};

const HEADINGS: [&str; 3] = ["Input A", "Input B", "Output Y"];

struct TableRow {
    cells: [String; 3],
    highlighted: bool,
}

// read only table of a truth table snapshot with the active row highlighted
pub(crate) struct TableView {
    id: ViewId,
    rows: Vec<TableRow>,
    font: Rc<graphics::SfBox<graphics::Font>>,
}
pub(crate) struct TableLayout<'table> {
    table: &'table TableView,
    size: graphics::Vector2f,
}

pub(crate) fn table(id_maker: &mut ViewIdMaker, snapshot: &TruthTableSnapshot, font: &Rc<graphics::SfBox<graphics::Font>>) -> TableView {
    let rows = snapshot.rows.iter().map(|row| TableRow { cells: [row.a.to_string(), row.b.to_string(), row.output.to_string()], highlighted: snapshot.is_active(row) }).collect();
    TableView { id: id_maker.next_id(), rows, font: font.clone() }
}

impl TableView {
    pub(crate) fn natural_size(&self) -> graphics::Vector2f {
        let theme = &Theme::DEFAULT;
        graphics::Vector2f::new(theme.table_column_width * HEADINGS.len() as f32 + theme.table_margin * 2.0, theme.table_row_height * (self.rows.len() + 1) as f32 + theme.table_margin * 2.0)
    }
}

impl ViewWithoutLayout<()> for TableView {
    type WithLayout<'without_layout> = TableLayout<'without_layout>;

    fn layout(&self, sc: SizeConstraints) -> Self::WithLayout<'_> {
        TableLayout { table: self, size: sc.clamp_size(self.natural_size()) }
    }
}

impl TableLayout<'_> {
    fn draw_row<'c>(&self, target: &mut dyn graphics::RenderTarget, top_left: graphics::Vector2f, cells: impl IntoIterator<Item = &'c str>, bg: graphics::Color, fg: graphics::Color, font_size: u32, bold: bool) {
        let theme = &Theme::DEFAULT;
        for (column, cell) in cells.into_iter().enumerate() {
            let rect = graphics::FloatRect::new(top_left.x + column as f32 * theme.table_column_width, top_left.y, theme.table_column_width, theme.table_row_height);

            let mut background_rect = graphics::RectangleShape::from_rect(rect);
            background_rect.set_fill_color(bg);
            target.draw(&background_rect);

            let mut text = graphics::Text::new(cell, &self.table.font, font_size);
            if bold {
                text.set_style(graphics::TextStyle::BOLD);
            }
            text.set_fill_color(fg);
            text.center();
            text.set_position(rect.center());
            target.draw(&text);
        }
    }
}

impl View<()> for TableLayout<'_> {
    fn draw_inner(&self, _: &crate::App, target: &mut dyn graphics::RenderTarget, top_left: graphics::Vector2f, _: Option<ViewId>) {
        let theme = &Theme::DEFAULT;
        let table_top_left = top_left + graphics::Vector2f::new(theme.table_margin, theme.table_margin);

        self.draw_row(target, table_top_left, HEADINGS, theme.table_heading_bg, theme.table_heading_fg, theme.table_heading_font_size, true);

        for (i, row) in self.table.rows.iter().enumerate() {
            let row_top_left = table_top_left + graphics::Vector2f::new(0.0, theme.table_row_height * (i + 1) as f32);
            let (bg, fg) = if row.highlighted { (theme.table_highlight_bg, theme.table_highlight_fg) } else { (theme.table_bg, theme.table_fg) };
            self.draw_row(target, row_top_left, row.cells.iter().map(String::as_str), bg, fg, theme.table_font_size, false);
        }
    }

    fn find_hover(&self, top_left: graphics::Vector2f, mouse: graphics::Vector2f) -> Option<ViewId> {
        if graphics::FloatRect::from_vecs(top_left, self.size).contains(mouse) {
            Some(self.table.id)
        } else {
            None
        }
    }

    fn size(&self) -> graphics::Vector2f {
        self.size
    }

    fn send_targeted_event(&self, _: &crate::App, _: &mut (), _: ViewId, _: TargetedEvent) {}
    fn targeted_event(&self, _: &crate::App, _: &mut (), _: TargetedEvent) {}
    fn general_event(&self, _: &crate::App, _: &mut (), _: GeneralEvent) {}
}
