pub(crate) mod layout {
    use crate::{
        graphics,
        ui::widgets::flow::Direction,
        view::SizeConstraints,
    };

    // each child gets whatever space the children before it left over along the flow direction
    pub(crate) fn child_sc(direction: Direction, sc: SizeConstraints, used: f32) -> SizeConstraints {
        let sc = sc.with_no_min();
        let max = match direction {
            Direction::Horizontal => graphics::Vector2f::new((sc.max.x - used).max(0.0), sc.max.y),
            Direction::Vertical => graphics::Vector2f::new(sc.max.x, (sc.max.y - used).max(0.0)),
        };
        SizeConstraints { min: sc.min, max }
    }
    pub(crate) fn find_own_size(direction: Direction, sc: SizeConstraints, child_sizes: impl IntoIterator<Item = graphics::Vector2f>) -> graphics::Vector2f {
        sc.clamp_size(graphics::Vector2f::from(child_sizes.into_iter().fold((0.0, 0.0), |(x_acc, y_acc), size| {
            match direction {
                // sum x, take max of y
                Direction::Horizontal => (x_acc + size.x, f32::max(y_acc, size.y)),
                // take max of x, sum y
                Direction::Vertical => (f32::max(x_acc, size.x), y_acc + size.y),
            }
        })))
    }
    pub(crate) fn layout_step(direction: Direction, cur_pos: &mut f32, child_size: graphics::Vector2f) -> graphics::Vector2f {
        match direction {
            Direction::Horizontal => {
                let pos = graphics::Vector2f::new(*cur_pos, 0.0);
                *cur_pos += child_size.x;
                pos
            }
            Direction::Vertical => {
                let pos = graphics::Vector2f::new(0.0, *cur_pos);
                *cur_pos += child_size.y;
                pos
            }
        }
    }
}

use crate::{
    graphics,
    view::{id::ViewId, GeneralEvent, SizeConstraints, TargetedEvent, View, ViewWithoutLayout},
};

// ViewWithoutLayout cannot be used as a trait object because it has an associated type
pub(crate) trait ViewLayoutIntoBoxView<'s, Data> {
    fn layout(&'s self, sc: SizeConstraints) -> Box<dyn View<Data> + 's>;
}
impl<'s, T: ViewWithoutLayout<Data>, Data: 's> ViewLayoutIntoBoxView<'s, Data> for T {
    fn layout(&'s self, sc: SizeConstraints) -> Box<dyn View<Data> + 's> {
        Box::new(ViewWithoutLayout::layout(self, sc))
    }
}

pub(crate) type FlowChild<Data> = Box<dyn for<'s> ViewLayoutIntoBoxView<'s, Data>>;

struct FlowView<Data> {
    direction: Direction,
    children: Vec<FlowChild<Data>>,
}
struct FlowLayout<'flow, Data> {
    own_size: graphics::Vector2f,
    children: Vec<(graphics::Vector2f, Box<dyn View<Data> + 'flow>)>,
}
#[derive(Copy, Clone)]
pub(crate) enum Direction {
    Horizontal,
    Vertical,
}

pub(crate) fn horizontal_flow<Data>(children: Vec<FlowChild<Data>>) -> impl ViewWithoutLayout<Data> {
    FlowView { children, direction: Direction::Horizontal }
}
pub(crate) fn vertical_flow<Data>(children: Vec<FlowChild<Data>>) -> impl ViewWithoutLayout<Data> {
    FlowView { children, direction: Direction::Vertical }
}

impl<Data> ViewWithoutLayout<Data> for FlowView<Data> {
    type WithLayout<'without_layout> = FlowLayout<'without_layout, Data> where Self: 'without_layout;

    fn layout(&self, sc: SizeConstraints) -> Self::WithLayout<'_> {
        let mut used = 0.0;
        let mut cur_pos = 0.0;
        let mut children = Vec::with_capacity(self.children.len());
        for child in &self.children {
            let child = child.layout(layout::child_sc(self.direction, sc, used));
            let offset = layout::layout_step(self.direction, &mut cur_pos, child.size());
            used = cur_pos;
            children.push((offset, child));
        }

        let own_size = layout::find_own_size(self.direction, sc, children.iter().map(|(_, child)| child.size()));

        FlowLayout { own_size, children }
    }
}
impl<Data> View<Data> for FlowLayout<'_, Data> {
    fn draw_inner(&self, app: &crate::App, target: &mut dyn graphics::RenderTarget, top_left: graphics::Vector2f, hover: Option<ViewId>) {
        for (child_offset, child) in self.children.iter() {
            child.draw(app, target, top_left + *child_offset, hover);
        }
    }

    fn find_hover(&self, top_left: graphics::Vector2f, mouse: graphics::Vector2f) -> Option<ViewId> {
        for (child_offset, child) in self.children.iter() {
            if let x @ Some(_) = child.find_hover(top_left + *child_offset, mouse) {
                return x;
            }
        }
        None
    }

    fn size(&self) -> graphics::Vector2f {
        self.own_size
    }

    fn send_targeted_event(&self, app: &crate::App, data: &mut Data, target: ViewId, event: TargetedEvent) {
        for (_, child) in &self.children {
            child.send_targeted_event(app, data, target, event);
        }
    }

    fn targeted_event(&self, _: &crate::App, _: &mut Data, _: TargetedEvent) {}
    fn general_event(&self, app: &crate::App, data: &mut Data, event: GeneralEvent) {
        for (_, child) in &self.children {
            child.general_event(app, data, event);
        }
    }
}

#[cfg(test)]
mod test {
    use super::{horizontal_flow, vertical_flow, FlowChild};
    use crate::{
        graphics::Vector2f,
        ui::widgets::spacer::spacer,
        view::{id::ViewIdMaker, SizeConstraints, View, ViewWithoutLayout},
    };

    fn sc(w: f32, h: f32) -> SizeConstraints {
        SizeConstraints { min: Vector2f::new(0.0, 0.0), max: Vector2f::new(w, h) }
    }

    #[test]
    fn horizontal_sums_widths() {
        let mut id_maker = ViewIdMaker::new();
        let children: Vec<FlowChild<()>> = vec![Box::new(spacer(&mut id_maker, (30.0, 10.0))), Box::new(spacer(&mut id_maker, (20.0, 25.0)))];
        let flow = horizontal_flow(children);
        let layout = flow.layout(sc(500.0, 500.0));
        assert_eq!(layout.size(), Vector2f::new(50.0, 25.0));
    }

    #[test]
    fn vertical_gives_leftover_space_to_later_children() {
        let mut id_maker = ViewIdMaker::new();
        // the second child is as big as it is allowed to be
        let children: Vec<FlowChild<()>> = vec![Box::new(spacer(&mut id_maker, (30.0, 100.0))), Box::new(spacer(&mut id_maker, (f32::INFINITY, f32::INFINITY)))];
        let flow = vertical_flow(children);
        let layout = flow.layout(SizeConstraints::tight(Vector2f::new(400.0, 300.0)));
        assert_eq!(layout.size(), Vector2f::new(400.0, 300.0));
    }

    #[test]
    fn hover_goes_to_child_under_mouse() {
        let mut id_maker = ViewIdMaker::new();
        let first = spacer(&mut id_maker, (30.0, 10.0));
        let second = spacer(&mut id_maker, (20.0, 10.0));
        let (first_id, second_id) = (first.id(), second.id());
        let children: Vec<FlowChild<()>> = vec![Box::new(first), Box::new(second)];
        let flow = horizontal_flow(children);
        let layout = flow.layout(sc(500.0, 500.0));
        let origin = Vector2f::new(0.0, 0.0);
        assert_eq!(layout.find_hover(origin, Vector2f::new(5.0, 5.0)), Some(first_id));
        assert_eq!(layout.find_hover(origin, Vector2f::new(35.0, 5.0)), Some(second_id));
        assert_eq!(layout.find_hover(origin, Vector2f::new(60.0, 5.0)), None);
    }
}
